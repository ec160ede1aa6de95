//! Value object trait: equality by value, not identity.
//!
//! Every domain type a kata hands around (addresses, orders, invoices) is a
//! value object: built fresh on each call, never mutated afterwards, and
//! compared field by field. The verification suites lean on this when they
//! assert that an exercise and its solution return equal structures.

/// Marker trait for value objects.
///
/// ## Design Constraints
///
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: two values with the same fields are the same value
/// - **Debug**: assertion failures print the whole value
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Address {
///     street: String,
///     city: String,
/// }
///
/// impl ValueObject for Address {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
