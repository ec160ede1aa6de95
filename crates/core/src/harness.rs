//! Shared verification harness.
//!
//! A unit's suite is written once, as plain functions that each take the
//! unit's entry-point type. [`verify_variants!`](crate::verify_variants)
//! binds that suite to the exercise and to the solution, generating one
//! `#[test]` per case per variant:
//!
//! ```ignore
//! use crate::{CountVowelsFn, VARIANTS};
//!
//! mod suite {
//!     pub fn counts_nothing_in_empty_text(count_vowels: super::CountVowelsFn) { /* ... */ }
//! }
//!
//! katas_core::verify_variants!(VARIANTS, suite: [counts_nothing_in_empty_text]);
//! // -> exercise::counts_nothing_in_empty_text
//! // -> solution::counts_nothing_in_empty_text
//! ```
//!
//! `VARIANTS` and `suite` must be nameable from the invoking module; the
//! generated modules reach them through `super::`.

/// Run one suite against both variants of a unit. See the [module docs](self).
#[macro_export]
macro_rules! verify_variants {
    ($variants:ident, $suite:ident: [$($case:ident),+ $(,)?]) => {
        $crate::verify_variants!(@variant exercise, $variants, $suite, [$($case),+]);
        $crate::verify_variants!(@variant solution, $variants, $suite, [$($case),+]);
    };
    (@variant $variant:ident, $variants:ident, $suite:ident, [$($case:ident),+]) => {
        mod $variant {
            $(
                #[test]
                fn $case() {
                    super::$suite::$case(super::$variants.$variant);
                }
            )+
        }
    };
}
