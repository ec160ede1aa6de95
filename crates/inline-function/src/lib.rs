//! Inline Function kata: creating an invoice.
//!
//! The exercise goes too far the other way: every one-line expression has its
//! own named helper, and reading the entry point means chasing six of them.
//! The solution folds the helpers whose bodies say as much as their names back
//! into the call site, keeping only the address formatter.
//!
//! Both variants return `None` for an empty order list.

pub mod exercise;
pub mod model;
pub mod solution;

#[cfg(test)]
mod verification;

use katas_core::{Clock, RefactoringPattern, Unit, UnitId, Variants};

pub use model::{Address, Customer, Invoice, Order};

/// Entry point shared by exercise and solution.
pub type CreateInvoiceFn = fn(&dyn Clock, &Customer, &[Order]) -> Option<Invoice>;

pub const VARIANTS: Variants<CreateInvoiceFn> = Variants {
    exercise: exercise::create_invoice,
    solution: solution::create_invoice,
};

pub static UNIT: Unit = Unit {
    id: UnitId::from_static("01_initial_refactorings/02_inline_function"),
    title: "Creating an invoice",
    pattern: RefactoringPattern::InlineFunction,
    summary: "Fold trivial one-line helpers of an invoice builder back into their single caller.",
};
