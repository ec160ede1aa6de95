//! Extract Function kata: counting vowels.
//!
//! The exercise does everything in one body: print a header, count, print
//! the result. The solution pulls each of those steps into its own function
//! and leaves a coordinator that reads top to bottom.
//!
//! Only the unaccented Latin vowels count, in either case. `é`, `ö` and other
//! vowel-like characters are not vowels here.

pub mod exercise;
pub mod solution;

#[cfg(test)]
mod verification;

use katas_core::{Console, RefactoringPattern, Unit, UnitId, Variants};

/// Characters counted as vowels.
pub const VOWELS: &str = "aeiouAEIOU";

/// First line written before counting.
pub const HEADER: &str = "Counting vowels...";

/// Second line written before counting.
pub const SEPARATOR: &str = "------------------";

/// Prefix of the result line; the decimal count follows it.
pub const RESULT_PREFIX: &str = "Total vowels: ";

/// Entry point shared by exercise and solution.
pub type CountVowelsFn = fn(&mut dyn Console, &str);

pub const VARIANTS: Variants<CountVowelsFn> = Variants {
    exercise: exercise::count_vowels,
    solution: solution::count_vowels,
};

pub static UNIT: Unit = Unit {
    id: UnitId::from_static("01_initial_refactorings/01_extract_function"),
    title: "Counting vowels",
    pattern: RefactoringPattern::ExtractFunction,
    summary: "Split a print-count-print function into a header, a pure counter and a result printer.",
};
