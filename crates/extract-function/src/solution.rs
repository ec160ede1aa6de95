//! The vowel counter after Extract Function.
//!
//! Each responsibility of the exercise body now has a name:
//! 1. [`print_header`] writes the banner.
//! 2. [`count_vowels_in_text`] counts, with no output at all.
//! 3. [`print_result`] reports the count.
//!
//! [`count_vowels`] only sequences the three.

use katas_core::Console;

use crate::{HEADER, RESULT_PREFIX, SEPARATOR, VOWELS};

fn print_header(console: &mut dyn Console) {
    console.log(HEADER);
    console.log(SEPARATOR);
}

/// Number of characters in `text` that are in [`VOWELS`].
pub fn count_vowels_in_text(text: &str) -> usize {
    text.chars().filter(|&c| VOWELS.contains(c)).count()
}

fn print_result(console: &mut dyn Console, vowel_count: usize) {
    console.log(&format!("{RESULT_PREFIX}{vowel_count}"));
}

pub fn count_vowels(console: &mut dyn Console, text: &str) {
    print_header(console);
    let vowel_count = count_vowels_in_text(text);
    print_result(console, vowel_count);
}
