use katas_core::Console;

use crate::{HEADER, RESULT_PREFIX, SEPARATOR, VOWELS};

pub fn count_vowels(console: &mut dyn Console, text: &str) {
    console.log(HEADER);
    console.log(SEPARATOR);

    let mut vowel_count = 0;
    for c in text.chars() {
        if VOWELS.contains(c) {
            vowel_count += 1;
        }
    }

    console.log(&format!("{RESULT_PREFIX}{vowel_count}"));
}
