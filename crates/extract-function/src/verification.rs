//! One suite, run against the exercise and the solution.

use katas_core::RecordingConsole;
use proptest::prelude::*;

use crate::{CountVowelsFn, HEADER, SEPARATOR, VARIANTS};

fn run(count_vowels: CountVowelsFn, text: &str) -> RecordingConsole {
    let mut console = RecordingConsole::new();
    count_vowels(&mut console, text);
    console
}

fn assert_count(count_vowels: CountVowelsFn, text: &str, expected: usize) {
    let console = run(count_vowels, text);
    assert_eq!(
        console.lines(),
        [
            HEADER.to_string(),
            SEPARATOR.to_string(),
            format!("Total vowels: {expected}"),
        ],
        "input: {text:?}"
    );
}

mod suite {
    use super::*;

    pub fn counts_vowels_in_a_phrase(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "hello world", 3);
    }

    pub fn counts_nothing_in_empty_text(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "", 0);
    }

    pub fn counts_nothing_without_vowels(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "bcdfg", 0);
        assert_count(count_vowels, "FTGZL", 0);
    }

    pub fn counts_every_vowel_in_both_cases(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "aeiouAEIOU", 10);
    }

    pub fn counts_mixed_case_text(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "HeLLo WoRlD", 3);
        assert_count(count_vowels, "HeLLO WoRlD", 3);
    }

    pub fn ignores_accented_vowels(count_vowels: CountVowelsFn) {
        assert_count(count_vowels, "héllo! wörld?", 1);
        assert_count(count_vowels, "ÀÉÎÕÜ åøæ", 0);
    }

    pub fn writes_header_before_result(count_vowels: CountVowelsFn) {
        let console = run(count_vowels, "abc");
        assert_eq!(console.lines().len(), 3);
        assert_eq!(console.lines()[0], HEADER);
        assert_eq!(console.lines()[1], SEPARATOR);
        assert!(console.lines()[2].starts_with("Total vowels: "));
    }

    pub fn same_input_same_output(count_vowels: CountVowelsFn) {
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(run(count_vowels, text), run(count_vowels, text));
    }
}

katas_core::verify_variants!(VARIANTS, suite: [
    counts_vowels_in_a_phrase,
    counts_nothing_in_empty_text,
    counts_nothing_without_vowels,
    counts_every_vowel_in_both_cases,
    counts_mixed_case_text,
    ignores_accented_vowels,
    writes_header_before_result,
    same_input_same_output,
]);

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: the reported count equals the number of a/e/i/o/u
    /// characters in either case, for every variant.
    #[test]
    fn reported_count_matches_latin_vowels(text in any::<String>()) {
        let expected = text
            .chars()
            .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
            .count();

        for (variant, count_vowels) in VARIANTS.iter() {
            let console = run(count_vowels, &text);
            prop_assert_eq!(
                console.lines().last().cloned(),
                Some(format!("Total vowels: {expected}")),
                "variant: {}",
                variant
            );
        }
    }

    /// Property: exercise and solution write byte-identical output.
    #[test]
    fn exercise_and_solution_agree(text in "[a-zA-Z éöüÅ!?0-9]{0,64}") {
        let exercise = run(VARIANTS.exercise, &text);
        let solution = run(VARIANTS.solution, &text);
        prop_assert_eq!(exercise, solution);
    }
}
