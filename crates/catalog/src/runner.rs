use katas_core::{
    Clock, Console, KataError, KataResult, RecordingConsole, RefactoringPattern, Unit, Variant,
};

use crate::input::Input;

/// Line written when the invoice builder declines an empty order list.
pub const NO_INVOICE: &str = "no invoice: order list is empty";

/// Run one variant of `unit` against `input`, writing its output to `console`.
///
/// The vowel counter writes its own lines. The invoice builder's result is
/// rendered as pretty-printed JSON, one console line per JSON line.
pub fn run(
    unit: &Unit,
    variant: Variant,
    input: &Input,
    console: &mut dyn Console,
    clock: &dyn Clock,
) -> KataResult<()> {
    tracing::debug!(unit = %unit.id, %variant, input = input.kind(), "running unit");

    match (unit.pattern, input) {
        (RefactoringPattern::ExtractFunction, Input::Text(text)) => {
            let count_vowels = katas_extract_function::VARIANTS.get(variant);
            count_vowels(console, text);
            Ok(())
        }
        (RefactoringPattern::InlineFunction, Input::Invoice { customer, orders }) => {
            let create_invoice = katas_inline_function::VARIANTS.get(variant);
            match create_invoice(clock, customer, orders) {
                Some(invoice) => {
                    let rendered = serde_json::to_string_pretty(&invoice)
                        .map_err(|e| KataError::render(e.to_string()))?;
                    for line in rendered.lines() {
                        console.log(line);
                    }
                }
                None => console.log(NO_INVOICE),
            }
            Ok(())
        }
        (pattern, input) => Err(KataError::invalid_input(format!(
            "{} expects {} input, got {}",
            pattern,
            expected_kind(pattern),
            input.kind()
        ))),
    }
}

fn expected_kind(pattern: RefactoringPattern) -> &'static str {
    match pattern {
        RefactoringPattern::ExtractFunction => "text",
        RefactoringPattern::InlineFunction => "invoice",
    }
}

/// Output of both variants of one unit for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub exercise: Vec<String>,
    pub solution: Vec<String>,
}

impl Comparison {
    /// Whether the two variants were observationally indistinguishable.
    pub fn is_equivalent(&self) -> bool {
        self.exercise == self.solution
    }
}

/// Run both variants against the same input and clock.
pub fn compare(unit: &Unit, input: &Input, clock: &dyn Clock) -> KataResult<Comparison> {
    let mut exercise = RecordingConsole::new();
    run(unit, Variant::Exercise, input, &mut exercise, clock)?;

    let mut solution = RecordingConsole::new();
    run(unit, Variant::Solution, input, &mut solution, clock)?;

    let comparison = Comparison {
        exercise: exercise.into_lines(),
        solution: solution.into_lines(),
    };
    if !comparison.is_equivalent() {
        tracing::warn!(unit = %unit.id, "exercise and solution disagree");
    }
    Ok(comparison)
}
