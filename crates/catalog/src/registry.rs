use katas_core::{KataError, KataResult, Unit};

static UNITS: [&Unit; 2] = [&katas_extract_function::UNIT, &katas_inline_function::UNIT];

/// All units, in catalog order.
pub fn units() -> &'static [&'static Unit] {
    &UNITS
}

/// Resolve a unit by catalog path (`01_initial_refactorings/01_extract_function`),
/// unit directory (`01_extract_function`) or pattern (`extract-function`).
pub fn find(query: &str) -> KataResult<&'static Unit> {
    let query = query.trim();
    let found = UNITS.iter().copied().find(|unit| {
        unit.id.as_str() == query || unit.id.slug() == query || unit.pattern.slug() == query
    });

    match found {
        Some(unit) => {
            tracing::debug!(query, unit = %unit.id, "resolved unit");
            Ok(unit)
        }
        None => Err(KataError::unknown_unit(query)),
    }
}
