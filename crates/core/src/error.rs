//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type KataResult<T> = Result<T, KataError>;

/// Catalog-level error.
///
/// The kata functions themselves are total and never fail. These errors only
/// arise at the edges: resolving a unit, choosing a variant, or parsing the
/// inputs handed to a unit from outside.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KataError {
    /// No unit in the catalog matches the query.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// The variant name is neither `exercise` nor `solution`.
    #[error("unknown variant: {0} (expected `exercise` or `solution`)")]
    UnknownVariant(String),

    /// A catalog path was malformed.
    #[error("invalid unit id: {0}")]
    InvalidUnitId(String),

    /// A calendar date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The input does not fit the selected unit.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A unit's result could not be rendered.
    #[error("render failed: {0}")]
    Render(String),
}

impl KataError {
    pub fn unknown_unit(msg: impl Into<String>) -> Self {
        Self::UnknownUnit(msg.into())
    }

    pub fn unknown_variant(msg: impl Into<String>) -> Self {
        Self::UnknownVariant(msg.into())
    }

    pub fn invalid_unit_id(msg: impl Into<String>) -> Self {
        Self::InvalidUnitId(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
