//! Unit descriptors: what a catalog entry is and how its two variants pair up.

use std::borrow::Cow;
use std::str::FromStr;

use crate::error::{KataError, KataResult};

/// Which implementation of a unit to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The unrefactored reference implementation.
    Exercise,
    /// The refactored implementation.
    Solution,
}

impl Variant {
    /// Both variants, exercise first.
    pub const ALL: [Variant; 2] = [Variant::Exercise, Variant::Solution];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Exercise => "exercise",
            Variant::Solution => "solution",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exercise" => Ok(Variant::Exercise),
            "solution" => Ok(Variant::Solution),
            _ => Err(KataError::unknown_variant(s)),
        }
    }
}

/// The refactoring a unit practices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RefactoringPattern {
    ExtractFunction,
    InlineFunction,
}

impl RefactoringPattern {
    /// Human-readable name, e.g. `Extract Function`.
    pub fn name(self) -> &'static str {
        match self {
            RefactoringPattern::ExtractFunction => "Extract Function",
            RefactoringPattern::InlineFunction => "Inline Function",
        }
    }

    /// Kebab-case name, e.g. `extract-function`.
    pub fn slug(self) -> &'static str {
        match self {
            RefactoringPattern::ExtractFunction => "extract-function",
            RefactoringPattern::InlineFunction => "inline-function",
        }
    }
}

impl core::fmt::Display for RefactoringPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog path of a unit: `<chapter>/<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId(Cow<'static, str>);

impl UnitId {
    /// Build an id from a literal. The literal is trusted to be well formed.
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The chapter directory, e.g. `01_initial_refactorings`.
    pub fn chapter(&self) -> &str {
        self.0.split_once('/').map_or("", |(chapter, _)| chapter)
    }

    /// The unit directory, e.g. `01_extract_function`.
    pub fn slug(&self) -> &str {
        self.0.split_once('/').map_or(&*self.0, |(_, slug)| slug)
    }
}

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UnitId {
    type Err = KataError;

    fn from_str(s: &str) -> KataResult<Self> {
        let s = s.trim();
        match s.split_once('/') {
            Some((chapter, slug))
                if !chapter.is_empty() && !slug.is_empty() && !slug.contains('/') =>
            {
                Ok(Self(Cow::Owned(s.to_string())))
            }
            _ => Err(KataError::invalid_unit_id(format!(
                "expected `<chapter>/<unit>`, got `{s}`"
            ))),
        }
    }
}

/// Static descriptor of one catalog unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub title: &'static str,
    pub pattern: RefactoringPattern,
    pub summary: &'static str,
}

/// The exercise and solution entry points of a unit.
///
/// Both fields share the type `F`, so a solution whose signature drifts from
/// its exercise does not compile.
#[derive(Debug, Copy, Clone)]
pub struct Variants<F> {
    pub exercise: F,
    pub solution: F,
}

impl<F: Copy> Variants<F> {
    pub fn get(&self, variant: Variant) -> F {
        match variant {
            Variant::Exercise => self.exercise,
            Variant::Solution => self.solution,
        }
    }

    /// `(variant, entry point)` pairs in [`Variant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, F)> + '_ {
        Variant::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}
