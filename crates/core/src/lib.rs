//! `katas-core` — building blocks shared by every catalog unit.
//!
//! A unit is an exercise/solution pair with one verification suite. This crate
//! provides what the pair has in common: the unit descriptor, the variant
//! pairing, the output channel, the time source, and the harness that runs a
//! suite against both variants.

pub mod clock;
pub mod console;
pub mod error;
pub mod harness;
pub mod unit;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock, date_string};
pub use console::{Console, RecordingConsole, StdoutConsole};
pub use error::{KataError, KataResult};
pub use unit::{RefactoringPattern, Unit, UnitId, Variant, Variants};
pub use value_object::ValueObject;
