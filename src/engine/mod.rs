//! Game session engine.
//!
//! `GameEngine` owns the single live deck. Presentation code renders a
//! `GameSnapshot` and forwards taps as `select` calls, plus a trigger for
//! `acknowledge_mismatch`.

mod outcome;
mod session;
mod snapshot;

pub use outcome::{Phase, SelectOutcome};
pub use session::GameEngine;
pub use snapshot::{CardView, GameSnapshot};
