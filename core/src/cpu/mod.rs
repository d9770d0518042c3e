pub mod state;
pub use state::Lr35902State;

pub mod lr35902;
pub use lr35902::{Flag, Lr35902, StepError};
