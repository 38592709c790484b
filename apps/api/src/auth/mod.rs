pub mod gate;
pub mod handlers;

pub use gate::{AccessGate, GateState, GateStatus};
