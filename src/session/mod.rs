//! Live session execution: clock, burner projection, controller.
//!
//! The clock tracks simulated elapsed time in one-minute cooperative
//! ticks; the projector derives what each burner is doing from the
//! schedule and the elapsed time; the controller is the state machine
//! that ties them to the session lifecycle and the voice layer.

mod clock;
mod controller;
mod projector;

pub use clock::{SessionClock, TICK_MINUTES};
pub use controller::SessionController;
pub use projector::{BurnerSlot, DualBurnerState};
