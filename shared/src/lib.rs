pub mod clock;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod prize;
pub mod shared_wheel_game;
pub mod spin_sequencer;

pub use clock::{Clock, ManualClock};
pub use config::WheelConfig;
pub use error::ConfigError;
pub use prize::{PayoutClass, Prize, Sound};
pub use shared_wheel_game::{SessionSnapshot, SpinEvent, SpinPhase};
pub use spin_sequencer::{SpinSequencer, SpinState};
