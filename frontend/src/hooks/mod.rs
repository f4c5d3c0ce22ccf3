pub mod use_sound_board;
pub mod use_spin_sequencer;

pub use use_sound_board::*;
pub use use_spin_sequencer::*;
