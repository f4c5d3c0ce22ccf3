use serde::{Deserialize, Serialize};

use crate::prize::{PayoutClass, Sound};

/// Coarse phase of the current spin, as shown to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinPhase {
    Idle,
    Spinning,
    Celebrating,
}

/// Side effects the sequencer asks its collaborators to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpinEvent {
    PlaySound { sound: Sound },
    /// Absolute wheel angle in degrees; always more negative than the last one.
    Rotate { degrees: f64 },
    ShowCelebration { payout: PayoutClass },
    ClearCelebration,
    StartParticles { intensity: f64 },
    StopParticles,
    SpinControl { enabled: bool },
}

/// Read-only view of the session for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SpinPhase,
    pub spins: usize,
    pub last_slot: Option<usize>,
    pub rotation: f64,
    pub celebration: Option<PayoutClass>,
    pub spin_enabled: bool,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            spins: 0,
            last_slot: None,
            rotation: 0.0,
            celebration: None,
            spin_enabled: true,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
