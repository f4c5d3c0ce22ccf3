//! Turns a spin request into the timed spin -> celebrate -> idle timeline.
//!
//! The sequencer never sleeps. Each non-idle state carries the instant its
//! single timer fires; the host arms one real timer at [`SpinSequencer::next_deadline`]
//! and calls [`SpinSequencer::advance`] when it goes off.

use log::{debug, info};
use rand::Rng;

use crate::clock::Clock;
use crate::config::WheelConfig;
use crate::constants::SLOT_ANGLE;
use crate::draw::DrawEngine;
use crate::prize::{PayoutClass, Prize, Sound};
use crate::shared_wheel_game::{SessionSnapshot, SpinEvent, SpinPhase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinState {
    Idle,
    Spinning { slot: usize, fires_at: u64 },
    Celebrating { payout: PayoutClass, fires_at: u64 },
}

impl SpinState {
    pub fn deadline(&self) -> Option<u64> {
        match *self {
            SpinState::Idle => None,
            SpinState::Spinning { fires_at, .. } | SpinState::Celebrating { fires_at, .. } => {
                Some(fires_at)
            }
        }
    }

    pub fn phase(&self) -> SpinPhase {
        match self {
            SpinState::Idle => SpinPhase::Idle,
            SpinState::Spinning { .. } => SpinPhase::Spinning,
            SpinState::Celebrating { .. } => SpinPhase::Celebrating,
        }
    }
}

/// Slots drawn so far this session. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawHistory(Vec<usize>);

impl DrawHistory {
    fn push(&mut self, slot: usize) {
        self.0.push(slot);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Absolute wheel angle after every draw in `history`:
/// `-(len * full_turns * 360 + sum(slot * SLOT_ANGLE))`.
pub fn target_rotation(history: &[usize], full_turns: u32) -> f64 {
    let turns = history.len() as f64 * f64::from(full_turns) * 360.0;
    let offset: f64 = history.iter().map(|&slot| slot as f64 * SLOT_ANGLE).sum();
    -(turns + offset)
}

pub struct SpinSequencer<C, R> {
    config: WheelConfig,
    clock: C,
    engine: DrawEngine<R>,
    history: DrawHistory,
    state: SpinState,
    rotation: f64,
}

impl<C: Clock, R: Rng> SpinSequencer<C, R> {
    pub fn new(config: WheelConfig, clock: C, rng: R) -> Self {
        let engine = DrawEngine::new(config.weights.clone(), rng);
        Self {
            config,
            clock,
            engine,
            history: DrawHistory::default(),
            state: SpinState::Idle,
            rotation: 0.0,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.state.deadline()
    }

    /// Starts a spin. Ignored unless the wheel is idle.
    pub fn request_spin(&mut self) -> Vec<SpinEvent> {
        if self.state != SpinState::Idle {
            debug!("Ignoring spin request while {:?}", self.state.phase());
            return Vec::new();
        }

        let slot = self.engine.draw();
        self.history.push(slot);
        self.rotation = target_rotation(self.history.as_slice(), self.config.full_turns);

        let fires_at = self.clock.now_ms() + u64::from(self.config.settle_delay_ms);
        self.state = SpinState::Spinning { slot, fires_at };
        info!(
            "Spin #{} drew slot {} ({:?}), rotating to {}deg",
            self.history.len(),
            slot,
            Prize::from_slot(slot),
            self.rotation
        );

        vec![
            SpinEvent::SpinControl { enabled: false },
            SpinEvent::PlaySound { sound: Sound::Spin },
            SpinEvent::Rotate { degrees: self.rotation },
        ]
    }

    /// Fires every timer that has expired by now, in timeline order.
    pub fn advance(&mut self) -> Vec<SpinEvent> {
        let now = self.clock.now_ms();
        let mut events = Vec::new();

        while let Some(fires_at) = self.state.deadline() {
            if now < fires_at {
                break;
            }
            self.fire(fires_at, &mut events);
        }

        events
    }

    // Next deadline is measured from the one that fired, not from `now`,
    // so a late wake-up does not stretch the timeline.
    fn fire(&mut self, fired_at: u64, events: &mut Vec<SpinEvent>) {
        self.state = match self.state {
            SpinState::Idle => SpinState::Idle,
            SpinState::Spinning { slot, .. } => {
                let payout = Prize::from_slot(slot).payout();
                debug!("Wheel settled on slot {}, celebrating {:?}", slot, payout);

                if let Some(sound) = payout.win_sound() {
                    events.push(SpinEvent::PlaySound { sound });
                }
                if payout.is_chance() {
                    events.push(SpinEvent::StartParticles {
                        intensity: self.config.particle_intensity,
                    });
                }
                events.push(SpinEvent::ShowCelebration { payout });

                SpinState::Celebrating {
                    payout,
                    fires_at: fired_at + u64::from(self.config.celebration_delay_ms),
                }
            }
            SpinState::Celebrating { payout, .. } => {
                debug!("Celebration over, wheel ready");

                events.push(SpinEvent::ClearCelebration);
                if payout.is_chance() {
                    events.push(SpinEvent::StopParticles);
                }
                events.push(SpinEvent::SpinControl { enabled: true });

                SpinState::Idle
            }
        };
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let celebration = match self.state {
            SpinState::Celebrating { payout, .. } => Some(payout),
            _ => None,
        };

        SessionSnapshot {
            phase: self.state.phase(),
            spins: self.history.len(),
            last_slot: self.history.last(),
            rotation: self.rotation,
            celebration,
            spin_enabled: self.state == SpinState::Idle,
        }
    }
}
