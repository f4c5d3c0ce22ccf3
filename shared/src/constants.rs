pub const WHEEL_SLOTS: usize = 8;
pub const SLOT_ANGLE: f64 = 360.0 / WHEEL_SLOTS as f64;
pub const FULL_TURNS_PER_SPIN: u32 = 5;

// Matches the wheel's 5s ease-in-out transform transition
pub const SETTLE_DELAY_MS: u32 = 5_000;
pub const CELEBRATION_DELAY_MS: u32 = 6_000;

/// Draw weights in wheel order: 250, 500, car, 50, 150, chance, 300, 400.
pub const PRIZE_WEIGHTS: [f64; WHEEL_SLOTS] = [0.3, 0.05, 0.05, 0.1, 0.1, 0.05, 0.2, 0.15];

pub const PARTICLE_INTENSITY: f64 = 0.8;
pub const OVERLAY_TRANSITION_MS: u32 = 300;
