use rand::Rng;

use crate::constants::WHEEL_SLOTS;

/// Picks the first slot whose running weight sum exceeds `u`.
///
/// Total for any input: when rounding (or a short weight vector) leaves `u`
/// uncovered, the last slot wins. An empty slice yields slot 0.
pub fn pick_slot(weights: &[f64], u: f64) -> usize {
    let Some(last) = weights.len().checked_sub(1) else {
        return 0;
    };

    let mut sum = 0.0;
    for (slot, weight) in weights[..last].iter().enumerate() {
        sum += weight;
        if u < sum {
            return slot;
        }
    }

    last
}

/// One independent weighted draw using `rng` as the uniform source.
pub fn draw<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    pick_slot(weights, rng.gen::<f64>())
}

/// Weighted slot picker owning its distribution and random source.
#[derive(Debug, Clone)]
pub struct DrawEngine<R> {
    weights: Vec<f64>,
    rng: R,
}

impl<R: Rng> DrawEngine<R> {
    pub fn new(mut weights: Vec<f64>, rng: R) -> Self {
        weights.truncate(WHEEL_SLOTS);
        Self { weights, rng }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn draw(&mut self) -> usize {
        draw(&self.weights, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRIZE_WEIGHTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_slot_boundaries() {
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.0), 0);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.299), 0);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.3), 1);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.36), 2);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.84), 6);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.86), 7);
        assert_eq!(pick_slot(&PRIZE_WEIGHTS, 0.999_999), 7);
    }

    #[test]
    fn test_zero_weight_slots_are_skipped() {
        let weights = [0.5, 0.0, 0.5];
        assert_eq!(pick_slot(&weights, 0.5), 2);
        assert_eq!(pick_slot(&weights, 0.49), 0);
    }

    #[test]
    fn test_degenerate_weights_never_fail() {
        let mut rng = StdRng::seed_from_u64(7);

        let all_on_three = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let all_on_last = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let short_sum = [0.1; 8]; // sums to 0.8
        let nan = [f64::NAN; 8];
        for _ in 0..1_000 {
            assert_eq!(draw(&all_on_three, &mut rng), 3);
            assert_eq!(draw(&all_on_last, &mut rng), 7);
            assert!(draw(&short_sum, &mut rng) < 8);
            assert_eq!(draw(&nan, &mut rng), 7);
        }

        assert_eq!(pick_slot(&short_sum, 0.95), 7);
        assert_eq!(pick_slot(&[], 0.5), 0);
    }

    #[test]
    fn test_empirical_frequencies_match_weights() {
        let uniform = [1.0 / WHEEL_SLOTS as f64; WHEEL_SLOTS];
        let lopsided = [0.0, 0.5, 0.0, 0.25, 0.0, 0.125, 0.0, 0.125];
        let trials = 100_000;

        for (seed, weights) in [PRIZE_WEIGHTS, uniform, lopsided].into_iter().enumerate() {
            let mut engine = DrawEngine::new(weights.to_vec(), StdRng::seed_from_u64(42 + seed as u64));
            let mut counts = [0usize; WHEEL_SLOTS];
            for _ in 0..trials {
                let slot = engine.draw();
                assert!(slot < WHEEL_SLOTS);
                counts[slot] += 1;
            }

            for (slot, &weight) in weights.iter().enumerate() {
                let observed = counts[slot] as f64 / trials as f64;
                assert!(
                    (observed - weight).abs() < 0.01,
                    "weights {:?}: slot {} drawn {:.4}, expected {:.4}",
                    weights,
                    slot,
                    observed,
                    weight
                );
            }
        }
    }

    #[test]
    fn test_engine_ignores_weights_past_the_wheel() {
        let mut weights = vec![0.0; WHEEL_SLOTS];
        weights.push(1.0);
        let mut engine = DrawEngine::new(weights, StdRng::seed_from_u64(1));
        assert_eq!(engine.weights().len(), WHEEL_SLOTS);
        assert_eq!(engine.draw(), WHEEL_SLOTS - 1);
    }
}
