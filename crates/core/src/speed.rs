//! Speed controller - fall interval from elapsed play time and difficulty.
//!
//! Every full minute of play adds the profile's per-minute increase to the
//! speed multiplier, up to the profile's cap:
//!
//! ```text
//! minutes    = floor(elapsed_ms / 60_000)
//! multiplier = min(1 + minutes * increase, cap)
//! interval   = base_interval / multiplier
//! ```

use crate::types::{Difficulty, DifficultyProfile, MS_PER_MINUTE};

#[derive(Debug, Clone, PartialEq)]
pub struct SpeedController {
    difficulty: Difficulty,
    profile: DifficultyProfile,
    multiplier: f64,
}

impl SpeedController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            profile: difficulty.profile(),
            multiplier: 1.0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Switch profile; the multiplier starts over at 1.0.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        *self = Self::new(difficulty);
    }

    /// Back to multiplier 1.0 on the current profile.
    pub fn reset(&mut self) {
        self.multiplier = 1.0;
    }

    /// Recompute the multiplier for the given elapsed play time.
    pub fn update(&mut self, elapsed_ms: u64) {
        self.multiplier = multiplier_at(&self.profile, elapsed_ms);
    }

    /// Current fall interval in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.profile.base_interval_ms as f64 / self.multiplier
    }

    /// Shortest interval this profile can reach.
    pub fn min_interval_ms(&self) -> f64 {
        self.profile.base_interval_ms as f64 / self.profile.speed_cap
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Multiplier reached after `elapsed_ms` of play.
pub fn multiplier_at(profile: &DifficultyProfile, elapsed_ms: u64) -> f64 {
    let minutes = (elapsed_ms / MS_PER_MINUTE) as f64;
    (1.0 + minutes * profile.speed_increase_per_minute).min(profile.speed_cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_minute_runs_at_base_speed() {
        let mut speed = SpeedController::new(Difficulty::Easy);
        speed.update(59_999);
        assert_eq!(speed.multiplier(), 1.0);
        assert_eq!(speed.interval_ms(), 1000.0);
    }

    #[test]
    fn test_medium_after_two_minutes() {
        let mut speed = SpeedController::new(Difficulty::Medium);
        speed.update(2 * 60_000 + 30_000);
        assert!((speed.multiplier() - 1.4).abs() < 1e-9);
        assert!((speed.interval_ms() - 800.0 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_saturates_at_cap() {
        for d in Difficulty::ALL {
            let mut speed = SpeedController::new(d);
            speed.update(10 * 60 * 60_000);
            assert_eq!(speed.multiplier(), d.profile().speed_cap);
            assert_eq!(speed.interval_ms(), speed.min_interval_ms());
        }
    }

    #[test]
    fn test_set_difficulty_resets_multiplier() {
        let mut speed = SpeedController::new(Difficulty::Easy);
        speed.update(5 * 60_000);
        assert!(speed.multiplier() > 1.0);

        speed.set_difficulty(Difficulty::Hard);
        assert_eq!(speed.multiplier(), 1.0);
        assert_eq!(speed.difficulty(), Difficulty::Hard);
        assert_eq!(speed.interval_ms(), 500.0);
    }
}
