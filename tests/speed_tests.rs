//! Speed controller tests: per-minute growth, caps, interval

use blockfall::core::speed::multiplier_at;
use blockfall::core::{GameState, ShapeGenerator, SpeedController};
use blockfall::types::{Difficulty, ShapeKind, MS_PER_MINUTE};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_growth_is_stepwise_per_whole_minute() {
    let profile = Difficulty::Medium.profile();
    assert!(approx(multiplier_at(&profile, 0), 1.0));
    assert!(approx(multiplier_at(&profile, MS_PER_MINUTE - 1), 1.0));
    assert!(approx(multiplier_at(&profile, MS_PER_MINUTE), 1.2));
    assert!(approx(multiplier_at(&profile, 2 * MS_PER_MINUTE + 59_000), 1.4));
}

#[test]
fn test_multiplier_monotonic_and_capped() {
    for difficulty in Difficulty::ALL {
        let profile = difficulty.profile();
        let mut prev = 0.0;
        for minute in 0..60u64 {
            let m = multiplier_at(&profile, minute * MS_PER_MINUTE);
            assert!(m >= prev, "{difficulty:?} minute {minute}");
            assert!(m <= profile.speed_cap, "{difficulty:?} minute {minute}");
            prev = m;
        }
        assert!(approx(prev, profile.speed_cap), "{difficulty:?} reaches cap");
    }
}

#[test]
fn test_interval_shrinks_to_profile_floor() {
    let mut speed = SpeedController::new(Difficulty::Hard);
    assert!(approx(speed.interval_ms(), 500.0));
    speed.update(60 * MS_PER_MINUTE);
    assert!(approx(speed.multiplier(), 5.0));
    assert!(approx(speed.interval_ms(), 100.0));
    assert!(approx(speed.min_interval_ms(), 100.0));

    speed.set_difficulty(Difficulty::Easy);
    assert!(approx(speed.multiplier(), 1.0));
    assert!(approx(speed.interval_ms(), 1000.0));
}

#[test]
fn test_game_clock_speeds_up_gravity() {
    let generator = ShapeGenerator::scripted(&[ShapeKind::I]);
    let mut state = GameState::with_generator(generator, Difficulty::Easy);
    state.tick(0);

    // Each tick applies at most one gravity step, so feed small steps.
    let mut now = 0;
    while state.elapsed_ms() < MS_PER_MINUTE {
        now += 500;
        state.tick(now);
        if state.game_over() {
            break;
        }
    }
    assert!(approx(state.speed_multiplier(), 1.1));
    assert!(approx(state.interval_ms(), 1000.0 / 1.1));
}
