//! House-edge-weighted random outcomes.
//!
//! The non-card games draw from fixed distributions rather than a deck:
//! Crash's piecewise multiplier curve, Plinko's binomial buckets, and the
//! roulette pocket draw all live here so each game module carries only
//! its state machine.

use crate::rng::GameRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Crash multiplier bands: cumulative probability bound, then the
/// multiplier range drawn uniformly within the band.
///
/// Masses: 40% / 30% / 15% / 10% / 4% / 1%.
const CRASH_BANDS: [(f64, f64, f64); 6] = [
    (0.40, 1.00, 1.50),
    (0.70, 1.51, 2.50),
    (0.85, 2.51, 5.00),
    (0.95, 5.01, 10.00),
    (0.99, 10.01, 50.00),
    (1.00, 50.01, 1000.00),
];

/// Minimum round duration: the live curve may not crash before this.
pub const CRASH_MIN_DURATION_MS: u64 = 3_000;

/// Default growth factor; the curve reaches 5.0× at 3000 ms with it.
pub const CRASH_DEFAULT_FACTOR: f64 = 1_500.0;

/// Floor for the edged crash point. The growth refit divides by
/// `sqrt(point − 1)`, so a point at or below 1.0 would yield a NaN
/// factor and a round that can never crash.
pub const CRASH_MIN_POINT: f64 = 1.01;

/// Draw a crash-point multiplier from the banded distribution and apply
/// the house edge: `raw × (1 − edge)`, floored at [`CRASH_MIN_POINT`].
pub fn crash_point(rng: &mut GameRng, house_edge: f64) -> f64 {
    let r = rng.next_f64();
    let mut raw = 0.0;
    for (bound, lo, hi) in CRASH_BANDS {
        if r < bound {
            raw = lo + rng.next_f64() * (hi - lo);
            break;
        }
    }
    (raw * (1.0 - house_edge)).max(CRASH_MIN_POINT)
}

/// Growth factor for a round with the given crash point.
///
/// The default factor's curve sits at 5.0× when the minimum duration
/// elapses. A lower crash point would be passed too early, so the factor
/// is re-fit from `1 + (3000/factor)² = point` to make the curve meet the
/// crash point exactly at the minimum duration.
pub fn growth_factor(crash_point: f64) -> f64 {
    if crash_point < 5.0 {
        CRASH_MIN_DURATION_MS as f64 / (crash_point - 1.0).sqrt()
    } else {
        CRASH_DEFAULT_FACTOR
    }
}

/// Live multiplier at `elapsed_ms`: quadratic growth `1 + (t/factor)²`.
pub fn live_multiplier(elapsed_ms: u64, factor: f64) -> f64 {
    let ratio = elapsed_ms as f64 / factor;
    1.0 + ratio * ratio
}

/// Plinko payout: 1× at the center bucket, rising linearly with distance
/// from center to `max_multiplier` at either extreme.
pub fn plinko_multiplier(rights: u32, rows: u32, max_multiplier: f64) -> f64 {
    let mid = rows as f64 / 2.0;
    let deviation = (rights as f64 - mid).abs();
    1.0 + (deviation / mid) * (max_multiplier - 1.0)
}

/// Red numbers on a roulette wheel.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Wheel layout: European has a single zero (37 pockets), American adds
/// the double zero (38).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouletteVariant {
    #[default]
    European,
    American,
}

impl RouletteVariant {
    pub fn pockets(self) -> u8 {
        match self {
            RouletteVariant::European => 37,
            RouletteVariant::American => 38,
        }
    }
}

/// Pocket colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

/// A single compartment on the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pocket {
    Zero,
    /// American wheels only.
    DoubleZero,
    /// 1..=36.
    Number(u8),
}

impl Pocket {
    pub fn color(self) -> Color {
        match self {
            Pocket::Zero | Pocket::DoubleZero => Color::Green,
            Pocket::Number(n) => {
                if RED_NUMBERS.contains(&n) {
                    Color::Red
                } else {
                    Color::Black
                }
            }
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pocket::Zero => f.write_str("0"),
            Pocket::DoubleZero => f.write_str("00"),
            Pocket::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Uniform pocket draw for the given wheel layout.
pub fn spin_pocket(rng: &mut GameRng, variant: RouletteVariant) -> Pocket {
    let raw = rng.gen_range(0..variant.pockets());
    match variant {
        RouletteVariant::European => match raw {
            0 => Pocket::Zero,
            n => Pocket::Number(n),
        },
        RouletteVariant::American => match raw {
            0 => Pocket::Zero,
            1 => Pocket::DoubleZero,
            n => Pocket::Number(n - 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn crash_points_stay_in_the_distribution_range() {
        let mut rng = GameRng::from_seed(3);
        for _ in 0..10_000 {
            let point = crash_point(&mut rng, 0.0);
            assert!((1.0..=1000.0).contains(&point), "point {point} out of range");
        }
    }

    #[test]
    fn house_edge_scales_every_draw() {
        let mut raw = GameRng::from_seed(11);
        let mut edged = GameRng::from_seed(11);
        for _ in 0..1_000 {
            let a = crash_point(&mut raw, 0.0);
            let b = crash_point(&mut edged, 0.02);
            assert!((b - (a * 0.98).max(CRASH_MIN_POINT)).abs() < 1e-12);
        }
    }

    #[test]
    fn edged_points_never_drop_to_one_or_below() {
        // A 2% edge pulls the bottom of the first band (raw just above
        // 1.0) under 1.0; unclamped, the growth refit would divide by
        // sqrt of a negative number.
        let mut rng = GameRng::from_seed(77);
        for _ in 0..10_000 {
            let point = crash_point(&mut rng, 0.02);
            assert!(point >= CRASH_MIN_POINT, "point {point}");
            let factor = growth_factor(point);
            assert!(factor.is_finite(), "factor {factor} for point {point}");
            // The curve reaches every sub-5.0 point at the minimum
            // duration, so the round always crashes.
            if point < 5.0 {
                let at_min = live_multiplier(CRASH_MIN_DURATION_MS, factor);
                assert!((at_min - point).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn band_masses_roughly_hold() {
        let mut rng = GameRng::from_seed(99);
        let n = 100_000;
        let mut low = 0u32;
        let mut top = 0u32;
        for _ in 0..n {
            let point = crash_point(&mut rng, 0.0);
            if point <= 1.50 {
                low += 1;
            }
            if point > 50.0 {
                top += 1;
            }
        }
        let low_share = low as f64 / n as f64;
        let top_share = top as f64 / n as f64;
        assert!((low_share - 0.40).abs() < 0.01, "low band {low_share}");
        assert!((top_share - 0.01).abs() < 0.005, "top band {top_share}");
    }

    #[test]
    fn low_crash_points_refit_the_growth_factor() {
        // The curve must meet the crash point exactly at 3000 ms.
        let point = 1.8;
        let factor = growth_factor(point);
        let at_min = live_multiplier(CRASH_MIN_DURATION_MS, factor);
        assert!((at_min - point).abs() < 1e-9);
    }

    #[test]
    fn high_crash_points_keep_the_default_factor() {
        assert_eq!(growth_factor(7.5), CRASH_DEFAULT_FACTOR);
        let at_min = live_multiplier(CRASH_MIN_DURATION_MS, CRASH_DEFAULT_FACTOR);
        assert!((at_min - 5.0).abs() < 1e-9);
    }

    #[test]
    fn live_multiplier_starts_at_one() {
        assert_eq!(live_multiplier(0, CRASH_DEFAULT_FACTOR), 1.0);
    }

    #[test]
    fn plinko_center_pays_even_extremes_pay_max() {
        assert_eq!(plinko_multiplier(5, 10, 100.0), 1.0);
        assert_eq!(plinko_multiplier(0, 10, 100.0), 100.0);
        assert_eq!(plinko_multiplier(10, 10, 100.0), 100.0);
        // One off center on a 10-row board: 1 + (1/5) * 99.
        let near = plinko_multiplier(6, 10, 100.0);
        assert!((near - 20.8).abs() < 1e-9);
    }

    #[test]
    fn zero_pockets_are_green() {
        assert_eq!(Pocket::Zero.color(), Color::Green);
        assert_eq!(Pocket::DoubleZero.color(), Color::Green);
    }

    #[test]
    fn seventeen_is_black() {
        assert_eq!(Pocket::Number(17).color(), Color::Black);
        assert_eq!(Pocket::Number(1).color(), Color::Red);
        assert_eq!(Pocket::Number(36).color(), Color::Red);
        assert_eq!(Pocket::Number(35).color(), Color::Black);
    }

    #[test]
    fn european_spin_never_yields_double_zero() {
        let mut rng = GameRng::from_seed(5);
        for _ in 0..5_000 {
            let pocket = spin_pocket(&mut rng, RouletteVariant::European);
            assert_ne!(pocket, Pocket::DoubleZero);
            if let Pocket::Number(n) = pocket {
                assert!((1..=36).contains(&n));
            }
        }
    }

    proptest! {
        // Any seed and edge: the edged point stays within the scaled
        // distribution bounds and the fitted curve can always reach it.
        #[test]
        fn crash_points_respect_any_house_edge(seed in any::<u64>(), edge in 0.0f64..0.5) {
            let mut rng = GameRng::from_seed(seed);
            let point = crash_point(&mut rng, edge);
            prop_assert!(point >= CRASH_MIN_POINT);
            prop_assert!(point <= 1000.0 * (1.0 - edge) + 1e-9);
            let factor = growth_factor(point);
            prop_assert!(factor.is_finite() && factor > 0.0);
            let at_min = live_multiplier(CRASH_MIN_DURATION_MS, factor);
            prop_assert!(at_min.is_finite());
            if point < 5.0 {
                prop_assert!((at_min - point).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn american_spin_covers_both_zeros() {
        let mut rng = GameRng::from_seed(6);
        let mut saw_zero = false;
        let mut saw_double = false;
        for _ in 0..5_000 {
            match spin_pocket(&mut rng, RouletteVariant::American) {
                Pocket::Zero => saw_zero = true,
                Pocket::DoubleZero => saw_double = true,
                Pocket::Number(n) => assert!((1..=36).contains(&n)),
            }
        }
        assert!(saw_zero && saw_double);
    }
}
