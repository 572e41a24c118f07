//! Random result values biased toward the reference range.
//!
//! Two excursion formulas are in use, one per report template. Both round to
//! two decimals and classify the rounded value against the original range, so
//! a draw from the "normal" bucket can still be flagged.

use labrep_model::{ReferenceRange, ResultStatus, TemplateKind};
use rand::Rng;

/// Chance of an out-of-range value in the two-column template.
pub const DEFAULT_VARIATION_CHANCE: f64 = 0.2;
/// Chance of an in-range value in the single-column template.
pub const DEFAULT_IN_RANGE_CHANCE: f64 = 0.8;

/// A sampled value together with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub status: ResultStatus,
}

/// How out-of-range values are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingStrategy {
    /// Scale the bounds: above draws from `[high×1.05, high×1.3]`, below from
    /// `[low×0.7, low×0.95]`, normal from `[low×0.98, high×1.02]`.
    Excursion { variation_chance: f64 },
    /// Shift past a bound by 20–50% of the range width; normal draws stay
    /// inside `[low, high]`.
    WidthShift { in_range_chance: f64 },
}

impl SamplingStrategy {
    /// The strategy used by a report template.
    pub fn for_template(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::SingleColumn => SamplingStrategy::WidthShift {
                in_range_chance: DEFAULT_IN_RANGE_CHANCE,
            },
            TemplateKind::TwoColumn => SamplingStrategy::Excursion {
                variation_chance: DEFAULT_VARIATION_CHANCE,
            },
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, range: ReferenceRange) -> Sample {
        match *self {
            SamplingStrategy::Excursion { variation_chance } => {
                sample_excursion(rng, range, variation_chance)
            }
            SamplingStrategy::WidthShift { in_range_chance } => {
                sample_width_shift(rng, range, in_range_chance)
            }
        }
    }
}

/// Sample with the bound-scaling formula.
pub fn sample_excursion<R: Rng + ?Sized>(
    rng: &mut R,
    range: ReferenceRange,
    variation_chance: f64,
) -> Sample {
    let (low, high) = (range.low(), range.high());
    let raw = if rng.gen_bool(probability(variation_chance)) {
        if rng.gen_bool(0.5) {
            uniform(rng, high * 1.05, high * 1.3)
        } else {
            uniform(rng, low * 0.7, low * 0.95)
        }
    } else {
        uniform(rng, low * 0.98, high * 1.02)
    };
    classify(range, raw)
}

/// Sample with the width-shift formula.
pub fn sample_width_shift<R: Rng + ?Sized>(
    rng: &mut R,
    range: ReferenceRange,
    in_range_chance: f64,
) -> Sample {
    let (low, high) = (range.low(), range.high());
    let raw = if rng.gen_bool(probability(in_range_chance)) {
        uniform(rng, low, high)
    } else {
        let shift = range.width() * rng.gen_range(0.2..=0.5);
        if rng.gen_bool(0.5) {
            low - shift
        } else {
            high + shift
        }
    };
    classify(range, raw)
}

/// Round half away from zero to two decimals.
///
/// Values too large to scale by 100 have no fractional part and are returned
/// unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

fn classify(range: ReferenceRange, raw: f64) -> Sample {
    let value = round2(raw.clamp(f64::MIN, f64::MAX));
    Sample {
        value,
        status: range.classify(value),
    }
}

// Endpoints derived from negative or zero bounds can come out inverted, and
// scaling bounds near f64::MAX can overflow them.
fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let lo = lo.clamp(f64::MIN, f64::MAX);
    let hi = hi.clamp(f64::MIN, f64::MAX);
    if (hi - lo).is_finite() {
        rng.gen_range(lo..=hi)
    } else {
        let t: f64 = rng.gen_range(0.0..=1.0);
        lo * (1.0 - t) + hi * t
    }
}

fn probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
