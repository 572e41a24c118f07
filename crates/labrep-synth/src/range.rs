//! Reference range resolution.
//!
//! Catalog items carry their reference range as text. Most are a plain
//! `low-high` pair; gender-dependent items list one labeled segment per
//! gender, for example `男：0-15,女：0-20`.

use labrep_model::{Gender, ReferenceRange};
use tracing::debug;

const SEGMENT_SEPARATORS: [char; 2] = [',', '，'];
const LABEL_SEPARATORS: [char; 2] = ['：', ':'];

/// Resolve a raw range spec for a patient of the given gender.
///
/// Unparseable specs resolve to [`ReferenceRange::FALLBACK`]; inverted
/// bounds are swapped.
pub fn resolve(spec: &str, gender: Gender) -> ReferenceRange {
    let segment = selected_segment(spec, gender);
    let bounds = strip_label(segment);
    match parse_bounds(bounds) {
        Some((low, high)) => ReferenceRange::new(low, high),
        None => {
            debug!(spec, "unparseable reference range, using fallback");
            ReferenceRange::FALLBACK
        }
    }
}

/// The segment of `spec` that applies to `gender`, label included.
///
/// Falls back to the first segment when no label names the gender.
pub fn selected_segment(spec: &str, gender: Gender) -> &str {
    let mut segments = spec
        .split(SEGMENT_SEPARATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty());
    let Some(first) = segments.next() else {
        return spec.trim();
    };
    std::iter::once(first)
        .chain(segments)
        .find(|segment| label_of(segment).is_some_and(|label| gender.matches_label(label)))
        .unwrap_or(first)
}

fn label_of(segment: &str) -> Option<&str> {
    segment
        .split_once(LABEL_SEPARATORS)
        .map(|(label, _)| label.trim())
}

fn strip_label(segment: &str) -> &str {
    segment
        .split_once(LABEL_SEPARATORS)
        .map_or(segment, |(_, bounds)| bounds)
        .trim()
}

/// Bounds must stay finite after the samplers scale them (at most 2× the
/// larger magnitude).
fn parse_bounds(text: &str) -> Option<(f64, f64)> {
    let (low, high) = text.split_once('-')?;
    let low = low.trim().parse::<f64>().ok()?;
    let high = high.trim().parse::<f64>().ok()?;
    let magnitude = low.abs().max(high.abs());
    (magnitude * 2.0).is_finite().then_some((low, high))
}
