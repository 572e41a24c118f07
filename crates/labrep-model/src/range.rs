use crate::enums::ResultStatus;

/// Closed interval considered normal for a test item.
///
/// Always ordered: `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    low: f64,
    high: f64,
}

impl ReferenceRange {
    /// Wide range substituted when a spec cannot be parsed.
    pub const FALLBACK: ReferenceRange = ReferenceRange {
        low: 0.0,
        high: 100.0,
    };

    /// Build a range, swapping the bounds if they are given inverted.
    pub fn new(low: f64, high: f64) -> Self {
        if low > high {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Classify a value against this range.
    pub fn classify(&self, value: f64) -> ResultStatus {
        if value > self.high {
            ResultStatus::Above
        } else if value < self.low {
            ResultStatus::Below
        } else {
            ResultStatus::Normal
        }
    }
}
