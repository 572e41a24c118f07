//! Test items and the per-report rows sampled from them.

use crate::enums::ResultStatus;
use crate::range::ReferenceRange;

/// A single lab measurement as listed in a panel catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    /// Row number printed in the first column.
    pub seq: u32,
    /// Short analyzer code (`WBC`, `NEUT%`); absent when the name embeds it.
    pub code: Option<String>,
    pub name: String,
    pub unit: String,
    /// Raw reference spec, `low-high` or gender-partitioned
    /// (`男：0-15,女：0-20`).
    pub reference: String,
}

impl TestItem {
    pub fn new(
        seq: u32,
        code: Option<&str>,
        name: impl Into<String>,
        unit: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            seq,
            code: code.map(str::to_string),
            name: name.into(),
            unit: unit.into(),
            reference: reference.into(),
        }
    }

    /// Sequence number followed by the code, e.g. `1 WBC`.
    pub fn seq_label(&self) -> String {
        match &self.code {
            Some(code) => format!("{} {}", self.seq, code),
            None => self.seq.to_string(),
        }
    }
}

/// One sampled result, borrowed from the catalog item it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow<'a> {
    pub item: &'a TestItem,
    /// Sampled value, already rounded to two decimals.
    pub value: f64,
    pub status: ResultStatus,
    /// Range the value was sampled and classified against.
    pub range: ReferenceRange,
    /// Reference text printed on the report.
    pub reference_text: String,
}

impl ResultRow<'_> {
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_label_includes_code_when_present() {
        let with_code = TestItem::new(3, Some("HGB"), "血红蛋白", "g/L", "110-160");
        let without = TestItem::new(3, None, "血红蛋白 HGB", "g/L", "130-175");
        assert_eq!(with_code.seq_label(), "3 HGB");
        assert_eq!(without.seq_label(), "3");
    }

    #[test]
    fn value_formats_with_two_decimals() {
        let item = TestItem::new(1, Some("WBC"), "白细胞", "10^9/L", "4-10");
        let row = ResultRow {
            item: &item,
            value: 7.5,
            status: ResultStatus::Normal,
            range: ReferenceRange::new(4.0, 10.0),
            reference_text: "4-10".to_string(),
        };
        assert_eq!(row.formatted_value(), "7.50");
    }
}
