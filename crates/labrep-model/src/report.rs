use crate::item::ResultRow;
use crate::patient::PatientInfo;

/// Everything drawn on one report image.
///
/// Rows borrow the catalog; a report lives only as long as one render.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub patient: PatientInfo,
    /// One panel per table column group, in catalog order.
    pub panels: Vec<Vec<ResultRow<'a>>>,
}

impl<'a> Report<'a> {
    pub fn new(patient: PatientInfo, panels: Vec<Vec<ResultRow<'a>>>) -> Self {
        Self { patient, panels }
    }

    pub fn rows(&self) -> impl Iterator<Item = &ResultRow<'a>> {
        self.panels.iter().flatten()
    }

    pub fn row_count(&self) -> usize {
        self.panels.iter().map(Vec::len).sum()
    }

    /// Number of rows flagged above or below their range.
    pub fn abnormal_count(&self) -> usize {
        self.rows().filter(|row| row.status.is_abnormal()).count()
    }
}
