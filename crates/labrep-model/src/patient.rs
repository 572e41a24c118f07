use chrono::NaiveDateTime;

use crate::enums::Gender;

/// Timestamp format printed on reports.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Synthetic patient identity and specimen metadata for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInfo {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    /// Five-digit outpatient number.
    pub patient_number: String,
    /// Medical record number, `BA` followed by six digits.
    pub case_number: String,
    pub fee_category: String,
    pub specimen_number: String,
    pub department: String,
    pub physician: String,
    /// Specimen barcode, `TM` followed by six digits.
    pub barcode: String,
    pub bed: String,
    pub specimen_type: String,
    pub diagnosis: String,
    pub collected_at: NaiveDateTime,
    pub reported_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub examiner: String,
    pub reviewer: String,
}

impl PatientInfo {
    /// Labeled fields in the order they appear on the two-column header.
    pub fn labeled_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("姓名", self.name.clone()),
            ("病案", self.case_number.clone()),
            ("费别", self.fee_category.clone()),
            ("标本编号", self.specimen_number.clone()),
            ("性别", self.gender.label().to_string()),
            ("申请科室", self.department.clone()),
            ("送检医师", self.physician.clone()),
            ("条码编号", self.barcode.clone()),
            ("年龄", self.age.to_string()),
            ("床号", self.bed.clone()),
            ("标本种类", self.specimen_type.clone()),
            ("临床诊断", self.diagnosis.clone()),
            ("病员号", self.patient_number.clone()),
            ("送检时间", self.collected_at.format(REPORT_TIME_FORMAT).to_string()),
            ("报告时间", self.reported_at.format(REPORT_TIME_FORMAT).to_string()),
            ("修改时间", self.modified_at.format(REPORT_TIME_FORMAT).to_string()),
            ("检验者", self.examiner.clone()),
            ("审核者", self.reviewer.clone()),
        ]
    }

    /// Look up a single labeled field.
    pub fn field(&self, label: &str) -> Option<String> {
        self.labeled_fields()
            .into_iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value)
    }
}
