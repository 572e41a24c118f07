pub mod enums;
pub mod error;
pub mod item;
pub mod patient;
pub mod range;
pub mod report;

pub use enums::{Gender, ResultStatus, TemplateKind};
pub use error::{ModelError, Result};
pub use item::{ResultRow, TestItem};
pub use patient::{PatientInfo, REPORT_TIME_FORMAT};
pub use range::ReferenceRange;
pub use report::Report;
