//! Report generation, batch output and logging for the `labrep` binary.

pub mod batch;
pub mod clock;
pub mod config;
pub mod generator;
pub mod logging;

pub use batch::{BatchError, BatchSummary, WrittenReport, report_file_name, run_batch};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, FileConfig, GenerateOverrides, GenerateSettings};
pub use generator::{GeneratedReport, ReportGenerator};
