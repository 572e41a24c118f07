//! Type-safe enumerations shared by the generator and the renderer.
//!
//! Gender labels and template names appear as plain strings in range specs,
//! configuration files and CLI arguments; these enums give them one canonical
//! spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Patient gender as printed on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label used on the report and inside gender-partitioned range specs.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }

    /// Returns true if a range-spec segment label refers to this gender.
    ///
    /// Accepts the report label (`男`/`女`) as well as `male`/`female` and
    /// `M`/`F`, case-insensitive.
    pub fn matches_label(&self, label: &str) -> bool {
        let label = label.trim();
        if label.contains(self.label()) {
            return true;
        }
        let lowered = label.to_lowercase();
        match self {
            Gender::Male => lowered == "male" || lowered == "m",
            Gender::Female => lowered == "female" || lowered == "f",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a result against its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultStatus {
    Below,
    Normal,
    Above,
}

impl ResultStatus {
    /// Directional marker drawn next to abnormal results.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            ResultStatus::Below => Some("↓"),
            ResultStatus::Normal => None,
            ResultStatus::Above => Some("↑"),
        }
    }

    pub fn is_abnormal(&self) -> bool {
        !matches!(self, ResultStatus::Normal)
    }
}

/// The report layouts the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateKind {
    /// Portrait 1000×1800 report with a single 25-row table.
    #[serde(rename = "one-col")]
    SingleColumn,
    /// A4 landscape 2480×1748 report with two side-by-side tables.
    #[default]
    #[serde(rename = "two-col")]
    TwoColumn,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::SingleColumn => "one-col",
            TemplateKind::TwoColumn => "two-col",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "one-col" | "single" | "single-column" => Ok(TemplateKind::SingleColumn),
            "two-col" | "double" | "two-column" => Ok(TemplateKind::TwoColumn),
            _ => Err(ModelError::UnknownTemplate(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_matches_report_and_english_labels() {
        assert!(Gender::Male.matches_label("男"));
        assert!(Gender::Male.matches_label(" Male "));
        assert!(Gender::Female.matches_label("F"));
        assert!(!Gender::Female.matches_label("男"));
        assert!(!Gender::Male.matches_label("female"));
    }

    #[test]
    fn markers_only_for_abnormal_status() {
        assert_eq!(ResultStatus::Above.marker(), Some("↑"));
        assert_eq!(ResultStatus::Below.marker(), Some("↓"));
        assert_eq!(ResultStatus::Normal.marker(), None);
    }

    #[test]
    fn template_kind_parses_aliases() {
        assert_eq!(
            "one-col".parse::<TemplateKind>().unwrap(),
            TemplateKind::SingleColumn
        );
        assert_eq!(
            "Two-Column".parse::<TemplateKind>().unwrap(),
            TemplateKind::TwoColumn
        );
        assert!("three-col".parse::<TemplateKind>().is_err());
    }
}
