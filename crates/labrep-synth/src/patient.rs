//! Synthetic patient metadata.

use chrono::{Duration, NaiveDateTime};
use labrep_model::{Gender, PatientInfo};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::names::{NameSource, ZhCnNames};

const FEE_CATEGORIES: &[&str] = &["医保", "自费", "公费"];
const DEPARTMENTS: &[&str] = &["门诊抽血室", "急诊科", "内科", "外科"];
const DIAGNOSES: &[&str] = &["健康体检", "上呼吸道感染", "高血压", "糖尿病", "贫血待查"];
const SPECIMEN_TYPE: &str = "全血";

/// Builds [`PatientInfo`] records from a name source and a random source.
#[derive(Debug, Clone, Default)]
pub struct PatientSynthesizer<N = ZhCnNames> {
    names: N,
}

impl<N: NameSource> PatientSynthesizer<N> {
    pub fn new(names: N) -> Self {
        Self { names }
    }

    /// Generate one patient whose report is issued at `now`.
    pub fn generate<R: RngCore>(&self, rng: &mut R, now: NaiveDateTime) -> PatientInfo {
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let name = self.names.person_name(gender, rng);
        let physician = self.names.professional_name(rng);

        let age = rng.gen_range(18..=80);
        let patient_number = rng.gen_range(10_000..=99_999_u32).to_string();
        let case_number = format!("BA{}", rng.gen_range(100_000..=999_999_u32));
        let fee_category = pick(rng, FEE_CATEGORIES);
        let specimen_number = rng.gen_range(30..=50_u32).to_string();
        let department = pick(rng, DEPARTMENTS);
        let barcode = format!("TM{}", rng.gen_range(100_000..=999_999_u32));
        let bed = format!("{}-{}", rng.gen_range(1..=50_u32), rng.gen_range(1..=10_u32));
        let diagnosis = pick(rng, DIAGNOSES);
        let modified_at = now - Duration::hours(rng.gen_range(1..=6));
        let examiner = self.names.professional_name(rng);
        let reviewer = self.names.professional_name(rng);

        PatientInfo {
            name,
            gender,
            age,
            patient_number,
            case_number,
            fee_category,
            specimen_number,
            department,
            physician,
            barcode,
            bed,
            specimen_type: SPECIMEN_TYPE.to_string(),
            diagnosis,
            collected_at: now,
            reported_at: now,
            modified_at,
            examiner,
            reviewer,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}
