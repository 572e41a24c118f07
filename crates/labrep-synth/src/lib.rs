//! Synthetic data for lab reports: panel catalogs, reference range
//! resolution, value sampling and patient metadata.

pub mod catalog;
pub mod names;
pub mod patient;
pub mod range;
pub mod results;
pub mod sampler;

pub use catalog::Catalog;
pub use names::{NameSource, ZhCnNames};
pub use patient::PatientSynthesizer;
pub use range::{resolve, selected_segment};
pub use results::sample_panels;
pub use sampler::{
    DEFAULT_IN_RANGE_CHANCE, DEFAULT_VARIATION_CHANCE, Sample, SamplingStrategy, round2,
    sample_excursion, sample_width_shift,
};
