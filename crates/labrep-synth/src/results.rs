//! Per-report result rows sampled from a catalog.

use labrep_model::{Gender, ResultRow};
use rand::Rng;

use crate::catalog::Catalog;
use crate::range::{resolve, selected_segment};
use crate::sampler::SamplingStrategy;

/// Sample one row per catalog item, keeping the catalog's panel grouping.
pub fn sample_panels<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    strategy: SamplingStrategy,
    gender: Gender,
    rng: &mut R,
) -> Vec<Vec<ResultRow<'a>>> {
    catalog
        .panels()
        .iter()
        .map(|panel| {
            panel
                .iter()
                .map(|item| {
                    let range = resolve(&item.reference, gender);
                    let sample = strategy.sample(rng, range);
                    ResultRow {
                        item,
                        value: sample.value,
                        status: sample.status,
                        range,
                        reference_text: selected_segment(&item.reference, gender).to_string(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
