use super::{suggest_collection_encoding, Encoder, EncodingType};

/// Picks the cheapest of simple/extended for every call.
///
/// The choice is made per call and never stored: a collection gets the
/// highest-rank suggestion of its datasets, so every dataset in it decodes
/// under the same interpretation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoEncoder;

impl Encoder for AutoEncoder {
    fn encoding_for(&self, datasets: &[&[f64]]) -> EncodingType {
        let chosen = suggest_collection_encoding(datasets);
        tracing::trace!(?chosen, datasets = datasets.len(), "auto encoder choice");
        chosen
    }
}
