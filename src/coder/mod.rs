//! Numeric data encoders
//!
//! Every encoder turns one dataset (or a collection of datasets) into the
//! compact token the chart service expects in `chd`. A standalone dataset is
//! prefixed with its encoding marker (`s:`, `e:`, `t:`); a collection carries
//! the marker once, followed by the datasets joined with a separator.
//!
//! Encoding never fails. Values outside the range of the chosen encoding
//! are clamped to its bounds and non-finite values are written as the
//! encoding's "missing" token.

pub mod auto;
pub mod extended;
pub mod simple;
pub mod text;

pub use auto::AutoEncoder;
pub use extended::ExtendedEncoder;
pub use simple::SimpleEncoder;
pub use text::{DataScalingTextEncoder, PercentageEncoder, TextEncoder};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default separator between datasets of a collection.
pub const DEFAULT_SEPARATOR: &str = "|";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingType {
    /// One character per value, 0..=61
    Simple,
    /// Two characters per value, 0..=4095
    Extended,
    /// Comma separated numbers, 0..=100
    Text,
    /// Text encoding of each value's share of its dataset sum
    Percentage,
    /// Text encoding of raw values, paired with a `chds` scaling range
    DataScalingText,
}

impl EncodingType {
    /// Literal written in front of the encoded payload.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Simple => "s:",
            Self::Extended => "e:",
            Self::Text | Self::Percentage | Self::DataScalingText => "t:",
        }
    }

    /// Ordering used to pick one encoding for several datasets.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Simple => 0,
            Self::Extended => 1,
            Self::Text | Self::Percentage | Self::DataScalingText => 2,
        }
    }

    /// Largest value the encoding can carry, if it is bounded.
    pub fn max_value(&self) -> Option<i64> {
        match self {
            Self::Simple => Some(simple::SIMPLE_MAX),
            Self::Extended => Some(extended::EXTENDED_MAX),
            Self::Text => Some(text::TEXT_MAX),
            Self::Percentage | Self::DataScalingText => None,
        }
    }

    /// Encodes one dataset without the marker.
    pub fn encode_body(&self, values: &[f64]) -> String {
        match self {
            Self::Simple => simple::encode_values(values),
            Self::Extended => extended::encode_values(values),
            Self::Text => text::encode_clamped(values),
            Self::Percentage => text::encode_percentages(values),
            Self::DataScalingText => text::encode_raw(values),
        }
    }
}

/// Lowest-rank encoding able to carry `values` without clamping upwards.
///
/// Only [`EncodingType::Simple`] and [`EncodingType::Extended`] are ever
/// suggested; the text family must be requested explicitly.
pub fn suggest_encoding(values: &[f64]) -> EncodingType {
    let fits_simple = values
        .iter()
        .filter(|v| v.is_finite())
        .all(|v| v.round() <= simple::SIMPLE_MAX as f64);
    if fits_simple {
        EncodingType::Simple
    } else {
        EncodingType::Extended
    }
}

pub fn suggest_int_encoding(values: &[i64]) -> EncodingType {
    if values.iter().all(|&v| v <= simple::SIMPLE_MAX) {
        EncodingType::Simple
    } else {
        EncodingType::Extended
    }
}

/// Highest-rank suggestion over all datasets, so one interpretation covers
/// the whole collection.
pub fn suggest_collection_encoding<D: AsRef<[f64]>>(datasets: &[D]) -> EncodingType {
    datasets
        .iter()
        .map(|d| suggest_encoding(d.as_ref()))
        .max_by_key(EncodingType::rank)
        .unwrap_or(EncodingType::Simple)
}

/// Converts numeric datasets into `chd` payloads.
pub trait Encoder: fmt::Debug + Send + Sync {
    /// Encoding used for one call covering every dataset in `datasets`.
    fn encoding_for(&self, datasets: &[&[f64]]) -> EncodingType;

    /// Encodes one dataset, marker included. Empty input yields `""`.
    fn encode_floats(&self, values: &[f64]) -> String {
        if values.is_empty() {
            return String::new();
        }
        let encoding = self.encoding_for(&[values]);
        let mut out = String::from(encoding.marker());
        out.push_str(&encoding.encode_body(values));
        out
    }

    fn encode_ints(&self, values: &[i64]) -> String {
        self.encode_floats(&ints_to_floats(values))
    }

    /// Encodes several datasets under a single encoding, joined by
    /// `separator` and sharing one marker.
    fn encode_float_collection(&self, datasets: &[Vec<f64>], separator: &str) -> String {
        if datasets.iter().all(Vec::is_empty) {
            return String::new();
        }
        let views: Vec<&[f64]> = datasets.iter().map(Vec::as_slice).collect();
        let encoding = self.encoding_for(&views);
        let body = views
            .iter()
            .map(|d| encoding.encode_body(d))
            .collect::<Vec<_>>()
            .join(separator);
        format!("{}{}", encoding.marker(), body)
    }

    fn encode_int_collection(&self, datasets: &[Vec<i64>], separator: &str) -> String {
        let floats: Vec<Vec<f64>> = datasets.iter().map(|d| ints_to_floats(d)).collect();
        self.encode_float_collection(&floats, separator)
    }
}

fn ints_to_floats(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

/// Rounds `value` and clamps it into `0..=max`. `None` marks a missing value.
pub(crate) fn clamp_index(value: f64, max: i64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < 0.0 || rounded > max as f64 {
        tracing::trace!(value, max, "clamping value to encoding range");
    }
    Some(rounded.clamp(0.0, max as f64) as usize)
}
