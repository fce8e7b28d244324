use super::{Encoder, EncodingType};

pub const TEXT_MAX: i64 = 100;

const MISSING: &str = "-1";

/// Text encoding with values clamped to `0..=100`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextEncoder;

/// Text encoding of each value as a percentage of its dataset's sum.
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentageEncoder;

/// Text encoding of the raw values; the chart supplies the range via `chds`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataScalingTextEncoder;

impl Encoder for TextEncoder {
    fn encoding_for(&self, _datasets: &[&[f64]]) -> EncodingType {
        EncodingType::Text
    }
}

impl Encoder for PercentageEncoder {
    fn encoding_for(&self, _datasets: &[&[f64]]) -> EncodingType {
        EncodingType::Percentage
    }
}

impl Encoder for DataScalingTextEncoder {
    fn encoding_for(&self, _datasets: &[&[f64]]) -> EncodingType {
        EncodingType::DataScalingText
    }
}

pub(crate) fn encode_clamped(values: &[f64]) -> String {
    join_numbers(values.iter().map(|&v| {
        if v.is_finite() {
            Some(v.clamp(0.0, TEXT_MAX as f64))
        } else {
            None
        }
    }))
}

pub(crate) fn encode_percentages(values: &[f64]) -> String {
    let sum: f64 = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .sum();
    join_numbers(values.iter().map(|&v| {
        if !v.is_finite() {
            None
        } else if sum > 0.0 {
            Some(v.max(0.0) / sum * 100.0)
        } else {
            Some(0.0)
        }
    }))
}

pub(crate) fn encode_raw(values: &[f64]) -> String {
    join_numbers(values.iter().map(|&v| v.is_finite().then_some(v)))
}

fn join_numbers(values: impl Iterator<Item = Option<f64>>) -> String {
    values
        .map(|v| v.map_or_else(|| MISSING.to_string(), format_number))
        .collect::<Vec<_>>()
        .join(",")
}

/// At most one decimal, no trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    let mut rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        // drop the sign of -0.0
        rounded = 0.0;
    }
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
