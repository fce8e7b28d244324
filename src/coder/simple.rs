use super::{clamp_index, Encoder, EncodingType};

const SIMPLE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const SIMPLE_MAX: i64 = 61;

/// Always encodes with the one-character alphabet (`s:`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleEncoder;

impl Encoder for SimpleEncoder {
    fn encoding_for(&self, _datasets: &[&[f64]]) -> EncodingType {
        EncodingType::Simple
    }
}

pub(crate) fn encode_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| match clamp_index(v, SIMPLE_MAX) {
            Some(idx) => SIMPLE_ALPHABET[idx] as char,
            None => '_',
        })
        .collect()
}
