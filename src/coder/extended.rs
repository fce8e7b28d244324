use super::{clamp_index, Encoder, EncodingType};

const EXTENDED_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";

pub const EXTENDED_MAX: i64 = 4095;

/// Always encodes with two characters per value (`e:`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtendedEncoder;

impl Encoder for ExtendedEncoder {
    fn encoding_for(&self, _datasets: &[&[f64]]) -> EncodingType {
        EncodingType::Extended
    }
}

pub(crate) fn encode_values(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 2);
    for &v in values {
        match clamp_index(v, EXTENDED_MAX) {
            Some(idx) => {
                out.push(EXTENDED_ALPHABET[idx / 64] as char);
                out.push(EXTENDED_ALPHABET[idx % 64] as char);
            }
            None => out.push_str("__"),
        }
    }
    out
}
