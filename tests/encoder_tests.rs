use chart_url::coder::{
    suggest_collection_encoding, suggest_encoding, suggest_int_encoding, AutoEncoder,
    DataScalingTextEncoder, ExtendedEncoder, PercentageEncoder, SimpleEncoder, TextEncoder,
};
use chart_url::{Encoder, EncodingType};
use rand::Rng;

#[test]
fn test_suggest_boundaries() {
    assert_eq!(suggest_int_encoding(&[0, 61]), EncodingType::Simple);
    assert_eq!(suggest_int_encoding(&[0, 62]), EncodingType::Extended);
    assert_eq!(suggest_encoding(&[0.0, 61.4]), EncodingType::Simple);
    assert_eq!(suggest_encoding(&[0.0, 61.5]), EncodingType::Extended);
    assert_eq!(suggest_int_encoding(&[]), EncodingType::Simple);
}

#[test]
fn test_suggest_never_picks_text() {
    assert_eq!(suggest_int_encoding(&[1_000_000]), EncodingType::Extended);
    assert_eq!(suggest_encoding(&[0.5, 99.9, 1e9]), EncodingType::Extended);
}

#[test]
fn test_collection_uses_highest_rank() {
    let datasets = vec![vec![0, 61], vec![0, 4095]];
    assert_eq!(
        AutoEncoder.encode_int_collection(&datasets, "|"),
        "e:AAA9|AA.."
    );
    assert_eq!(
        suggest_collection_encoding(&[vec![0.0, 61.0], vec![0.0, 4095.0]]),
        EncodingType::Extended
    );
}

#[test]
fn test_auto_choice_is_call_scoped() {
    let encoder = AutoEncoder;
    let _ = encoder.encode_int_collection(&[vec![4000], vec![1]], "|");
    assert_eq!(encoder.encode_ints(&[1, 2]), "s:BC");
    assert_eq!(encoder.encode_ints(&[0, 62]), "e:AAA-");
    assert_eq!(encoder.encode_ints(&[0, 61]), "s:A9");
}

#[test]
fn test_simple_clamps() {
    assert_eq!(SimpleEncoder.encode_ints(&[-5, 9999]), "s:A9");
    assert_eq!(SimpleEncoder.encode_floats(&[-0.4, 61.2, 300.0]), "s:A99");
}

#[test]
fn test_extended_known_token() {
    assert_eq!(ExtendedEncoder.encode_ints(&[200, 150]), "e:DICW");
    assert_eq!(ExtendedEncoder.encode_ints(&[-1, 5000]), "e:AA..");
}

#[test]
fn test_empty_input() {
    assert_eq!(AutoEncoder.encode_ints(&[]), "");
    assert_eq!(SimpleEncoder.encode_floats(&[]), "");
    assert_eq!(AutoEncoder.encode_int_collection(&[], "|"), "");
    assert_eq!(AutoEncoder.encode_int_collection(&[vec![], vec![]], "|"), "");
    assert_eq!(AutoEncoder.encode_int_collection(&[vec![1, 2], vec![]], "|"), "s:BC|");
}

#[test]
fn test_missing_values() {
    assert_eq!(SimpleEncoder.encode_floats(&[1.0, f64::NAN]), "s:B_");
    assert_eq!(ExtendedEncoder.encode_floats(&[f64::INFINITY, 64.0]), "e:__BA");
    assert_eq!(TextEncoder.encode_floats(&[f64::NAN, 3.0]), "t:-1,3");
}

#[test]
fn test_text_family() {
    assert_eq!(TextEncoder.encode_floats(&[10.25, 200.0]), "t:10.3,100");
    assert_eq!(PercentageEncoder.encode_ints(&[1, 1, 2]), "t:25,25,50");
    assert_eq!(DataScalingTextEncoder.encode_ints(&[-10, 5000]), "t:-10,5000");
    assert_eq!(
        PercentageEncoder.encode_int_collection(&[vec![1, 3], vec![2, 2]], "|"),
        "t:25,75|50,50"
    );
}

#[test]
fn test_custom_separator() {
    assert_eq!(
        SimpleEncoder.encode_int_collection(&[vec![0], vec![1], vec![2]], ","),
        "s:A,B,C"
    );
}

#[test]
fn test_random_values_always_encode() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(1..20);
        let values: Vec<i64> = (0..len).map(|_| rng.random_range(-10_000..10_000)).collect();

        let simple = SimpleEncoder.encode_ints(&values);
        assert_eq!(simple.len(), len + 2);
        assert!(simple[2..].chars().all(|c| c.is_ascii_alphanumeric()));

        let extended = ExtendedEncoder.encode_ints(&values);
        assert_eq!(extended.len(), 2 * len + 2);
        assert!(extended[2..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.'));

        let auto = AutoEncoder.encode_ints(&values);
        let expected = suggest_int_encoding(&values);
        assert!(auto.starts_with(expected.marker()));
    }
}
