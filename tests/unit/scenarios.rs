//! End-to-end scenarios through the public API.

use super::common::{allclose, is_close, SOFTMAX_TOL};
use pbt_toolkit::RleToken::{Char, Count};
use pbt_toolkit::{
    encode_runs, pairwise_dists, run_length_decoder, run_length_encoder, safe_name, softmax,
    Matrix, PreconditionError, Run, Symbol, UNKNOWN_NAME,
};

// ============================================================================
// RUN-LENGTH CODING
// ============================================================================

#[test]
fn test_rle_golden_stream() {
    let tokens = run_length_encoder("aaaaabbcbc");
    assert_eq!(
        tokens,
        vec![
            Char('a'),
            Char('a'),
            Count(5),
            Char('b'),
            Char('b'),
            Count(2),
            Char('c'),
            Char('b'),
            Char('c'),
        ]
    );
    assert_eq!(run_length_decoder(&tokens).unwrap(), "aaaaabbcbc");
}

#[test]
fn test_rle_golden_runs() {
    assert_eq!(
        encode_runs("aaaaabbcbc"),
        vec![
            Run { ch: 'a', len: 5 },
            Run { ch: 'b', len: 2 },
            Run { ch: 'c', len: 1 },
            Run { ch: 'b', len: 1 },
            Run { ch: 'c', len: 1 },
        ]
    );
}

#[test]
fn test_rle_json_wire_format() {
    let tokens = run_length_encoder("xxxy");
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(json, r#"["x","x",3,"y"]"#);

    let back: Vec<pbt_toolkit::RleToken> = serde_json::from_str(&json).unwrap();
    assert_eq!(run_length_decoder(&back).unwrap(), "xxxy");
}

#[test]
fn test_rle_malformed_streams() {
    assert_eq!(
        run_length_decoder(&[Count(3)]),
        Err(PreconditionError::CountWithoutCharacter { position: 0 })
    );
    assert_eq!(
        run_length_decoder(&[Char('a'), Char('a'), Count(2), Count(2)]),
        Err(PreconditionError::CountWithoutCharacter { position: 3 })
    );
    assert_eq!(
        run_length_decoder(&[Char('a'), Count(1)]),
        Err(PreconditionError::CountTooSmall {
            position: 1,
            count: 1
        })
    );
}

// ============================================================================
// SOFTMAX
// ============================================================================

#[test]
fn test_softmax_known_values() {
    let y = softmax(&[1.0, 2.0, 3.0]);
    let expected = [0.090_030_573_170_380_46, 0.244_728_471_054_797_64, 0.665_240_955_774_821_9];
    assert!(allclose(&y, &expected, 1e-12, 0.0), "{:?}", y);
}

#[test]
fn test_softmax_survives_huge_inputs() {
    let y = softmax(&[f64::MAX, f64::MAX, 0.0]);
    assert!(y.iter().all(|p| p.is_finite()));
    assert!(is_close(y.iter().sum(), 1.0, SOFTMAX_TOL));
    assert_eq!(y[2], 0.0);
}

#[test]
fn test_softmax_empty() {
    assert!(softmax(&[]).is_empty());
}

// ============================================================================
// PAIRWISE DISTANCES
// ============================================================================

#[test]
fn test_dists_three_four_five() {
    let x = Matrix::from_rows(vec![vec![0.0, 0.0], vec![3.0, 4.0]], 2).unwrap();
    let y = Matrix::from_rows(vec![vec![3.0, 4.0]], 2).unwrap();
    let d = pairwise_dists(&x, &y).unwrap();
    assert_eq!(d.to_rows(), vec![vec![5.0], vec![0.0]]);
}

#[test]
fn test_dists_empty_sets_keep_shape() {
    let x = Matrix::zeros(0, 3).unwrap();
    let y = Matrix::zeros(4, 3).unwrap();
    let d = pairwise_dists(&x, &y).unwrap();
    assert_eq!((d.rows(), d.cols()), (0, 4));
}

#[test]
fn test_dists_dimension_mismatch() {
    let x = Matrix::zeros(2, 3).unwrap();
    let y = Matrix::zeros(2, 2).unwrap();
    assert_eq!(
        pairwise_dists(&x, &y),
        Err(PreconditionError::DimensionMismatch { x_dim: 3, y_dim: 2 })
    );
}

// ============================================================================
// NAMING
// ============================================================================

#[test]
fn test_safe_name_priority() {
    assert_eq!(safe_name(&Symbol::of::<String>(), true), std::any::type_name::<String>());
    assert_eq!(safe_name(&Symbol::Named("leftpad".into()), false), "leftpad");
    assert_eq!(safe_name(&Symbol::value(&[1, 2]), true), "[1, 2]");
    assert_eq!(safe_name(&Symbol::value(&[1, 2]), false), UNKNOWN_NAME);
    assert_eq!(safe_name(&Symbol::Opaque, true), UNKNOWN_NAME);
}

#[test]
fn test_safe_name_for_functions() {
    let name = safe_name(&Symbol::of::<fn(&str, bool) -> usize>(), false);
    assert!(name.contains("fn("), "{}", name);
}
