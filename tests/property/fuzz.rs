//! Crash-freedom under hostile input.
//!
//! In-process fuzzing with proptest: wide generators, many cases, and the
//! only assertion is that nothing panics and results stay well formed.
//! The cargo-fuzz targets in `fuzz/` cover the same ground from raw bytes.

use super::common::{token_stream, unicode_string};
use pbt_toolkit::{
    count_vowels, decode_runs, encode_runs, pairwise_dists, run_length_decoder, runs_from_tokens,
    safe_name, Matrix, PreconditionError, RleToken, Symbol, UNKNOWN_NAME,
};
use proptest::prelude::*;

/// Point sets with finite coordinates drawn from the whole `f64` range.
fn wide_point_sets() -> impl Strategy<Value = (Matrix, Matrix)> {
    let coord = any::<f64>().prop_filter("finite", |v| v.is_finite());
    (0usize..=4, 0usize..=4, 0usize..=4).prop_flat_map(move |(m, n, d)| {
        (
            prop::collection::vec(coord.clone(), m * d),
            prop::collection::vec(coord.clone(), n * d),
        )
            .prop_map(move |(xs, ys)| {
                (
                    Matrix::new(m, d, xs).unwrap(),
                    Matrix::new(n, d, ys).unwrap(),
                )
            })
    })
}

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        "[a-z_]{1,8}(::[a-z_]{1,8}){0,3}".prop_map(|p| Symbol::from_path(&p)),
        ".{0,16}".prop_map(Symbol::Named),
        ".{0,16}".prop_map(Symbol::Value),
        Just(Symbol::Opaque),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn count_vowels_never_panics(s in unicode_string(1000), include_y in any::<bool>()) {
        let _ = count_vowels(&s, include_y);
    }

    #[test]
    fn safe_name_is_total(sym in symbol(), repr_allowed in any::<bool>()) {
        let name = safe_name(&sym, repr_allowed);
        let offered = match &sym {
            Symbol::Item { path, .. } => vec![path.clone()],
            Symbol::Named(name) => vec![name.clone()],
            Symbol::Value(repr) if repr_allowed => vec![repr.clone()],
            Symbol::Value(_) | Symbol::Opaque => vec![],
        };
        prop_assert!(
            offered.contains(&name) || name == UNKNOWN_NAME,
            "{:?} named {:?}", sym, name
        );
    }

    #[test]
    fn decoder_never_panics(tokens in token_stream()) {
        // Malformed streams are errors, not panics; well formed ones agree
        // with the run view.
        if let Ok(decoded) = run_length_decoder(&tokens) {
            let runs = runs_from_tokens(&tokens).unwrap();
            prop_assert_eq!(decode_runs(&runs), Ok(decoded));
        } else {
            prop_assert!(runs_from_tokens(&tokens).is_err());
        }
    }

    #[test]
    fn pair_form_roundtrips_anything(s in unicode_string(200)) {
        prop_assert_eq!(decode_runs(&encode_runs(&s)), Ok(s));
    }

    #[test]
    fn distances_of_finite_points_are_never_nan((x, y) in wide_point_sets()) {
        let d = pairwise_dists(&x, &y).unwrap();
        prop_assert_eq!((d.rows(), d.cols()), (x.rows(), y.rows()));
        prop_assert!(d.as_slice().iter().all(|&v| v >= 0.0), "{:?} vs {:?}: {:?}", x, y, d);
    }

    #[test]
    fn unallocatable_counts_are_errors(
        ch in any::<char>(),
        count in (usize::MAX / 2 + 3)..=usize::MAX,
    ) {
        let tokens = [RleToken::Char(ch), RleToken::Char(ch), RleToken::Count(count)];
        prop_assert_eq!(
            run_length_decoder(&tokens),
            Err(PreconditionError::OutputTooLarge { position: 2 })
        );
    }
}
