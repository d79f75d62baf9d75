//! Algebraic laws of the codec and transpose, checked on random matrices.

use matfile::codec::FixedWidth;
use matfile::{Matrix, encode, generate, parse};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn matrix_with_max(max: u32) -> impl Strategy<Value = Matrix> {
    (1usize..12, 1usize..12).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(0..=max, rows * cols)
            .prop_map(move |data| Matrix::new(data, rows, cols).unwrap())
    })
}

proptest! {
    #[test]
    fn parse_inverts_encode(m in matrix_with_max(999)) {
        let text = encode(&m).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), m);
    }

    #[test]
    fn parse_inverts_encode_any_width(width in 1usize..=6, seed in any::<u64>()) {
        let codec = FixedWidth::new(width).unwrap();
        let max = codec.max_value().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let m = generate(5, 7, 0..=max, &mut rng).unwrap();

        let text = codec.encode(&m).unwrap();
        prop_assert!(text.lines().all(|l| l.len() == 7 * width));
        prop_assert_eq!(codec.parse(&text).unwrap(), m);
    }

    #[test]
    fn transpose_is_involution(m in matrix_with_max(u32::MAX)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_swaps_indices(m in matrix_with_max(u32::MAX)) {
        let t = m.transpose();
        prop_assert_eq!(t.shape(), (m.cols(), m.rows()));
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                prop_assert_eq!(t.get(j, i), m.get(i, j));
            }
        }
    }

    #[test]
    fn trailing_blank_lines_do_not_change_result(m in matrix_with_max(999), extra in 0usize..4) {
        let mut text = encode(&m).unwrap();
        for _ in 0..extra {
            text.push_str("   \n");
        }
        prop_assert_eq!(parse(&text).unwrap(), m);
    }

    #[test]
    fn generated_values_stay_in_range(lo in 0u32..500, span in 0u32..500, seed in any::<u64>()) {
        let hi = lo + span;
        let mut rng = StdRng::seed_from_u64(seed);
        let m = generate(8, 8, lo..=hi, &mut rng).unwrap();
        prop_assert_eq!(m.shape(), (8, 8));
        prop_assert!(m.as_slice().iter().all(|&v| lo <= v && v <= hi));
    }
}
