use proptest::prelude::*;

use crate::crc::{calculate_crc, finalize, fold_word, INIT};
use crate::reflect::reflect;

fn width_and_value() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=32).prop_flat_map(|bits| {
        let max = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
        (Just(bits), 0..=max)
    })
}

proptest! {
    #[test]
    fn reflect_is_an_involution((bits, x) in width_and_value()) {
        prop_assert_eq!(reflect(reflect(x, bits), bits), x);
    }

    #[test]
    fn reflect_zero_and_one(bits in 1u32..=32) {
        prop_assert_eq!(reflect(0, bits), 0);
        prop_assert_eq!(reflect(1, bits), 1 << (bits - 1));
    }

    #[test]
    fn reflect_never_sets_bits_above_width(x in any::<u32>(), bits in 1u32..32) {
        prop_assert_eq!(reflect(x, bits) >> bits, 0);
    }

    #[test]
    fn reflect_32_is_reverse_bits(x in any::<u32>()) {
        prop_assert_eq!(reflect(x, 32), x.reverse_bits());
    }

    #[test]
    fn crc_is_deterministic(words in proptest::collection::vec(any::<u32>(), 0..=256)) {
        prop_assert_eq!(calculate_crc(&words), calculate_crc(&words.clone()));
    }

    #[test]
    fn fold_has_no_lookahead(words in proptest::collection::vec(any::<u32>(), 0..=256)) {
        let folded = words.iter().fold(INIT, |crc, &w| fold_word(crc, w));
        prop_assert_eq!(finalize(folded), calculate_crc(&words));
    }

    #[test]
    fn split_point_does_not_matter(words in proptest::collection::vec(any::<u32>(), 0..=128), split in any::<usize>()) {
        let split = split % (words.len() + 1);
        let (a, b) = words.split_at(split);
        let mid = a.iter().fold(INIT, |crc, &w| fold_word(crc, w));
        let end = b.iter().fold(mid, |crc, &w| fold_word(crc, w));
        prop_assert_eq!(finalize(end), calculate_crc(&words));
    }

    #[test]
    fn order_of_two_distinct_words_matters(a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a != b);
        prop_assert_ne!(calculate_crc(&[a, b]), calculate_crc(&[b, a]));
    }

    #[test]
    fn single_bit_flip_changes_crc(words in proptest::collection::vec(any::<u32>(), 1..=64), idx in any::<usize>(), bit in 0u32..32) {
        let idx = idx % words.len();
        let mut flipped = words.clone();
        flipped[idx] ^= 1 << bit;
        prop_assert_ne!(calculate_crc(&words), calculate_crc(&flipped));
    }
}
