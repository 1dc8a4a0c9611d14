//! Seeded, platform-independent shuffle.
//!
//! The gallery order must be identical on every build, so the permutation is
//! driven by a fixed-seed linear congruential generator rather than a host
//! RNG. The seed is part of the public listing order: changing
//! [`CATALOG_SEED`] moves every card.
//!
//! Products are reduced in exact integer arithmetic. An implementation that
//! multiplies in `f64` loses low bits once the product passes 2^53 and
//! produces a different order (`[1, 4, 3, 0, 2]` instead of `[1, 3, 4, 0, 2]`
//! for five items).

/// Seed used for the published gallery order.
pub const CATALOG_SEED: u64 = 42;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MASK: u64 = 0x7fff_ffff;

/// 31-bit linear congruential generator: `s = (s * 1103515245 + 12345) mod 2^31`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed & LCG_MASK,
        }
    }

    /// Advance and return the new state, always in `0..2^31`.
    pub fn next_state(&mut self) -> u64 {
        // state < 2^31, so the product stays well inside u64
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) & LCG_MASK;
        self.state
    }
}

/// Shuffle `items` in place with a backward Fisher-Yates pass.
///
/// For `i` from `len - 1` down to `1`, swaps `i` with `next_state() % (i + 1)`.
pub fn shuffle_in_place<T>(items: &mut [T], seed: u64) {
    let mut rng = Lcg::new(seed);
    for i in (1..items.len()).rev() {
        let j = (rng.next_state() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, seed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_sequence_from_catalog_seed() {
        let mut rng = Lcg::new(CATALOG_SEED);
        assert_eq!(rng.next_state(), 1_250_496_027);
        assert_eq!(rng.next_state(), 1_116_302_264);
        assert_eq!(rng.next_state(), 1_000_676_753);
    }

    #[test]
    fn large_products_are_reduced_exactly() {
        // 1250496027 * 1103515245 is far above 2^53.
        let exact = (1_250_496_027u128 * 1_103_515_245 + 12_345) % (1 << 31);
        let mut rng = Lcg::new(1_250_496_027);
        assert_eq!(rng.next_state() as u128, exact);
        assert_eq!(exact, 1_116_302_264);
        // The rounded double-precision step lands elsewhere.
        let rounded = (1_250_496_027f64 * 1_103_515_245f64 + 12_345f64) % 2_147_483_648f64;
        assert_ne!(rounded as u64, 1_116_302_264);
    }

    #[test]
    fn known_permutations_are_pinned() {
        let five: Vec<u32> = (0..5).collect();
        assert_eq!(seeded_shuffle(&five, 42), vec![1, 3, 4, 0, 2]);
        assert_eq!(seeded_shuffle(&five, 7), vec![0, 2, 3, 4, 1]);

        let ten: Vec<u32> = (0..10).collect();
        assert_eq!(seeded_shuffle(&ten, 42), vec![4, 3, 0, 5, 2, 6, 9, 1, 8, 7]);
    }

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..50).collect();
        assert_eq!(seeded_shuffle(&items, 42), seeded_shuffle(&items, 42));
    }

    #[test]
    fn different_seed_same_multiset() {
        let items: Vec<u32> = (0..10).collect();
        let a = seeded_shuffle(&items, 42);
        let b = seeded_shuffle(&items, 7);
        assert_ne!(a, b);

        let mut a_sorted = a.clone();
        let mut b_sorted = b.clone();
        a_sorted.sort();
        b_sorted.sort();
        assert_eq!(a_sorted, items);
        assert_eq!(b_sorted, items);
    }

    #[test]
    fn shuffle_is_a_bijection_for_small_sizes() {
        for n in 0..40u32 {
            let items: Vec<u32> = (0..n).collect();
            let mut shuffled = seeded_shuffle(&items, CATALOG_SEED);
            assert_eq!(shuffled.len(), items.len());
            shuffled.sort();
            assert_eq!(shuffled, items, "n = {n}");
        }
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let empty: Vec<u8> = vec![];
        assert!(seeded_shuffle(&empty, 42).is_empty());
        assert_eq!(seeded_shuffle(&["only"], 42), vec!["only"]);
    }
}
