//! Catalog construction
//!
//! Mixes the input string into a 64-bit seed with an LCG-style accumulator,
//! then combines two seed-derived items with the six-item static table.
//! Reproducibility contract: iteration is over Unicode scalar values (never
//! UTF-8 bytes) and all arithmetic wraps modulo 2^64.

use crate::core::Item;

/// Fixed knapsack capacity in mass units
pub const CAPACITY: u32 = 50;

/// LCG multiplier for seed mixing
const MULTIPLIER: u64 = 0x5DEECE66D;

/// LCG increment for seed mixing
const ADDER: u64 = 0xB;

/// The six fixed-attribute catalog items
const STATIC_ITEMS: [Item; 6] = [
    Item::new('A', 10, 60),
    Item::new('B', 20, 100),
    Item::new('C', 30, 120),
    Item::new('D', 15, 70),
    Item::new('E', 25, 90),
    Item::new('F', 5, 30),
];

/// Fold the input string into a single 64-bit seed.
///
/// One LCG step per code point, wrapping on overflow. The final value
/// after the whole string is the seed; no per-item re-derivation.
pub fn derive_seed(input: &str) -> u64 {
    let mut seed: u64 = 0;
    for ch in input.chars() {
        seed = seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ch as u64)
            .wrapping_add(ADDER);
    }
    seed
}

/// Compute the two seed-derived items "X" and "Y"
pub fn derived_items(seed: u64) -> [Item; 2] {
    [
        Item::new('X', (seed % 15) as u32 + 5, (seed % 50) as u32 + 40),
        Item::new('Y', (seed % 10) as u32 + 8, (seed % 40) as u32 + 50),
    ]
}

/// Build the full 8-item catalog for one input string.
///
/// Order is static items first, then X and Y; order only steers the
/// DP/backtrack traversal, never the reported set.
pub fn build(input: &str) -> Vec<Item> {
    let seed = derive_seed(input);
    let mut items = STATIC_ITEMS.to_vec();
    items.extend(derived_items(seed));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_of_single_ascii_char() {
        // 0 * 0x5DEECE66D + 'a' (97) + 0xB
        assert_eq!(derive_seed("a"), 108);
    }

    #[test]
    fn seed_iterates_code_points_not_bytes() {
        // Pinned against a trusted implementation; a byte-iterating
        // accumulator diverges on the two-byte 'ä'.
        assert_eq!(derive_seed("täst@x.com"), 0xF89C_98B1_AF5E_1DA6);
    }

    #[test]
    fn seed_wraps_on_long_input() {
        let input = "x".repeat(10_001);
        assert_eq!(derive_seed(&input), 0x15C2_229D_1581_3253);
    }

    #[test]
    fn zero_seed_derived_items() {
        let [x, y] = derived_items(0);
        assert_eq!(x, Item::new('X', 5, 40));
        assert_eq!(y, Item::new('Y', 8, 50));
    }

    #[test]
    fn derived_items_stay_in_range() {
        for seed in [0, 1, 107, u64::MAX, 0xF89C_98B1_AF5E_1DA6] {
            let [x, y] = derived_items(seed);
            assert!((5..=19).contains(&x.weight));
            assert!((40..=89).contains(&x.value));
            assert!((8..=17).contains(&y.weight));
            assert!((50..=89).contains(&y.value));
        }
    }

    #[test]
    fn catalog_has_eight_unique_items() {
        let items = build("a");
        assert_eq!(items.len(), 8);
        let mut ids: Vec<char> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(items[6], Item::new('X', 8, 48));
        assert_eq!(items[7], Item::new('Y', 16, 78));
    }
}
