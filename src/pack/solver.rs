//! Exact 0/1 knapsack solver
//!
//! Classic DP table over (item count, remaining capacity), followed by a
//! deterministic backtrack that walks items from the highest catalog index
//! down. The walk direction is a reproducibility contract: on value ties
//! it always reconstructs the same subset, so conformant runs agree byte
//! for byte.

use crate::core::Item;

/// Compute a maximum-value subset of `items` with total weight <= `capacity`.
///
/// Returns the reconstructed items in backtrack order (highest catalog
/// index first); callers re-sort before reporting.
pub fn solve(items: &[Item], capacity: u32) -> Vec<Item> {
    let n = items.len();
    let cap = capacity as usize;

    // dp[i][w] = best value using the first i items at budget w
    let mut dp = vec![vec![0u32; cap + 1]; n + 1];
    for i in 1..=n {
        let item = items[i - 1];
        let weight = item.weight as usize;
        for w in 0..=cap {
            dp[i][w] = dp[i - 1][w];
            if weight <= w {
                let with_item = dp[i - 1][w - weight] + item.value;
                if with_item > dp[i][w] {
                    dp[i][w] = with_item;
                }
            }
        }
    }

    // Backtrack from (n, capacity): include item i whenever the table
    // proves it participates in the optimum at the current budget.
    let mut chosen = Vec::new();
    let mut w = cap;
    for i in (1..=n).rev() {
        let item = items[i - 1];
        let weight = item.weight as usize;
        if weight <= w && dp[i][w] == dp[i - 1][w - weight] + item.value {
            chosen.push(item);
            w -= weight;
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_nothing_fits() {
        let items = [Item::new('A', 10, 60), Item::new('B', 20, 100)];
        assert!(solve(&items, 5).is_empty());
    }

    #[test]
    fn takes_all_when_everything_fits() {
        let items = [Item::new('A', 10, 60), Item::new('B', 20, 100)];
        let chosen = solve(&items, 30);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn prefers_value_over_count() {
        // One heavy valuable item beats two light ones.
        let items = [
            Item::new('A', 5, 10),
            Item::new('B', 5, 10),
            Item::new('C', 10, 25),
        ];
        let chosen = solve(&items, 10);
        assert_eq!(chosen, vec![Item::new('C', 10, 25)]);
    }

    #[test]
    fn tie_break_prefers_highest_catalog_index() {
        // Two interchangeable items; the backtrack walks high to low and
        // must pick Q, never P.
        let items = [Item::new('P', 5, 10), Item::new('Q', 5, 10)];
        let chosen = solve(&items, 5);
        assert_eq!(chosen, vec![Item::new('Q', 5, 10)]);
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let items = [Item::new('A', 1, 1)];
        assert!(solve(&items, 0).is_empty());
    }
}
