//! Search-tree nodes and the fractional relaxation bound.

use knapsack_core::Item;

/// Immutable record of one partial assignment.
///
/// `depth` counts how many items (in density order) have been decided;
/// `chosen` lists the positions of the taken ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Node {
    pub(super) depth: usize,
    pub(super) value: u64,
    pub(super) weight: u64,
    pub(super) bound: u64,
    pub(super) chosen: Vec<usize>,
}

impl Node {
    /// The empty assignment.
    pub(super) const fn root(bound: u64) -> Self {
        Self {
            depth: 0,
            value: 0,
            weight: 0,
            bound,
            chosen: Vec::new(),
        }
    }

    /// Child that takes the item at position `self.depth`.
    pub(super) fn take(&self, item: &Item, bound: u64) -> Self {
        let mut chosen = Vec::with_capacity(self.chosen.len() + 1);
        chosen.extend_from_slice(&self.chosen);
        chosen.push(self.depth);
        Self {
            depth: self.depth + 1,
            value: self.value + item.value,
            weight: self.weight + item.weight,
            bound,
            chosen,
        }
    }

    /// Child that leaves the item at position `self.depth` out.
    pub(super) fn skip(self, bound: u64) -> Self {
        Self {
            depth: self.depth + 1,
            bound,
            ..self
        }
    }
}

/// LP relaxation of the remaining items, which must be in density order.
#[derive(Debug)]
pub(super) struct Relaxation<'a> {
    ranked: &'a [&'a Item],
    capacity: u64,
}

impl<'a> Relaxation<'a> {
    pub(super) const fn new(ranked: &'a [&'a Item], capacity: u64) -> Self {
        Self { ranked, capacity }
    }

    /// Best value reachable from a node that has decided `depth` items, if
    /// the first item that no longer fits could be taken fractionally.
    ///
    /// The fractional part is rounded down. Integral completions never
    /// exceed the floor of the relaxation, so the bound stays valid while
    /// every comparison is exact.
    pub(super) fn upper_bound(&self, depth: usize, value: u64, weight: u64) -> u64 {
        let mut packed_value = value;
        let mut packed_weight = weight;
        for item in self.ranked.iter().skip(depth) {
            match packed_weight.checked_add(item.weight) {
                Some(next) if next <= self.capacity => {
                    packed_weight = next;
                    packed_value = packed_value.saturating_add(item.value);
                }
                _ => {
                    let remaining = self.capacity.saturating_sub(packed_weight);
                    return packed_value.saturating_add(fractional_value(item, remaining));
                }
            }
        }
        packed_value
    }
}

/// `floor(value * remaining / weight)` without overflow.
///
/// Only called with `remaining < item.weight`, so the result is below
/// `item.value`.
fn fractional_value(item: &Item, remaining: u64) -> u64 {
    let scaled = u128::from(item.value) * u128::from(remaining);
    scaled
        .checked_div(u128::from(item.weight))
        .and_then(|share| u64::try_from(share).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classic() -> Vec<Item> {
        vec![
            Item::new("A", 60, 10),
            Item::new("B", 100, 20),
            Item::new("C", 120, 30),
        ]
    }

    #[rstest]
    #[case(0, 0, 0, 240)]
    #[case(1, 60, 10, 240)]
    #[case(1, 0, 0, 220)]
    #[case(2, 60, 10, 180)]
    #[case(2, 100, 20, 220)]
    #[case(3, 160, 30, 160)]
    fn bound_adds_fractional_item(
        #[case] depth: usize,
        #[case] value: u64,
        #[case] weight: u64,
        #[case] expected: u64,
    ) {
        let items = classic();
        let ranked: Vec<&Item> = items.iter().collect();
        let relaxation = Relaxation::new(&ranked, 50);
        assert_eq!(relaxation.upper_bound(depth, value, weight), expected);
    }

    #[rstest]
    fn zero_weight_items_never_divide_by_zero() {
        let items = vec![Item::new("free", 9, 0), Item::new("heavy", 10, 20)];
        let ranked: Vec<&Item> = items.iter().collect();
        let relaxation = Relaxation::new(&ranked, 0);
        assert_eq!(relaxation.upper_bound(0, 0, 0), 9);
    }

    #[rstest]
    fn children_extend_the_parent() {
        let item = Item::new("A", 60, 10);
        let root = Node::root(240);
        let taken = root.take(&item, 240);
        assert_eq!((taken.depth, taken.value, taken.weight), (1, 60, 10));
        assert_eq!(taken.chosen, vec![0]);

        let skipped = root.skip(220);
        assert_eq!((skipped.depth, skipped.value, skipped.weight), (1, 0, 0));
        assert!(skipped.chosen.is_empty());
    }

    #[rstest]
    fn fractional_share_is_rounded_down() {
        let items = vec![Item::new("A", 10, 3)];
        let ranked: Vec<&Item> = items.iter().collect();
        let relaxation = Relaxation::new(&ranked, 2);
        assert_eq!(relaxation.upper_bound(0, 0, 0), 6);
    }

    #[rstest]
    fn bounds_stay_exact_beyond_float_precision() {
        let large = 1_u64 << 53;
        let items = vec![Item::new("Y", large + 1, 1), Item::new("X", large, 1)];
        let ranked: Vec<&Item> = items.iter().collect();
        let relaxation = Relaxation::new(&ranked, 1);
        assert_eq!(relaxation.upper_bound(0, 0, 0), large + 1);
        assert_eq!(relaxation.upper_bound(1, 0, 0), large);
    }
}
