//! Two-budget 0/1 POI selection.

use std::collections::HashMap;

use wayfarer_core::{PoiItem, PoiSource, Selection};

/// Memo key: item index, time remaining, budget remaining.
type Key = (usize, u32, u32);

/// Chooses the subset of POIs with the greatest total interest whose time
/// and money costs fit both budgets.
///
/// `f(i, t, b)` is the best interest achievable from items `i..` with `t`
/// minutes and `b` money left. Values are memoised by the full `(i, t, b)`
/// key and never change once computed, so repeated calls against the same
/// item list reuse earlier work.
///
/// # Examples
/// ```
/// use wayfarer_core::PoiItem;
/// use wayfarer_planner::PoiSelector;
///
/// let mut selector = PoiSelector::new(vec![
///     PoiItem::new(60, 120, 10),
///     PoiItem::new(50, 90, 30),
///     PoiItem::new(40, 60, 5),
/// ]);
/// let selection = selector.solve(200, 20);
/// assert_eq!(selection.indices, vec![0, 2]);
/// assert_eq!(selection.total_interest, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoiSelector {
    items: Vec<PoiItem>,
    memo: HashMap<Key, u64>,
}

impl PoiSelector {
    /// Create a selector over `items`, indexed in order.
    #[must_use]
    pub fn new(items: Vec<PoiItem>) -> Self {
        Self {
            items,
            memo: HashMap::new(),
        }
    }

    /// Create a selector over every item a source yields.
    #[must_use]
    pub fn from_source<S: PoiSource + ?Sized>(source: &S) -> Self {
        Self::new(source.poi_items())
    }

    /// The candidate items.
    #[must_use]
    pub fn items(&self) -> &[PoiItem] {
        &self.items
    }

    /// Number of memoised sub-problems.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Best total interest from items `index..` within `time` and `budget`.
    ///
    /// Sub-problems are resolved from an explicit work stack, so the depth
    /// of the recurrence is bounded by the heap rather than the call stack.
    pub fn calculate(&mut self, index: usize, time: u32, budget: u32) -> u64 {
        let root = (index, time, budget);
        let mut pending = vec![root];
        while let Some(&key) = pending.last() {
            let (current, remaining_time, remaining_budget) = key;
            let Some(item) = self.items.get(current).copied() else {
                pending.pop();
                continue;
            };
            if self.memo.contains_key(&key) {
                pending.pop();
                continue;
            }
            let skip_key = (current + 1, remaining_time, remaining_budget);
            let take_key = (item.time_cost <= remaining_time && item.money_cost <= remaining_budget)
                .then(|| {
                    (
                        current + 1,
                        remaining_time - item.time_cost,
                        remaining_budget - item.money_cost,
                    )
                });
            let skip = self.known(skip_key);
            let take = take_key.map(|next| self.known(next));
            match (skip, take) {
                (None, _) => pending.push(skip_key),
                (_, Some(None)) => pending.extend(take_key),
                (Some(without), with) => {
                    let best = with
                        .flatten()
                        .map_or(without, |rest| without.max(rest + u64::from(item.interest)));
                    self.memo.insert(key, best);
                    pending.pop();
                }
            }
        }
        self.known(root).unwrap_or(0)
    }

    /// Memoised value of `key`; keys past the last item are always zero.
    fn known(&self, key: Key) -> Option<u64> {
        if key.0 >= self.items.len() {
            Some(0)
        } else {
            self.memo.get(&key).copied()
        }
    }

    /// Reconstruct the chosen item indices, ascending.
    ///
    /// Item `i` is taken whenever `f(i, t, b)` differs from `f(i + 1, t, b)`;
    /// the remaining budgets then shrink by its costs.
    pub fn get_solution(&mut self, index: usize, time: u32, budget: u32) -> Vec<usize> {
        let mut chosen = Vec::new();
        let (mut remaining_time, mut remaining_budget) = (time, budget);
        for current in index..self.items.len() {
            let with = self.calculate(current, remaining_time, remaining_budget);
            let without = self.calculate(current + 1, remaining_time, remaining_budget);
            if with == without {
                continue;
            }
            let Some(item) = self.items.get(current) else {
                break;
            };
            log::debug!(
                "selected item {current}: interest {}, time {}, cost {}",
                item.interest,
                item.time_cost,
                item.money_cost
            );
            remaining_time -= item.time_cost;
            remaining_budget -= item.money_cost;
            chosen.push(current);
        }
        chosen
    }

    /// Solve from the first item and summarise the chosen subset.
    pub fn solve(&mut self, time: u32, budget: u32) -> Selection {
        let best = self.calculate(0, time, budget);
        let indices = self.get_solution(0, time, budget);
        let mut selection = Selection::default();
        for item in indices.iter().filter_map(|&index| self.items.get(index)) {
            selection.total_interest += u64::from(item.interest);
            selection.total_time += u64::from(item.time_cost);
            selection.total_cost += u64::from(item.money_cost);
        }
        selection.indices = indices;
        debug_assert_eq!(selection.total_interest, best);
        log::info!(
            "selected {} of {} POIs with interest {best} ({} min, cost {})",
            selection.len(),
            self.items.len(),
            selection.total_time,
            selection.total_cost
        );
        selection
    }
}
