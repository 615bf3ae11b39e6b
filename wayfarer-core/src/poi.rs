//! Candidate points of interest for budgeted selection.
//!
//! A [`PoiItem`] carries no location; it only describes how attractive a
//! stop is and what it consumes from the visitor's time and money budgets.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Interest range drawn by [`SyntheticPoiSource`].
pub const INTEREST_RANGE: std::ops::RangeInclusive<u32> = 0..=100;
/// Visit-time range (minutes) drawn by [`SyntheticPoiSource`].
pub const TIME_COST_RANGE: std::ops::RangeInclusive<u32> = 30..=180;
/// Monetary-cost range drawn by [`SyntheticPoiSource`].
pub const MONEY_COST_RANGE: std::ops::RangeInclusive<u32> = 0..=35;

/// A point of interest reduced to its selection attributes.
///
/// # Examples
/// ```
/// use wayfarer_core::PoiItem;
///
/// let museum = PoiItem::new(80, 90, 12);
/// assert_eq!(museum.interest, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiItem {
    /// Score the visitor gains by visiting.
    pub interest: u32,
    /// Minutes spent at the stop.
    pub time_cost: u32,
    /// Admission or spending at the stop.
    pub money_cost: u32,
}

impl PoiItem {
    pub const fn new(interest: u32, time_cost: u32, money_cost: u32) -> Self {
        Self {
            interest,
            time_cost,
            money_cost,
        }
    }
}

/// Supplies the candidate list for one planning session.
///
/// Item indices are positions in the returned vector; implementations must
/// return the same list on every call within a session.
pub trait PoiSource {
    /// Return the candidate items.
    fn poi_items(&self) -> Vec<PoiItem>;
}

impl PoiSource for Vec<PoiItem> {
    fn poi_items(&self) -> Vec<PoiItem> {
        self.clone()
    }
}

impl PoiSource for [PoiItem] {
    fn poi_items(&self) -> Vec<PoiItem> {
        self.to_vec()
    }
}

impl<S: PoiSource + ?Sized> PoiSource for &S {
    fn poi_items(&self) -> Vec<PoiItem> {
        (**self).poi_items()
    }
}

/// Reproducible random candidates.
///
/// Draws `count` items with attributes uniformly distributed over
/// [`INTEREST_RANGE`], [`TIME_COST_RANGE`] and [`MONEY_COST_RANGE`].
///
/// # Examples
/// ```
/// use wayfarer_core::{PoiSource, SyntheticPoiSource};
///
/// let source = SyntheticPoiSource::new(5, 42);
/// let items = source.poi_items();
/// assert_eq!(items.len(), 5);
/// assert_eq!(items, SyntheticPoiSource::new(5, 42).poi_items());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticPoiSource {
    count: usize,
    seed: u64,
}

impl SyntheticPoiSource {
    pub const fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    pub const fn count(&self) -> usize {
        self.count
    }
}

impl PoiSource for SyntheticPoiSource {
    fn poi_items(&self) -> Vec<PoiItem> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let items: Vec<PoiItem> = (0..self.count)
            .map(|_| PoiItem {
                interest: rng.gen_range(INTEREST_RANGE),
                time_cost: rng.gen_range(TIME_COST_RANGE),
                money_cost: rng.gen_range(MONEY_COST_RANGE),
            })
            .collect();
        for (index, item) in items.iter().enumerate() {
            log::debug!(
                "Candidate {index}: interest {}, time {}, cost {}",
                item.interest,
                item.time_cost,
                item.money_cost
            );
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(250)]
    fn synthetic_items_stay_in_range(#[case] seed: u64) {
        let items = SyntheticPoiSource::new(200, seed).poi_items();
        assert_eq!(items.len(), 200);
        assert!(items.iter().all(|item| {
            INTEREST_RANGE.contains(&item.interest)
                && TIME_COST_RANGE.contains(&item.time_cost)
                && MONEY_COST_RANGE.contains(&item.money_cost)
        }));
    }

    #[rstest]
    fn seeds_change_the_draw() {
        let a = SyntheticPoiSource::new(20, 1).poi_items();
        let b = SyntheticPoiSource::new(20, 2).poi_items();
        assert_ne!(a, b);
    }

    #[rstest]
    fn vectors_are_sources() {
        let items = vec![PoiItem::new(1, 2, 3)];
        assert_eq!(items.poi_items(), items);
    }
}
