//! Derived statistics over a list of issues
//!
//! Every function here is pure: it reads the slice it is given and returns a
//! freshly computed result.

mod labels;
mod monthly;
mod resolution;
mod top;

pub use labels::aggregate_by_label;
pub use monthly::{aggregate_by_month, available_months, filter_issues_by_month};
pub use resolution::{aggregate_resolution_by_label, calculate_resolution_hours, parse_timestamp};
pub use top::{format_time_spent, top_time_consuming_issues, DEFAULT_TOP_LIMIT};

use std::collections::HashMap;

pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Accumulators keyed by string, kept in first-seen order
pub(crate) struct OrderedGroups<'a, A> {
    positions: HashMap<&'a str, usize>,
    groups: Vec<(&'a str, A)>,
}

impl<'a, A: Default> OrderedGroups<'a, A> {
    pub(crate) fn new() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Accumulator for `key`, created on first use
    pub(crate) fn entry(&mut self, key: &'a str) -> &mut A {
        let next = self.groups.len();
        let slot = *self.positions.entry(key).or_insert(next);
        if slot == next {
            self.groups.push((key, A::default()));
        }
        &mut self.groups[slot].1
    }

    pub(crate) fn into_vec(self) -> Vec<(&'a str, A)> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.04), 1.0);
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(2.96), 3.0);
    }

    #[test]
    fn test_ordered_groups_keep_discovery_order() {
        let mut groups: OrderedGroups<'_, usize> = OrderedGroups::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            *groups.entry(key) += 1;
        }
        assert_eq!(groups.into_vec(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }
}
