use super::*;

use fnv::FnvHashMap;

/// Running best of the reduction. `subset` stays `None` until a feasible subset beats the
/// zero cost, zero weight starting point.
#[derive(Debug)]
struct Best<'a> {
    cost: f64,
    weight: f64,
    subset: Option<&'a Subset>,
}

impl<'a> Best<'a> {
    /// Whether a candidate with this cost and weight should replace the current best.
    /// Higher cost always wins. Equal cost only wins with strictly lower weight, so among
    /// exact ties the earliest candidate is kept.
    fn is_beaten_by(&self, cost: f64, weight: f64) -> bool {
        cost > self.cost || (cost == self.cost && weight < self.weight)
    }
}

/// Selects the subset with the highest total cost whose total weight is at most
/// `weight_limit`, preferring the lighter subset when costs are equal.
///
/// Ids in `subsets` are looked up in `items`. An id with no matching item adds nothing to
/// either total.
pub fn select(subsets: &[Subset], items: &[Item], weight_limit: f64) -> SelectionResult {
    let items_by_id: FnvHashMap<usize, &Item> = items.iter().map(|item| (item.id, item)).collect();

    let totals = |subset: &Subset| {
        subset
            .iter()
            .filter_map(|id| items_by_id.get(id))
            .fold((0.0, 0.0), |(weight, cost), item| {
                (weight + item.weight, cost + item.cost)
            })
    };

    let mut best = Best {
        cost: 0.0,
        weight: 0.0,
        subset: None,
    };
    let mut feasible = 0;

    for subset in subsets {
        let (weight, cost) = totals(subset);
        if weight > weight_limit {
            continue;
        }
        feasible += 1;

        if best.is_beaten_by(cost, weight) {
            best = Best {
                cost,
                weight,
                subset: Some(subset),
            };
        }
    }

    log::trace!(
        "{} of {} subsets are feasible, best cost {} at weight {}",
        feasible,
        subsets.len(),
        best.cost,
        best.weight
    );

    match best.subset {
        Some(subset) => SelectionResult::Selected(subset.clone()),
        None => SelectionResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subset(ids: &[usize]) -> Subset {
        ids.iter().copied().collect()
    }

    fn item(id: usize, weight: f64, cost: f64) -> Item {
        Item { id, weight, cost }
    }

    #[test]
    fn picks_highest_cost() {
        let items = &[item(1, 5.0, 10.0), item(2, 5.0, 20.0), item(3, 9.0, 25.0)];
        let subsets = &[subset(&[1]), subset(&[2]), subset(&[1, 2]), subset(&[3])];

        let result = select(subsets, items, 10.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[1, 2])));
    }

    #[test]
    fn infeasible_subsets_are_ignored() {
        let items = &[item(1, 6.0, 10.0), item(2, 6.0, 20.0)];
        let subsets = &[subset(&[1]), subset(&[2]), subset(&[1, 2])];

        let result = select(subsets, items, 10.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[2])));
    }

    #[test]
    fn equal_cost_prefers_lower_weight() {
        let items = &[item(1, 10.0, 40.0), item(2, 8.0, 40.0)];
        let subsets = &[subset(&[1]), subset(&[2])];

        let result = select(subsets, items, 20.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[2])));
    }

    #[test]
    fn equal_cost_and_weight_keeps_first() {
        let items = &[item(1, 8.0, 40.0), item(2, 8.0, 40.0)];
        let subsets = &[subset(&[1]), subset(&[2])];

        let result = select(subsets, items, 20.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[1])));
    }

    #[test]
    fn higher_cost_wins_over_lower_weight() {
        let items = &[item(1, 1.0, 40.0), item(2, 9.0, 41.0)];
        let subsets = &[subset(&[1]), subset(&[2])];

        let result = select(subsets, items, 10.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[2])));
    }

    #[test]
    fn zero_cost_never_selected() {
        let items = &[item(1, 1.0, 0.0), item(2, 2.0, 0.0)];
        let subsets = &[subset(&[1]), subset(&[2]), subset(&[1, 2])];

        assert_eq!(select(subsets, items, 10.0), SelectionResult::None);
    }

    #[test]
    fn no_subsets() {
        assert_eq!(select(&[], &[], 10.0), SelectionResult::None);
    }

    #[test]
    fn unknown_id_adds_nothing() {
        let items = &[item(1, 4.0, 10.0)];
        let subsets = &[subset(&[1, 99])];

        let result = select(subsets, items, 5.0);

        assert_eq!(result, SelectionResult::Selected(subset(&[1, 99])));
    }
}
