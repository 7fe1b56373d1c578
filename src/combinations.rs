use super::*;

/// Generates every non-empty subset of the items that individually fit under `weight_limit`.
///
/// Items are taken in input order. Each eligible item contributes its singleton followed by
/// itself appended to every subset generated before it, so ids inside a subset always keep
/// the input order of the items.
pub fn combinations(items: &[Item], weight_limit: f64) -> Vec<Subset> {
    let eligible: Vec<&Item> = items
        .iter()
        .filter(|item| item.weight <= weight_limit)
        .collect();

    log::trace!(
        "{} of {} items fit under weight limit {}",
        eligible.len(),
        items.len(),
        weight_limit
    );

    let capacity = 1usize
        .checked_shl(eligible.len() as u32)
        .map_or(usize::MAX, |n| n - 1);
    let mut subsets: Vec<Subset> = Vec::with_capacity(capacity.min(1 << 16));

    for item in eligible {
        let generated = subsets.len();

        let mut singleton = Subset::new();
        singleton.push(item.id);
        subsets.push(singleton);

        for i in 0..generated {
            let mut subset = subsets[i].clone();
            subset.push(item.id);
            subsets.push(subset);
        }
    }

    subsets
}
