use super::*;

use fnv::FnvHashSet;

/// Parses every non-blank line of `input` into a `ProblemInstance`, stopping at the first
/// invalid line.
pub fn parse(input: &str, limits: &Limits) -> Result<Vec<ProblemInstance>> {
    let mut instances = Vec::new();

    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            log::trace!("skipping blank line {}", i + 1);
            continue;
        }
        instances.push(parse_line(line, limits)?);
    }

    if instances.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(instances)
}

/// Parses one line of the form `81 : (1,53.38,€45) (2,88.62,€98)` into a `ProblemInstance`.
pub fn parse_line(line: &str, limits: &Limits) -> Result<ProblemInstance> {
    let (weight_limit, item_list) = line
        .split_once(':')
        .ok_or_else(|| parse_error(line, "missing ':' between weight limit and items"))?;

    let weight_limit = parse_number(weight_limit.trim(), "weight limit")?;
    if weight_limit > limits.max_weight_limit {
        return Err(Error::WeightLimitExceeded {
            weight_limit,
            max: limits.max_weight_limit,
        });
    }

    let tokens: Vec<&str> = item_list.split_whitespace().collect();
    if tokens.len() > limits.max_items {
        return Err(Error::TooManyItems {
            count: tokens.len(),
            max: limits.max_items,
        });
    }

    let mut items = Vec::with_capacity(tokens.len());
    let mut seen_ids = FnvHashSet::default();
    for token in tokens {
        let item = parse_item(token)?;
        check_item(&item, limits)?;
        if !seen_ids.insert(item.id) {
            return Err(Error::DuplicateItemId(item.id));
        }
        items.push(item);
    }

    Ok(ProblemInstance::new(weight_limit, items))
}

/// Parses `(id,weight,€cost)`.
fn parse_item(token: &str) -> Result<Item> {
    let fields: Vec<&str> = token
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .map(str::trim)
        .collect();

    let [id, weight, cost] = fields.as_slice() else {
        return Err(parse_error(token, "expected (id,weight,cost)"));
    };

    let id: usize = id
        .parse()
        .map_err(|_| parse_error(token, "invalid item id"))?;
    if id == 0 {
        return Err(parse_error(token, "item id must be positive"));
    }

    Ok(Item {
        id,
        weight: parse_number(weight, "item weight")?,
        cost: parse_number(cost.trim_start_matches('€'), "item cost")?,
    })
}

fn check_item(item: &Item, limits: &Limits) -> Result<()> {
    if item.id > limits.max_items {
        return Err(Error::ItemConstraint {
            id: item.id,
            attribute: ItemAttribute::Id,
            max: limits.max_items as f64,
        });
    }
    if item.weight > limits.max_item_weight {
        return Err(Error::ItemConstraint {
            id: item.id,
            attribute: ItemAttribute::Weight,
            max: limits.max_item_weight,
        });
    }
    if item.cost > limits.max_item_cost {
        return Err(Error::ItemConstraint {
            id: item.id,
            attribute: ItemAttribute::Cost,
            max: limits.max_item_cost,
        });
    }
    Ok(())
}

/// Parses a real number that must be finite and non-negative.
fn parse_number(s: &str, what: &str) -> Result<f64> {
    let value: f64 = s
        .parse()
        .map_err(|_| parse_error(s, &format!("invalid {}", what)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(parse_error(
            s,
            &format!("{} must be a finite non-negative number", what),
        ));
    }

    Ok(value)
}

fn parse_error(input: &str, reason: &str) -> Error {
    Error::Parse {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
