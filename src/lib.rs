//! subset-packer picks, for each problem instance, the subset of items with the highest total
//! cost whose total weight stays within the instance's weight limit. Ties in cost go to the
//! lighter subset.
//!
//! Instances are read from text, one per line:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)
//! ```
//!
//! Every subset of the items is enumerated, so this is only meant for small item counts.

#![deny(missing_docs)]

mod combinations;
mod parse;
mod selector;


pub use combinations::combinations;
pub use parse::{parse, parse_line};
pub use selector::select;

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An item that can be placed in a package.
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Item {
    /// Positive ID, unique within one problem instance.
    pub id: usize,

    /// Weight of this item.
    pub weight: f64,

    /// Cost of this item. The packer maximizes the summed cost.
    pub cost: f64,
}

/// Ordered item IDs making up one candidate selection.
pub type Subset = SmallVec<[usize; 16]>;

/// A weight limit together with the items to choose from.
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemInstance {
    /// Maximum total weight of the selected items.
    pub weight_limit: f64,

    /// Items available for selection, in input order.
    pub items: Vec<Item>,
}

impl ProblemInstance {
    /// Create a new problem instance.
    pub fn new(weight_limit: f64, items: Vec<Item>) -> Self {
        Self {
            weight_limit,
            items,
        }
    }

    /// Find the best subset of items for this instance.
    pub fn solve(&self) -> SelectionResult {
        let subsets = combinations(&self.items, self.weight_limit);
        select(&subsets, &self.items, self.weight_limit)
    }
}

/// Outcome of solving one `ProblemInstance`.
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionResult {
    /// IDs of the winning items, in the order the items were given.
    Selected(Subset),

    /// No non-empty subset fits under the weight limit with a positive cost.
    None,
}

impl SelectionResult {
    /// IDs of the selected items, empty if nothing was selected.
    pub fn ids(&self) -> &[usize] {
        match self {
            SelectionResult::Selected(subset) => subset.as_slice(),
            SelectionResult::None => &[],
        }
    }
}

/// Formats as comma separated IDs, e.g. `2,7`, or `-` when nothing was selected.
impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionResult::Selected(subset) => {
                for (i, id) in subset.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", id)?;
                }
                Ok(())
            }
            SelectionResult::None => f.write_str("-"),
        }
    }
}

/// Ceilings that input is checked against before anything is solved.
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limits {
    /// Maximum weight limit of a single package.
    pub max_weight_limit: f64,

    /// Maximum number of items per package. Item IDs may not exceed this either.
    pub max_items: usize,

    /// Maximum weight of a single item.
    pub max_item_weight: f64,

    /// Maximum cost of a single item.
    pub max_item_cost: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_weight_limit: 100.0,
            max_items: 15,
            max_item_weight: 100.0,
            max_item_cost: 100.0,
        }
    }
}

/// Item attribute that broke one of the configured `Limits`.
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemAttribute {
    /// The item's ID.
    Id,
    /// The item's weight.
    Weight,
    /// The item's cost.
    Cost,
}

impl fmt::Display for ItemAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemAttribute::Id => "index",
            ItemAttribute::Weight => "weight",
            ItemAttribute::Cost => "cost",
        })
    }
}

/// Error while reading problem instances.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input contained no problem instances.
    #[error("invalid input: no packages to pack")]
    EmptyInput,

    /// A line or token could not be parsed.
    #[error("could not parse {input:?}: {reason}")]
    Parse {
        /// The offending text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A package weight limit was above `Limits::max_weight_limit`.
    #[error("total package weight limit should be less than or equal {max}")]
    WeightLimitExceeded {
        /// The weight limit that was given.
        weight_limit: f64,
        /// The configured ceiling.
        max: f64,
    },

    /// A package listed more items than `Limits::max_items`.
    #[error("package has {count} items, should be less than or equal {max}")]
    TooManyItems {
        /// Number of items given.
        count: usize,
        /// The configured ceiling.
        max: usize,
    },

    /// An item attribute was above its configured ceiling.
    #[error("item {attribute} should be less than or equal {max}")]
    ItemConstraint {
        /// ID of the offending item.
        id: usize,
        /// Which attribute was too large.
        attribute: ItemAttribute,
        /// The configured ceiling.
        max: f64,
    },

    /// Two items in one package shared an ID.
    #[error("item index {0} is used more than once")]
    DuplicateItemId(usize),
}

type Result<T> = std::result::Result<T, Error>;

/// Packer for choosing the most valuable items that fit in each package.
#[derive(Default)]
pub struct Packer {
    limits: Limits,
}

impl Packer {
    /// Create a new packer using the default `Limits`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the ceilings that input is validated against.
    pub fn set_limits(&mut self, limits: Limits) -> &mut Self {
        self.limits = limits;
        self
    }

    /// The ceilings that input is validated against.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Parse every line of `input` and solve each one, returning one result per line joined
    /// by newlines. Nothing is solved unless the whole input is valid.
    ///
    /// `progress_callback` is called after each package with the fraction completed.
    pub fn pack<F>(&self, input: &str, progress_callback: F) -> Result<String>
    where
        F: Fn(f64),
    {
        let instances = parse(input, &self.limits)?;
        let num_instances = instances.len();

        let mut output = String::new();
        for (i, instance) in instances.iter().enumerate() {
            let result = instance.solve();
            log::debug!(
                "package {}: {} items, weight limit {}, selected {}",
                i,
                instance.items.len(),
                instance.weight_limit,
                result
            );

            if i > 0 {
                output.push('\n');
            }
            output.push_str(&result.to_string());

            progress_callback((i + 1) as f64 / num_instances as f64);
        }

        Ok(output)
    }

    /// Solve already parsed instances, returning results in the same order.
    pub fn pack_instances(&self, instances: &[ProblemInstance]) -> Vec<SelectionResult> {
        instances.iter().map(ProblemInstance::solve).collect()
    }
}
