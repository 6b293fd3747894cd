//! Conversion of arbitrary values into categorical levels
//!
//! A discretized column is a level sequence plus one 1-based index per input
//! element. `None` indices mark elements that are missing in the input or
//! absent from an explicit level set.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::plot::types::Value;
use crate::{GgscaleError, Result};

/// Levels and per-element indices for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discretized {
    levels: Vec<Value>,
    indices: Vec<Option<usize>>,
}

impl Discretized {
    /// The ordered level sequence
    pub fn levels(&self) -> &[Value] {
        &self.levels
    }

    /// 1-based level index per element
    pub fn indices(&self) -> &[Option<usize>] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Level for a 1-based index, if in range
    pub fn level(&self, index: usize) -> Option<&Value> {
        index.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// Recover the original value of every element
    pub fn values(&self) -> Vec<Option<Value>> {
        self.indices
            .iter()
            .map(|idx| idx.and_then(|i| self.level(i).cloned()))
            .collect()
    }

    /// Re-level an already discretized column.
    ///
    /// Elements that shared a level before still share one afterwards.
    pub fn rediscretize(&self, levels: Option<&[Value]>, order: Option<&[usize]>) -> Result<Self> {
        let discretizer = Discretizer {
            levels: Some(levels.map(<[Value]>::to_vec).unwrap_or_else(|| self.levels.clone())),
            order: order.map(<[usize]>::to_vec),
            preserve_order: false,
        };
        discretizer.apply(&self.values())
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<Option<usize>>) {
        (self.levels, self.indices)
    }
}

/// Discretization settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discretizer {
    /// Fixed level universe. Values outside it become missing.
    pub levels: Option<Vec<Value>>,
    /// 1-based permutation applied to the level sequence
    pub order: Option<Vec<usize>>,
    /// Keep first-seen order instead of sorting derived levels
    pub preserve_order: bool,
}

impl Discretizer {
    /// Discretize a column
    pub fn apply(&self, values: &[Option<Value>]) -> Result<Discretized> {
        let levels = match &self.levels {
            Some(levels) => levels.clone(),
            None if self.preserve_order => first_seen_levels(values),
            None => sorted_levels(values),
        };
        let levels = match &self.order {
            Some(order) => permute(levels, order)?,
            None => levels,
        };

        let positions: BTreeMap<&Value, usize> = levels
            .iter()
            .enumerate()
            .rev()
            .map(|(i, level)| (level, i + 1))
            .collect();

        let indices = values
            .iter()
            .map(|v| v.as_ref().and_then(|v| positions.get(v).copied()))
            .collect();

        Ok(Discretized { levels, indices })
    }
}

/// Discretize `values`, optionally against explicit `levels`, then reorder
/// by the 1-based permutation `order`.
///
/// Derived levels are the distinct non-missing values in sorted order.
/// Fails if `order` is not a permutation of `1..=levels.len()`.
pub fn discretize(
    values: &[Option<Value>],
    levels: Option<&[Value]>,
    order: Option<&[usize]>,
) -> Result<Discretized> {
    Discretizer {
        levels: levels.map(<[Value]>::to_vec),
        order: order.map(<[usize]>::to_vec),
        preserve_order: false,
    }
    .apply(values)
}

fn sorted_levels(values: &[Option<Value>]) -> Vec<Value> {
    values
        .iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

fn first_seen_levels(values: &[Option<Value>]) -> Vec<Value> {
    let mut seen = BTreeSet::new();
    values
        .iter()
        .flatten()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Level `k` of the result is `levels[order[k] - 1]`
pub(crate) fn permute(levels: Vec<Value>, order: &[usize]) -> Result<Vec<Value>> {
    if order.len() != levels.len() {
        return Err(GgscaleError::OrderLengthMismatch {
            expected: levels.len(),
            actual: order.len(),
        });
    }

    let mut used = vec![false; levels.len()];
    for &p in order {
        if p == 0 || p > levels.len() || used[p - 1] {
            return Err(GgscaleError::InvalidOrder(format!(
                "{:?} is not a permutation of 1..={}",
                order,
                levels.len()
            )));
        }
        used[p - 1] = true;
    }

    Ok(order.iter().map(|&p| levels[p - 1].clone()).collect())
}
