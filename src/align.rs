//! Positional alignment of the original and edited listings.
//!
//! Line `i` of the edited listing is the new name for line `i` of the
//! original. There is no content diffing: adding or deleting a line breaks
//! the correspondence and is refused.

use tracing::debug;

use crate::errors::{EdmvError, Result};
use crate::listing::PathList;

/// Renames left after pruning. `from.len() == to.len()` and no pair is a self-rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    from: PathList,
    to: PathList,
}

impl RenamePlan {
    pub fn from(&self) -> &PathList {
        &self.from
    }

    pub fn to(&self) -> &PathList {
        &self.to
    }

    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// `(from, to)` pairs in application order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.from.iter().zip(self.to.iter())
    }
}

/// Drop unchanged lines and return the remaining renames.
///
/// Fails with [`EdmvError::Alignment`] when the line counts differ and with
/// [`EdmvError::NoOp`] when every line is unchanged.
pub fn prune(original: PathList, edited: PathList) -> Result<RenamePlan> {
    if original.len() != edited.len() {
        return Err(EdmvError::Alignment {
            original: original.len(),
            edited: edited.len(),
        });
    }

    let total = original.len();
    let mut from = original;
    let mut to = edited;
    // Back to front so removals do not shift indices still to be visited.
    for i in (0..total).rev() {
        if from.get(i) == to.get(i) {
            from.remove(i);
            to.remove(i);
        }
    }

    if from.is_empty() {
        return Err(EdmvError::NoOp);
    }
    debug!(total, renames = from.len(), "pruned unchanged lines");
    Ok(RenamePlan { from, to })
}
