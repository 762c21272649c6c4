#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// How nodes left in the frontier after a cheaper route to their cell
/// was found are treated when popped.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Expand every popped node. Improvements are only checked when
    /// pushing successors.
    ExpandStale,
    /// Drop a popped node whose cost exceeds the best known cost for
    /// its cell.
    DiscardStale,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub frontier_policy: FrontierPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            frontier_policy: FrontierPolicy::ExpandStale,
        }
    }
}
