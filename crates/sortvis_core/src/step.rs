//! Step model
//!
//! A [`Step`] is one observable snapshot of a sort in progress: the working
//! array plus the indices highlighted at that moment. A [`Frame`] is what the
//! playback side publishes to a renderer, which is a step plus the
//! `finished` flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::SortvisError;

/// Element type of every traced sequence
pub type Value = i64;

/// Up to two highlighted indices (a comparison or a swap)
pub type ActivePair = SmallVec<[usize; 2]>;

/// The traced sorting algorithms
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "bubble-sort")]
    Bubble,
    #[serde(alias = "selection-sort")]
    Selection,
    #[serde(alias = "quick-sort")]
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Selection, Algorithm::Quick];

    /// Short identifier, as accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
        }
    }

    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SortvisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" => Ok(Algorithm::Bubble),
            "selection" | "selection-sort" => Ok(Algorithm::Selection),
            "quick" | "quick-sort" | "quicksort" => Ok(Algorithm::Quick),
            _ => Err(SortvisError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Quick sort partition annotation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMeta {
    /// Lower bound of the partition (inclusive)
    pub low: usize,
    /// Upper bound of the partition (inclusive)
    pub high: usize,
    /// Current position of the pivot value
    pub pivot: usize,
    /// Boundary of elements known to be less than the pivot ("i")
    pub scan: Option<usize>,
    /// Index currently compared against the pivot ("j")
    pub probe: Option<usize>,
}

impl QuickMeta {
    pub fn contains(&self, index: usize) -> bool {
        (self.low..=self.high).contains(&index)
    }
}

/// One snapshot of a traced sort
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub values: Vec<Value>,
    pub active: ActivePair,
    /// Indices in their final position, in the order they were fixed
    pub sorted: Vec<usize>,
    /// Only set for quick sort steps
    pub quick: Option<QuickMeta>,
}

impl Step {
    /// The fully sorted marker that ends every trace
    pub fn terminal(values: Vec<Value>) -> Self {
        let sorted = (0..values.len()).collect();
        Self {
            values,
            active: ActivePair::new(),
            sorted,
            quick: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.active.is_empty()
            && self.quick.is_none()
            && self.sorted.len() == self.values.len()
    }
}

/// The renderer-facing view published by playback
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub values: Vec<Value>,
    pub active: ActivePair,
    pub sorted: Vec<usize>,
    pub quick: Option<QuickMeta>,
    pub finished: bool,
}

impl Frame {
    /// Values only, nothing highlighted (freshly loaded or aborted input)
    pub fn idle(values: Vec<Value>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    /// Every index sorted and playback marked finished
    pub fn terminal(values: Vec<Value>) -> Self {
        let sorted = (0..values.len()).collect();
        Self {
            values,
            active: ActivePair::new(),
            sorted,
            quick: None,
            finished: true,
        }
    }

    pub fn is_sorted_index(&self, index: usize) -> bool {
        self.finished || self.sorted.contains(&index)
    }
}

impl From<&Step> for Frame {
    fn from(step: &Step) -> Self {
        Self {
            values: step.values.clone(),
            active: step.active.clone(),
            sorted: step.sorted.clone(),
            quick: step.quick,
            finished: false,
        }
    }
}
