//! Bar coloring
//!
//! Which color a bar takes is decided by an ordered rule list; the first
//! rule that matches an index wins. The list is the precedence order:
//!
//! 1. sorted (or the whole frame is finished)
//! 2. quick sort pivot
//! 3. quick sort scan pointer
//! 4. quick sort probe pointer
//! 5. inside the current partition
//! 6. outside the current partition (dimmed shading only)
//! 7. active comparison pair
//! 8. everything else

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sortvis_core::{Frame, SortvisError};

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// Why a bar has its color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Sorted,
    Pivot,
    Scan,
    Probe,
    InRange,
    OutOfRange,
    Active,
    Default,
}

/// How indices outside the current quick sort partition are shaded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionShading {
    /// Outside the partition uses the dimmed blue
    #[default]
    Dim,
    /// No distinction; outside indices fall through to the generic rules
    Flat,
}

impl fmt::Display for PartitionShading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartitionShading::Dim => "dim",
            PartitionShading::Flat => "flat",
        })
    }
}

impl FromStr for PartitionShading {
    type Err = SortvisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dim" => Ok(PartitionShading::Dim),
            "flat" => Ok(PartitionShading::Flat),
            _ => Err(SortvisError::UnknownShading(s.to_string())),
        }
    }
}

type Rule = fn(usize, &Frame, PartitionShading) -> bool;

fn sorted(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.is_sorted_index(i)
}

fn pivot(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.quick.is_some_and(|q| q.pivot == i)
}

fn scan(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.quick.is_some_and(|q| q.scan == Some(i))
}

fn probe(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.quick.is_some_and(|q| q.probe == Some(i))
}

fn in_range(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.quick.is_some_and(|q| q.contains(i))
}

// only reached for indices outside the partition
fn out_of_range(_: usize, f: &Frame, shading: PartitionShading) -> bool {
    f.quick.is_some() && shading == PartitionShading::Dim
}

fn active(i: usize, f: &Frame, _: PartitionShading) -> bool {
    f.active.contains(&i)
}

/// The precedence order, highest first
const RULES: [(ColorRole, Rule); 7] = [
    (ColorRole::Sorted, sorted),
    (ColorRole::Pivot, pivot),
    (ColorRole::Scan, scan),
    (ColorRole::Probe, probe),
    (ColorRole::InRange, in_range),
    (ColorRole::OutOfRange, out_of_range),
    (ColorRole::Active, active),
];

/// Role of the bar at `index`
pub fn role_of(index: usize, frame: &Frame, shading: PartitionShading) -> ColorRole {
    RULES
        .iter()
        .find(|(_, matches)| matches(index, frame, shading))
        .map_or(ColorRole::Default, |(role, _)| *role)
}
