/// Row profiles
///
/// A profile bundles the occupancy counts to compute with the counts to
/// leave out of the output.
use std::collections::BTreeSet;

/// The two fixed profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// 1..=25 with 5..=21 elided, for the CSV and YAML tables
    Table,
    /// 1..=50 with nothing elided, for the chart
    Chart,
}

/// Counts and elided counts of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSpec {
    pub counts: Vec<u32>,
    /// Assumed to be a single contiguous run
    pub elided: BTreeSet<u32>,
}

impl Profile {
    pub fn spec(self) -> ProfileSpec {
        match self {
            Profile::Table => ProfileSpec { counts: (1..=25).collect(), elided: (5..=21).collect() },
            Profile::Chart => ProfileSpec { counts: (1..=50).collect(), elided: BTreeSet::new() },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Table => "table",
            Profile::Chart => "chart",
        }
    }
}
