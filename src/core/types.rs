use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification assigned to a cDNA after mapping it against the assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CdnaStatus {
    /// Complete, single copy
    Complete,
    /// Complete, multiple copies
    Duplicated,
    Partial,
    Fragmented,
    PoorlyMapped,
    Missing,
}

impl CdnaStatus {
    /// All statuses in report column order of their buckets
    pub const ALL: [CdnaStatus; 6] = [
        CdnaStatus::Complete,
        CdnaStatus::Duplicated,
        CdnaStatus::Partial,
        CdnaStatus::Fragmented,
        CdnaStatus::PoorlyMapped,
        CdnaStatus::Missing,
    ];

    /// Label used in result tables
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Duplicated => "Duplicated",
            Self::Partial => "Partial",
            Self::Fragmented => "Fragmented",
            Self::PoorlyMapped => "Poorly mapped",
            Self::Missing => "Missing",
        }
    }
}

impl std::fmt::Display for CdnaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CdnaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Complete" => Ok(Self::Complete),
            "Duplicated" => Ok(Self::Duplicated),
            "Partial" => Ok(Self::Partial),
            "Fragmented" => Ok(Self::Fragmented),
            "Poorly mapped" | "Poorly_mapped" => Ok(Self::PoorlyMapped),
            "Missing" => Ok(Self::Missing),
            other => Err(format!("unknown cDNA status '{other}'")),
        }
    }
}

/// Outcome of checking a scaffold against the genetic map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GmStatus {
    /// Same linkage group, expected order
    GoodLg,
    /// Same linkage group, unexpected order
    WoLg,
    /// Different linkage groups
    DiffLg,
    /// Same linkage group, order could not be determined
    Undet,
}

impl GmStatus {
    pub const ALL: [GmStatus; 4] = [
        GmStatus::GoodLg,
        GmStatus::WoLg,
        GmStatus::DiffLg,
        GmStatus::Undet,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GoodLg => "goodLG",
            Self::WoLg => "WO_LG",
            Self::DiffLg => "diffLG",
            Self::Undet => "undet",
        }
    }
}

impl std::fmt::Display for GmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GmStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "goodLG" => Ok(Self::GoodLg),
            "WO_LG" => Ok(Self::WoLg),
            "diffLG" => Ok(Self::DiffLg),
            "undet" => Ok(Self::Undet),
            other => Err(format!("unknown genetic map status '{other}'")),
        }
    }
}
