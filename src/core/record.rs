use serde::{Deserialize, Serialize};

use crate::core::types::{CdnaStatus, GmStatus};

/// Placeholder written wherever a location or linkage group is unknown
pub const NOT_AVAILABLE: &str = "NA";

/// Mapping outcome of a single cDNA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnaRecord {
    /// Query sequence identifier
    pub id: String,

    /// Scaffolds the cDNA mapped to; several for duplicated or fragmented cDNAs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scaffolds: Vec<String>,

    pub status: CdnaStatus,
}

impl CdnaRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, scaffolds: Vec<String>, status: CdnaStatus) -> Self {
        Self {
            id: id.into(),
            scaffolds,
            status,
        }
    }

    /// A cDNA that never appeared in any result bucket
    #[must_use]
    pub fn missing(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new(), CdnaStatus::Missing)
    }

    /// Scaffold names to report, `NA` when the cDNA has no location
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        if self.scaffolds.is_empty() {
            vec![NOT_AVAILABLE]
        } else {
            self.scaffolds.iter().map(String::as_str).collect()
        }
    }
}

/// Genetic-map outcome of a single scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GmRecord {
    pub scaffold: String,

    /// Genetic-map cDNAs aligned to the scaffold
    pub cdna_ids: Vec<String>,

    pub status: GmStatus,

    /// Linkage groups the aligned cDNAs belong to
    #[serde(default)]
    pub linkage_groups: Vec<String>,
}

impl GmRecord {
    #[must_use]
    pub fn new(
        scaffold: impl Into<String>,
        cdna_ids: Vec<String>,
        status: GmStatus,
        linkage_groups: Vec<String>,
    ) -> Self {
        Self {
            scaffold: scaffold.into(),
            cdna_ids,
            status,
            linkage_groups,
        }
    }

    /// Comma-joined linkage groups, `NA` when none are known
    #[must_use]
    pub fn linkage_group_label(&self) -> String {
        if self.linkage_groups.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.linkage_groups.join(",")
        }
    }
}

/// Records that belong to a status bucket
pub trait Classified {
    type Status: Copy + Ord + std::fmt::Debug;

    fn status(&self) -> Self::Status;

    /// Identifier used for membership checks across buckets
    fn key(&self) -> &str;
}

impl Classified for CdnaRecord {
    type Status = CdnaStatus;

    fn status(&self) -> CdnaStatus {
        self.status
    }

    fn key(&self) -> &str {
        &self.id
    }
}

impl Classified for GmRecord {
    type Status = GmStatus;

    fn status(&self) -> GmStatus {
        self.status
    }

    fn key(&self) -> &str {
        &self.scaffold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_has_na_location() {
        let rec = CdnaRecord::missing("tx1");
        assert_eq!(rec.status, CdnaStatus::Missing);
        assert_eq!(rec.locations(), vec!["NA"]);
    }

    #[test]
    fn test_locations_lists_every_scaffold() {
        let rec = CdnaRecord::new(
            "tx2",
            vec!["scaf1".to_string(), "scaf7".to_string()],
            CdnaStatus::Duplicated,
        );
        assert_eq!(rec.locations(), vec!["scaf1", "scaf7"]);
    }

    #[test]
    fn test_linkage_group_label() {
        let mut rec = GmRecord::new("scaf1", vec!["a".to_string()], GmStatus::DiffLg, vec![]);
        assert_eq!(rec.linkage_group_label(), "NA");
        rec.linkage_groups = vec!["LG1".to_string(), "LG4".to_string()];
        assert_eq!(rec.linkage_group_label(), "LG1,LG4");
    }
}
