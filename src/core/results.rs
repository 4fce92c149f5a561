use std::collections::BTreeMap;

use crate::core::record::{CdnaRecord, Classified, GmRecord};

/// Classified records grouped into status buckets.
///
/// Buckets iterate in status declaration order; records within a bucket keep
/// insertion order.
#[derive(Debug, Clone)]
pub struct ResultSet<R: Classified> {
    buckets: BTreeMap<R::Status, Vec<R>>,
}

pub type CdnaResults = ResultSet<CdnaRecord>;
pub type GmResults = ResultSet<GmRecord>;

impl<R: Classified> Default for ResultSet<R> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<R: Classified> ResultSet<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the bucket named by its own status
    pub fn push(&mut self, record: R) {
        self.buckets.entry(record.status()).or_default().push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = R>) {
        for record in records {
            self.push(record);
        }
    }

    /// Number of records in a bucket; absent buckets count as empty
    #[must_use]
    pub fn count(&self, status: R::Status) -> usize {
        self.buckets.get(&status).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn bucket(&self, status: R::Status) -> &[R] {
        self.buckets.get(&status).map_or(&[] as &[R], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (R::Status, &[R])> {
        self.buckets.iter().map(|(s, v)| (*s, v.as_slice()))
    }

    /// Every record across all buckets
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.buckets.values().flatten()
    }

    /// Identifiers of every classified record
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records().map(Classified::key)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl<R: Classified> FromIterator<R> for ResultSet<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
