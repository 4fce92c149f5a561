use std::collections::HashMap;

/// Linkage-group membership of scaffolds, from the genetic map
#[derive(Debug, Clone, Default)]
pub struct LinkageMap {
    groups: HashMap<String, Vec<String>>,
}

impl LinkageMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `scaffold` belongs to `group`; duplicate pairs are ignored
    pub fn insert(&mut self, scaffold: impl Into<String>, group: impl Into<String>) {
        let group = group.into();
        let groups = self.groups.entry(scaffold.into()).or_default();
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    #[must_use]
    pub fn get(&self, scaffold: &str) -> Option<&[String]> {
        self.groups.get(scaffold).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_groups() {
        let mut map = LinkageMap::new();
        map.insert("scaf1", "LG1");
        map.insert("scaf1", "LG1");
        map.insert("scaf1", "LG3");
        assert_eq!(map.get("scaf1"), Some(&["LG1".to_string(), "LG3".to_string()][..]));
        assert_eq!(map.get("scaf2"), None);
        assert_eq!(map.len(), 1);
    }
}
