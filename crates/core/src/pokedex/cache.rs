//! In-memory lookup cache in front of the species store.
//!
//! Entries are never evicted. The species universe is a few hundred records,
//! so the cache is bounded by the catalog itself.

use std::collections::HashMap;

use super::types::{fold_name, Species};

/// Field a cached species can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey<'a> {
    Id(u32),
    /// Any casing; folded before lookup.
    Name(&'a str),
}

#[derive(Debug, Default)]
pub struct LookupCache {
    by_id: HashMap<u32, Species>,
    by_name: HashMap<String, Species>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: LookupKey<'_>) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: LookupKey<'_>) -> Option<&Species> {
        match key {
            LookupKey::Id(id) => self.by_id.get(&id),
            LookupKey::Name(name) => self.by_name.get(&fold_name(name)),
        }
    }

    /// Index a fully built species under both its id and folded name.
    pub fn put(&mut self, species: Species) {
        self.by_name.insert(fold_name(&species.name), species.clone());
        self.by_id.insert(species.id, species);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::EvSet;

    #[test]
    fn test_put_indexes_both_keys() {
        let mut cache = LookupCache::new();
        assert!(cache.is_empty());

        cache.put(Species::new(25, "Pikachu", EvSet::default()));

        assert!(cache.contains(LookupKey::Id(25)));
        assert!(cache.contains(LookupKey::Name("Pikachu")));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(LookupKey::Id(25)), cache.get(LookupKey::Name("pikachu")));
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        let mut cache = LookupCache::new();
        cache.put(Species::new(122, "Mr. Mime", EvSet::default()));

        assert!(cache.contains(LookupKey::Name("MR. MIME")));
        assert!(cache.contains(LookupKey::Name("mr. mime")));
        assert!(!cache.contains(LookupKey::Name("mr mime")));
    }

    #[test]
    fn test_miss() {
        let cache = LookupCache::new();
        assert!(!cache.contains(LookupKey::Id(1)));
        assert!(cache.get(LookupKey::Name("Bulbasaur")).is_none());
    }
}
