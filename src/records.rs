//! Record Store
//!
//! Ordered list of accepted submissions. Each record gets a stable id at
//! append time so edit/delete never depend on a shifting position.

use crate::models::{InputValues, Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u32,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot; no deduplication
    pub fn append(&mut self, schema: impl Into<String>, values: InputValues) -> RecordId {
        self.next_id += 1;
        let id = RecordId(self.next_id);
        self.records.push(Record {
            id,
            schema: schema.into(),
            values,
        });
        id
    }

    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let position = self.position_of(id)?;
        Some(self.records.remove(position))
    }

    pub fn remove_at(&mut self, position: usize) -> Option<Record> {
        (position < self.records.len()).then(|| self.records.remove(position))
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn id_at(&self, position: usize) -> Option<RecordId> {
        self.records.get(position).map(|r| r.id)
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str) -> InputValues {
        [("firstName", name)].into_iter().collect()
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut store = RecordStore::new();
        let a = store.append("User Information", values("Ana"));
        let b = store.append("User Information", values("Ana"));
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].values, store.all()[1].values);
    }

    #[test]
    fn test_ids_survive_removal() {
        let mut store = RecordStore::new();
        let a = store.append("S", values("a"));
        let b = store.append("S", values("b"));
        let c = store.append("S", values("c"));

        assert_eq!(store.remove(a).unwrap().values, values("a"));
        assert_eq!(store.position_of(c), Some(1));
        assert_eq!(store.get(b).unwrap().values, values("b"));
        assert!(store.remove(a).is_none());

        // ids are never reused
        let d = store.append("S", values("d"));
        assert!(d > c);
    }

    #[test]
    fn test_remove_at_bounds() {
        let mut store = RecordStore::new();
        assert!(store.remove_at(0).is_none());
        let a = store.append("S", values("a"));
        assert_eq!(store.id_at(0), Some(a));
        assert!(store.remove_at(1).is_none());
        assert_eq!(store.remove_at(0).map(|r| r.id), Some(a));
        assert!(store.is_empty());
    }
}
