use crate::error::{DairyError, DairyResult};
use crate::models::{Entity, Stored};

/// Ordered records addressed by a stable id or by position.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<Stored<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl<T: Entity> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stored<T>> {
        self.items.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|s| &s.record)
    }

    pub fn as_slice(&self) -> &[Stored<T>] {
        &self.items
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> DairyResult<&Stored<T>> {
        self.items
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DairyError::not_found(T::NAME, id))
    }

    pub fn at(&self, index: usize) -> DairyResult<&Stored<T>> {
        self.items
            .get(index)
            .ok_or_else(|| DairyError::not_found(T::NAME, format!("index {}", index)))
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&Stored<T>> {
        self.items.iter().find(|s| predicate(&s.record))
    }

    pub fn prepend(&mut self, record: T) -> &Stored<T> {
        self.items.insert(
            0,
            Stored {
                id: new_id(),
                record,
            },
        );
        &self.items[0]
    }

    pub fn append(&mut self, record: T) -> &Stored<T> {
        self.items.push(Stored {
            id: new_id(),
            record,
        });
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Replaces the record at `index`, keeping its id.
    pub fn replace_at(&mut self, index: usize, record: T) -> DairyResult<&Stored<T>> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| DairyError::not_found(T::NAME, format!("index {}", index)))?;
        slot.record = record;
        Ok(slot)
    }

    pub fn replace(&mut self, id: &str, record: T) -> DairyResult<&Stored<T>> {
        let index = self
            .position(id)
            .ok_or_else(|| DairyError::not_found(T::NAME, id))?;
        self.replace_at(index, record)
    }

    pub fn remove_at(&mut self, index: usize) -> DairyResult<Stored<T>> {
        if index >= self.items.len() {
            return Err(DairyError::not_found(T::NAME, format!("index {}", index)));
        }
        Ok(self.items.remove(index))
    }

    pub fn remove(&mut self, id: &str) -> DairyResult<Stored<T>> {
        let index = self
            .position(id)
            .ok_or_else(|| DairyError::not_found(T::NAME, id))?;
        self.remove_at(index)
    }

    /// Overwrites the record whose key matches in place, or appends.
    /// Returns the id and whether an existing record was replaced.
    pub fn upsert_by<K, F>(&mut self, record: T, key: F) -> (String, bool)
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let wanted = key(&record);
        match self.items.iter_mut().find(|s| key(&s.record) == wanted) {
            Some(slot) => {
                slot.record = record;
                (slot.id.clone(), true)
            }
            None => (self.append(record).id.clone(), false),
        }
    }

    /// Builds a collection from `records`, keeping one record per key
    /// (the last one given, at the position of the first).
    pub fn from_unique<K, F>(records: impl IntoIterator<Item = T>, key: F) -> Self
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut collection = Self::default();
        for record in records {
            collection.upsert_by(record, &key);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(&'static str, u32);

    impl Entity for Note {
        const NAME: &'static str = "Note";
    }

    fn notes(values: &[(&'static str, u32)]) -> Collection<Note> {
        let mut c = Collection::default();
        for (k, v) in values {
            c.append(Note(k, *v));
        }
        c
    }

    #[test]
    fn test_prepend_puts_record_first() {
        let mut c = notes(&[("a", 1), ("b", 2)]);
        let id = c.prepend(Note("z", 0)).id.clone();
        assert_eq!(c.len(), 3);
        assert_eq!(c.at(0).unwrap().id, id);
        assert_eq!(c.at(1).unwrap().record, Note("a", 1));
    }

    #[test]
    fn test_replace_keeps_id_and_neighbours() {
        let mut c = notes(&[("a", 1), ("b", 2), ("c", 3)]);
        let id = c.at(1).unwrap().id.clone();
        c.replace_at(1, Note("b", 20)).unwrap();
        assert_eq!(c.at(1).unwrap().id, id);
        let values: Vec<_> = c.records().cloned().collect();
        assert_eq!(values, vec![Note("a", 1), Note("b", 20), Note("c", 3)]);
    }

    #[test]
    fn test_out_of_range_is_not_found() {
        let mut c = notes(&[("a", 1)]);
        assert!(matches!(
            c.replace_at(5, Note("x", 0)),
            Err(DairyError::NotFound { .. })
        ));
        assert!(matches!(c.remove_at(1), Err(DairyError::NotFound { .. })));
        assert!(matches!(c.remove("missing"), Err(DairyError::NotFound { .. })));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_upsert_by_overwrites_in_place() {
        let mut c = notes(&[("a", 1), ("b", 2)]);
        let first_id = c.at(0).unwrap().id.clone();
        let (id, replaced) = c.upsert_by(Note("a", 9), |n| n.0);
        assert!(replaced);
        assert_eq!(id, first_id);
        assert_eq!(c.len(), 2);
        assert_eq!(c.at(0).unwrap().record, Note("a", 9));

        let (_, replaced) = c.upsert_by(Note("c", 3), |n| n.0);
        assert!(!replaced);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_from_unique_last_wins() {
        let c = Collection::from_unique(vec![Note("a", 1), Note("b", 2), Note("a", 3)], |n| n.0);
        let values: Vec<_> = c.records().cloned().collect();
        assert_eq!(values, vec![Note("a", 3), Note("b", 2)]);
    }
}
