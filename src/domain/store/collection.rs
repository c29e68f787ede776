//! Ordered record collection with unique ids.

use std::fmt::Display;

use super::StoreError;

/// A record that can live in a [`Collection`].
pub trait Record: Clone {
    type Id: PartialEq + Display;

    /// Collection name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}

/// Records in display order. Ids are unique because every insert path
/// either mints a fresh id or rejects a duplicate.
///
/// Backed by a `Vec`, so lookups by id scan the records in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Builds a collection from persisted records, keeping the first record
    /// for any repeated id.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut collection = Self::default();
        for record in records {
            if collection.contains(record.id()) {
                tracing::warn!(kind = T::KIND, id = %record.id(), "dropping duplicate record on load");
                continue;
            }
            collection.records.push(record);
        }
        collection
    }

    /// Appends a record at the end.
    pub fn add(&mut self, record: T) -> Result<(), StoreError> {
        self.ensure_absent(record.id())?;
        self.records.push(record);
        Ok(())
    }

    /// Inserts a record at the front (most-recent-first collections).
    pub fn prepend(&mut self, record: T) -> Result<(), StoreError> {
        self.ensure_absent(record.id())?;
        self.records.insert(0, record);
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::not_found(T::KIND, record.id())),
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ensure_absent(&self, id: &T::Id) -> Result<(), StoreError> {
        if self.contains(id) {
            return Err(StoreError::duplicate(T::KIND, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: &'static str,
    }

    impl Record for Note {
        type Id = String;
        const KIND: &'static str = "note";

        fn id(&self) -> &String {
            &self.id
        }
    }

    fn note(id: &str, text: &'static str) -> Note {
        Note {
            id: id.to_string(),
            text,
        }
    }

    #[test]
    fn add_appends_and_prepend_inserts_first() {
        let mut notes = Collection::default();
        notes.add(note("a", "first")).unwrap();
        notes.add(note("b", "second")).unwrap();
        notes.prepend(note("c", "newest")).unwrap();

        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut notes = Collection::default();
        notes.add(note("a", "first")).unwrap();
        assert!(matches!(
            notes.add(note("a", "again")),
            Err(StoreError::Duplicate { .. })
        ));
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut notes = Collection::from_records(vec![note("a", "1"), note("b", "2")]);
        notes.update(note("a", "changed")).unwrap();

        assert_eq!(notes.as_slice()[0].text, "changed");
        assert_eq!(notes.as_slice()[1].text, "2");
    }

    #[test]
    fn update_of_missing_record_is_not_found() {
        let mut notes: Collection<Note> = Collection::default();
        let err = notes.update(note("zz", "x")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(notes.is_empty());
    }

    #[test]
    fn from_records_drops_repeated_ids() {
        let notes = Collection::from_records(vec![note("a", "1"), note("a", "2")]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.as_slice()[0].text, "1");
    }
}
