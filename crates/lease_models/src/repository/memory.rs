//! In-memory repository backed by an ordered map.

use std::collections::BTreeMap;
use tracing::debug;

use super::{Record, RecordId, Repository, RepositoryError};

/// Repository holding records in memory, ordered by id.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Record> {
    records: BTreeMap<RecordId, T>,
    next_id: u64,
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    /// Creates an empty repository whose first id will be 1.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: RecordId) -> Result<T, RepositoryError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound {
                collection: T::COLLECTION,
                id,
            })
    }

    fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    fn add(&mut self, mut record: T) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        record.set_id(id);
        self.records.insert(id, record);
        debug!(collection = T::COLLECTION, %id, "added record");
        id
    }

    fn restore(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        if !id.is_assigned() {
            return Err(RepositoryError::Unassigned {
                collection: T::COLLECTION,
            });
        }
        if id > RecordId::MAX {
            return Err(RepositoryError::IdOutOfRange {
                collection: T::COLLECTION,
                id,
            });
        }
        if self.records.contains_key(&id) {
            return Err(RepositoryError::Duplicate {
                collection: T::COLLECTION,
                id,
            });
        }
        self.next_id = self.next_id.max(id.get() + 1);
        self.records.insert(id, record);
        debug!(collection = T::COLLECTION, %id, "restored record");
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                debug!(collection = T::COLLECTION, %id, "updated record");
                Ok(())
            }
            None if !id.is_assigned() => Err(RepositoryError::Unassigned {
                collection: T::COLLECTION,
            }),
            None => Err(RepositoryError::NotFound {
                collection: T::COLLECTION,
                id,
            }),
        }
    }

    fn remove(&mut self, id: RecordId) -> Result<T, RepositoryError> {
        let record = self.records.remove(&id).ok_or(RepositoryError::NotFound {
            collection: T::COLLECTION,
            id,
        })?;
        debug!(collection = T::COLLECTION, %id, "removed record");
        Ok(record)
    }

    fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Note {
        fn new(text: &str) -> Self {
            Self {
                id: RecordId::UNASSIGNED,
                text: text.to_string(),
            }
        }
    }

    impl Record for Note {
        const COLLECTION: &'static str = "note";

        fn id(&self) -> RecordId {
            self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut repo = InMemoryRepository::new();
        let a = repo.add(Note::new("a"));
        let b = repo.add(Note::new("b"));

        assert_eq!(a, RecordId::new(1));
        assert_eq!(b, RecordId::new(2));
        assert_eq!(repo.get(b).unwrap().text, "b");
        assert_eq!(repo.get(b).unwrap().id, b);
    }

    #[test]
    fn test_list_in_id_order() {
        let mut repo = InMemoryRepository::new();
        for text in ["x", "y", "z"] {
            repo.add(Note::new(text));
        }
        let texts: Vec<String> = repo.list().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["x", "y", "z"]);
        assert_eq!(repo.len(), 3);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_get_missing() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        assert_eq!(
            repo.get(RecordId::new(9)),
            Err(RepositoryError::NotFound {
                collection: "note",
                id: RecordId::new(9)
            })
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn test_update() {
        let mut repo = InMemoryRepository::new();
        let id = repo.add(Note::new("draft"));

        let mut note = repo.get(id).unwrap();
        note.text = "final".to_string();
        repo.update(note).unwrap();
        assert_eq!(repo.get(id).unwrap().text, "final");

        let mut stray = Note::new("stray");
        stray.id = RecordId::new(99);
        assert!(matches!(
            repo.update(stray),
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update(Note::new("new")),
            Err(RepositoryError::Unassigned { .. })
        ));
    }

    #[test]
    fn test_remove_does_not_reuse_ids() {
        let mut repo = InMemoryRepository::new();
        let a = repo.add(Note::new("a"));
        let removed = repo.remove(a).unwrap();
        assert_eq!(removed.text, "a");
        assert!(!repo.contains(a));
        assert!(repo.remove(a).is_err());

        let b = repo.add(Note::new("b"));
        assert_eq!(b, RecordId::new(2));
    }

    #[test]
    fn test_restore_keeps_id_and_advances_counter() {
        let mut repo = InMemoryRepository::new();
        let mut saved = Note::new("saved");
        saved.id = RecordId::new(10);
        repo.restore(saved.clone()).unwrap();

        assert_eq!(repo.get(RecordId::new(10)).unwrap(), saved);
        assert_eq!(repo.add(Note::new("next")), RecordId::new(11));
        assert_eq!(
            repo.restore(saved),
            Err(RepositoryError::Duplicate {
                collection: "note",
                id: RecordId::new(10)
            })
        );
        assert!(matches!(
            repo.restore(Note::new("no id")),
            Err(RepositoryError::Unassigned { .. })
        ));
    }

    #[test]
    fn test_restore_rejects_out_of_range_id() {
        let mut repo = InMemoryRepository::new();
        let mut saved = Note::new("far");
        saved.id = RecordId::new(u64::MAX);
        assert_eq!(
            repo.restore(saved),
            Err(RepositoryError::IdOutOfRange {
                collection: "note",
                id: RecordId::new(u64::MAX)
            })
        );

        let mut last = Note::new("last");
        last.id = RecordId::MAX;
        repo.restore(last).unwrap();
        assert!(repo.contains(RecordId::MAX));
        assert_eq!(repo.add(Note::new("next")).get(), RecordId::MAX.get() + 1);
    }

    #[test]
    fn test_find() {
        let mut repo = InMemoryRepository::new();
        repo.add(Note::new("apple"));
        repo.add(Note::new("banana"));
        repo.add(Note::new("avocado"));

        let found = repo.find(&|n: &Note| n.text.starts_with('a'));
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].text, "avocado");
    }
}
