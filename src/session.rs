//! Per-session state: a generated identifier and the ordered history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed submission: the observation text and the generated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub input: String,
    pub output: String,
}

impl Record {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// A single interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    history: Vec<Record>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &[Record] {
        &self.history
    }
}

/// Holds the session for one interactive user.
///
/// The session is created lazily on first access and kept unchanged after
/// that. History is append-only and unbounded for the lifetime of the store.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Creates the session if it does not exist yet.
    pub fn ensure_initialized(&mut self) -> &Session {
        self.session.get_or_insert_with(|| {
            let session = Session::new();
            tracing::debug!(session_id = %session.id, "session initialized");
            session
        })
    }

    /// Appends a record to the end of the history.
    pub fn append(&mut self, record: Record) {
        self.ensure_initialized();
        if let Some(session) = self.session.as_mut() {
            session.history.push(record);
            tracing::debug!(records = session.history.len(), "record appended");
        }
    }

    /// Returns the history in submission order.
    pub fn history(&self) -> &[Record] {
        self.session.as_ref().map(Session::history).unwrap_or_default()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(Session::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_uninitialized() {
        let store = SessionStore::new();
        assert!(store.session_id().is_none());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let mut store = SessionStore::new();
        let first = store.ensure_initialized().id();
        store.append(Record::new("in", "out"));
        let second = store.ensure_initialized().id();

        assert_eq!(first, second);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_append_initializes_session() {
        let mut store = SessionStore::new();
        store.append(Record::new("in", "out"));
        assert!(store.session_id().is_some());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut store = SessionStore::new();
        store.append(Record::new("a", "1"));
        store.append(Record::new("b", "2"));
        store.append(Record::new("a", "1"));

        let inputs: Vec<_> = store.history().iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, ["a", "b", "a"]);
    }

    #[test]
    fn test_separate_stores_are_isolated() {
        let mut first = SessionStore::new();
        let mut second = SessionStore::new();
        first.append(Record::new("a", "1"));
        second.ensure_initialized();

        assert_ne!(first.session_id(), second.session_id());
        assert!(second.history().is_empty());
    }
}
