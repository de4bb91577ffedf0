//! Entry data model — quotes, poems, and the store that holds them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// One quote or poem record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique id within its collection (`q...` for quotes, `p...` for poems).
    pub id: String,
    /// The quote or poem text. Poems keep their line breaks.
    pub text: String,
    /// Attribution.
    pub author: String,
    /// Optional background/context shown behind a toggle on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    /// Optional image URLs shown with the entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Which collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Quote,
    Poem,
}

impl EntryKind {
    /// Id prefix for entries of this kind.
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Quote => "q",
            Self::Poem => "p",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quote => write!(f, "quote"),
            Self::Poem => write!(f, "poem"),
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quote" => Ok(Self::Quote),
            "poem" => Ok(Self::Poem),
            _ => Err(format!("Unknown entry kind: {}", s)),
        }
    }
}

/// Input for appending an entry; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub kind: EntryKind,
    pub text: String,
    pub author: String,
    pub history: Option<String>,
    pub images: Vec<String>,
}

impl NewEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            author: author.into(),
            history: None,
            images: Vec::new(),
        }
    }
}

/// The full set of entries. Collections are ordered; ids are unique per
/// collection. Collections may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub quotes: Vec<Entry>,
    #[serde(default)]
    pub poems: Vec<Entry>,
}

impl Store {
    /// Entries of the given kind.
    pub fn collection(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Quote => &self.quotes,
            EntryKind::Poem => &self.poems,
        }
    }

    fn collection_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Quote => &mut self.quotes,
            EntryKind::Poem => &mut self.poems,
        }
    }

    /// Append a new entry, assigning a fresh id. Existing entries are never
    /// touched. Returns the assigned id.
    pub fn append(&mut self, new: NewEntry) -> Result<String, StoreError> {
        if new.text.trim().is_empty() {
            return Err(StoreError::InvalidEntry {
                reason: "text must not be empty".to_string(),
            });
        }
        if new.author.trim().is_empty() {
            return Err(StoreError::InvalidEntry {
                reason: "author must not be empty".to_string(),
            });
        }

        let id = Self::generate_id(new.kind);
        let collection = self.collection_mut(new.kind);
        // UUID collisions are not a practical concern, but the invariant is
        // cheap to uphold.
        if collection.iter().any(|e| e.id == id) {
            return Err(StoreError::DuplicateId {
                collection: new.kind.to_string(),
                id,
            });
        }

        collection.push(Entry {
            id: id.clone(),
            text: new.text.trim().to_string(),
            author: new.author.trim().to_string(),
            history: new.history.filter(|h| !h.trim().is_empty()),
            images: new.images,
        });
        Ok(id)
    }

    /// Check the per-collection id uniqueness invariant.
    pub fn validate(&self) -> Result<(), StoreError> {
        for kind in [EntryKind::Quote, EntryKind::Poem] {
            let mut seen = std::collections::HashSet::new();
            for entry in self.collection(kind) {
                if !seen.insert(entry.id.as_str()) {
                    return Err(StoreError::DuplicateId {
                        collection: kind.to_string(),
                        id: entry.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Kind prefix plus 8 hex chars of a fresh UUID, e.g. `q3f1a9c02`.
    fn generate_id(kind: EntryKind) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}{}", kind.id_prefix(), &hex[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            text: "some text".to_string(),
            author: "Someone".to_string(),
            history: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn append_assigns_prefixed_id() {
        let mut store = Store::default();
        let id = store
            .append(NewEntry::new(EntryKind::Quote, "Carpe diem", "Horace"))
            .unwrap();
        assert!(id.starts_with('q'));
        assert_eq!(id.len(), 9);
        assert_eq!(store.quotes.len(), 1);
        assert_eq!(store.quotes[0].id, id);
    }

    #[test]
    fn append_preserves_existing_entries() {
        let mut store = Store {
            quotes: vec![entry("q1"), entry("q2")],
            poems: vec![entry("p1")],
        };
        store
            .append(NewEntry::new(EntryKind::Quote, "new quote", "Author"))
            .unwrap();
        assert_eq!(store.quotes.len(), 3);
        assert_eq!(store.quotes[0].id, "q1");
        assert_eq!(store.quotes[1].id, "q2");
        assert_eq!(store.poems.len(), 1);
    }

    #[test]
    fn append_rejects_blank_text() {
        let mut store = Store::default();
        let err = store
            .append(NewEntry::new(EntryKind::Quote, "   ", "Author"))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidEntry { .. }));
        assert!(store.quotes.is_empty());
    }

    #[test]
    fn append_rejects_blank_author() {
        let mut store = Store::default();
        let err = store
            .append(NewEntry::new(EntryKind::Poem, "a poem", ""))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidEntry { .. }));
    }

    #[test]
    fn append_drops_blank_history() {
        let mut store = Store::default();
        let mut new = NewEntry::new(EntryKind::Quote, "text", "Author");
        new.history = Some("  ".to_string());
        store.append(new).unwrap();
        assert_eq!(store.quotes[0].history, None);
    }

    #[test]
    fn poems_get_p_prefix() {
        let mut store = Store::default();
        let id = store
            .append(NewEntry::new(EntryKind::Poem, "line one\nline two", "Poet"))
            .unwrap();
        assert!(id.starts_with('p'));
        assert_eq!(store.poems[0].text, "line one\nline two");
    }

    #[test]
    fn validate_catches_duplicate_ids() {
        let store = Store {
            quotes: vec![entry("q1"), entry("q1")],
            poems: Vec::new(),
        };
        let err = store.validate().unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
    }

    #[test]
    fn validate_allows_same_id_across_collections() {
        let store = Store {
            quotes: vec![entry("x1")],
            poems: vec![entry("x1")],
        };
        assert!(store.validate().is_ok());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let store = Store {
            quotes: vec![entry("q1")],
            poems: Vec::new(),
        };
        let json = serde_json::to_string(&store).unwrap();
        assert!(!json.contains("history"));
        assert!(!json.contains("images"));
    }

    #[test]
    fn parses_store_with_optional_fields_present() {
        let json = r#"{
            "quotes": [
                {"id": "q1", "text": "t", "author": "a",
                 "history": "context", "images": ["https://x/img.jpg"]}
            ],
            "poems": []
        }"#;
        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.quotes[0].history.as_deref(), Some("context"));
        assert_eq!(store.quotes[0].images, vec!["https://x/img.jpg"]);
    }
}
