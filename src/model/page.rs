use serde::{Deserialize, Serialize};

use crate::model::{Direction, Person};

/// One fetched page of the catalogue. `records` preserve source order.
/// An absent cursor means there is no further page in that direction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page {
    pub records: Vec<Person>,
    pub next_cursor: Option<String>,
    pub previous_cursor: Option<String>,
}

impl Page {
    pub fn empty() -> Page {
        Page {
            records: vec![],
            next_cursor: None,
            previous_cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cursor(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.next_cursor.as_deref(),
            Direction::Previous => self.previous_cursor.as_deref(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_cursor.is_some()
    }

    /// Case-insensitive substring narrowing over this page's records. This is
    /// a presentation convenience over already-fetched data, not a fetch
    /// mode; an empty query returns the full page.
    pub fn filter_by_name(&self, query: &str) -> Vec<Person> {
        if query.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|person| person.name_contains(query))
            .cloned()
            .collect()
    }
}
