use serde::{Deserialize, Serialize};

/// One catalogue subject, projected for display. Source field values are
/// carried verbatim (`height`/`mass` are numeric-as-text and may be
/// "unknown"); only the film URLs are replaced by resolved titles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
    pub hair_color: String,
    pub films: Vec<String>,
}

impl Person {
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
