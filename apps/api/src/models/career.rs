use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the static career dataset.
///
/// Fields other than `role`, `description` and `skills_core` are kept in `extra`
/// and serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub role: String,
    pub description: String,
    pub skills_core: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CareerRecord {
    /// The text indexed for retrieval: description followed by the space-joined skills.
    pub fn document_text(&self) -> String {
        format!("{} {}", self.description, self.skills_core.join(" "))
    }
}
