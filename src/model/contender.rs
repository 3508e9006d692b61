use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CompClassId, ContenderId, ContestId};

/// A contender profile as stored by the scoring service.
///
/// The simulator only touches `name` and `comp_class_id`. Everything else
/// travels through `extra` untouched and is sent back on every `PUT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contender {
    pub id: ContenderId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comp_class_id: Option<CompClassId>,
    pub contest_id: ContestId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contender {
    /// Creates a bare profile with no name and no class.
    pub fn new(id: ContenderId, contest_id: ContestId) -> Self {
        Self {
            id,
            name: None,
            comp_class_id: None,
            contest_id,
            extra: Map::new(),
        }
    }

    /// Returns a copy of this profile with the given name and class applied.
    ///
    /// Callers write the copy to the server and only keep it once the write
    /// is acknowledged.
    pub fn with_entry(&self, name: Option<&str>, comp_class_id: CompClassId) -> Self {
        let mut next = self.clone();
        if let Some(name) = name {
            next.name = Some(name.to_string());
        }
        next.comp_class_id = Some(comp_class_id);
        next
    }
}
