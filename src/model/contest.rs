use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CompClassId, ContestId, ProblemId};

/// The contest a contender belongs to. Fetched once while joining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: ContestId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A competition class a contender can be entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompClass {
    pub id: CompClassId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompClass {
    pub fn new(id: CompClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A problem of the contest. Only the identifier matters to the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: ProblemId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
