use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ContenderId, ProblemId, TickId};

/// A server-recorded completion of a problem by a contender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub id: TickId,
    pub problem_id: ProblemId,
    #[serde(default, rename = "isFlash")]
    pub flash: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tick {
    pub fn new(id: TickId, problem_id: ProblemId, flash: bool) -> Self {
        Self {
            id,
            problem_id,
            flash,
            extra: Map::new(),
        }
    }
}

/// Body of `POST /tick`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTick {
    pub contender_id: ContenderId,
    pub problem_id: ProblemId,
    pub is_flash: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_tick_wire_names() {
        let body = NewTick {
            contender_id: 4,
            problem_id: 12,
            is_flash: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "contenderId": 4, "problemId": 12, "isFlash": true })
        );
    }

    #[test]
    fn test_tick_flash_defaults_to_false() {
        let tick: Tick = serde_json::from_value(json!({ "id": 99, "problemId": 2 })).unwrap();
        assert_eq!(tick, Tick::new(99, 2, false));
    }
}
