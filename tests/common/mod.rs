//! An in-memory scoring service shared by the integration tests.
//!
//! Unlike `MockRemote`, which needs every request scripted in order, this
//! fake keeps real server-side state so randomly acting drivers can run
//! against it unattended.

#![allow(dead_code)]

use async_trait::async_trait;
use contender_sim::clients::{ApiRequest, RemoteFailure, RemoteService};
use contender_sim::model::{CompClass, Contender, NewTick, ProblemId, Tick, TickId};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ServerState {
    contenders: BTreeMap<String, Contender>,
    classes: Vec<CompClass>,
    problems: Vec<ProblemId>,
    contest_name: String,
    ticks: BTreeMap<TickId, (String, Tick)>,
    next_tick_id: TickId,
    /// Every n-th write fails with 503 before touching state.
    fail_every_nth_write: Option<usize>,
    writes: usize,
    requests: usize,
}

#[derive(Clone, Default)]
pub struct FakeScoringService {
    state: Arc<Mutex<ServerState>>,
}

impl FakeScoringService {
    pub fn new(problems: &[ProblemId], classes: &[(i64, &str)]) -> Self {
        let service = Self::default();
        {
            let mut state = service.state.lock().unwrap();
            state.problems = problems.to_vec();
            state.classes = classes
                .iter()
                .map(|(id, name)| CompClass::new(*id, *name))
                .collect();
            state.contest_name = "Spring Boulder Jam".to_string();
            state.next_tick_id = 100;
        }
        service
    }

    /// Registers a contender in contest 1 and returns its id.
    pub fn register(&self, code: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.contenders.len() as i64 + 1;
        let mut contender = Contender::new(id, 1);
        contender
            .extra
            .insert("registrationCode".to_string(), json!(code));
        state.contenders.insert(code.to_string(), contender);
        id
    }

    /// Seeds an existing tick for `code`.
    pub fn seed_tick(&self, code: &str, problem_id: ProblemId) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_tick_id;
        state.next_tick_id += 1;
        state
            .ticks
            .insert(id, (code.to_string(), Tick::new(id, problem_id, false)));
    }

    pub fn fail_every_nth_write(&self, n: usize) {
        self.state.lock().unwrap().fail_every_nth_write = Some(n);
    }

    pub fn remote_for(&self, code: &str) -> FakeRemote {
        FakeRemote {
            service: self.clone(),
            code: code.to_string(),
        }
    }

    /// Problem ids ticked by `code` on the server, with their tick ids.
    pub fn ticks_of(&self, code: &str) -> BTreeMap<ProblemId, TickId> {
        let state = self.state.lock().unwrap();
        state
            .ticks
            .values()
            .filter(|(owner, _)| owner == code)
            .map(|(_, tick)| (tick.problem_id, tick.id))
            .collect()
    }

    pub fn contender(&self, code: &str) -> Option<Contender> {
        self.state.lock().unwrap().contenders.get(code).cloned()
    }

    pub fn requests(&self) -> usize {
        self.state.lock().unwrap().requests
    }
}

/// One contender's authenticated view of the fake service.
#[derive(Clone)]
pub struct FakeRemote {
    service: FakeScoringService,
    code: String,
}

fn status(request: &ApiRequest, status: u16, message: &str) -> RemoteFailure {
    RemoteFailure::Status {
        method: request.method.clone(),
        path: request.path.clone(),
        status,
        message: Some(message.to_string()),
    }
}

#[async_trait]
impl RemoteService for FakeRemote {
    async fn call(&self, request: ApiRequest) -> Result<Option<Value>, RemoteFailure> {
        // Yield so concurrently running drivers interleave like real I/O.
        tokio::task::yield_now().await;

        let mut state = self.service.state.lock().unwrap();
        state.requests += 1;

        if request.method != Method::GET {
            state.writes += 1;
            if let Some(n) = state.fail_every_nth_write {
                if state.writes % n == 0 {
                    return Err(status(&request, 503, "Service unavailable"));
                }
            }
        }

        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
        match (request.method.clone(), segments.as_slice()) {
            (Method::GET, ["contender", "findByCode"]) => {
                let code = request
                    .query
                    .iter()
                    .find(|(key, _)| key == "code")
                    .map(|(_, value)| value.as_str());
                if code != Some(self.code.as_str()) {
                    return Err(status(&request, 403, "Wrong registration code"));
                }
                match state.contenders.get(&self.code) {
                    Some(contender) => Ok(Some(json!(contender))),
                    None => Err(status(&request, 404, "Contender not found")),
                }
            }
            (Method::GET, ["compClass"]) => Ok(Some(json!(state.classes))),
            (Method::GET, ["problem"]) => {
                let problems: Vec<Value> = state.problems.iter().map(|id| json!({ "id": id })).collect();
                Ok(Some(Value::Array(problems)))
            }
            (Method::GET, ["tick"]) => {
                let ticks: Vec<&Tick> = state
                    .ticks
                    .values()
                    .filter(|(owner, _)| *owner == self.code)
                    .map(|(_, tick)| tick)
                    .collect();
                Ok(Some(json!(ticks)))
            }
            (Method::GET, ["contest", id]) => Ok(Some(
                json!({ "id": id.parse::<i64>().unwrap_or(0), "name": state.contest_name }),
            )),
            (Method::PUT, ["contender", _id]) => {
                let body = request.body.clone().unwrap_or(Value::Null);
                let contender: Contender = serde_json::from_value(body)
                    .map_err(|e| status(&request, 400, &e.to_string()))?;
                state.contenders.insert(self.code.clone(), contender.clone());
                Ok(Some(json!(contender)))
            }
            (Method::POST, ["tick"]) => {
                let body = request.body.clone().unwrap_or(Value::Null);
                let new_tick: NewTick = serde_json::from_value(body)
                    .map_err(|e| status(&request, 400, &e.to_string()))?;
                let duplicate = state
                    .ticks
                    .values()
                    .any(|(owner, t)| *owner == self.code && t.problem_id == new_tick.problem_id);
                if duplicate {
                    return Err(status(&request, 409, "Problem already ticked"));
                }
                let id = state.next_tick_id;
                state.next_tick_id += 1;
                let tick = Tick::new(id, new_tick.problem_id, new_tick.is_flash);
                state.ticks.insert(id, (self.code.clone(), tick.clone()));
                Ok(Some(json!(tick)))
            }
            (Method::DELETE, ["tick", id]) => {
                let id: TickId = id.parse().map_err(|_| status(&request, 400, "Bad id"))?;
                let owned = matches!(state.ticks.get(&id), Some((owner, _)) if *owner == self.code);
                if !owned {
                    return Err(status(&request, 404, "Tick not found"));
                }
                state.ticks.remove(&id);
                Ok(None)
            }
            _ => Err(status(&request, 404, "No such endpoint")),
        }
    }
}
