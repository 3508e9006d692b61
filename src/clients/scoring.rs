use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::error::RemoteFailure;
use super::remote::{ApiRequest, RemoteService};
use crate::model::{
    CompClass, Contender, ContestId, Contest, NewTick, Problem, ProblemId, Tick, TickId,
};

/// What `POST /tick` answers. Only `id` is guaranteed; the rest falls back to
/// what was sent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedTick {
    id: TickId,
    #[serde(default)]
    problem_id: Option<ProblemId>,
    #[serde(default, rename = "isFlash")]
    flash: Option<bool>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Typed client for the scoring service operations the simulator uses.
///
/// Wraps a [`RemoteService`] the same way for production (HTTP) and tests
/// (mock or in-memory fake): this layer only builds paths, encodes bodies and
/// decodes payloads.
#[derive(Clone)]
pub struct ScoringClient<R> {
    remote: R,
}

impl<R: RemoteService> ScoringClient<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    /// `GET /contender/findByCode?code=<code>`
    #[instrument(skip(self))]
    pub async fn find_contender(&self, code: &str) -> Result<Contender, RemoteFailure> {
        debug!("Sending request");
        let request = ApiRequest::get("/contender/findByCode").with_query("code", code);
        self.fetch(request).await
    }

    /// `GET /compClass`
    #[instrument(skip(self))]
    pub async fn comp_classes(&self) -> Result<Vec<CompClass>, RemoteFailure> {
        debug!("Sending request");
        self.fetch(ApiRequest::get("/compClass")).await
    }

    /// `GET /tick`: the ticks of the authenticated contender.
    #[instrument(skip(self))]
    pub async fn ticks(&self) -> Result<Vec<Tick>, RemoteFailure> {
        debug!("Sending request");
        self.fetch(ApiRequest::get("/tick")).await
    }

    /// `GET /problem`
    #[instrument(skip(self))]
    pub async fn problems(&self) -> Result<Vec<Problem>, RemoteFailure> {
        debug!("Sending request");
        self.fetch(ApiRequest::get("/problem")).await
    }

    /// `GET /contest/<id>`
    #[instrument(skip(self))]
    pub async fn contest(&self, id: ContestId) -> Result<Contest, RemoteFailure> {
        debug!("Sending request");
        self.fetch(ApiRequest::get(format!("/contest/{id}"))).await
    }

    /// `PUT /contender/<id>` with the full profile.
    ///
    /// Returns the profile echoed by the server, or `None` when it answers
    /// with an empty body.
    #[instrument(skip(self, contender), fields(id = contender.id))]
    pub async fn update_contender(
        &self,
        contender: &Contender,
    ) -> Result<Option<Contender>, RemoteFailure> {
        debug!(?contender, "update_contender called");
        let path = format!("/contender/{}", contender.id);
        let body = encode(&Method::PUT, &path, contender)?;
        self.fetch_optional(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    /// `POST /tick`
    ///
    /// The server only has to echo the new tick's `id`; a missing problem id
    /// or flash flag is taken from `tick`.
    #[instrument(skip(self))]
    pub async fn create_tick(&self, tick: &NewTick) -> Result<Tick, RemoteFailure> {
        debug!("Sending request");
        let body = encode(&Method::POST, "/tick", tick)?;
        let created: CreatedTick = self
            .fetch(ApiRequest::new(Method::POST, "/tick").with_body(body))
            .await?;
        Ok(Tick {
            id: created.id,
            problem_id: created.problem_id.unwrap_or(tick.problem_id),
            flash: created.flash.unwrap_or(tick.is_flash),
            extra: created.extra,
        })
    }

    /// `DELETE /tick/<id>`
    #[instrument(skip(self))]
    pub async fn delete_tick(&self, id: TickId) -> Result<(), RemoteFailure> {
        debug!("Sending request");
        self.remote
            .call(ApiRequest::new(Method::DELETE, format!("/tick/{id}")))
            .await
            .map(|_| ())
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, RemoteFailure> {
        let (method, path) = (request.method.clone(), request.path.clone());
        match self.fetch_optional(request).await? {
            Some(value) => Ok(value),
            None => Err(RemoteFailure::Decode {
                method,
                path,
                message: "expected a response body".to_string(),
            }),
        }
    }

    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, RemoteFailure> {
        let (method, path) = (request.method.clone(), request.path.clone());
        let Some(value) = self.remote.call(request).await? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| RemoteFailure::Decode {
                method,
                path,
                message: e.to_string(),
            })
    }
}

fn encode<T: Serialize>(
    method: &Method,
    path: &str,
    body: &T,
) -> Result<Value, RemoteFailure> {
    serde_json::to_value(body).map_err(|e| RemoteFailure::Decode {
        method: method.clone(),
        path: path.to_string(),
        message: e.to_string(),
    })
}
