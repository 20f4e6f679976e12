//! Reqwest-backed student store.
//!
//! Speaks the platform's REST dialect:
//! - `GET    /rest/v1/{table}?order={column}.{asc|desc}` -> `{ "data": [row, ...] }`
//! - `POST   /rest/v1/{table}` row                       -> `201 { "data": [row] }`
//! - `PATCH  /rest/v1/{table}/{id}` row                  -> `200 { "data": row }`
//!
//! Every request carries the `apikey` header; signed-in requests also carry
//! `Authorization: Bearer <access_token>`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::{StoreError, StoreResult};
use super::StudentStore;
use crate::auth::{SessionCell, UserRef};
use crate::config::BackendConfig;
use crate::observability::Event;
use crate::roster::SortSpec;
use crate::student::{StudentId, StudentProfile, StudentRecord};

#[derive(Debug, Deserialize)]
struct RowsResponse {
    data: Vec<StudentRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct RowWrite<'a> {
    #[serde(flatten)]
    profile: &'a StudentProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

/// Student store backed by the hosted platform's REST API
pub struct RestStudentStore {
    client: Client,
    config: BackendConfig,
    session: SessionCell,
}

impl RestStudentStore {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &BackendConfig, session: SessionCell) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.http_client()?,
            config: config.clone(),
            session,
        })
    }

    fn table_url(&self) -> String {
        self.config.endpoint(&format!("rest/v1/{}", self.config.table))
    }

    /// The row's URL, with `id` percent-encoded as a single path segment.
    ///
    /// `""`, `.` and `..` never name a row and would address the table itself.
    fn row_url(&self, id: &StudentId) -> StoreResult<Url> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(StoreError::NotFound(id.clone()));
        }
        let mut url = Url::parse(&self.table_url())
            .map_err(|e| StoreError::Transport(format!("invalid backend url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport("backend url cannot carry a path".to_string()))?
            .push(id.as_str());
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("apikey", self.config.api_key.as_str());
        match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, target: Option<&StudentId>) -> StoreResult<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| transport_failure(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        let err = error_for_status(status, detail, target);
        warn!(event = %Event::StoreFailed, status = status.as_u16(), error = %err, "store request failed");
        Err(err)
    }
}

fn transport_failure(detail: String) -> StoreError {
    warn!(event = %Event::StoreFailed, error = %detail, "store unreachable");
    StoreError::Transport(detail)
}

/// Maps a non-success backend status onto a store error
pub(crate) fn error_for_status(
    status: StatusCode,
    detail: String,
    target: Option<&StudentId>,
) -> StoreError {
    match (status, target) {
        (StatusCode::NOT_FOUND, Some(id)) => StoreError::NotFound(id.clone()),
        (StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            StoreError::Validation(detail)
        }
        _ => StoreError::Transport(format!("{status}: {detail}")),
    }
}

#[async_trait]
impl StudentStore for RestStudentStore {
    async fn list(&self, sort: &SortSpec) -> StoreResult<Vec<StudentRecord>> {
        let order = format!("{}.{}", sort.field.column(), sort.direction.as_str());
        let request = self.client.get(self.table_url()).query(&[("order", order)]);

        let body: RowsResponse = self
            .send(request, None)
            .await?
            .json()
            .await
            .map_err(|e| transport_failure(format!("malformed list response: {e}")))?;

        debug!(event = %Event::StoreList, count = body.data.len(), "students fetched");
        Ok(body.data)
    }

    async fn insert(
        &self,
        profile: &StudentProfile,
        owner: Option<&UserRef>,
    ) -> StoreResult<StudentRecord> {
        let row = RowWrite {
            profile,
            user_id: owner.map(|user| user.id.as_str()),
        };
        let request = self.client.post(self.table_url()).json(&row);

        let body: RowsResponse = self
            .send(request, None)
            .await?
            .json()
            .await
            .map_err(|e| transport_failure(format!("malformed insert response: {e}")))?;

        let record = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| transport_failure("insert returned no row".to_string()))?;

        debug!(event = %Event::StoreInsert, id = %record.id, "student inserted");
        Ok(record)
    }

    async fn update(&self, id: &StudentId, profile: &StudentProfile) -> StoreResult<()> {
        let row = RowWrite {
            profile,
            user_id: None,
        };
        let request = self.client.patch(self.row_url(id)?).json(&row);
        self.send(request, Some(id)).await?;

        debug!(event = %Event::StoreUpdate, id = %id, "student updated");
        Ok(())
    }
}
