//! HTTP Goal API
//!
//! `reqwest` client for the goals backend. On wasm the browser attaches the
//! `accessToken` cookie; native callers configure a bearer token.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{GoalApi, GoalScope, PageQuery};
use crate::config::ApiConfig;
use crate::domain::{Comment, Goal, GroupGoal, ProgressEntry, RawPage};
use crate::error::{SyncError, SyncResult};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[derive(Serialize)]
struct ListParams<'a> {
    subject: &'a str,
    page: u32,
    limit: u32,
}

#[derive(Serialize)]
struct PageParams {
    page: u32,
    limit: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateEntryBody<'a> {
    goal_id: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ContentBody<'a> {
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepBody {
    is_completed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckInBody {
    checked_in: bool,
}

/// Like endpoints answer with either the bare list or an object carrying it.
#[derive(Deserialize)]
#[serde(untagged)]
enum LikesResponse {
    Bare(Vec<String>),
    Wrapped { likes: Vec<String> },
}

impl From<LikesResponse> for Vec<String> {
    fn from(response: LikesResponse) -> Self {
        match response {
            LikesResponse::Bare(likes) | LikesResponse::Wrapped { likes } => likes,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Pull a human readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.to_string())
}

fn decode<T: DeserializeOwned>(body: &str) -> SyncResult<T> {
    serde_json::from_str(body).map_err(SyncError::from)
}

/// `GoalApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpGoalApi {
    client: Client,
    config: ApiConfig,
}

impl HttpGoalApi {
    pub fn new(config: ApiConfig) -> SyncResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        // Per request so a stalled fetch also gives up in the browser
        let mut request = self
            .client
            .request(method, self.config.endpoint(path))
            .timeout(self.config.timeout());
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }
        request
    }

    /// Send and return the body of a 2xx response.
    async fn send_raw(&self, request: RequestBuilder) -> SyncResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(status = status.as_u16(), "goals API rejected request");
            return Err(SyncError::from_status(status.as_u16(), &error_message(&body)));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> SyncResult<T> {
        let body = self.send_raw(request).await?;
        decode(&body)
    }
}

#[async_trait(?Send)]
impl GoalApi for HttpGoalApi {
    async fn list_goals(&self, scope: GoalScope, query: &PageQuery) -> SyncResult<RawPage<Goal>> {
        let request = self.request(Method::GET, scope.path()).query(&ListParams {
            subject: &query.subject,
            page: query.page,
            limit: query.limit,
        });
        self.send(request).await
    }

    async fn list_group_goals(&self, query: &PageQuery) -> SyncResult<RawPage<GroupGoal>> {
        let request = self.request(Method::GET, "group-goals/mine").query(&ListParams {
            subject: &query.subject,
            page: query.page,
            limit: query.limit,
        });
        self.send(request).await
    }

    async fn list_progress_entries(
        &self,
        query: &PageQuery,
    ) -> SyncResult<RawPage<ProgressEntry>> {
        let path = format!("goals/{}/progress-entries", segment(&query.subject));
        let request = self.request(Method::GET, &path).query(&PageParams {
            page: query.page,
            limit: query.limit,
        });
        self.send(request).await
    }

    async fn create_progress_entry(
        &self,
        goal_id: &str,
        content: &str,
    ) -> SyncResult<ProgressEntry> {
        let request = self
            .request(Method::POST, "progress-entries")
            .json(&CreateEntryBody { goal_id, content });
        self.send(request).await
    }

    async fn toggle_progress_like(&self, entry_id: &str) -> SyncResult<Vec<String>> {
        let path = format!("progress-entries/{}/like", segment(entry_id));
        let likes: LikesResponse = self.send(self.request(Method::POST, &path)).await?;
        Ok(likes.into())
    }

    async fn list_comments(&self, entry_id: &str) -> SyncResult<Vec<Comment>> {
        let path = format!("progress-entries/{}/comments", segment(entry_id));
        self.send(self.request(Method::GET, &path)).await
    }

    async fn add_comment(&self, entry_id: &str, content: &str) -> SyncResult<Comment> {
        let path = format!("progress-entries/{}/comments", segment(entry_id));
        let request = self.request(Method::POST, &path).json(&ContentBody { content });
        self.send(request).await
    }

    async fn set_goal_step(
        &self,
        goal_id: &str,
        step_id: &str,
        completed: bool,
    ) -> SyncResult<Goal> {
        let path = format!("goals/{}/steps/{}", segment(goal_id), segment(step_id));
        let request = self
            .request(Method::PATCH, &path)
            .json(&StepBody { is_completed: completed });
        self.send(request).await
    }

    async fn archive_goal(&self, goal_id: &str) -> SyncResult<()> {
        let path = format!("goals/{}/archive", segment(goal_id));
        self.send_raw(self.request(Method::PATCH, &path)).await?;
        Ok(())
    }

    async fn set_group_step(
        &self,
        group_goal_id: &str,
        step_id: &str,
        completed: bool,
    ) -> SyncResult<GroupGoal> {
        let path = format!(
            "group-goals/{}/steps/{}",
            segment(group_goal_id),
            segment(step_id)
        );
        let request = self
            .request(Method::POST, &path)
            .json(&StepBody { is_completed: completed });
        self.send(request).await
    }

    async fn set_check_in(&self, group_goal_id: &str, checked_in: bool) -> SyncResult<GroupGoal> {
        let path = format!("group-goals/{}/checkin", segment(group_goal_id));
        let request = self
            .request(Method::POST, &path)
            .json(&CheckInBody { checked_in });
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_escape_slashes_and_spaces() {
        assert_eq!(segment("abc-123"), "abc-123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn likes_accept_both_shapes() {
        let bare: Vec<String> = decode::<LikesResponse>(r#"["u1","u2"]"#).unwrap().into();
        let wrapped: Vec<String> =
            decode::<LikesResponse>(r#"{"likes":["u1","u2"],"count":2}"#).unwrap().into();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"Goal not found"}"#), "Goal not found");
        assert_eq!(error_message(r#"{"error":"expired"}"#), "expired");
        assert_eq!(error_message("plain"), "plain");
    }

    #[test]
    fn undecodable_body_is_unexpected_response() {
        let err = decode::<Goal>("<html>").unwrap_err();
        assert!(matches!(err, SyncError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let mut config = ApiConfig::new("http://127.0.0.1:9/api");
        config.timeout_ms = 2_000;
        let api = HttpGoalApi::new(config).unwrap();
        let err = api
            .list_goals(GoalScope::Active, &PageQuery::new("u1", 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn silent_backend_times_out_as_network_error() {
        // Accepted by the kernel backlog, never answered
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let mut config = ApiConfig::new(format!("http://{addr}/api"));
        config.timeout_ms = 200;
        let api = HttpGoalApi::new(config).unwrap();

        let started = std::time::Instant::now();
        let err = api
            .list_goals(GoalScope::Active, &PageQuery::new("u1", 1, 10))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Network(_)), "got {err:?}");
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        drop(listener);
    }
}
