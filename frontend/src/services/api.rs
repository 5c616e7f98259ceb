use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiErrorBody, BodyStatHistoryResponse, BodyStatRequest, BodyStatResponse, CreateGoalRequest,
    CreateGoalResponse, DashboardSummary, ExerciseListResponse, GoalListResponse, LoginRequest,
    LoginResponse, ProgressRequest, ProgressResponse, RegisterRequest, RegisterResponse, UserId,
    WorkoutHistoryResponse, WorkoutLogRequest, WorkoutLogResponse,
};
use thiserror::Error;

use super::config::{normalize_base_url, AppConfig};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    /// Non-2xx response; `detail` is the server's message when it sent one
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build a server error from a response body, preferring its `detail` field
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|parsed| parsed.detail)
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Server { status, detail }
    }
}

/// API client for the fitness tracker backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the configured base URL
    pub fn new() -> Self {
        Self::from_config(&AppConfig::from_env())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_error_body(status, &body))
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/login", request).await
    }

    /// All exercises in the workout library
    pub async fn list_exercises(&self) -> Result<ExerciseListResponse, ApiError> {
        self.get_json("/workouts").await
    }

    pub async fn log_workout(&self, request: &WorkoutLogRequest) -> Result<WorkoutLogResponse, ApiError> {
        self.post_json("/workouts/log", request).await
    }

    /// Logged workouts, newest first
    pub async fn workout_history(&self, user_id: UserId) -> Result<WorkoutHistoryResponse, ApiError> {
        self.get_json(&format!("/workouts/history/{}", user_id)).await
    }

    /// Daily total volume for one exercise, oldest first
    pub async fn progress(&self, request: &ProgressRequest) -> Result<ProgressResponse, ApiError> {
        self.post_json("/progress", request).await
    }

    pub async fn log_body_stat(&self, request: &BodyStatRequest) -> Result<BodyStatResponse, ApiError> {
        self.post_json("/bodystats/log", request).await
    }

    pub async fn body_stat_history(&self, user_id: UserId) -> Result<BodyStatHistoryResponse, ApiError> {
        self.get_json(&format!("/bodystats/history/{}", user_id)).await
    }

    pub async fn create_goal(&self, request: &CreateGoalRequest) -> Result<CreateGoalResponse, ApiError> {
        self.post_json("/goals", request).await
    }

    pub async fn goals(&self, user_id: UserId) -> Result<GoalListResponse, ApiError> {
        self.get_json(&format!("/goals/{}", user_id)).await
    }

    pub async fn dashboard(&self, user_id: UserId) -> Result<DashboardSummary, ApiError> {
        self.get_json(&format!("/dashboard/{}", user_id)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/progress"), "http://localhost:8000/api/progress");
        assert_eq!(client.url("goals/7"), "http://localhost:8000/api/goals/7");
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::with_base_url("https://fit.example/api");
        assert_eq!(ApiClient::from_config(&config).base_url(), "https://fit.example/api");
    }

    #[test]
    fn test_error_body_detail_is_used() {
        let err = ApiError::from_error_body(404, r#"{"detail":"Exercise not found"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                detail: "Exercise not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "Exercise not found");
    }

    #[test]
    fn test_error_body_fallback_message() {
        // Validation errors carry a list, not a string
        let err = ApiError::from_error_body(422, r#"{"detail":[{"loc":["body","sets"]}]}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 422");

        let err = ApiError::from_error_body(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = ApiError::from_error_body(400, r#"{"detail":"  "}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 400");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
        assert_eq!(ApiError::Parse("eof".into()).to_string(), "Failed to parse response: eof");
    }
}
