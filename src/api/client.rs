//! 分析バックエンドHTTPクライアント
//!
//! Renderの無料枠で動くバックエンドはコールドスタートに30〜60秒かかる
//! ことがあるため、クエリには長めのタイムアウトを設定している。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::api::types::{QueryRequest, QueryResponse};

/// 環境変数が未設定のときに使う公開エンドポイント
pub const DEFAULT_BASE_URL: &str = "https://iphone-chatbot-i7j6.onrender.com";

/// バックエンドのベースURLを指定する環境変数
pub const BASE_URL_ENV: &str = "ICONTRACT_API_URL";

/// クエリのタイムアウト（コールドスタート対応で長め）
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(90);

/// 死活監視・補助エンドポイント用の短いタイムアウト
const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("⏱️ Request timeout - Server may be starting up (cold start). Please wait 30 seconds and try again.")]
    Timeout,
    #[error("{0}")]
    Api(String),
    #[error("🌐 Network error - Cannot connect to server. Please check your internet connection.")]
    Network(#[source] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 分析バックエンドの抽象化（テストでモック差し替え可能にする）
#[async_trait]
pub trait AnalyticsBackend: Send + Sync {
    /// 1往復のクエリを実行
    async fn submit_query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError>;

    /// 死活監視。失敗はすべて `false` に吸収する
    async fn health_check(&self) -> bool;

    /// データベーススキーマ情報を取得
    async fn get_schema(&self) -> Result<serde_json::Value, QueryError>;

    /// 質問例リストを取得
    async fn get_examples(&self) -> Result<serde_json::Value, QueryError>;
}

/// 分析バックエンドHTTPクライアント
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base_url: String,
    query_timeout: Duration,
    http_client: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            query_timeout: QUERY_TIMEOUT,
            http_client: reqwest::Client::new(),
        }
    }

    /// 環境変数 `ICONTRACT_API_URL` からクライアントを構築
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        tracing::info!("🔗 Analytics backend: {}", base_url);
        Self::new(base_url)
    }

    /// クエリタイムアウトを差し替える（テスト用に短縮できる）
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET系の補助エンドポイント共通処理
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, QueryError> {
        let response = self
            .http_client
            .get(self.endpoint(path))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Api(format!(
                "Failed to fetch {}: {}",
                path, status
            )));
        }

        let text = response.text().await.map_err(classify_transport_error)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AnalyticsBackend for AnalyticsClient {
    async fn submit_query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError> {
        tracing::info!("🔍 Sending query to API: {}", request.question);

        // タイムアウトはリクエストfutureが所有する。成功・失敗どちらの
        // 経路でもfutureと一緒に解放されるのでタイマーは残らない。
        let response = self
            .http_client
            .post(self.endpoint("/query"))
            .header("Content-Type", "application/json")
            .json(request)
            .timeout(self.query_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Query request failed: {}", e);
                classify_transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_detail(status, &body);
            tracing::error!("❌ API error response ({}): {}", status, message);
            return Err(QueryError::Api(message));
        }

        let text = response.text().await.map_err(classify_transport_error)?;
        let parsed: QueryResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("❌ Failed to parse query response: {}", e);
            tracing::debug!(
                "🔍 Response text preview: {}",
                text.chars().take(200).collect::<String>()
            );
            e
        })?;

        tracing::info!("✅ API response received");
        Ok(parsed)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(self.endpoint("/"))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("💤 Health check failed: {}", e);
                false
            }
        }
    }

    async fn get_schema(&self) -> Result<serde_json::Value, QueryError> {
        self.get_json("/schema").await
    }

    async fn get_examples(&self) -> Result<serde_json::Value, QueryError> {
        self.get_json("/examples").await
    }
}

/// reqwestのトランスポートエラーをタイムアウト/ネットワークに分類
fn classify_transport_error(error: reqwest::Error) -> QueryError {
    if error.is_timeout() {
        QueryError::Timeout
    } else {
        QueryError::Network(error)
    }
}

/// 非2xxレスポンスのエラーメッセージを決定する
///
/// JSONボディの `detail` フィールドを優先し、取れなければステータス
/// コードと理由句からメッセージを合成する。
fn extract_error_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| {
            format!(
                "API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AnalyticsClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/query"), "http://localhost:8000/query");
    }

    #[test]
    fn test_client_default_timeout_is_cold_start_friendly() {
        let client = AnalyticsClient::new(DEFAULT_BASE_URL);
        assert_eq!(client.query_timeout, QUERY_TIMEOUT);

        let short = client.with_query_timeout(Duration::from_millis(100));
        assert_eq!(short.query_timeout, Duration::from_millis(100));
    }

    #[test]
    fn test_from_env_reads_override() {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:9999/");
        let client = AnalyticsClient::from_env();
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_extract_error_detail_prefers_detail_field() {
        let message =
            extract_error_detail(StatusCode::BAD_REQUEST, r#"{"detail": "Question is empty"}"#);
        assert_eq!(message, "Question is empty");
    }

    #[test]
    fn test_extract_error_detail_synthesizes_from_status() {
        let message = extract_error_detail(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn test_extract_error_detail_ignores_non_string_detail() {
        let message = extract_error_detail(StatusCode::BAD_GATEWAY, r#"{"detail": 42}"#);
        assert!(message.contains("502"));
    }

    #[test]
    fn test_timeout_error_mentions_cold_start() {
        let display = QueryError::Timeout.to_string();
        assert!(display.contains("cold start"));
    }
}
