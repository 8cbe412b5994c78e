// 分析バックエンドサービス層

use std::sync::{Arc, OnceLock};

use crate::api::client::{AnalyticsBackend, AnalyticsClient, QueryError};
use crate::api::types::{QueryRequest, QueryResponse};

/// バックエンドの死活状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// まだ一度も確認できていない
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_probe(healthy: bool) -> Self {
        if healthy {
            Self::Online
        } else {
            Self::Offline
        }
    }

    /// ヘッダーバッジ用の表示文字列
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "⚪ Checking...",
            Self::Online => "🟢 Live Data",
            Self::Offline => "🔴 Offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Unknown => "status-badge unknown",
            Self::Online => "status-badge online",
            Self::Offline => "status-badge offline",
        }
    }
}

/// 分析バックエンドサービス
///
/// フックとコンポーネントはこのサービス経由でバックエンドに触る。
/// バックエンドはトレイトで抽象化してあり、テストではモックを注入する。
pub struct AnalyticsService {
    backend: Arc<dyn AnalyticsBackend>,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_backend(Arc::new(AnalyticsClient::from_env()))
    }

    pub fn with_backend(backend: Arc<dyn AnalyticsBackend>) -> Self {
        Self { backend }
    }

    /// 質問を1件送信する（リトライなし、1呼び出し1リクエスト）
    pub async fn submit(&self, question: &str) -> Result<QueryResponse, QueryError> {
        let request = QueryRequest::new(question);
        self.backend.submit_query(&request).await
    }

    /// 死活監視。エラーはすべて `Offline` に吸収する
    pub async fn probe(&self) -> BackendStatus {
        BackendStatus::from_probe(self.backend.health_check().await)
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

/// グローバルサービスのシングルトン
static GLOBAL_SERVICE: OnceLock<Arc<AnalyticsService>> = OnceLock::new();

/// グローバルサービスを取得（初回アクセス時に環境変数から構築）
pub fn get_global_service() -> Arc<AnalyticsService> {
    GLOBAL_SERVICE
        .get_or_init(|| {
            tracing::debug!("🏗️ Creating global analytics service");
            Arc::new(AnalyticsService::new())
        })
        .clone()
}
