// Core modules
pub mod categories; // 質問カタログ（サイドバー用）
pub mod config_manager; // 設定管理モジュール
pub mod models; // 会話メッセージのデータ構造
pub mod services; // 分析バックエンドサービス層
pub mod state_management; // セッション状態（純粋ロジック）
pub mod utils; // ユーティリティ関数

// Dioxus UI components
pub mod components; // UI コンポーネント
pub mod hooks; // 会話フック
pub mod styles; // スタイル

// Core functionality exports - specific imports to avoid ambiguous glob re-exports
pub use models::{ChatMessage, Role};
pub use services::{get_global_service, AnalyticsService, BackendStatus};
pub use state_management::{ConversationState, PendingQuery};

// Export components
pub use components::MainWindow;
