pub mod client; // 分析バックエンドHTTPクライアント
pub mod types; // クエリリクエスト/レスポンス型
