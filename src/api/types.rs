//! 分析バックエンドとのJSONコントラクト
//!
//! リクエスト/レスポンスの形はバックエンド側が所有する。クライアントは
//! 構造的なデシリアライズ以上の検証を行わない。

use serde::{Deserialize, Serialize};

/// 分析クエリリクエスト
///
/// 一度送信したら不変。省略可能なフラグは `None` のとき省略される。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    /// 自然言語の質問文
    pub question: String,
    /// レスポンスにSQLを含めるか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sql: Option<bool>,
    /// レスポンスに結果データを含めるか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_data: Option<bool>,
}

impl QueryRequest {
    /// 質問文のみのリクエストを作成
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            include_sql: None,
            include_data: None,
        }
    }
}

/// 重要指標（structured解析の一部）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub unit: String,
}

/// バックエンドが返す構造化解析サマリー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StructuredAnalysis {
    pub summary: String,
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

/// 結果データのメタ情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryMetadata {
    pub row_count: i64,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// 分析クエリレスポンス
///
/// バックエンドの返却をそのまま保持する。`data` の各要素は行マッピング
/// （JSONオブジェクト）であることを想定するが、スキーマ検証は行わない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QueryMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredAnalysis>,
}

impl QueryResponse {
    /// テーブル表示用のカラム名を導出
    ///
    /// `metadata.columns` が非空ならそれを優先し、なければ先頭行のキーを
    /// 使う。後続行は同じキー集合を持つ前提（スキーマ調停はしない）。
    pub fn display_columns(&self) -> Vec<String> {
        if let Some(meta) = &self.metadata {
            if !meta.columns.is_empty() {
                return meta.columns.clone();
            }
        }
        self.data
            .as_deref()
            .map(table_columns)
            .unwrap_or_default()
    }

    /// 表示すべき行データ（空なら `None`）
    pub fn table_rows(&self) -> Option<&[serde_json::Value]> {
        match self.data.as_deref() {
            Some(rows) if !rows.is_empty() => Some(rows),
            _ => None,
        }
    }
}

/// 先頭行のキー集合からカラム名を導出する
pub fn table_columns(rows: &[serde_json::Value]) -> Vec<String> {
    rows.first()
        .and_then(|row| row.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

/// セル値を表示文字列に変換（文字列は引用符なし、その他はJSON表記）
pub fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
