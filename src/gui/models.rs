use serde::{Deserialize, Serialize};

use crate::api::types::QueryResponse;

/// 回答が空だったときの代替文言
pub const FALLBACK_ANSWER: &str = "ไม่สามารถประมวลผลคำถามได้";

/// 通信エラー時にアシスタントとして表示する文言
pub const CONNECTIVITY_ERROR: &str = "เกิดข้อผิดพลาดในการเชื่อมต่อ กรุณาลองใหม่อีกครั้ง";

/// メッセージの発話者
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, Default,
)]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    #[display("user")]
    User,
    #[serde(rename = "assistant")]
    #[display("assistant")]
    Assistant,
}

/// 会話の1ターン（セッションローカル・非永続）
///
/// セッション中は追記のみで、個別編集は行わない。クリア操作または
/// アプリ再起動で破棄される。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// バックエンドが返したSQL（折りたたみ表示用）
    pub sql: Option<String>,
    /// 結果の行マッピング（空のときは `None`）
    pub data: Option<Vec<serde_json::Value>>,
    /// テーブル表示用カラム名（`data` があるときのみ非空）
    pub columns: Vec<String>,
    /// 表示用タイムスタンプ (HH:MM:SS)
    pub timestamp: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            sql: None,
            data: None,
            columns: Vec::new(),
            timestamp: crate::gui::utils::format_timestamp(),
        }
    }

    /// ユーザーの質問メッセージを作成
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// バックエンドのレスポンスからアシスタントメッセージを構築
    ///
    /// `answer` が空のときは代替文言にフォールバックする。
    pub fn assistant(response: &QueryResponse) -> Self {
        let content = if response.answer.trim().is_empty() {
            FALLBACK_ANSWER.to_string()
        } else {
            response.answer.clone()
        };

        let data = response.table_rows().map(|rows| rows.to_vec());
        let columns = if data.is_some() {
            response.display_columns()
        } else {
            Vec::new()
        };

        Self {
            sql: response.sql.clone(),
            data,
            columns,
            ..Self::new(Role::Assistant, content)
        }
    }

    /// エラー文言だけを持つアシスタントメッセージを作成
    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// SQL折りたたみ表示の対象になるか
    pub fn has_sql(&self) -> bool {
        self.sql.is_some()
    }
}
