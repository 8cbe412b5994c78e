//! 会話セッション状態
//!
//! UIフレームワークに依存しない純粋なセッション状態。Dioxus側は
//! `hooks::use_conversation` がこれを `Signal` に包んで使う。
//!
//! 不変条件: メッセージ列はセッション中は追記のみ。全消去（クリア）
//! だけが例外で、個別メッセージの編集・削除は存在しない。

use std::collections::HashSet;

use crate::api::client::QueryError;
use crate::api::types::QueryResponse;
use crate::gui::models::{ChatMessage, CONNECTIVITY_ERROR};

/// 送信中クエリのチケット
///
/// `begin_send` が発行し、解決時に `complete_send` / `fail_send` へ
/// 返却する。クリア操作でエポックが進むと古いチケットは無効になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub question: String,
    epoch: u64,
}

/// ビューが所有するセッション状態
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
    is_loading: bool,
    expanded_sql: HashSet<usize>,
    expanded_categories: HashSet<String>,
    epoch: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_sql_expanded(&self, index: usize) -> bool {
        self.expanded_sql.contains(&index)
    }

    pub fn expanded_sql_count(&self) -> usize {
        self.expanded_sql.len()
    }

    pub fn is_category_expanded(&self, id: &str) -> bool {
        self.expanded_categories.contains(id)
    }

    /// 送信を開始する
    ///
    /// 空白のみの質問、またはリクエストが既に飛んでいる間は何もしない
    /// （同時実行は1件まで。キューではなく単純な排他フラグ）。受理時は
    /// ユーザーメッセージを同期的に追加し、ローディングを立てる。
    pub fn begin_send(&mut self, question: &str) -> Option<PendingQuery> {
        if question.trim().is_empty() || self.is_loading {
            return None;
        }

        self.messages.push(ChatMessage::user(question));
        self.is_loading = true;

        Some(PendingQuery {
            question: question.to_string(),
            epoch: self.epoch,
        })
    }

    /// 成功レスポンスでセッションを更新する
    ///
    /// ローディングはどの経路でも必ず解除する。チケットのエポックが
    /// 現在と食い違う場合（解決前にクリアされた場合）はメッセージを
    /// 追加せず破棄する。
    pub fn complete_send(&mut self, pending: &PendingQuery, response: &QueryResponse) {
        self.is_loading = false;

        if pending.epoch != self.epoch {
            tracing::debug!("🗑️ Stale response discarded (cleared mid-flight)");
            return;
        }

        self.messages.push(ChatMessage::assistant(response));
    }

    /// 失敗したリクエストをセッションに反映する
    pub fn fail_send(&mut self, pending: &PendingQuery, error: &QueryError) {
        self.is_loading = false;

        tracing::error!("❌ Query failed: {}", error);

        if pending.epoch != self.epoch {
            tracing::debug!("🗑️ Stale failure discarded (cleared mid-flight)");
            return;
        }

        self.messages.push(ChatMessage::assistant_error(CONNECTIVITY_ERROR));
    }

    /// 会話をクリアする
    ///
    /// メッセージ列とSQL展開集合を空に戻し、エポックを進めて飛行中の
    /// リクエストを無効化する。カテゴリ展開状態はサイドバーの表示
    /// 状態なので維持する。リクエスト自体はキャンセルしない。
    pub fn clear(&mut self) {
        self.messages.clear();
        self.expanded_sql.clear();
        self.epoch += 1;
    }

    /// 指定インデックスのSQL表示をトグルする
    pub fn toggle_sql(&mut self, index: usize) {
        if !self.expanded_sql.remove(&index) {
            self.expanded_sql.insert(index);
        }
    }

    /// サイドバーカテゴリの開閉をトグルする
    pub fn toggle_category(&mut self, id: &str) {
        if !self.expanded_categories.remove(id) {
            self.expanded_categories.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::models::{Role, FALLBACK_ANSWER};
    use serde_json::json;

    fn response(answer: &str) -> QueryResponse {
        serde_json::from_value(json!({"question": "q", "answer": answer})).unwrap()
    }

    #[test]
    fn test_begin_send_appends_user_message() {
        let mut state = ConversationState::new();

        let pending = state.begin_send("มีลูกค้ารอทำสัญญากี่คน").unwrap();

        assert_eq!(pending.question, "มีลูกค้ารอทำสัญญากี่คน");
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].role, Role::User);
        assert!(state.is_loading());
    }

    #[test]
    fn test_begin_send_rejects_blank_question() {
        let mut state = ConversationState::new();

        assert!(state.begin_send("").is_none());
        assert!(state.begin_send("   ").is_none());
        assert!(state.messages().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_send_rejects_while_in_flight() {
        let mut state = ConversationState::new();

        let _first = state.begin_send("first").unwrap();
        assert!(state.begin_send("second").is_none());
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_complete_send_appends_assistant_and_clears_loading() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();

        state.complete_send(&pending, &response("มี 10 คน"));

        assert!(!state.is_loading());
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].role, Role::Assistant);
        assert_eq!(state.messages()[1].content, "มี 10 คน");
    }

    #[test]
    fn test_complete_send_falls_back_on_blank_answer() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();

        state.complete_send(&pending, &response(""));

        assert_eq!(state.messages()[1].content, FALLBACK_ANSWER);
    }

    #[test]
    fn test_fail_send_appends_connectivity_error() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();

        state.fail_send(&pending, &QueryError::Timeout);

        assert!(!state.is_loading());
        assert_eq!(state.messages()[1].content, CONNECTIVITY_ERROR);
    }

    #[test]
    fn test_messages_append_in_completion_order() {
        let mut state = ConversationState::new();

        let first = state.begin_send("q1").unwrap();
        state.complete_send(&first, &response("a1"));
        let second = state.begin_send("q2").unwrap();
        state.complete_send(&second, &response("a2"));

        let contents: Vec<&str> = state.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "a1", "q2", "a2"]);
    }

    #[test]
    fn test_clear_empties_messages_and_sql_set() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();
        state.complete_send(&pending, &response("a"));
        state.toggle_sql(1);
        state.toggle_category("demand");

        state.clear();

        assert!(state.messages().is_empty());
        assert_eq!(state.expanded_sql_count(), 0);
        // カテゴリ展開状態はクリア対象外
        assert!(state.is_category_expanded("demand"));
    }

    #[test]
    fn test_clear_discards_in_flight_response() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();

        state.clear();
        state.complete_send(&pending, &response("late answer"));

        // 古いレスポンスは破棄されるがローディングは解除される
        assert!(state.messages().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_clear_discards_in_flight_failure() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q").unwrap();

        state.clear();
        state.fail_send(&pending, &QueryError::Api("boom".to_string()));

        assert!(state.messages().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_send_allowed_again_after_stale_resolution() {
        let mut state = ConversationState::new();
        let pending = state.begin_send("q1").unwrap();
        state.clear();

        // 古いリクエストが解決するまでゲートは閉じたまま
        assert!(state.begin_send("q2").is_none());

        state.complete_send(&pending, &response("late"));
        let second = state.begin_send("q2").unwrap();
        state.complete_send(&second, &response("a2"));

        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[0].content, "q2");
    }

    #[test]
    fn test_toggle_sql_is_involutive() {
        let mut state = ConversationState::new();

        state.toggle_sql(3);
        assert!(state.is_sql_expanded(3));
        state.toggle_sql(3);
        assert!(!state.is_sql_expanded(3));
    }

    #[test]
    fn test_toggle_category() {
        let mut state = ConversationState::new();

        state.toggle_category("supply");
        assert!(state.is_category_expanded("supply"));
        state.toggle_category("supply");
        assert!(!state.is_category_expanded("supply"));
    }
}
