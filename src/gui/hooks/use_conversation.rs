//! 会話セッション用カスタムフック
//!
//! 純粋な `ConversationState` を `Signal` に包み、送信・クリア・展開
//! トグルの操作をコンポーネントに提供する。ネットワーク処理は
//! グローバルサービス経由で `spawn` する。

use std::time::Duration;

use dioxus::prelude::*;

use crate::gui::services::{get_global_service, BackendStatus};
use crate::gui::state_management::ConversationState;

/// 死活監視の間隔
const PROBE_INTERVAL: Duration = Duration::from_secs(30);

/// 会話ハンドル
#[derive(Clone, Copy)]
pub struct ConversationHandle {
    pub session: Signal<ConversationState>,
    /// ヘッダーバッジ用のバックエンド死活状態
    pub backend_status: Signal<BackendStatus>,
}

impl PartialEq for ConversationHandle {
    fn eq(&self, _other: &Self) -> bool {
        // Signalの比較は困難なので、常にfalseとして扱う
        // これによりpropsの変更が検出される
        false
    }
}

impl ConversationHandle {
    /// 質問を送信する
    ///
    /// 空白のみ、またはリクエスト飛行中は何もしない。受理時はユーザー
    /// メッセージを即時追加し、レスポンス解決時にアシスタント
    /// メッセージを追加する。ローディングはどの経路でも解除される。
    pub fn send_message(&self, question: String) {
        let mut session = self.session;

        let pending = match session.write().begin_send(&question) {
            Some(pending) => pending,
            None => {
                tracing::debug!("🚫 Send ignored - blank question or request in flight");
                return;
            }
        };

        spawn(async move {
            let service = get_global_service();
            let result = service.submit(&pending.question).await;

            match result {
                Ok(response) => {
                    tracing::info!("✅ Answer received for: {}", pending.question);
                    session.write().complete_send(&pending, &response);
                }
                Err(e) => {
                    // エラー内容はfail_send側でログされ、ユーザーには
                    // 接続エラー文言として表示される
                    session.write().fail_send(&pending, &e);
                }
            }
        });
    }

    /// 会話をクリアする（飛行中のリクエストはキャンセルしない）
    pub fn clear_conversation(&self) {
        let mut session = self.session;
        session.write().clear();
        tracing::info!("🗑️ Conversation cleared");
    }

    /// 指定メッセージのSQL表示をトグルする
    pub fn toggle_sql(&self, index: usize) {
        let mut session = self.session;
        session.write().toggle_sql(index);
    }

    /// サイドバーカテゴリの開閉をトグルする
    pub fn toggle_category(&self, id: &str) {
        let mut session = self.session;
        session.write().toggle_category(id);
    }
}

/// 会話セッション用カスタムフック
///
/// セッション状態の初期化と、バックエンド死活監視の開始を行う。
pub fn use_conversation() -> ConversationHandle {
    let session = use_signal(ConversationState::new);
    let backend_status = use_signal(|| BackendStatus::Unknown);

    // 起動直後に1回、その後は定期的に死活監視（intervalの初回tickは即時）
    use_effect(move || {
        let mut status = backend_status;
        spawn(async move {
            let service = get_global_service();
            let mut interval = tokio::time::interval(PROBE_INTERVAL);
            loop {
                interval.tick().await;
                let probed = service.probe().await;
                let changed = *status.read() != probed;
                if changed {
                    tracing::info!("🔄 Backend status: {}", probed.label());
                    status.set(probed);
                }
            }
        });
    });

    ConversationHandle {
        session,
        backend_status,
    }
}
