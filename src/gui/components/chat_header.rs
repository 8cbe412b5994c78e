use dioxus::prelude::*;

use crate::gui::{hooks::ConversationHandle, styles::theme::CssClasses};

/// チャットヘッダーコンポーネント
///
/// 責務:
/// - タイトル表示
/// - バックエンド死活バッジの表示
/// - 会話クリアボタン（メッセージがあるときのみ）
#[derive(Props, Clone, PartialEq)]
pub struct ChatHeaderProps {
    /// 会話ハンドル
    pub handle: ConversationHandle,
}

#[component]
pub fn ChatHeader(props: ChatHeaderProps) -> Element {
    let ChatHeaderProps { handle } = props;
    let backend_status = handle.backend_status;
    let has_messages = !handle.session.read().is_empty();

    rsx! {
        header {
            class: CssClasses::CHAT_HEADER,

            div {
                class: CssClasses::HEADER_TITLE,
                h1 { "AI-Powered Contract Analytics" }
                p { "Real-time insights for iPhone contract business" }
            }

            div {
                style: "display: flex; align-items: center; gap: 12px;",

                // クリアボタン（会話があるときのみ表示）
                if has_messages {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| handle.clear_conversation(),
                        "Clear Chat"
                    }
                }

                // 死活バッジ
                span {
                    class: backend_status.read().css_class(),
                    {backend_status.read().label()}
                }
            }
        }
    }
}
