use dioxus::prelude::*;

use crate::gui::{
    categories::default_categories,
    hooks::ConversationHandle,
    styles::theme::CssClasses,
};

/// カテゴリ/質問サイドバー
///
/// カテゴリは開閉式で、質問をクリックするとそのまま送信される。
/// 開閉状態はセッション状態側（`expanded_categories`）が持ち、
/// 会話クリアでは消えない。
#[component]
pub fn Sidebar(handle: ConversationHandle) -> Element {
    let backend_status = handle.backend_status;

    rsx! {
        aside {
            class: CssClasses::SIDEBAR,

            // ブランドヘッダー
            div {
                class: CssClasses::SIDEBAR_BRAND,
                h1 { "✨ iContract Analytics" }
                p { "AI-Powered Insights" }
            }

            // カテゴリ一覧
            div {
                class: "sidebar-categories",

                for category in default_categories() {
                    div {
                        key: "{category.id}",
                        class: format!("{} {}", CssClasses::CATEGORY_CARD, category.accent),

                        // カテゴリ見出し（クリックで開閉）
                        button {
                            class: CssClasses::CATEGORY_HEADER,
                            onclick: {
                                let handle = handle;
                                move |_| handle.toggle_category(category.id)
                            },

                            div {
                                span { "{category.icon} {category.title}" }
                                span {
                                    class: "question-count",
                                    {format!("{} questions", category.questions.len())}
                                }
                            }
                            span {
                                class: "chevron",
                                if handle.session.read().is_category_expanded(category.id) {
                                    "▼"
                                } else {
                                    "▶"
                                }
                            }
                        }

                        // 展開時のみ質問リストを描画
                        if handle.session.read().is_category_expanded(category.id) {
                            div {
                                class: CssClasses::CATEGORY_QUESTIONS,

                                for question in category.questions {
                                    button {
                                        key: "{question}",
                                        class: CssClasses::QUESTION_BUTTON,
                                        onclick: {
                                            let handle = handle;
                                            move |_| handle.send_message(question.to_string())
                                        },
                                        "{question}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // フッター（接続状態）
            div {
                class: CssClasses::SIDEBAR_FOOTER,
                div {
                    {format!("Data Connection: {}", backend_status.read().label())}
                }
                div { "Powered by Gemini 2.5 Flash" }
            }
        }
    }
}
