use dioxus::prelude::*;

use crate::api::types::cell_text;
use crate::gui::{
    categories::quick_questions,
    hooks::ConversationHandle,
    styles::theme::{get_message_bubble_class, get_message_row_class, CssClasses},
};

/// メッセージ表示エリア
///
/// 描画は現在のメッセージ列と展開集合の純粋な関数。会話が空のときは
/// ウェルカム画面（クイック質問カード）を表示する。
#[component]
pub fn ChatDisplay(handle: ConversationHandle) -> Element {
    // 描画中にSignalのborrowを持ち越さないようスナップショットを取る
    let messages = handle.session.read().messages().to_vec();
    let is_loading = handle.session.read().is_loading();

    rsx! {
        main {
            class: CssClasses::CHAT_DISPLAY,

            if messages.is_empty() {
                div {
                    class: CssClasses::WELCOME,

                    h2 { "AI-Powered Contract Analytics" }
                    p {
                        class: "subtitle",
                        "วิเคราะห์ข้อมูลธุรกิจ iPhone Contract ด้วย AI"
                    }
                    p {
                        class: "hint",
                        "เลือกคำถามจาก Sidebar หรือพิมพ์คำถามของคุณเอง"
                    }

                    // クイック質問カード
                    div {
                        class: "quick-grid",

                        for quick in quick_questions() {
                            button {
                                key: "{quick.text}",
                                class: CssClasses::QUICK_CARD,
                                onclick: {
                                    let handle = handle;
                                    move |_| handle.send_message(quick.text.to_string())
                                },
                                "{quick.icon} {quick.text}"
                                span {
                                    class: "ask-now",
                                    "Ask now →"
                                }
                            }
                        }
                    }
                }
            } else {
                div {
                    class: CssClasses::MESSAGE_LIST,

                    for (index, message) in messages.iter().enumerate() {
                        div {
                            key: "{message.id}",
                            class: get_message_row_class(message.role),

                            // メッセージバブル
                            div {
                                class: get_message_bubble_class(message.role),
                                "{message.content}"
                                div {
                                    class: CssClasses::MESSAGE_TIMESTAMP,
                                    "🕒 {message.timestamp}"
                                }
                            }

                            // SQLの折りたたみ表示
                            if message.has_sql() {
                                button {
                                    class: CssClasses::SQL_TOGGLE,
                                    onclick: {
                                        let handle = handle;
                                        move |_| handle.toggle_sql(index)
                                    },
                                    if handle.session.read().is_sql_expanded(index) {
                                        "▼ Hide SQL Query"
                                    } else {
                                        "▶ Show SQL Query"
                                    }
                                }

                                if handle.session.read().is_sql_expanded(index) {
                                    div {
                                        class: CssClasses::SQL_BLOCK,
                                        code {
                                            {message.sql.clone().unwrap_or_default()}
                                        }
                                    }
                                }
                            }

                            // 結果データのテーブル表示
                            if message.data.as_ref().is_some_and(|rows| !rows.is_empty()) {
                                div {
                                    class: "data-table-wrap",
                                    table {
                                        class: CssClasses::DATA_TABLE,

                                        thead {
                                            tr {
                                                for column in message.columns.iter() {
                                                    th { key: "{column}", "{column}" }
                                                }
                                            }
                                        }
                                        tbody {
                                            for (row_index, row) in message.data.clone().unwrap_or_default().into_iter().enumerate() {
                                                tr {
                                                    key: "{message.id}-{row_index}",
                                                    for column in message.columns.iter() {
                                                        td {
                                                            key: "{column}",
                                                            {cell_text(row.get(column.as_str()).unwrap_or(&serde_json::Value::Null))}
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // ローディング表示
                    if is_loading {
                        div {
                            class: CssClasses::LOADING_BUBBLE,
                            "⏳ กำลังวิเคราะห์ข้อมูล..."
                        }
                    }
                }
            }
        }
    }
}
