use dioxus::prelude::*;

use crate::gui::{
    hooks::ConversationHandle,
    styles::theme::{get_button_class, CssClasses},
};

/// 入力セクションコンポーネント
///
/// 質問の入力と送信を管理する。送信条件（空白不可・同時1件まで）の
/// 本体はセッション状態側にあり、ここでは見た目の無効化だけを行う。
#[component]
pub fn InputSection(handle: ConversationHandle) -> Element {
    let mut input = use_signal(String::new);

    let is_loading = handle.session.read().is_loading();
    let can_send = !is_loading && !input.read().trim().is_empty();

    let mut submit = {
        let handle = handle;
        move || {
            let question = input.read().clone();
            if question.trim().is_empty() {
                return;
            }
            handle.send_message(question);
            input.set(String::new());
        }
    };

    rsx! {
        div {
            class: CssClasses::INPUT_SECTION,

            div {
                class: "input-bar",

                input {
                    class: CssClasses::INPUT_FIELD,
                    r#type: "text",
                    placeholder: "Ask anything about iPhone contract business...",
                    value: "{input}",
                    disabled: is_loading,
                    oninput: move |event| {
                        input.set(event.value());
                    },
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            submit();
                        }
                    },
                }

                button {
                    class: get_button_class("primary", !can_send),
                    disabled: !can_send,
                    onclick: move |_| submit(),

                    if is_loading {
                        "⏳"
                    } else {
                        "Analyze →"
                    }
                }
            }
        }
    }
}
