use dioxus::prelude::*;

use crate::gui::{
    components::{ChatDisplay, ChatHeader, InputSection, Sidebar},
    hooks::use_conversation,
    styles::theme::{get_embedded_css, CssClasses},
};

/// メインウィンドウコンポーネント
///
/// サイドバー（質問カタログ）+ ヘッダー + 会話表示 + 入力欄の
/// 1画面構成。会話状態は `use_conversation` が1つだけ保持し、
/// 各コンポーネントにはハンドルを渡す。
#[component]
pub fn MainWindow() -> Element {
    let handle = use_conversation();

    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: CssClasses::APP,

            Sidebar { handle: handle }

            div {
                class: CssClasses::MAIN_CONTENT,

                ChatHeader { handle: handle }
                ChatDisplay { handle: handle }
                InputSection { handle: handle }
            }
        }
    }
}
