//! テーマとスタイルヘルパー

use crate::gui::models::Role;

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // アプリケーション
    pub const APP: &'static str = "app";
    pub const MAIN_CONTENT: &'static str = "main-content";

    // サイドバー
    pub const SIDEBAR: &'static str = "sidebar";
    pub const SIDEBAR_BRAND: &'static str = "sidebar-brand";
    pub const SIDEBAR_FOOTER: &'static str = "sidebar-footer";
    pub const CATEGORY_CARD: &'static str = "category-card";
    pub const CATEGORY_HEADER: &'static str = "category-header";
    pub const CATEGORY_QUESTIONS: &'static str = "category-questions";
    pub const QUESTION_BUTTON: &'static str = "question-button";

    // ヘッダー
    pub const CHAT_HEADER: &'static str = "chat-header";
    pub const HEADER_TITLE: &'static str = "header-title";

    // チャット
    pub const CHAT_DISPLAY: &'static str = "chat-display";
    pub const MESSAGE_LIST: &'static str = "message-list";
    pub const MESSAGE_ROW: &'static str = "message-row";
    pub const MESSAGE_BUBBLE: &'static str = "message-bubble";
    pub const MESSAGE_TIMESTAMP: &'static str = "message-timestamp";
    pub const SQL_BLOCK: &'static str = "sql-block";
    pub const SQL_TOGGLE: &'static str = "sql-toggle";
    pub const DATA_TABLE: &'static str = "data-table";
    pub const LOADING_BUBBLE: &'static str = "loading-bubble";
    pub const WELCOME: &'static str = "welcome";
    pub const QUICK_CARD: &'static str = "quick-card";

    // 入力
    pub const INPUT_SECTION: &'static str = "input-section";
    pub const INPUT_FIELD: &'static str = "input-field";

    // ボタン
    pub const BTN: &'static str = "btn";
    pub const BTN_PRIMARY: &'static str = "btn-primary";
    pub const BTN_GHOST: &'static str = "btn-ghost";
}

/// 発話者に応じたメッセージ行のCSSクラスを取得
pub fn get_message_row_class(role: Role) -> String {
    let side = match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    format!("{} {}", CssClasses::MESSAGE_ROW, side)
}

/// 発話者に応じたバブルのCSSクラスを取得
pub fn get_message_bubble_class(role: Role) -> String {
    let variant = match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    format!("{} {}", CssClasses::MESSAGE_BUBBLE, variant)
}

/// ボタンの状態に応じたCSSクラスを取得
pub fn get_button_class(variant: &str, disabled: bool) -> String {
    let variant_class = match variant {
        "primary" => CssClasses::BTN_PRIMARY,
        "ghost" => CssClasses::BTN_GHOST,
        _ => CssClasses::BTN_PRIMARY,
    };

    let mut classes = format!("{} {}", CssClasses::BTN, variant_class);
    if disabled {
        classes.push_str(" disabled");
    }
    classes
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}
