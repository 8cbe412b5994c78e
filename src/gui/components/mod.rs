// Dioxus GUI Components Module

pub mod chat_display;
pub mod chat_header;
pub mod input_section;
pub mod main_window;
pub mod sidebar;

// Re-exports for convenience
pub use chat_display::ChatDisplay;
pub use chat_header::ChatHeader;
pub use input_section::InputSection;
pub use main_window::MainWindow;
pub use sidebar::Sidebar;
