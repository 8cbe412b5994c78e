pub mod api;
pub mod gui;

// Re-export the main API types for convenience
pub use api::client::{
    AnalyticsBackend, AnalyticsClient, QueryError, BASE_URL_ENV, DEFAULT_BASE_URL, QUERY_TIMEOUT,
};
pub use api::types::{
    KeyMetric, QueryMetadata, QueryRequest, QueryResponse, StructuredAnalysis,
};

// Re-export view session types
pub use gui::models::{ChatMessage, Role};
pub use gui::services::{get_global_service, AnalyticsService, BackendStatus};
pub use gui::state_management::ConversationState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Test that the main modules are accessible
        assert!(std::any::type_name::<api::client::AnalyticsClient>().contains("AnalyticsClient"));
        assert!(std::any::type_name::<gui::state_management::ConversationState>()
            .contains("ConversationState"));
    }

    #[test]
    fn test_api_types_re_exported() {
        // Test that key API types are available from the crate root
        let request = QueryRequest::new("test question");
        assert_eq!(request.question, "test question");

        let _: Option<QueryResponse> = None;
        let _: Option<StructuredAnalysis> = None;
        let _: Option<QueryMetadata> = None;
        let _: Option<KeyMetric> = None;
    }

    #[test]
    fn test_error_types_re_exported() {
        // Test that error types are accessible and can be created
        let timeout = QueryError::Timeout;
        assert!(format!("{}", timeout).contains("timeout"));

        let api_error = QueryError::Api("boom".to_string());
        assert_eq!(format!("{}", api_error), "boom");
    }

    #[test]
    fn test_session_types_re_exported() {
        let message = ChatMessage::user("สวัสดี");
        assert_eq!(message.role, Role::User);

        let state = ConversationState::new();
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_default_base_url_is_public_endpoint() {
        assert!(DEFAULT_BASE_URL.starts_with("https://"));
        assert_eq!(QUERY_TIMEOUT.as_secs(), 90);
    }
}
