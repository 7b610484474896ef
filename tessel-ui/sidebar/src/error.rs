use thiserror::Error;

/// Errors emitted by the sidebar controller and its preference stores.
#[derive(Debug, Error)]
pub enum SidebarError {
    #[error("sidebar context requested outside of a sidebar provider")]
    MissingProvider,
    #[error("preference store IO failed")]
    Io(#[from] std::io::Error),
    #[error("preference store JSON failed")]
    Json(#[from] serde_json::Error),
}
