use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentStructureError>;

/// A rendered route whose markup cannot be post-processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentStructureError {
    #[error("rendered document has no <body> element")]
    MissingBody,

    #[error("rendered document has no application root element with id \"{id}\"")]
    MissingAppRoot { id: String },

    #[error("failed to parse rendered document: {0}")]
    Parse(String),
}

/// Post-processing failure attributed to a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("post-processing route {route} failed")]
pub struct RouteError {
    pub route: String,
    #[source]
    pub source: DocumentStructureError,
}
