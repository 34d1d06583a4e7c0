//! Request and response types for the MeiliSearch API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;


// ============================================================================
// Errors
// ============================================================================

/// Error payload returned by MeiliSearch alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Human readable message.
    pub message: String,
    /// Machine readable error code.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Error category.
    #[serde(default)]
    pub error_type: Option<String>,
    /// Documentation link for the error.
    #[serde(default)]
    pub error_link: Option<String>,
}

// ============================================================================
// Health
// ============================================================================

/// Body of a health update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthUpdate {
    /// `true` marks the instance healthy.
    pub health: bool,
}

// ============================================================================
// Version & System
// ============================================================================

/// Version information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Commit the binary was built from.
    #[serde(default)]
    pub commit_sha: String,
    /// Build date.
    #[serde(default)]
    pub build_date: String,
    /// Package version.
    #[serde(default)]
    pub pkg_version: String,
}

/// System information (memory and processor usage), returned verbatim.
pub type SysInfo = serde_json::Map<String, Value>;

// ============================================================================
// Stats
// ============================================================================

/// Statistics of every index plus database wide figures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Size of the database in bytes.
    #[serde(default)]
    pub database_size: u64,
    /// Date of the last update, if any.
    #[serde(default)]
    pub last_update: Option<String>,
    /// Per-index statistics keyed by index uid.
    #[serde(default)]
    pub indexes: HashMap<String, IndexStats>,
}

/// Statistics of one index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Number of documents stored.
    #[serde(default)]
    pub number_of_documents: u64,
    /// Whether an update is being processed.
    #[serde(default)]
    pub is_indexing: bool,
    /// Number of documents containing each field.
    #[serde(default)]
    pub fields_frequency: HashMap<String, u64>,
}

// ============================================================================
// Indexes
// ============================================================================

/// Index descriptor as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    /// Unique identifier.
    pub uid: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Attribute used as document identifier.
    #[serde(default)]
    pub primary_key: Option<String>,
    /// Creation date.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update date.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request body for creating an index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexRequest<'a> {
    /// Index uid.
    pub uid: &'a str,
    /// Primary key attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<&'a str>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Request body for updating an index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIndexRequest<'a> {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// Primary key attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<&'a str>,
}

// ============================================================================
// Documents
// ============================================================================

/// Query parameters for listing documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsQuery {
    /// Number of documents to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Maximum number of documents returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Comma separated attributes to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<String>,
}

/// Query parameters for adding or replacing documents.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentsWriteQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<&'a str>,
}

// ============================================================================
// Updates
// ============================================================================

/// Identifier of an enqueued asynchronous update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateId {
    /// Update id.
    pub update_id: u64,
}

/// Processing state of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateState {
    /// Waiting to be processed.
    Enqueued,
    /// Applied successfully.
    Processed,
    /// Processing failed.
    Failed,
}

impl std::fmt::Display for UpdateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enqueued => write!(f, "enqueued"),
            Self::Processed => write!(f, "processed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Status of an asynchronous update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Processing state.
    pub status: UpdateState,
    /// Update id.
    pub update_id: u64,
    /// Kind of update, as reported by the service.
    #[serde(rename = "type", default)]
    pub update_type: Option<Value>,
    /// Processing duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Enqueue date.
    #[serde(default)]
    pub enqueued_at: Option<String>,
    /// Processing date.
    #[serde(default)]
    pub processed_at: Option<String>,
    /// Failure reason.
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Search
// ============================================================================

/// Search parameters, sent as a query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Query words.
    pub q: String,
    /// Number of hits to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Maximum number of hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Comma separated attributes to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<String>,
    /// Comma separated attributes to crop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_crop: Option<String>,
    /// Length of cropped values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_length: Option<usize>,
    /// Comma separated attributes to highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_highlight: Option<String>,
    /// Filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Whether to return match positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<bool>,
}

impl SearchQuery {
    /// Creates a query for the given words.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Sets the number of hits to skip.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the maximum number of hits.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts the attributes returned for each hit.
    #[must_use]
    pub fn with_attributes_to_retrieve(mut self, attributes: &[&str]) -> Self {
        self.attributes_to_retrieve = Some(attributes.join(","));
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }
}

/// Search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    /// Matching documents.
    pub hits: Vec<T>,
    /// Number of hits skipped.
    #[serde(default)]
    pub offset: usize,
    /// Maximum number of hits requested.
    #[serde(default)]
    pub limit: usize,
    /// Estimated total number of hits.
    #[serde(default)]
    pub nb_hits: usize,
    /// Whether `nb_hits` is exact.
    #[serde(default)]
    pub exhaustive_nb_hits: bool,
    /// Processing time in milliseconds.
    #[serde(default)]
    pub processing_time_ms: u64,
    /// Query echoed back by the service.
    #[serde(default)]
    pub query: String,
}
