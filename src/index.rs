//! Index handle: index management, documents, search and update tracking.

use crate::error::Error;
use crate::request::{HttpRequests, with_query};
use crate::stat;
use crate::types::*;
use serde::Serialize;
use serde::de::DeserializeOwned;


const INDEXES_PATH: &str = "indexes";

/// Local handle on a remote index.
///
/// The handle carries what the service reported when it was created and is
/// never refreshed implicitly; call [`Index::info`] for current values.
#[derive(Debug, Clone)]
pub struct Index {
    uid: String,
    primary_key: Option<String>,
    name: Option<String>,
    http: HttpRequests,
}

impl Index {
    pub(crate) fn new(http: HttpRequests, uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            primary_key: None,
            name: None,
            http,
        }
    }

    pub(crate) fn from_info(http: HttpRequests, info: IndexInfo) -> Self {
        Self {
            uid: info.uid,
            primary_key: info.primary_key,
            name: info.name,
            http,
        }
    }

    pub(crate) async fn create(
        http: &HttpRequests,
        uid: &str,
        primary_key: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, Error> {
        let body = CreateIndexRequest {
            uid,
            primary_key,
            name,
        };
        let info: Option<IndexInfo> = http.post(INDEXES_PATH, Some(&body)).await?;
        let (reported_key, reported_name) = info
            .map(|info| (info.primary_key, info.name))
            .unwrap_or_default();

        Ok(Self {
            uid: uid.to_string(),
            primary_key: reported_key.or_else(|| primary_key.map(str::to_string)),
            name: reported_name.or_else(|| name.map(str::to_string)),
            http: http.clone(),
        })
    }

    pub(crate) async fn get_indexes(http: &HttpRequests) -> Result<Vec<IndexInfo>, Error> {
        http.get(INDEXES_PATH).await
    }

    pub(crate) async fn get_index(http: &HttpRequests, uid: &str) -> Result<Self, Error> {
        let info: IndexInfo = http.get(&index_path(uid)).await?;
        Ok(Self::from_info(http.clone(), info))
    }

    /// Unique identifier of the index.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Primary key known when the handle was built.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Display name known when the handle was built.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // ========================================================================
    // Index Management
    // ========================================================================

    /// Fetches the current index descriptor.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn info(&self) -> Result<IndexInfo, Error> {
        self.http.get(&index_path(&self.uid)).await
    }

    /// Updates the index name and/or primary key.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update(
        &self,
        name: Option<&str>,
        primary_key: Option<&str>,
    ) -> Result<IndexInfo, Error> {
        let body = UpdateIndexRequest { name, primary_key };
        self.http.put(&index_path(&self.uid), Some(&body)).await
    }

    /// Deletes the index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(self) -> Result<(), Error> {
        self.http.delete_empty(&index_path(&self.uid)).await
    }

    /// Fetches the primary key currently set on the service.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_primary_key(&self) -> Result<Option<String>, Error> {
        Ok(self.info().await?.primary_key)
    }

    /// Gets statistics of this index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_stats(&self) -> Result<IndexStats, Error> {
        stat::get_index_stats(&self.http, &self.uid).await
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// Adds documents, replacing existing ones with the same id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn add_documents<D: Serialize>(
        &self,
        documents: &[D],
        primary_key: Option<&str>,
    ) -> Result<UpdateId, Error> {
        let path = with_query(
            &self.documents_path(),
            &DocumentsWriteQuery { primary_key },
        )?;
        self.http.post(&path, Some(documents)).await
    }

    /// Adds documents, merging fields into existing ones with the same id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_documents<D: Serialize>(
        &self,
        documents: &[D],
        primary_key: Option<&str>,
    ) -> Result<UpdateId, Error> {
        let path = with_query(
            &self.documents_path(),
            &DocumentsWriteQuery { primary_key },
        )?;
        self.http.put(&path, Some(documents)).await
    }

    /// Gets one document by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_document<T: DeserializeOwned>(&self, document_id: &str) -> Result<T, Error> {
        self.http
            .get(&format!("{}/{}", self.documents_path(), document_id))
            .await
    }

    /// Lists documents.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_documents<T: DeserializeOwned>(
        &self,
        query: Option<&DocumentsQuery>,
    ) -> Result<Vec<T>, Error> {
        let path = match query {
            Some(q) => with_query(&self.documents_path(), q)?,
            None => self.documents_path(),
        };
        self.http.get(&path).await
    }

    /// Deletes one document by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_document(&self, document_id: &str) -> Result<UpdateId, Error> {
        self.http
            .delete(&format!("{}/{}", self.documents_path(), document_id))
            .await
    }

    /// Deletes a batch of documents by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_documents<I: Serialize>(&self, document_ids: &[I]) -> Result<UpdateId, Error> {
        self.http
            .post(
                &format!("{}/delete-batch", self.documents_path()),
                Some(document_ids),
            )
            .await
    }

    /// Deletes every document of the index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_all_documents(&self) -> Result<UpdateId, Error> {
        self.http.delete(&self.documents_path()).await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Searches the index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResults<T>, Error> {
        let path = with_query(&format!("{}/search", index_path(&self.uid)), query)?;
        self.http.get(&path).await
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Gets the status of one update.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_update_status(&self, update_id: u64) -> Result<UpdateStatus, Error> {
        self.http
            .get(&format!("{}/{}", self.updates_path(), update_id))
            .await
    }

    /// Gets the status of every update of the index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_all_update_status(&self) -> Result<Vec<UpdateStatus>, Error> {
        self.http.get(&self.updates_path()).await
    }

    fn documents_path(&self) -> String {
        format!("{}/documents", index_path(&self.uid))
    }

    fn updates_path(&self) -> String {
        format!("{}/updates", index_path(&self.uid))
    }
}

fn index_path(uid: &str) -> String {
    format!("{}/{}", INDEXES_PATH, uid)
}
