//! Client-side content store used by the admin views.
//!
//! Holds the working copy of the site document for one edit session. Updaters
//! only touch memory; nothing is persisted until [`ContentStore::save_data`].

use crate::models::{
    AboutMePatch, ContactPatch, EntrepreneurshipPatch, GlobalPatch, GrowthNotesPatch, HomePatch,
    ProjectProgressPatch, SiteDocument,
};

/// Path of the site document endpoint, relative to the API base URL.
pub const SITE_DATA_ENDPOINT: &str = "/api/site-data";

/// Errors returned by content store requests.
#[derive(Debug)]
pub enum StoreError {
    /// Request could not be sent or the connection failed
    Http(String),
    /// Server answered with a non-success status
    Status(u16),
    /// Response body was not a site document
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Http(msg) => write!(f, "request failed: {}", msg),
            StoreError::Status(code) => write!(f, "server responded with status {}", code),
            StoreError::Decode(msg) => write!(f, "invalid site data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Working copy of the site document plus request state.
#[derive(Debug, Clone)]
pub struct ContentStore {
    http: reqwest::Client,
    base_url: String,
    document: SiteDocument,
    is_loading: bool,
    error: Option<String>,
}

impl ContentStore {
    /// Create a store for the API served at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            document: SiteDocument::default(),
            is_loading: true,
            error: None,
        }
    }

    pub fn document(&self) -> &SiteDocument {
        &self.document
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SITE_DATA_ENDPOINT)
    }

    /// Fetch the document and replace the working copy.
    ///
    /// On failure the previous working copy is kept and the error recorded.
    pub async fn fetch_data(&mut self) {
        self.is_loading = true;
        self.error = None;

        match self.request_document().await {
            Ok(document) => {
                self.document = document;
            }
            Err(e) => {
                tracing::error!("Error fetching site data: {}", e);
                self.error = Some(e.to_string());
            }
        }

        self.is_loading = false;
    }

    async fn request_document(&self) -> Result<SiteDocument, StoreError> {
        let response = self
            .http
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        response
            .json::<SiteDocument>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Send the whole working copy to the server. No re-fetch follows.
    pub async fn save_data(&self) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&self.document)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!("Error saving site data: status {}", status);
            return Err(StoreError::Status(status));
        }

        Ok(())
    }

    // ==================== SECTION UPDATERS ====================

    pub fn update_global(&mut self, patch: GlobalPatch) {
        self.document.global.apply(patch);
    }

    pub fn update_home(&mut self, patch: HomePatch) {
        self.document.home.apply(patch);
    }

    pub fn update_about_me(&mut self, patch: AboutMePatch) {
        self.document.about_me.apply(patch);
    }

    pub fn update_project_progress(&mut self, patch: ProjectProgressPatch) {
        self.document.project_progress.apply(patch);
    }

    pub fn update_entrepreneurship(&mut self, patch: EntrepreneurshipPatch) {
        self.document.entrepreneurship.apply(patch);
    }

    pub fn update_growth_notes(&mut self, patch: GrowthNotesPatch) {
        self.document.growth_notes.apply(patch);
    }

    pub fn update_contact(&mut self, patch: ContactPatch) {
        self.document.contact.apply(patch);
    }
}
