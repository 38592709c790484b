//! Portfolio document store — the single owning state container.
//!
//! The document lives behind one `RwLock`; every mutation goes through a
//! transactional update closure and is persisted in full before the call
//! returns. No debouncing, no partial writes, no schema migration.
//! Multi-session editing is unsupported: two processes sharing a data
//! directory get last-write-wins semantics.

use anyhow::Context;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::portfolio::CareerContext;
use crate::store::local::LocalStore;

/// Storage key holding the serialized document.
pub const PORTFOLIO_KEY: &str = "career_agent_portfolio_data";
/// Storage key holding the persisted authorization flag.
pub const AUTHORIZED_KEY: &str = "career_portfolio_is_authorized";

pub struct PortfolioStore {
    local: LocalStore,
    doc: RwLock<CareerContext>,
}

/// A downloadable backup: pretty-printed document plus its date-stamped
/// filename.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub body: String,
}

impl PortfolioStore {
    /// Loads the document from storage. A missing key or a parse failure
    /// falls back to the built-in default document; parse failures are
    /// logged, never surfaced.
    pub fn open(local: LocalStore) -> Self {
        let doc = match local.get(PORTFOLIO_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<CareerContext>(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("Failed to parse saved portfolio document, using defaults: {e}");
                    CareerContext::default()
                }
            },
            Ok(None) => {
                info!("No saved portfolio document, using defaults");
                CareerContext::default()
            }
            Err(e) => {
                warn!("Failed to read portfolio storage, using defaults: {e}");
                CareerContext::default()
            }
        };
        Self {
            local,
            doc: RwLock::new(doc),
        }
    }

    /// Snapshot of the current document.
    pub async fn document(&self) -> CareerContext {
        self.doc.read().await.clone()
    }

    /// Applies an infallible mutation and persists the result.
    pub async fn update<R>(
        &self,
        f: impl FnOnce(&mut CareerContext) -> R,
    ) -> Result<R, AppError> {
        self.try_update(|doc| Ok(f(doc))).await
    }

    /// Applies a fallible mutation. The document is persisted only when
    /// the closure succeeds; on error the in-memory state is left as the
    /// closure left it, matching the save-after-change discipline.
    pub async fn try_update<R>(
        &self,
        f: impl FnOnce(&mut CareerContext) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut doc = self.doc.write().await;
        let out = f(&mut doc)?;
        self.persist(&doc)?;
        Ok(out)
    }

    /// Serializes the document for download, named with the current date.
    pub async fn export(&self) -> Result<ExportFile, AppError> {
        let doc = self.doc.read().await;
        let body = serde_json::to_string_pretty(&*doc)
            .context("Failed to serialize portfolio document")?;
        Ok(ExportFile {
            filename: format!("career_backup_{}.json", Utc::now().format("%Y-%m-%d")),
            body,
        })
    }

    /// Replaces the document wholesale from an uploaded backup file.
    ///
    /// Validation stops at a successful parse: because every document
    /// field has a serde default, any well-formed JSON object is
    /// accepted as-is. Parse failures surface to the caller.
    pub async fn import(&self, bytes: &[u8]) -> Result<(), AppError> {
        let imported: CareerContext = serde_json::from_slice(bytes)
            .map_err(|_| AppError::Validation("Invalid file format.".to_string()))?;
        let mut doc = self.doc.write().await;
        *doc = imported;
        self.persist(&doc)?;
        Ok(())
    }

    /// Factory reset: restores the default document and clears both
    /// storage keys, including the persisted authorization flag.
    pub async fn reset(&self) -> Result<CareerContext, AppError> {
        let mut doc = self.doc.write().await;
        *doc = CareerContext::default();
        self.local.remove(PORTFOLIO_KEY)?;
        self.local.remove(AUTHORIZED_KEY)?;
        info!("Portfolio factory reset to defaults");
        Ok(doc.clone())
    }

    fn persist(&self, doc: &CareerContext) -> Result<(), AppError> {
        let json =
            serde_json::to_string(doc).context("Failed to serialize portfolio document")?;
        self.local.set(PORTFOLIO_KEY, &json)?;
        Ok(())
    }
}
