// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-mutation operations.
//!
//! Each operation validates first and then performs exactly one store
//! commit. Validation failures never touch the store.

use std::path::Path;
use std::sync::Arc;

use linkclean_core::{
    Clock, IdClock, ImageRef, Inquiry, InquiryRelay, LinkCleanError, MajorCategory, PortfolioId,
    PortfolioItem, ServiceCategory, SettingsPatch, SiteSettings,
};
use linkclean_storage::ContentStore;
use tracing::{debug, info, warn};

use crate::drafts::{ImageSlot, InquiryDraft, PortfolioDraft, SubmissionOrigin, UploadOutcome};
use crate::queries;

/// Clock whose millisecond readings never repeat.
struct Sequenced<'a> {
    clock: &'a dyn Clock,
    ids: &'a IdClock,
}

impl Clock for Sequenced<'_> {
    fn now_millis(&self) -> u64 {
        self.ids.next_id(self.clock)
    }

    fn today(&self) -> String {
        self.clock.today()
    }
}

/// Owns the content store and performs every site content change.
pub struct ContentService {
    store: ContentStore,
    relay: Arc<dyn InquiryRelay>,
    clock: Arc<dyn Clock>,
    ids: IdClock,
}

impl ContentService {
    pub fn new(store: ContentStore, relay: Arc<dyn InquiryRelay>, clock: Arc<dyn Clock>) -> Self {
        let ids = IdClock::new();
        // New ids must sort after every stored numeric id.
        if let Some(max) = store
            .portfolio()
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
        {
            ids.observe(max);
        }
        Self {
            store,
            relay,
            clock,
            ids,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn into_store(self) -> ContentStore {
        self.store
    }

    pub fn relay_name(&self) -> &str {
        self.relay.name()
    }

    /// Re-reads durable storage, dropping the in-memory snapshot.
    pub async fn reload(&mut self) -> Result<(), LinkCleanError> {
        self.store.reload().await
    }

    pub async fn replace_settings(&mut self, settings: SiteSettings) -> Result<(), LinkCleanError> {
        self.store.replace_settings(settings).await?;
        info!("site settings replaced");
        Ok(())
    }

    /// Overwrites only the fields present in `patch`.
    pub async fn merge_settings(&mut self, patch: SettingsPatch) -> Result<&SiteSettings, LinkCleanError> {
        if patch.is_empty() {
            debug!("empty settings patch, nothing to write");
            return Ok(self.store.settings());
        }
        let merged = patch.apply(self.store.settings());
        self.store.replace_settings(merged).await?;
        info!("site settings updated");
        Ok(self.store.settings())
    }

    /// Commits `draft` and inserts the entry at the front of the portfolio.
    ///
    /// On success the draft is reset. On failure it is left untouched so the
    /// form can be corrected.
    pub async fn append_portfolio(
        &mut self,
        draft: &mut PortfolioDraft,
        origin: SubmissionOrigin,
    ) -> Result<PortfolioItem, LinkCleanError> {
        let clock = Sequenced {
            clock: self.clock.as_ref(),
            ids: &self.ids,
        };
        let item = draft
            .commit(origin, &clock)
            .map_err(LinkCleanError::Validation)?;

        let mut portfolio = Vec::with_capacity(self.store.portfolio().len() + 1);
        portfolio.push(item.clone());
        portfolio.extend_from_slice(self.store.portfolio());
        self.store.replace_portfolio(portfolio).await?;

        info!(id = %item.id, ?origin, category = %item.category, "portfolio entry added");
        draft.reset();
        Ok(item)
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub async fn delete_portfolio(&mut self, id: &PortfolioId) -> Result<bool, LinkCleanError> {
        if !self.store.portfolio().iter().any(|p| &p.id == id) {
            debug!(%id, "portfolio entry not found, nothing to delete");
            return Ok(false);
        }
        let remaining: Vec<_> = self
            .store
            .portfolio()
            .iter()
            .filter(|p| &p.id != id)
            .cloned()
            .collect();
        self.store.replace_portfolio(remaining).await?;
        info!(%id, "portfolio entry deleted");
        Ok(true)
    }

    /// Sends the inquiry to the relay and records it locally once delivered.
    ///
    /// A relay failure leaves the local inquiry list unchanged and the draft
    /// intact for resubmission.
    pub async fn submit_inquiry(&mut self, draft: &mut InquiryDraft) -> Result<Inquiry, LinkCleanError> {
        let inquiry = draft.commit().map_err(LinkCleanError::Validation)?;

        if let Err(e) = self.relay.submit(&inquiry).await {
            warn!(error = %e, relay = self.relay.name(), "inquiry delivery failed, not recorded");
            return Err(e);
        }

        let mut inquiries = self.store.inquiries().to_vec();
        inquiries.push(inquiry.clone());
        self.store.replace_inquiries(inquiries).await?;

        info!(service_type = %inquiry.service_type, "inquiry recorded");
        draft.reset();
        Ok(inquiry)
    }

    /// Reads and encodes the image at `path` into `slot` of `draft`.
    pub async fn attach_image(
        &self,
        draft: &mut PortfolioDraft,
        slot: ImageSlot,
        path: impl AsRef<Path>,
    ) -> Result<UploadOutcome, LinkCleanError> {
        let ticket = draft.begin_upload(slot);
        let result = linkclean_media::encode_file(path).await.map(ImageRef::from);
        if let Err(e) = &result {
            warn!(?slot, error = %e, "image could not be read");
        }
        draft.finish_upload(ticket, result)
    }

    pub fn portfolio_by_major(&self, major: Option<MajorCategory>) -> Vec<&PortfolioItem> {
        queries::portfolio_by_major(self.store.portfolio(), major)
    }

    pub fn service_options(&self) -> Vec<ServiceCategory> {
        queries::service_options(self.store.services())
    }
}
