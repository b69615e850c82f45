// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unsaved form state for portfolio entries and inquiries.
//!
//! A draft collects fields and images until `commit` turns it into a
//! validated entity. Image uploads are tracked with [`UploadTicket`]s so an
//! upload that finishes after the draft was reset is dropped instead of
//! leaking into the new form.

use linkclean_core::{
    Clock, ImageRef, Inquiry, LinkCleanError, MajorCategory, PortfolioId, PortfolioItem,
    ServiceCategory, ValidationError,
};
use uuid::Uuid;

/// Prefix marking entries submitted from the public portfolio form.
pub const GUEST_TITLE_PREFIX: &str = "[고객후기] ";

/// Which of the two photos an upload fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Before,
    After,
}

impl ImageSlot {
    fn index(self) -> usize {
        match self {
            Self::Before => 0,
            Self::After => 1,
        }
    }
}

/// Who is submitting a portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOrigin {
    /// Public visitor form: title is tagged and the category forced to professional.
    Guest,
    /// Admin dashboard: stored as entered.
    Admin,
}

/// Claim on one in-flight image upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket to finish_upload once the image is read"]
pub struct UploadTicket {
    generation: Uuid,
    slot: ImageSlot,
    seq: u64,
}

impl UploadTicket {
    pub fn slot(&self) -> ImageSlot {
        self.slot
    }
}

/// What happened to a finished upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Applied,
    /// The draft was reset or the slot re-picked while the read was running.
    Discarded,
}

/// A portfolio entry being filled in.
#[derive(Debug, Clone)]
pub struct PortfolioDraft {
    title: String,
    description: String,
    major_category: MajorCategory,
    category: ServiceCategory,
    images: [Option<ImageRef>; 2],
    pending: [Option<u64>; 2],
    next_seq: u64,
    generation: Uuid,
}

impl Default for PortfolioDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            major_category: MajorCategory::Professional,
            category: ServiceCategory::MoveIn,
            images: [None, None],
            pending: [None, None],
            next_seq: 0,
            generation: Uuid::new_v4(),
        }
    }
}

impl PortfolioDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_major_category(&mut self, major: MajorCategory) -> &mut Self {
        self.major_category = major;
        self
    }

    pub fn set_category(&mut self, category: ServiceCategory) -> &mut Self {
        self.category = category;
        self
    }

    /// Sets an image directly, e.g. an external URL entered by an admin.
    pub fn set_image(&mut self, slot: ImageSlot, image: impl Into<ImageRef>) -> &mut Self {
        self.images[slot.index()] = Some(image.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn major_category(&self) -> MajorCategory {
        self.major_category
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImageRef> {
        self.images[slot.index()].as_ref()
    }

    /// Identifies this incarnation of the form; changes on [`reset`](Self::reset).
    pub fn generation(&self) -> Uuid {
        self.generation
    }

    pub fn is_uploading(&self) -> bool {
        self.pending.iter().any(Option::is_some)
    }

    fn has_image(&self, slot: ImageSlot) -> bool {
        self.image(slot).is_some_and(|img| !img.is_empty())
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_uploading() && self.has_image(ImageSlot::Before) && self.has_image(ImageSlot::After)
    }

    /// Marks `slot` as uploading. A later ticket for the same slot
    /// supersedes this one.
    pub fn begin_upload(&mut self, slot: ImageSlot) -> UploadTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending[slot.index()] = Some(seq);
        UploadTicket {
            generation: self.generation,
            slot,
            seq,
        }
    }

    /// Applies the result of an upload started with `ticket`.
    ///
    /// Stale tickets are discarded without touching the draft. A read error
    /// clears the pending mark, leaves the slot as it was and is returned.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<ImageRef, LinkCleanError>,
    ) -> Result<UploadOutcome, LinkCleanError> {
        let idx = ticket.slot.index();
        if ticket.generation != self.generation || self.pending[idx] != Some(ticket.seq) {
            return Ok(UploadOutcome::Discarded);
        }
        self.pending[idx] = None;
        let image = result?;
        self.images[idx] = Some(image);
        Ok(UploadOutcome::Applied)
    }

    /// Validates the draft and builds the entry it describes.
    ///
    /// The id and date come from `clock`; the draft itself is not consumed
    /// so it stays available for correction when validation fails.
    pub fn commit(
        &self,
        origin: SubmissionOrigin,
        clock: &dyn Clock,
    ) -> Result<PortfolioItem, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let title = self.title.trim();
        if title.is_empty() {
            errors.push(ValidationError::MissingTitle);
        }
        if self.is_uploading() {
            errors.push(ValidationError::UploadPending);
        }
        if !self.has_image(ImageSlot::Before) {
            errors.push(ValidationError::MissingBeforeImage);
        }
        if !self.has_image(ImageSlot::After) {
            errors.push(ValidationError::MissingAfterImage);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let (title, major_category) = match origin {
            SubmissionOrigin::Guest => (
                format!("{GUEST_TITLE_PREFIX}{title}"),
                MajorCategory::Professional,
            ),
            SubmissionOrigin::Admin => (title.to_string(), self.major_category),
        };
        let [before_img, after_img] = self.images.clone().map(Option::unwrap_or_default);

        Ok(PortfolioItem {
            id: PortfolioId(clock.now_millis().to_string()),
            title,
            description: self.description.trim().to_string(),
            major_category,
            category: self.category,
            before_img,
            after_img,
            date: clock.today(),
        })
    }

    /// Clears the form and starts a new generation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A contact-form inquiry being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub phone: String,
    pub service_type: ServiceCategory,
    pub message: String,
}

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            service_type: ServiceCategory::MoveIn,
            message: String::new(),
        }
    }
}

impl InquiryDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        service_type: ServiceCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            service_type,
            message: message.into(),
        }
    }

    pub fn commit(&self) -> Result<Inquiry, Vec<ValidationError>> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        let errors: Vec<_> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| ValidationError::MissingField { field })
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Inquiry {
            name: self.name.clone(),
            phone: self.phone.clone(),
            service_type: self.service_type,
            message: self.message.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
