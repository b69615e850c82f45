// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handlers behind each `linkclean` subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use linkclean_config::LinkCleanConfig;
use linkclean_content::{ContentService, ImageSlot, InquiryDraft, PortfolioDraft, SubmissionOrigin};
use linkclean_core::{
    ImageRef, LinkCleanError, MajorCategory, PortfolioId, PortfolioItem, ServiceCategory,
    SettingsPatch, SystemClock, lucky_days as calendar,
};

/// Builds the content service described by `config`.
pub async fn open_service(config: &LinkCleanConfig) -> Result<ContentService, LinkCleanError> {
    let store = linkclean_storage::open_store(&config.storage).await?;
    let relay = linkclean_relay::relay_from_config(&config.relay)?;
    Ok(ContentService::new(store, relay, Arc::new(SystemClock)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, LinkCleanError> {
    serde_json::to_string_pretty(value).map_err(|source| LinkCleanError::Codec {
        key: "stdout".to_string(),
        source,
    })
}

pub async fn settings_show(config: &LinkCleanConfig) -> Result<(), LinkCleanError> {
    let service = open_service(config).await?;
    let settings = service.store().settings();
    println!("{}", to_json(settings)?);
    for (branch, address) in settings.branches() {
        println!("  {branch}: {address}");
    }
    Ok(())
}

pub async fn settings_set(config: &LinkCleanConfig, patch: SettingsPatch) -> Result<(), LinkCleanError> {
    if patch.is_empty() {
        println!("nothing to change; pass at least one field, e.g. --phone");
        return Ok(());
    }
    let mut service = open_service(config).await?;
    let updated = service.merge_settings(patch).await?;
    println!("{}", to_json(updated)?);
    Ok(())
}

pub async fn services_list(config: &LinkCleanConfig) -> Result<(), LinkCleanError> {
    let service = open_service(config).await?;
    for info in service.store().services() {
        println!("{} [{}] {}", info.id, info.major_category, info.title);
        let subs: Vec<&str> = info.sub_categories.iter().map(|s| s.as_ref()).collect();
        println!("    {}", subs.join(", "));
    }
    Ok(())
}

fn image_kind(image: &ImageRef) -> &'static str {
    if image.is_inline() { "inline" } else { "url" }
}

fn portfolio_line(item: &PortfolioItem) -> String {
    format!(
        "{:<14} {} {}/{} {} (before: {}, after: {})",
        item.id,
        item.date,
        item.major_category.label(),
        item.category,
        item.title,
        image_kind(&item.before_img),
        image_kind(&item.after_img),
    )
}

pub async fn portfolio_list(
    config: &LinkCleanConfig,
    major: Option<MajorCategory>,
) -> Result<(), LinkCleanError> {
    let service = open_service(config).await?;
    let items = service.portfolio_by_major(major);
    if items.is_empty() {
        println!("no portfolio entries");
    }
    for item in items {
        println!("{}", portfolio_line(item));
    }
    Ok(())
}

/// Fields for a new portfolio entry taken from the command line.
#[derive(Debug)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
    pub major: MajorCategory,
    pub category: ServiceCategory,
    pub before: PathBuf,
    pub after: PathBuf,
    pub guest: bool,
}

pub async fn portfolio_add(config: &LinkCleanConfig, entry: NewEntry) -> Result<(), LinkCleanError> {
    let mut service = open_service(config).await?;

    let mut draft = PortfolioDraft::new();
    draft
        .set_title(entry.title)
        .set_description(entry.description)
        .set_major_category(entry.major)
        .set_category(entry.category);
    service
        .attach_image(&mut draft, ImageSlot::Before, &entry.before)
        .await?;
    service
        .attach_image(&mut draft, ImageSlot::After, &entry.after)
        .await?;

    let origin = if entry.guest {
        SubmissionOrigin::Guest
    } else {
        SubmissionOrigin::Admin
    };
    let item = service.append_portfolio(&mut draft, origin).await?;
    println!("added {}", portfolio_line(&item));
    Ok(())
}

pub async fn portfolio_remove(config: &LinkCleanConfig, id: PortfolioId) -> Result<(), LinkCleanError> {
    let mut service = open_service(config).await?;
    if service.delete_portfolio(&id).await? {
        println!("removed {id}");
    } else {
        println!("no entry with id {id}");
    }
    Ok(())
}

pub async fn inquiry_list(config: &LinkCleanConfig) -> Result<(), LinkCleanError> {
    let service = open_service(config).await?;
    let inquiries = service.store().inquiries();
    if inquiries.is_empty() {
        println!("no inquiries");
    }
    for (n, inquiry) in inquiries.iter().enumerate() {
        println!(
            "{:>3}. {} {} [{}] {}",
            n + 1,
            inquiry.name,
            inquiry.phone,
            inquiry.service_type,
            inquiry.message.replace('\n', " ")
        );
    }
    Ok(())
}

pub async fn inquiry_submit(
    config: &LinkCleanConfig,
    name: String,
    phone: String,
    service_type: ServiceCategory,
    message: String,
) -> Result<(), LinkCleanError> {
    let mut service = open_service(config).await?;
    let mut draft = InquiryDraft::new(name, phone, service_type, message);
    let inquiry = service.submit_inquiry(&mut draft).await?;
    println!(
        "inquiry from {} delivered via {} and recorded",
        inquiry.name,
        service.relay_name()
    );
    Ok(())
}

pub fn lucky_days(month: Option<&str>) -> Result<(), LinkCleanError> {
    let months: Vec<&str> = match month {
        Some(month) => vec![month],
        None => calendar::months().collect(),
    };
    for month in months {
        let Some(days) = calendar::lucky_days(month) else {
            return Err(LinkCleanError::Config(format!(
                "no lucky days published for `{month}`; known months: {}",
                calendar::months().collect::<Vec<_>>().join(", ")
            )));
        };
        let days: Vec<String> = days.iter().map(|d| format!("{d}일")).collect();
        println!("{month}: {}", days.join(", "));
    }
    Ok(())
}
