// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `linkclean doctor` command implementation.
//!
//! Runs diagnostic checks against the configured storage backend, the
//! stored content and the inquiry relay.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use linkclean_config::{LinkCleanConfig, StorageBackend};
use linkclean_core::{HealthStatus, LinkCleanError};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>, start: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            duration: start.elapsed(),
        }
    }

    fn from_health(name: &str, health: Result<HealthStatus, LinkCleanError>, start: Instant) -> Self {
        match health {
            Ok(HealthStatus::Healthy) => Self::new(name, CheckStatus::Pass, "healthy", start),
            Ok(HealthStatus::Degraded(why)) => Self::new(name, CheckStatus::Warn, why, start),
            Ok(HealthStatus::Unhealthy(why)) => Self::new(name, CheckStatus::Fail, why, start),
            Err(e) => Self::new(name, CheckStatus::Fail, e.to_string(), start),
        }
    }
}

/// Run the `linkclean doctor` command.
pub async fn run_doctor(config: &LinkCleanConfig, plain: bool) -> Result<(), LinkCleanError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_storage(config).await,
        check_content(config).await,
        check_relay(config).await,
    ];

    println!();
    println!("  linkclean doctor");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", format_result(result, use_color));
    }
    println!();

    let issues = results
        .iter()
        .filter(|r| r.status != CheckStatus::Pass)
        .count();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(())
}

fn format_result(result: &CheckResult, use_color: bool) -> String {
    use colored::Colorize;

    let duration_ms = result.duration.as_millis();
    if !use_color {
        let tag = match result.status {
            CheckStatus::Pass => "[OK]  ",
            CheckStatus::Warn => "[WARN]",
            CheckStatus::Fail => "[FAIL]",
        };
        return format!(
            "    {tag} {:<12} {} ({duration_ms}ms)",
            result.name, result.message
        );
    }

    let (symbol, message) = match result.status {
        CheckStatus::Pass => ("✓".green(), result.message.normal()),
        CheckStatus::Warn => ("!".yellow(), result.message.yellow()),
        CheckStatus::Fail => ("✗".red(), result.message.red()),
    };
    format!(
        "    {symbol} {:<12} {message} ({duration_ms}ms)",
        result.name
    )
}

/// Opens the configured backend and runs its health check.
async fn check_storage(config: &LinkCleanConfig) -> CheckResult {
    let start = Instant::now();

    if config.storage.backend == StorageBackend::Memory {
        return CheckResult::new(
            "Storage",
            CheckStatus::Warn,
            "in-memory backend; changes are lost on exit",
            start,
        );
    }

    let path = std::path::Path::new(&config.storage.database_path);
    if !path.exists() {
        return CheckResult::new(
            "Storage",
            CheckStatus::Warn,
            format!(
                "not found: {} (will be created on first write)",
                config.storage.database_path
            ),
            start,
        );
    }

    match linkclean_storage::open_backend(&config.storage).await {
        Ok(kv) => CheckResult::from_health("Storage", kv.health_check().await, start),
        Err(e) => CheckResult::new("Storage", CheckStatus::Fail, format!("open failed: {e}"), start),
    }
}

/// Loads every collection and reports their sizes.
async fn check_content(config: &LinkCleanConfig) -> CheckResult {
    let start = Instant::now();
    match linkclean_storage::open_store(&config.storage).await {
        Ok(store) => {
            let incomplete = store.portfolio().iter().filter(|p| !p.is_complete()).count();
            let summary = format!(
                "{} services, {} portfolio entries, {} inquiries",
                store.services().len(),
                store.portfolio().len(),
                store.inquiries().len()
            );
            if incomplete > 0 {
                CheckResult::new(
                    "Content",
                    CheckStatus::Warn,
                    format!("{summary}; {incomplete} entries missing an image"),
                    start,
                )
            } else {
                CheckResult::new("Content", CheckStatus::Pass, summary, start)
            }
        }
        Err(e) => CheckResult::new("Content", CheckStatus::Fail, e.to_string(), start),
    }
}

async fn check_relay(config: &LinkCleanConfig) -> CheckResult {
    let start = Instant::now();
    match linkclean_relay::relay_from_config(&config.relay) {
        Ok(relay) => CheckResult::from_health("Relay", relay.health_check().await, start),
        Err(e) => CheckResult::new("Relay", CheckStatus::Fail, e.to_string(), start),
    }
}
