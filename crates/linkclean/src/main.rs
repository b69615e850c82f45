// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Link Clean - site content administration.
//!
//! This is the binary entry point for managing the content store from a
//! terminal: settings, services, portfolio entries and inquiries.

mod commands;
mod doctor;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linkclean_config::LinkCleanConfig;
use linkclean_core::{MajorCategory, PortfolioId, ServiceCategory, SettingsPatch};

/// Link Clean - site content administration.
#[derive(Parser, Debug)]
#[command(name = "linkclean", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or change site settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Show the service catalog.
    Services {
        #[command(subcommand)]
        action: ServicesCommand,
    },
    /// Manage portfolio entries.
    Portfolio {
        #[command(subcommand)]
        action: PortfolioCommand,
    },
    /// List or submit contact inquiries.
    Inquiry {
        #[command(subcommand)]
        action: InquiryCommand,
    },
    /// Print the lucky moving days calendar.
    LuckyDays {
        /// Month label such as "26년 3월"; lists all months when omitted.
        month: Option<String>,
    },
    /// Run diagnostic checks against storage and the relay.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Print the current settings as JSON.
    Show,
    /// Overwrite the given fields, keeping the rest.
    Set(SettingsArgs),
}

#[derive(Args, Debug, Default)]
struct SettingsArgs {
    #[arg(long)]
    site_name: Option<String>,
    #[arg(long)]
    hero_title: Option<String>,
    #[arg(long)]
    hero_subtitle: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    kakao_link: Option<String>,
    #[arg(long)]
    naver_talk_link: Option<String>,
    #[arg(long)]
    instagram_link: Option<String>,
    #[arg(long)]
    primary_color: Option<String>,
    #[arg(long)]
    accent_color: Option<String>,
    #[arg(long)]
    logo_url: Option<String>,
}

impl From<SettingsArgs> for SettingsPatch {
    fn from(args: SettingsArgs) -> Self {
        SettingsPatch {
            site_name: args.site_name,
            hero_title: args.hero_title,
            hero_subtitle: args.hero_subtitle,
            phone: args.phone,
            address: args.address,
            kakao_link: args.kakao_link,
            naver_talk_link: args.naver_talk_link,
            instagram_link: args.instagram_link,
            primary_color: args.primary_color,
            accent_color: args.accent_color,
            logo_url: args.logo_url,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ServicesCommand {
    /// List services with their sub-categories.
    List,
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// List entries, most recent first.
    List {
        /// Only entries in this major category (e.g. professional, special).
        #[arg(long)]
        major: Option<MajorCategory>,
    },
    /// Add an entry from two local image files.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "professional")]
        major: MajorCategory,
        /// Sub-category label, e.g. 입주청소.
        #[arg(long)]
        category: ServiceCategory,
        #[arg(long, value_name = "PATH")]
        before: PathBuf,
        #[arg(long, value_name = "PATH")]
        after: PathBuf,
        /// Store as a customer review submitted through the public form.
        #[arg(long)]
        guest: bool,
    },
    /// Delete an entry by id.
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum InquiryCommand {
    /// List recorded inquiries.
    List,
    /// Send an inquiry to the relay and record it on success.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        /// Requested service label, e.g. 입주청소.
        #[arg(long, default_value = "입주청소")]
        service: ServiceCategory,
        #[arg(long)]
        message: String,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("linkclean={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> LinkCleanConfig {
    let loaded = match path {
        Some(path) => linkclean_config::load_and_validate_path(path),
        None => linkclean_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            linkclean_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    init_tracing(&config.logging.level);

    let Some(command) = cli.command else {
        println!("linkclean: use --help for available commands");
        return;
    };

    let result = match command {
        Commands::Settings { action } => match action {
            SettingsCommand::Show => commands::settings_show(&config).await,
            SettingsCommand::Set(args) => commands::settings_set(&config, args.into()).await,
        },
        Commands::Services {
            action: ServicesCommand::List,
        } => commands::services_list(&config).await,
        Commands::Portfolio { action } => match action {
            PortfolioCommand::List { major } => commands::portfolio_list(&config, major).await,
            PortfolioCommand::Add {
                title,
                description,
                major,
                category,
                before,
                after,
                guest,
            } => {
                let entry = commands::NewEntry {
                    title,
                    description,
                    major,
                    category,
                    before,
                    after,
                    guest,
                };
                commands::portfolio_add(&config, entry).await
            }
            PortfolioCommand::Remove { id } => {
                commands::portfolio_remove(&config, PortfolioId(id)).await
            }
        },
        Commands::Inquiry { action } => match action {
            InquiryCommand::List => commands::inquiry_list(&config).await,
            InquiryCommand::Submit {
                name,
                phone,
                service,
                message,
            } => commands::inquiry_submit(&config, name, phone, service, message).await,
        },
        Commands::LuckyDays { month } => commands::lucky_days(month.as_deref()),
        Commands::Doctor { plain } => doctor::run_doctor(&config, plain).await,
    };

    if let Err(e) = result {
        eprintln!("linkclean: {e}");
        std::process::exit(1);
    }
}
