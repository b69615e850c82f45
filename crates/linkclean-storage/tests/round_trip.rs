// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: whatever the store commits, a reload reads back.

use std::sync::Arc;

use linkclean_core::{
    ImageRef, Inquiry, MajorCategory, PortfolioId, PortfolioItem, ServiceCategory, SiteSettings,
};
use linkclean_storage::{ContentStore, MemoryKv, StoreKeys};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn category() -> impl Strategy<Value = ServiceCategory> {
    let all: Vec<_> = ServiceCategory::iter().collect();
    proptest::sample::select(all)
}

fn major() -> impl Strategy<Value = MajorCategory> {
    let all: Vec<_> = MajorCategory::iter().collect();
    proptest::sample::select(all)
}

fn portfolio_item() -> impl Strategy<Value = PortfolioItem> {
    (
        1u64..u64::MAX / 2,
        "\\PC{1,40}",
        "\\PC{0,80}",
        major(),
        category(),
        "[A-Za-z0-9+/]{4,64}",
        "[A-Za-z0-9+/]{4,64}",
    )
        .prop_map(|(id, title, description, major_category, category, before, after)| {
            PortfolioItem {
                id: PortfolioId(id.to_string()),
                title,
                description,
                major_category,
                category,
                before_img: ImageRef(format!("data:image/jpeg;base64,{before}")),
                after_img: ImageRef(format!("data:image/png;base64,{after}")),
                date: "2026-05-05".to_string(),
            }
        })
}

fn inquiry() -> impl Strategy<Value = Inquiry> {
    ("\\PC{1,20}", "0[0-9]{1,2}-[0-9]{3,4}-[0-9]{4}", category(), "\\PC{0,200}").prop_map(
        |(name, phone, service_type, message)| Inquiry {
            name,
            phone,
            service_type,
            message,
        },
    )
}

fn settings() -> impl Strategy<Value = SiteSettings> {
    ("\\PC{1,30}", "\\PC{0,60}", "[0-9-]{7,13}", "#[0-9A-F]{6}").prop_map(
        |(site_name, hero_title, phone, accent_color)| SiteSettings {
            site_name,
            hero_title,
            phone,
            accent_color,
            ..linkclean_core::defaults::initial_settings()
        },
    )
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn committed_collections_survive_reload(
        settings in settings(),
        portfolio in proptest::collection::vec(portfolio_item(), 0..6),
        inquiries in proptest::collection::vec(inquiry(), 0..6),
    ) {
        runtime().block_on(async {
            let kv = Arc::new(MemoryKv::new());
            let mut store = ContentStore::open(kv.clone(), StoreKeys::default()).await.unwrap();
            store.replace_settings(settings.clone()).await.unwrap();
            store.replace_portfolio(portfolio.clone()).await.unwrap();
            store.replace_inquiries(inquiries.clone()).await.unwrap();

            let reopened = ContentStore::open(kv, StoreKeys::default()).await.unwrap();
            prop_assert_eq!(reopened.settings(), &settings);
            prop_assert_eq!(reopened.portfolio(), portfolio.as_slice());
            prop_assert_eq!(reopened.inquiries(), inquiries.as_slice());
            prop_assert_eq!(reopened.services(), store.services());
            Ok(())
        })?;
    }
}
