// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiled-in seed content used when durable storage holds nothing usable.

use crate::types::{
    ImageRef, Inquiry, MajorCategory, PortfolioId, PortfolioItem, ServiceCategory, ServiceInfo,
    SiteSettings,
};

/// Settings shown on a fresh install.
pub fn initial_settings() -> SiteSettings {
    SiteSettings {
        site_name: "링크클린 (Link Clean)".to_string(),
        hero_title: "제주의 자연을 닮은 깨끗함, 공간의 품격을 깨우다".to_string(),
        hero_subtitle: "단순한 청소를 넘어 공간 본연의 가치를 되찾아드리는 링크클린의\n독보적인 프리미엄 케어 솔루션입니다.".to_string(),
        phone: "064-763-4545".to_string(),
        address: "제주시 : 제주특별자치도 제주시 연동 2315-3 / 서귀포시 : 제주특별자치도 서귀포시 서호호근로 86-6".to_string(),
        kakao_link: "https://pf.kakao.com/_xfxdrxmM".to_string(),
        naver_talk_link: "https://talk.naver.com/ct/wc92zf?frm=home".to_string(),
        instagram_link: "https://instagram.com/linkcleaning".to_string(),
        primary_color: "#E3F2FD".to_string(),
        accent_color: "#8E24AA".to_string(),
        logo_url: "https://api.iconify.design/solar:sparkles-bold-duotone.svg?color=%238e24aa"
            .to_string(),
    }
}

/// The service catalog, in display order.
pub fn initial_services() -> Vec<ServiceInfo> {
    use ServiceCategory::*;

    vec![
        ServiceInfo {
            id: "m2".to_string(),
            major_category: MajorCategory::Professional,
            title: "전문청소".to_string(),
            description: "공간의 목적에 따른 정밀 클리닝으로 최적의 주거/상업 환경을 조성합니다."
                .to_string(),
            sub_categories: vec![MoveIn, MoveOut, PostRenovation, Occupied, ExteriorWallWindow],
        },
        ServiceInfo {
            id: "m3".to_string(),
            major_category: MajorCategory::Special,
            title: "특수청소".to_string(),
            description:
                "특수한 상황에서의 오염 및 폐기물 처리를 전문 장비와 인력으로 안전하게 해결합니다."
                    .to_string(),
            sub_categories: vec![
                PostConstruction,
                FireDamage,
                HoarderHouse,
                EstateAndLoneDeath,
                WasteDisposal,
            ],
        },
        ServiceInfo {
            id: "m5".to_string(),
            major_category: MajorCategory::Preventive,
            title: "예방시공".to_string(),
            description: "공간의 오염을 방지하고 쾌적함을 오래 유지하기 위한 전문 시공 솔루션입니다."
                .to_string(),
            sub_categories: vec![GroutSealing, SickHouseTreatment, FloorWax, PestControl],
        },
        ServiceInfo {
            id: "m4".to_string(),
            major_category: MajorCategory::Appliance,
            title: "가전청소".to_string(),
            description:
                "분해 세척을 통해 보이지 않는 세균과 먼지를 제거하여 가전의 성능과 건강을 지킵니다."
                    .to_string(),
            sub_categories: vec![AirConditioner, Refrigerator, SofaMattress, RangeHood],
        },
    ]
}

/// Showcase entries present before anyone submits their own.
pub fn initial_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: PortfolioId::from("p1"),
            title: "제주시 노형동 신축 아파트 입주청소".to_string(),
            description: "베란다 창틀과 주방 기름때 완벽 제거 및 살균 소독.".to_string(),
            major_category: MajorCategory::Professional,
            category: ServiceCategory::MoveIn,
            before_img: ImageRef::from(
                "https://images.unsplash.com/photo-1584622781564-1d9876a13d00?auto=format&fit=crop&q=80&w=800",
            ),
            after_img: ImageRef::from(
                "https://images.unsplash.com/photo-1527515637462-cff94eecc1ac?auto=format&fit=crop&q=80&w=800",
            ),
            date: "2024-03-15".to_string(),
        },
        PortfolioItem {
            id: PortfolioId::from("p2"),
            title: "연동 대형 카페 외벽/외창 청소".to_string(),
            description: "염분 제거 및 고소 작업차를 이용한 전면 유리 세척.".to_string(),
            major_category: MajorCategory::Professional,
            category: ServiceCategory::ExteriorWallWindow,
            before_img: ImageRef::from(
                "https://images.unsplash.com/photo-1613665813446-82a78c468a1d?auto=format&fit=crop&q=80&w=800",
            ),
            after_img: ImageRef::from(
                "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=800",
            ),
            date: "2024-03-20".to_string(),
        },
    ]
}

pub fn initial_inquiries() -> Vec<Inquiry> {
    Vec::new()
}
