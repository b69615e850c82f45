// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site content entities and the common types shared by every crate.
//!
//! Field names serialize in camelCase so stored snapshots keep the shape the
//! public site reads (`siteName`, `beforeImg`, `serviceType`, ...).

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of a portfolio entry.
///
/// Assigned from a millisecond clock at creation, so ordering by id is
/// also ordering by insertion. Seed entries use short literal ids (`p1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioId(pub String);

impl PortfolioId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortfolioId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    KeyValue,
    Relay,
}

/// Major service category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MajorCategory {
    LuckyDays,
    Professional,
    Special,
    Appliance,
    Preventive,
}

impl MajorCategory {
    /// Korean display label shown on the site.
    pub fn label(self) -> &'static str {
        match self {
            Self::LuckyDays => "손없는날",
            Self::Professional => "전문청소",
            Self::Special => "특수청소",
            Self::Appliance => "가전청소",
            Self::Preventive => "예방시공",
        }
    }
}

/// Service sub-category label.
///
/// The serialized form is the Korean label itself; it is what visitors pick
/// on the contact form and what the relay receives as `serviceType`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ServiceCategory {
    #[serde(rename = "입주청소")]
    #[strum(serialize = "입주청소")]
    MoveIn,
    #[serde(rename = "이사청소")]
    #[strum(serialize = "이사청소")]
    MoveOut,
    #[serde(rename = "인테리어청소")]
    #[strum(serialize = "인테리어청소")]
    PostRenovation,
    #[serde(rename = "거주청소")]
    #[strum(serialize = "거주청소")]
    Occupied,
    #[serde(rename = "외벽&외창청소")]
    #[strum(serialize = "외벽&외창청소")]
    ExteriorWallWindow,
    #[serde(rename = "준공청소")]
    #[strum(serialize = "준공청소")]
    PostConstruction,
    #[serde(rename = "화재청소")]
    #[strum(serialize = "화재청소")]
    FireDamage,
    #[serde(rename = "쓰레기집청소")]
    #[strum(serialize = "쓰레기집청소")]
    HoarderHouse,
    #[serde(rename = "유품&고독사청소")]
    #[strum(serialize = "유품&고독사청소")]
    EstateAndLoneDeath,
    #[serde(rename = "폐기물처리")]
    #[strum(serialize = "폐기물처리")]
    WasteDisposal,
    #[serde(rename = "줄눈시공")]
    #[strum(serialize = "줄눈시공")]
    GroutSealing,
    #[serde(rename = "새집증후군시공")]
    #[strum(serialize = "새집증후군시공")]
    SickHouseTreatment,
    #[serde(rename = "바닥왁스")]
    #[strum(serialize = "바닥왁스")]
    FloorWax,
    #[serde(rename = "방역&해충소독")]
    #[strum(serialize = "방역&해충소독")]
    PestControl,
    #[serde(rename = "에어컨청소")]
    #[strum(serialize = "에어컨청소")]
    AirConditioner,
    #[serde(rename = "냉장고청소")]
    #[strum(serialize = "냉장고청소")]
    Refrigerator,
    #[serde(rename = "쇼파&매트리스")]
    #[strum(serialize = "쇼파&매트리스")]
    SofaMattress,
    #[serde(rename = "후드청소")]
    #[strum(serialize = "후드청소")]
    RangeHood,
    // Umbrella labels offered by the public submission form.
    #[serde(rename = "전문청소")]
    #[strum(serialize = "전문청소")]
    Professional,
    #[serde(rename = "특수청소")]
    #[strum(serialize = "특수청소")]
    Special,
    #[serde(rename = "가전청소")]
    #[strum(serialize = "가전청소")]
    Appliance,
}

impl ServiceCategory {
    /// The major category this label belongs to.
    pub fn major(self) -> MajorCategory {
        use ServiceCategory::*;
        match self {
            MoveIn | MoveOut | PostRenovation | Occupied | ExteriorWallWindow | Professional => {
                MajorCategory::Professional
            }
            PostConstruction | FireDamage | HoarderHouse | EstateAndLoneDeath | WasteDisposal
            | Special => MajorCategory::Special,
            GroutSealing | SickHouseTreatment | FloorWax | PestControl => {
                MajorCategory::Preventive
            }
            AirConditioner | Refrigerator | SofaMattress | RangeHood | Appliance => {
                MajorCategory::Appliance
            }
        }
    }

    /// Labels selectable on the public portfolio submission form.
    pub fn guest_options() -> [ServiceCategory; 5] {
        [
            Self::MoveIn,
            Self::MoveOut,
            Self::Professional,
            Self::Special,
            Self::Appliance,
        ]
    }

    /// Every known label, in declaration order.
    pub fn all() -> Vec<ServiceCategory> {
        Self::iter().collect()
    }
}

/// Reference to an image: a remote URL or an inline `data:` URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the image bytes are embedded in the reference itself.
    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// True for a blank reference or a `data:` URL with no payload.
    pub fn is_empty(&self) -> bool {
        if self.is_inline() {
            return self
                .0
                .split_once(',')
                .is_none_or(|(_, payload)| payload.trim().is_empty());
        }
        self.0.trim().is_empty()
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Site-wide settings. Exactly one instance exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub phone: String,
    /// Branch addresses joined by ` / `, each as `label : address`.
    pub address: String,
    pub kakao_link: String,
    pub naver_talk_link: String,
    pub instagram_link: String,
    pub primary_color: String,
    pub accent_color: String,
    pub logo_url: String,
}

impl SiteSettings {
    /// Splits the multi-branch address into `(label, address)` pairs.
    ///
    /// A segment without a `label : ` prefix yields an empty label.
    pub fn branches(&self) -> Vec<(&str, &str)> {
        self.address
            .split(" / ")
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once(':') {
                Some((label, addr)) => (label.trim(), addr.trim()),
                None => ("", segment),
            })
            .collect()
    }
}

/// Field-by-field settings update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub kakao_link: Option<String>,
    pub naver_talk_link: Option<String>,
    pub instagram_link: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub logo_url: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `base` with every set field of the patch applied.
    pub fn apply(self, base: &SiteSettings) -> SiteSettings {
        let mut next = base.clone();
        overwrite(&mut next.site_name, self.site_name);
        overwrite(&mut next.hero_title, self.hero_title);
        overwrite(&mut next.hero_subtitle, self.hero_subtitle);
        overwrite(&mut next.phone, self.phone);
        overwrite(&mut next.address, self.address);
        overwrite(&mut next.kakao_link, self.kakao_link);
        overwrite(&mut next.naver_talk_link, self.naver_talk_link);
        overwrite(&mut next.instagram_link, self.instagram_link);
        overwrite(&mut next.primary_color, self.primary_color);
        overwrite(&mut next.accent_color, self.accent_color);
        overwrite(&mut next.logo_url, self.logo_url);
        next
    }
}

fn overwrite(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// One major service category with its sub-category labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub id: String,
    pub major_category: MajorCategory,
    pub title: String,
    pub description: String,
    pub sub_categories: Vec<ServiceCategory>,
}

/// A before/after case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioId,
    pub title: String,
    pub description: String,
    pub major_category: MajorCategory,
    pub category: ServiceCategory,
    pub before_img: ImageRef,
    pub after_img: ImageRef,
    /// Creation date as a display string (`YYYY-MM-DD`).
    pub date: String,
}

impl PortfolioItem {
    /// Title present and both images set.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.before_img.is_empty() && !self.after_img.is_empty()
    }
}

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub phone: String,
    pub service_type: ServiceCategory,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn major_category_uses_kebab_case_ids() {
        let json = serde_json::to_string(&MajorCategory::LuckyDays).unwrap();
        assert_eq!(json, "\"lucky-days\"");
        assert_eq!(
            MajorCategory::from_str("preventive").unwrap(),
            MajorCategory::Preventive
        );
        assert_eq!(MajorCategory::Special.to_string(), "special");
        assert_eq!(MajorCategory::Appliance.label(), "가전청소");
    }

    #[test]
    fn service_category_serializes_as_korean_label() {
        let json = serde_json::to_string(&ServiceCategory::ExteriorWallWindow).unwrap();
        assert_eq!(json, "\"외벽&외창청소\"");
        let parsed: ServiceCategory = serde_json::from_str("\"입주청소\"").unwrap();
        assert_eq!(parsed, ServiceCategory::MoveIn);
        assert_eq!(
            ServiceCategory::from_str("후드청소").unwrap(),
            ServiceCategory::RangeHood
        );
    }

    #[test]
    fn unknown_service_label_is_rejected() {
        assert!(serde_json::from_str::<ServiceCategory>("\"세차\"").is_err());
        assert!(ServiceCategory::from_str("세차").is_err());
    }

    #[test]
    fn every_label_maps_to_a_major_category() {
        assert_eq!(ServiceCategory::all().len(), 21);
        assert_eq!(ServiceCategory::FireDamage.major(), MajorCategory::Special);
        assert_eq!(ServiceCategory::FloorWax.major(), MajorCategory::Preventive);
        assert_eq!(ServiceCategory::Professional.major(), MajorCategory::Professional);
        for option in ServiceCategory::guest_options() {
            assert_ne!(option.major(), MajorCategory::LuckyDays);
        }
    }

    #[test]
    fn image_ref_detects_inline_payloads() {
        assert!(ImageRef::from("data:image/png;base64,AAAA").is_inline());
        assert!(!ImageRef::from("https://example.com/a.jpg").is_inline());
        assert!(ImageRef::from("  ").is_empty());
        assert!(ImageRef::from("data:image/jpeg;base64,").is_empty());
        assert!(ImageRef::from("data:image/jpeg;base64").is_empty());
        assert!(!ImageRef::from("data:image/jpeg;base64,/9j/").is_empty());
    }

    #[test]
    fn settings_patch_merges_only_set_fields() {
        let base = crate::defaults::initial_settings();
        let patch = SettingsPatch {
            phone: Some("064-000-0000".into()),
            accent_color: Some("#000000".into()),
            ..SettingsPatch::default()
        };
        let merged = patch.apply(&base);
        assert_eq!(merged.phone, "064-000-0000");
        assert_eq!(merged.accent_color, "#000000");
        assert_eq!(merged.site_name, base.site_name);
        assert_eq!(merged.kakao_link, base.kakao_link);
        assert!(SettingsPatch::default().is_empty());
    }

    #[test]
    fn settings_patch_deserializes_partial_json() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"siteName":"New"}"#).unwrap();
        assert_eq!(patch.site_name.as_deref(), Some("New"));
        assert!(patch.phone.is_none());
    }

    #[test]
    fn branches_split_labelled_addresses() {
        let settings = crate::defaults::initial_settings();
        let branches = settings.branches();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].0, "제주시");
        assert_eq!(branches[1].0, "서귀포시");
        assert!(branches[1].1.starts_with("제주특별자치도 서귀포시"));
    }

    #[test]
    fn portfolio_item_uses_stored_field_names() {
        let item = &crate::defaults::initial_portfolio()[0];
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["majorCategory"], "professional");
        assert_eq!(value["category"], "입주청소");
        assert!(value["beforeImg"].is_string());
        assert!(value["afterImg"].is_string());
        assert!(item.is_complete());
    }

    #[test]
    fn inquiry_serializes_service_type() {
        let inquiry = Inquiry {
            name: "Kim".into(),
            phone: "010-0000-0000".into(),
            service_type: ServiceCategory::MoveIn,
            message: "test".into(),
        };
        let value = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Kim",
                "phone": "010-0000-0000",
                "serviceType": "입주청소",
                "message": "test"
            })
        );
    }
}
