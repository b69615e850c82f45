// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end behaviour of the content store as the site uses it.

use linkclean_content::{ImageSlot, InquiryDraft, PortfolioDraft, SubmissionOrigin, UploadOutcome};
use linkclean_core::defaults::{initial_portfolio, initial_settings};
use linkclean_core::{
    KeyValueStore, LinkCleanError, MajorCategory, PortfolioId, ServiceCategory, ValidationError,
};
use linkclean_storage::Collection;
use linkclean_test_utils::{TestHarness, write_jpeg};

async fn draft_with_images(h: &TestHarness, title: &str) -> PortfolioDraft {
    let before = write_jpeg(h.temp_path(), &format!("{title}-before.jpg"), 4096).unwrap();
    let after = write_jpeg(h.temp_path(), &format!("{title}-after.jpg"), 4096).unwrap();

    let mut draft = PortfolioDraft::new();
    draft
        .set_title(title)
        .set_description("욕실 물때 제거")
        .set_category(ServiceCategory::MoveOut);
    h.service
        .attach_image(&mut draft, ImageSlot::Before, before)
        .await
        .unwrap();
    h.service
        .attach_image(&mut draft, ImageSlot::After, after)
        .await
        .unwrap();
    draft
}

#[tokio::test]
async fn first_run_settings_equal_compiled_defaults() {
    let h = TestHarness::builder().with_sqlite().build().await.unwrap();
    assert_eq!(h.service.store().settings(), &initial_settings());
    assert_eq!(h.service.store().portfolio(), initial_portfolio().as_slice());
}

#[tokio::test]
async fn guest_submission_is_first_and_survives_reload() {
    let mut h = TestHarness::builder().with_sqlite().build().await.unwrap();
    let mut draft = draft_with_images(&h, "이도동 빌라").await;
    assert!(draft.can_submit());

    let item = h
        .service
        .append_portfolio(&mut draft, SubmissionOrigin::Guest)
        .await
        .unwrap();
    assert_eq!(h.service.store().portfolio()[0], item);
    assert_eq!(item.title, "[고객후기] 이도동 빌라");
    assert_eq!(item.major_category, MajorCategory::Professional);
    assert_eq!(item.date, "2024-03-15");
    assert!(item.before_img.as_str().starts_with("data:image/jpeg;base64,"));

    let reopened = h.reopen().await.unwrap();
    assert_eq!(reopened.portfolio(), h.service.store().portfolio());
}

#[tokio::test]
async fn submission_missing_an_image_changes_nothing() {
    let mut h = TestHarness::builder().build().await.unwrap();
    let before = write_jpeg(h.temp_path(), "only-before.jpg", 1024).unwrap();

    let mut draft = PortfolioDraft::new();
    draft.set_title("반쪽 후기");
    h.service
        .attach_image(&mut draft, ImageSlot::Before, before)
        .await
        .unwrap();
    assert!(!draft.can_submit());

    let err = h
        .service
        .append_portfolio(&mut draft, SubmissionOrigin::Guest)
        .await
        .unwrap_err();
    assert_eq!(
        err.validation_errors(),
        Some(&[ValidationError::MissingAfterImage][..])
    );
    assert_eq!(h.service.store().portfolio(), initial_portfolio().as_slice());
    let stored = h.kv.get(&h.keys.key(Collection::Portfolio)).await.unwrap();
    assert!(stored.is_none(), "nothing may be written on validation failure");
}

#[tokio::test]
async fn two_megabyte_before_image_is_ready_before_submit() {
    let h = TestHarness::builder().build().await.unwrap();
    let path = write_jpeg(h.temp_path(), "big.jpg", 2 * 1024 * 1024).unwrap();

    let mut draft = PortfolioDraft::new();
    draft.set_title("대형 사진");
    let outcome = h
        .service
        .attach_image(&mut draft, ImageSlot::Before, &path)
        .await
        .unwrap();
    assert_eq!(outcome, UploadOutcome::Applied);

    let image = draft.image(ImageSlot::Before).unwrap();
    let decoded = linkclean_media::EncodedImage::decode(image.as_str()).unwrap();
    assert_eq!(decoded.media_type, "image/jpeg");
    assert_eq!(decoded.bytes.len(), 2 * 1024 * 1024);
    assert!(!draft.can_submit(), "after image still missing");
}

#[tokio::test]
async fn deleting_keeps_remaining_order_and_is_idempotent() {
    let mut h = TestHarness::builder().build().await.unwrap();
    for title in ["하나", "둘"] {
        let mut draft = draft_with_images(&h, title).await;
        h.service
            .append_portfolio(&mut draft, SubmissionOrigin::Admin)
            .await
            .unwrap();
        h.clock.advance(1);
    }
    let before = h.service.store().portfolio().to_vec();
    assert_eq!(before.len(), 4);

    let missing = PortfolioId::from("does-not-exist");
    assert!(!h.service.delete_portfolio(&missing).await.unwrap());
    assert_eq!(h.service.store().portfolio(), before.as_slice());

    let target = before[1].id.clone();
    assert!(h.service.delete_portfolio(&target).await.unwrap());
    let expected: Vec<_> = before.iter().filter(|p| p.id != target).cloned().collect();
    assert_eq!(h.service.store().portfolio(), expected.as_slice());

    let reopened = h.reopen().await.unwrap();
    assert_eq!(reopened.portfolio(), expected.as_slice());
}

#[tokio::test]
async fn inquiry_scenario_with_relay_success_and_failure() {
    let mut h = TestHarness::builder().build().await.unwrap();
    let kim = || InquiryDraft::new("Kim", "010-0000-0000", ServiceCategory::MoveIn, "test");

    h.relay.push_success().await;
    let mut draft = kim();
    let recorded = h.service.submit_inquiry(&mut draft).await.unwrap();
    let inquiries = h.service.store().inquiries();
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0], recorded);
    assert_eq!(recorded.name, "Kim");
    assert_eq!(recorded.phone, "010-0000-0000");
    assert_eq!(recorded.service_type.as_ref(), "입주청소");
    assert_eq!(recorded.message, "test");

    h.relay.push_failure(500).await;
    let mut draft = kim();
    let err = h.service.submit_inquiry(&mut draft).await.unwrap_err();
    assert!(matches!(err, LinkCleanError::Relay { status: Some(500), .. }));
    assert_eq!(h.service.store().inquiries().len(), 1);
    assert_eq!(h.relay.attempts().await, 2);
    assert_eq!(h.relay.delivered().await.len(), 1);
}

#[tokio::test]
async fn inquiry_is_delivered_over_http_and_recorded() {
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "name": "Kim",
            "phone": "010-0000-0000",
            "serviceType": "입주청소",
            "message": "test"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = TestHarness::builder().build().await.unwrap();
    let relay = linkclean_relay::FormRelayClient::new(
        format!("{}/f/test", server.uri()),
        std::time::Duration::from_secs(5),
    )
    .unwrap();
    let store = h.reopen().await.unwrap();
    let mut service = linkclean_content::ContentService::new(
        store,
        std::sync::Arc::new(relay),
        h.clock.clone(),
    );

    let mut draft = InquiryDraft::new("Kim", "010-0000-0000", ServiceCategory::MoveIn, "test");
    service.submit_inquiry(&mut draft).await.unwrap();
    assert_eq!(service.store().inquiries().len(), 1);
}

#[tokio::test]
async fn corrupted_collection_falls_back_without_touching_others() {
    let mut h = TestHarness::builder().with_sqlite().build().await.unwrap();
    h.relay.push_success().await;
    let mut draft = InquiryDraft::new("Lee", "010-1234-5678", ServiceCategory::FireDamage, "상담");
    h.service.submit_inquiry(&mut draft).await.unwrap();

    h.kv.set(&h.keys.key(Collection::Settings), "\u{0}garbage")
        .await
        .unwrap();

    let reopened = h.reopen().await.unwrap();
    assert_eq!(reopened.settings(), &initial_settings());
    assert_eq!(reopened.inquiries().len(), 1);
}
