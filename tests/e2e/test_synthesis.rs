use crate::e2e::helpers;

use axum::http::StatusCode;
use helpers::{client_for, unreachable_base_url, RecordingPlayer, Reply, TestContext};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use test_context::test_context;
use thai_tts_client::domain::session::{Phase, PlaybackOutcome, SubmitOutcome};
use thai_tts_client::infrastructure::config::Config;
use thai_tts_client::infrastructure::playback::DisabledPlayer;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_rate_pitch_and_voice_in_query(ctx: &TestContext) {
    let mut client = ctx.client();
    client.mount().await;
    client.set_text("  สวัสดี \n");
    client.select_voice("th-TH-NiwatNeural").unwrap();
    client.set_rate(1.2).unwrap();
    client.set_pitch(5).unwrap();

    let outcome = client.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Succeeded(_)));

    let raw = ctx.mock.last_tts_raw_query().unwrap();
    assert!(raw.contains("rate=20&pitch=5"), "query was {}", raw);
    assert!(raw.contains("voice=th-TH-NiwatNeural"), "query was {}", raw);

    let query = ctx.mock.last_tts_query().unwrap();
    assert_eq!(query.get("text").map(String::as_str), Some("สวัสดี"));
    assert_eq!(query.get("voice").map(String::as_str), Some("th-TH-NiwatNeural"));
    assert_eq!(query.get("rate").map(String::as_str), Some("20"));
    assert_eq!(query.get("pitch").map(String::as_str), Some("5"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_negative_rate_for_slow_speech(ctx: &TestContext) {
    let mut client = ctx.client();
    client.mount().await;
    client.set_rate(0.8).unwrap();
    client.set_pitch(-3).unwrap();

    client.submit().await;

    let query = ctx.mock.last_tts_query().unwrap();
    assert_eq!(query.get("rate").map(String::as_str), Some("-20"));
    assert_eq!(query.get("pitch").map(String::as_str), Some("-3"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_omit_pitch_when_disabled(ctx: &TestContext) {
    let mut config = ctx.config.clone();
    config.pitch_enabled = false;
    let mut client = client_for(&config, Arc::new(DisabledPlayer));
    client.mount().await;
    client.set_pitch(7).unwrap();

    client.submit().await;

    let query = ctx.mock.last_tts_query().unwrap();
    assert!(!query.contains_key("pitch"));
    assert_eq!(query.get("rate").map(String::as_str), Some("0"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_compose_download_url_when_server_sends_none(ctx: &TestContext) {
    let mut client = ctx.client();
    client.mount().await;

    let outcome = client.submit().await;

    let SubmitOutcome::Succeeded(result) = outcome else {
        panic!("expected success, got {:?}", outcome);
    };
    assert_eq!(result.file_name, "abc.mp3");
    assert_eq!(result.audio_url, format!("{}/download/abc.mp3", ctx.base_url));
    assert_eq!(result.download_name, "thai_speech_abc.mp3");
    assert_eq!(result.message.as_deref(), Some("Audio generated"));
    assert_eq!(client.state().result(), Some(&result));

    let state = client.state();
    assert!(!state.is_busy());
    assert!(state.can_submit());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        state.last_cycle(),
        &[Phase::Validating, Phase::Requesting, Phase::Succeeded]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_server_url_verbatim(ctx: &TestContext) {
    let server_url = "https://relay.example.test/files/abc.mp3?token=1";
    ctx.mock.set_tts_reply(Reply::Json(
        StatusCode::OK,
        json!({ "file": "abc.mp3", "message": "ok", "url": server_url }),
    ));

    let mut client = ctx.client();
    client.mount().await;
    let outcome = client.submit().await;

    let SubmitOutcome::Succeeded(result) = outcome else {
        panic!("expected success, got {:?}", outcome);
    };
    assert_eq!(result.audio_url, server_url);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_relative_server_url(ctx: &TestContext) {
    ctx.mock.set_tts_reply(Reply::Json(
        StatusCode::OK,
        json!({ "file": "abc.mp3", "url": "/download/abc.mp3" }),
    ));

    let mut client = ctx.client();
    client.mount().await;
    let outcome = client.submit().await;

    let SubmitOutcome::Succeeded(result) = outcome else {
        panic!("expected success, got {:?}", outcome);
    };
    assert_eq!(result.audio_url, format!("{}/download/abc.mp3", ctx.base_url));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text_without_network_call(ctx: &TestContext) {
    let mut client = ctx.client();
    client.mount().await;
    client.set_text(" \t\n ");

    let outcome = client.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected("Please enter some Thai text before generating speech".to_string())
    );
    assert_eq!(ctx.mock.tts_calls(), 0);
    assert_eq!(client.state().last_cycle(), &[Phase::Validating, Phase::Rejected]);
    assert!(!client.state().is_busy());
    assert!(client.state().notice().is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_server_detail_on_failure(ctx: &TestContext) {
    ctx.mock.set_tts_reply(Reply::Json(
        StatusCode::BAD_REQUEST,
        json!({ "detail": "Voice th-TH-Unknown is not supported" }),
    ));

    let mut client = ctx.client();
    client.mount().await;
    let outcome = client.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(
            "Something went wrong: Voice th-TH-Unknown is not supported".to_string()
        )
    );
    assert_eq!(
        client.state().error(),
        Some("Something went wrong: Voice th-TH-Unknown is not supported")
    );
    assert!(client.state().result().is_none());
    assert!(!client.state().is_busy());
    assert!(client.state().can_submit());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_status_text_without_detail(ctx: &TestContext) {
    ctx.mock.set_tts_reply(Reply::Text(
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom".to_string(),
    ));

    let mut client = ctx.client();
    client.mount().await;
    let outcome = client.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Something went wrong: Server error: Internal Server Error".to_string())
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_malformed_success_body_as_failure(ctx: &TestContext) {
    ctx.mock
        .set_tts_reply(Reply::Json(StatusCode::OK, json!({ "message": "no file here" })));

    let mut client = ctx.client();
    client.mount().await;
    let outcome = client.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(
        client.state().last_cycle(),
        &[Phase::Validating, Phase::Requesting, Phase::Failed]
    );
    assert!(!client.state().is_busy());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_previous_result_when_a_later_request_fails(ctx: &TestContext) {
    let mut client = ctx.client();
    client.mount().await;
    assert!(matches!(client.submit().await, SubmitOutcome::Succeeded(_)));
    assert!(client.state().result().is_some());

    ctx.mock.set_tts_reply(Reply::Json(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "detail": "busy" }),
    ));
    assert!(matches!(client.submit().await, SubmitOutcome::Failed(_)));

    assert!(client.state().result().is_none());
    assert_eq!(client.state().phase(), Phase::Idle);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_catalog_diagnostic_on_submit(ctx: &TestContext) {
    ctx.mock
        .set_voices_reply(Reply::Json(StatusCode::BAD_GATEWAY, json!({})));

    let mut client = ctx.client();
    client.mount().await;
    assert!(client.state().error().is_some());

    assert!(matches!(client.submit().await, SubmitOutcome::Succeeded(_)));
    assert_eq!(client.state().error(), None);

    let query = ctx.mock.last_tts_query().unwrap();
    assert_eq!(
        query.get("voice").map(String::as_str),
        Some("th-TH-PremwadeeNeural")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_autoplay_resolved_url(ctx: &TestContext) {
    let player = Arc::new(RecordingPlayer::succeeding());
    let mut client = ctx.client_with_player(player.clone());
    client.mount().await;
    client.submit().await;

    assert_eq!(client.autoplay().await, PlaybackOutcome::Played);
    assert_eq!(
        player.played(),
        vec![format!("{}/download/abc.mp3", ctx.base_url)]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_blocked_autoplay(ctx: &TestContext) {
    let player = Arc::new(RecordingPlayer::blocked());
    let mut client = ctx.client_with_player(player.clone());
    client.mount().await;
    client.submit().await;

    assert_eq!(client.autoplay().await, PlaybackOutcome::Blocked);
    assert_eq!(client.state().error(), None);
    assert!(client.state().result().is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_media_error_when_player_cannot_load(ctx: &TestContext) {
    let player = Arc::new(RecordingPlayer::failing_to_load());
    let mut client = ctx.client_with_player(player.clone());
    client.mount().await;
    client.submit().await;

    assert_eq!(client.autoplay().await, PlaybackOutcome::MediaError);
    let message = client.state().error().unwrap();
    assert!(message.starts_with("Unable to load the audio file"));
    assert!(!message.starts_with("Something went wrong"));
}

#[tokio::test]
async fn it_should_fail_and_leave_idle_when_server_goes_away() {
    let config = Config::with_base_url(&unreachable_base_url().await);
    let mut client = client_for(&config, Arc::new(DisabledPlayer));
    client.mount().await;

    let outcome = client.submit().await;

    let SubmitOutcome::Failed(message) = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert!(message.starts_with("Something went wrong"));
    assert!(!client.state().is_busy());
    assert_eq!(client.state().phase(), Phase::Idle);
}
