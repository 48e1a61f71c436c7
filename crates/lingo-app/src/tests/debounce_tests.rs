use std::time::Duration;

use lingo_core::types::Intent;

use super::{FakeTranslator, Harness};

#[tokio::test(start_paused = true)]
async fn rapid_edits_coalesce_into_one_call() {
    let translator = FakeTranslator::new();
    let harness = Harness::start(translator.clone()).await;

    for text in ["h", "ho", "hol", "hola"] {
        harness.submit(Intent::SetInputText(text.to_string())).await;
    }

    let settled = harness.snapshot_until(|s| s.result_text == "hola!").await;
    assert!(!settled.is_loading);

    // Each edit superseded the previous pending attempt before its
    // quiet period elapsed
    let calls = translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "hola");
}

#[tokio::test(start_paused = true)]
async fn language_change_rearms_with_same_text() {
    let translator = FakeTranslator::new();
    let harness = Harness::start(translator.clone()).await;

    harness
        .submit(Intent::SetInputText("hola".to_string()))
        .await;
    harness.snapshot_until(|s| s.result_text == "hola!").await;

    harness
        .submit(Intent::SetTargetLanguage("fr".to_string()))
        .await;

    // Result invalidated, attempt pending again
    let pending = harness.next_snapshot().await;
    assert_eq!(pending.result_text, "");
    assert!(pending.is_loading);

    harness.snapshot_until(|s| s.result_text == "hola!").await;

    let calls = translator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].text, "hola");
    assert_eq!(calls[1].target_lang, "fr");
}

#[tokio::test(start_paused = true)]
async fn slow_superseded_call_never_overwrites_newer_result() {
    let translator = FakeTranslator::new();
    translator.reply("a", "A", Duration::from_secs(10));
    translator.reply("ab", "AB", Duration::from_millis(10));
    let harness = Harness::start(translator.clone()).await;

    harness.submit(Intent::SetInputText("a".to_string())).await;
    harness.next_snapshot().await;

    // Let the quiet period elapse so the slow call for "a" is in flight
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(translator.calls().len(), 1);

    harness.submit(Intent::SetInputText("ab".to_string())).await;

    // The stale result must never be rendered, before or after settling
    loop {
        let snapshot = harness.next_snapshot().await;
        assert_ne!(snapshot.result_text, "A");
        if snapshot.result_text == "AB" {
            assert!(!snapshot.is_loading);
            assert_eq!(snapshot.last_error, None);
            break;
        }
    }

    let calls = translator.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].text, "ab");
}

#[tokio::test(start_paused = true)]
async fn edit_during_flight_cancels_and_replaces() {
    let translator = FakeTranslator::new();
    translator.fail("slow", "late failure", Duration::from_secs(10));
    translator.reply("fast", "FAST", Duration::from_millis(5));
    let harness = Harness::start(translator.clone()).await;

    harness
        .submit(Intent::SetInputText("slow".to_string()))
        .await;
    harness.next_snapshot().await;
    tokio::time::sleep(Duration::from_millis(1000)).await;

    harness
        .submit(Intent::SetInputText("fast".to_string()))
        .await;

    let settled = harness.snapshot_until(|s| !s.is_loading).await;
    assert_eq!(settled.result_text, "FAST");
    // The abandoned attempt's failure never surfaced
    assert_eq!(settled.last_error, None);
}
