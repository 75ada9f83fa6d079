use chrono::Duration;
use dioxus::prelude::Key;
use folio_core::model::{FlowPhase, Snapshot};
use folio_core::time::fixed_now;
use storage::repository::{InMemoryRepository, SnapshotStore};

use crate::vm::WidgetIntent;

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_repo};

const FIRST_PROMPT: &str = "What’s your name?";
const SECOND_PROMPT: &str = "What’s one thing you’re proud of this week?";

async fn mount_until_input(harness: &mut ViewHarness) -> String {
    harness.rebuild();
    harness
        .drive_until(|html| html.contains(r#"id="qa-input""#))
        .await
}

#[tokio::test(flavor = "current_thread")]
async fn home_fresh_mount_reveals_first_prompt() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let html = mount_until_input(&mut harness).await;

    assert!(html.contains(FIRST_PROMPT), "missing prompt in {html}");
    assert!(!html.contains("qa-entry"), "unexpected transcript in {html}");
    assert_eq!(harness.with_flow(|flow| flow.phase()), FlowPhase::AwaitingInput(0));
    assert!(harness.repo.raw().is_none(), "fresh mount must not write");
}

#[tokio::test(flavor = "current_thread")]
async fn home_submit_moves_answer_into_transcript_and_persists() {
    let mut harness = setup_view_harness(ViewKind::Home);
    mount_until_input(&mut harness).await;

    harness.dispatch(WidgetIntent::Input("  Ryan ".into()));
    harness.dispatch(WidgetIntent::Submit);
    let repo = harness.repo.clone();
    let html = harness
        .drive_until(|html| html.contains(SECOND_PROMPT) && repo.raw().is_some())
        .await;

    assert!(html.contains("qa-entry"), "missing transcript in {html}");
    assert!(html.contains("Ryan"), "missing answer in {html}");
    let stored = harness.repo.load().await.unwrap().unwrap();
    assert_eq!(stored.answers, vec!["Ryan".to_string()]);
    assert_eq!(stored.q_index, 1);
    assert!(!stored.done);
}

#[tokio::test(flavor = "current_thread")]
async fn home_whitespace_submit_is_ignored() {
    let mut harness = setup_view_harness(ViewKind::Home);
    mount_until_input(&mut harness).await;

    harness.dispatch(WidgetIntent::Input(" \t ".into()));
    harness.dispatch(WidgetIntent::Submit);
    harness.drive_async().await;

    assert_eq!(harness.with_flow(|flow| flow.phase()), FlowPhase::AwaitingInput(0));
    assert_eq!(harness.with_flow(|flow| flow.current_index()), 0);
    assert!(harness.repo.raw().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn home_skip_shows_whole_prompt_at_once() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness
        .drive_until(|html| html.contains(r#"id="qa-skip""#))
        .await;

    harness.dispatch(WidgetIntent::Skip);
    let html = harness.render();

    assert!(html.contains(FIRST_PROMPT), "missing full prompt in {html}");
    assert!(html.contains(r#"id="qa-input""#), "missing input in {html}");
    assert!(!html.contains(r#"id="qa-skip""#), "skip still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_restores_recent_progress_without_reveal() {
    let repo = InMemoryRepository::new();
    repo.save(&Snapshot::new(
        vec!["Ryan".into(), "shipped a feature".into()],
        2,
        false,
        fixed_now() - Duration::hours(1),
    ))
    .await
    .unwrap();

    let mut harness = setup_view_harness_with_repo(ViewKind::Home, repo);
    let html = mount_until_input(&mut harness).await;

    assert_eq!(harness.with_flow(|flow| flow.phase()), FlowPhase::AwaitingInput(2));
    assert_eq!(html.matches("qa-entry").count(), 2, "{html}");
    assert!(html.contains("shipped a feature"));
    assert!(html.contains("What’s something you want to explore this month?"));
}

#[tokio::test(flavor = "current_thread")]
async fn home_drops_expired_progress() {
    let repo = InMemoryRepository::new();
    repo.save(&Snapshot::new(
        vec!["Ryan".into()],
        1,
        false,
        fixed_now() - Duration::days(15),
    ))
    .await
    .unwrap();

    let mut harness = setup_view_harness_with_repo(ViewKind::Home, repo);
    let html = mount_until_input(&mut harness).await;

    assert!(html.contains(FIRST_PROMPT), "{html}");
    assert!(!html.contains("qa-entry"), "{html}");
    assert!(harness.repo.raw().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn home_restart_from_done_clears_progress() {
    let repo = InMemoryRepository::new();
    repo.save(&Snapshot::new(
        ["Ryan", "a feature", "sourdough", "keep going"]
            .map(String::from)
            .to_vec(),
        4,
        true,
        fixed_now() - Duration::hours(1),
    ))
    .await
    .unwrap();

    let mut harness = setup_view_harness_with_repo(ViewKind::Home, repo);
    harness.rebuild();
    let html = harness
        .drive_until(|html| html.contains(r#"id="qa-restart""#))
        .await;
    assert!(html.contains("See What I Build"), "{html}");
    assert!(html.contains("Who I Am"), "{html}");
    assert!(html.contains("Professional Stuff"), "{html}");
    assert!(!html.contains(r#"id="qa-input""#));

    harness.dispatch(WidgetIntent::Restart);
    let repo = harness.repo.clone();
    let html = harness
        .drive_until(|html| html.contains(r#"id="qa-input""#) && repo.raw().is_none())
        .await;

    assert!(html.contains(FIRST_PROMPT), "{html}");
    assert!(!html.contains("qa-entry"), "{html}");
    assert_eq!(harness.with_flow(|flow| flow.current_index()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn home_restart_while_awaiting_input_clears_progress() {
    let repo = InMemoryRepository::new();
    repo.save(&Snapshot::new(
        vec!["Ryan".into(), "shipped a feature".into()],
        2,
        false,
        fixed_now() - Duration::hours(1),
    ))
    .await
    .unwrap();

    let mut harness = setup_view_harness_with_repo(ViewKind::Home, repo);
    let html = mount_until_input(&mut harness).await;
    assert_eq!(harness.with_flow(|flow| flow.phase()), FlowPhase::AwaitingInput(2));
    assert!(html.contains(r#"id="qa-restart""#), "no restart control in {html}");

    harness.dispatch(WidgetIntent::Restart);
    let repo = harness.repo.clone();
    let html = harness
        .drive_until(|html| html.contains(r#"id="qa-input""#) && repo.raw().is_none())
        .await;

    assert_eq!(harness.with_flow(|flow| flow.phase()), FlowPhase::AwaitingInput(0));
    assert!(html.contains(FIRST_PROMPT), "{html}");
    assert!(!html.contains("qa-entry"), "{html}");
    assert!(!html.contains("shipped a feature"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_restart_control_hidden_while_typing() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness
        .drive_until(|html| html.contains(r#"id="qa-skip""#))
        .await;
    assert!(!html.contains(r#"id="qa-restart""#), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_ticks_for_each_visible_unit_after_interaction() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.dispatch(WidgetIntent::Interact);
    harness
        .drive_until(|html| html.contains(r#"id="qa-input""#))
        .await;

    let visible = FIRST_PROMPT.chars().filter(|c| !c.is_whitespace()).count();
    assert_eq!(harness.audio.played.lock().unwrap().len(), visible);
}

#[tokio::test(flavor = "current_thread")]
async fn home_sound_toggle_silences_ticks() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.dispatch(WidgetIntent::Interact);
    harness.dispatch(WidgetIntent::ToggleSound);
    let html = harness
        .drive_until(|html| html.contains(r#"id="qa-input""#))
        .await;

    assert!(harness.audio.played.lock().unwrap().is_empty());
    assert!(!html.contains("toggle__dot--on"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_view_smoke_renders_engineer_tab() {
    let mut harness = setup_view_harness(ViewKind::Projects);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("So what side of me are you here for?"), "{html}");
    assert!(html.contains("NC EMPT Testing Platform"), "{html}");
    assert!(html.contains("Watch Demo"), "{html}");
    assert!(!html.contains("Dill Chowder"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_demo_modal_closes_on_escape() {
    let mut harness = setup_view_harness(ViewKind::Projects);
    harness.rebuild();

    harness.open_demo("/demo.mp4");
    let html = harness.render();
    assert!(html.contains(r#"id="demo-modal""#), "{html}");
    assert!(html.contains(r#"tabindex="0""#), "modal not focusable: {html}");
    assert!(html.contains("/demo.mp4"), "{html}");

    harness.demo_key(Key::Character("a".into()));
    assert!(harness.render().contains(r#"id="demo-modal""#));

    harness.demo_key(Key::Escape);
    let html = harness.render();
    assert!(!html.contains(r#"id="demo-modal""#), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_demo_modal_closes_on_backdrop_click() {
    let mut harness = setup_view_harness(ViewKind::Projects);
    harness.rebuild();

    harness.open_demo("/demo.mp4");
    assert!(harness.render().contains(r#"id="demo-modal""#));

    harness.demo_backdrop_click();
    let html = harness.render();
    assert!(!html.contains(r#"id="demo-modal""#), "{html}");
    assert!(html.contains("NC EMPT Testing Platform"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_renders_contact() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Email Me"), "{html}");
    assert!(html.contains("github.com/villaluzr20"), "{html}");
    assert!(html.contains("LA trail day"), "{html}");
    assert!(harness.opener.opened.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn resume_view_smoke_embeds_document() {
    let mut harness = setup_view_harness(ViewKind::Resume);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Professional Stuff"), "{html}");
    assert!(html.contains("<iframe"), "{html}");
}
