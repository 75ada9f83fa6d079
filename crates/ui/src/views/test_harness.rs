use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use folio_core::model::PromptSequence;
use folio_core::time::fixed_now;
use services::{
    AudioError, AudioOutput, Clock, ProgressService, RevealSettings, ToneSpec, WidgetSettings,
};
use storage::repository::{InMemoryRepository, SnapshotStore};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::home::WidgetTestHandles;
use crate::views::projects::DemoTestHandles;
use crate::views::{AboutView, HomeView, ProjectsView, ResumeView};

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Mutex<Vec<ToneSpec>>,
}

impl AudioOutput for RecordingAudio {
    fn acquire(&self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&self, tone: &ToneSpec) {
        self.played.lock().unwrap().push(*tone);
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl UiLinkOpener for RecordingOpener {
    fn open_url(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
    settings: WidgetSettings,
    audio: Arc<RecordingAudio>,
    opener: Arc<RecordingOpener>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn prompts(&self) -> PromptSequence {
        PromptSequence::landing()
    }

    fn widget_settings(&self) -> WidgetSettings {
        self.settings
    }

    fn audio_output(&self) -> Option<Arc<dyn AudioOutput>> {
        let audio: Arc<dyn AudioOutput> = self.audio.clone();
        Some(audio)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.opener.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Projects,
    About,
    Resume,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    widget_handles: WidgetTestHandles,
    demo_handles: DemoTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.widget_handles.clone());
    use_context_provider(|| props.demo_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Projects => rsx! { ProjectsView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Resume => rsx! { ResumeView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub audio: Arc<RecordingAudio>,
    pub opener: Arc<RecordingOpener>,
    pub widget: WidgetTestHandles,
    pub demo: DemoTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until `done` holds for the rendered html.
    pub async fn drive_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..400 {
            let html = self.render();
            if done(&html) {
                return html;
            }
            self.drive_async().await;
        }
        let html = self.render();
        assert!(done(&html), "condition never reached; last render: {html}");
        html
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: crate::vm::WidgetIntent) {
        let dispatch = self.widget.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn open_demo(&mut self, src: &'static str) {
        let mut demo = self.demo.demo();
        self.dom.in_runtime(|| demo.set(Some(src)));
        drive_dom(&mut self.dom);
    }

    pub fn demo_key(&mut self, key: Key) {
        let on_key = self.demo.on_key();
        self.dom.in_runtime(|| on_key.call(key));
        drive_dom(&mut self.dom);
    }

    pub fn demo_backdrop_click(&mut self) {
        let close = self.demo.close();
        self.dom.in_runtime(|| close.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn with_flow<O>(&self, f: impl FnOnce(&folio_core::model::PromptFlow) -> O) -> O {
        let flow = self.widget.flow();
        self.dom.in_runtime(|| f(&flow.peek()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_repo(view, InMemoryRepository::new())
}

pub fn setup_view_harness_with_repo(view: ViewKind, repo: InMemoryRepository) -> ViewHarness {
    let store: Arc<dyn SnapshotStore> = Arc::new(repo.clone());
    let progress = Arc::new(ProgressService::new(Clock::fixed(fixed_now()), store));
    let settings = WidgetSettings::default().with_reveal(RevealSettings::instant());
    let audio = Arc::new(RecordingAudio::default());
    let opener = Arc::new(RecordingOpener::default());
    let widget = WidgetTestHandles::default();
    let demo = DemoTestHandles::default();

    let app = Arc::new(TestApp {
        progress,
        settings,
        audio: Arc::clone(&audio),
        opener: Arc::clone(&opener),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            widget_handles: widget.clone(),
            demo_handles: demo.clone(),
        },
    );

    ViewHarness {
        dom,
        repo,
        audio,
        opener,
        widget,
        demo,
    }
}
