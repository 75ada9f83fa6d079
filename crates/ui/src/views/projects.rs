use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{CHEF_TAGLINE, DISHES, ENGINEER_PROJECTS, PhotoVm, ProjectCardVm, ShowcaseTab};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ProjectsView() -> Element {
    let mut tab = use_signal(ShowcaseTab::default);
    let active = tab();

    rsx! {
        div { class: "page subpage",
            header { class: "subpage__header",
                h1 { "So what side of me are you here for?" }
            }
            div { class: "tabs",
                for option in ShowcaseTab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if option == active { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }
            match active {
                ShowcaseTab::Engineer => rsx! { EngineerPanel {} },
                ShowcaseTab::Chef => rsx! { ChefPanel {} },
            }
        }
    }
}

#[component]
fn EngineerPanel() -> Element {
    let mut demo = use_signal(|| None::<&'static str>);
    let close_demo = use_callback(move |()| demo.set(None));
    let on_demo_key = use_callback(move |key: Key| {
        if key == Key::Escape {
            close_demo.call(());
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DemoTestHandles>() {
                handles.register(demo, on_demo_key, close_demo);
            }
        }
    }

    rsx! {
        div { class: "engineer-panel",
            section { class: "project-grid",
                for project in ENGINEER_PROJECTS {
                    ProjectCard {
                        key: "{project.title}",
                        project: project,
                        on_demo: move |src| demo.set(Some(src)),
                    }
                }
            }
            if let Some(src) = demo() {
                // Focused on mount so Escape lands here without a prior click.
                div {
                    class: "modal-backdrop",
                    id: "demo-modal",
                    tabindex: "0",
                    onmounted: move |evt| async move {
                        let _ = evt.set_focus(true).await;
                    },
                    onkeydown: move |evt| on_demo_key.call(evt.data.key()),
                    onclick: move |_| close_demo.call(()),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        video { class: "modal__video", src: src, controls: true, autoplay: true }
                        button {
                            class: "modal__close",
                            r#type: "button",
                            onclick: move |_| close_demo.call(()),
                            "✕ Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectCardVm, on_demo: EventHandler<&'static str>) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        article { class: "project-card",
            h3 { "{project.title}" }
            p { class: "project-card__blurb", "{project.blurb}" }
            if !project.tags.is_empty() {
                div { class: "project-card__tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
            div { class: "project-card__actions",
                if let Some(href) = project.href {
                    button {
                        class: "ghost-button",
                        r#type: "button",
                        onclick: move |_| ctx.open_url(href),
                        "View Project"
                    }
                }
                if let Some(src) = project.demo {
                    button {
                        class: "ghost-button",
                        r#type: "button",
                        onclick: move |_| on_demo.call(src),
                        "▶ Watch Demo"
                    }
                }
            }
        }
    }
}

#[component]
fn ChefPanel() -> Element {
    rsx! {
        section { class: "chef-panel",
            p { "{CHEF_TAGLINE}" }
            div { class: "photo-grid",
                for photo in DISHES {
                    Polaroid { key: "{photo.caption}", photo: photo }
                }
            }
        }
    }
}

/// Captioned photo card, optionally tilted.
#[component]
pub(crate) fn Polaroid(photo: PhotoVm, tilt: Option<Tilt>) -> Element {
    let class = match tilt {
        Some(Tilt::Left) => "polaroid polaroid--left",
        Some(Tilt::Right) => "polaroid polaroid--right",
        None => "polaroid",
    };
    rsx! {
        figure { class: "{class}",
            img { src: photo.src, alt: photo.alt }
            figcaption { "{photo.caption}" }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tilt {
    Left,
    Right,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DemoTestHandles {
    demo: Rc<RefCell<Option<Signal<Option<&'static str>>>>>,
    on_key: Rc<RefCell<Option<Callback<Key>>>>,
    close: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl DemoTestHandles {
    fn register(
        &self,
        demo: Signal<Option<&'static str>>,
        on_key: Callback<Key>,
        close: Callback<()>,
    ) {
        *self.demo.borrow_mut() = Some(demo);
        *self.on_key.borrow_mut() = Some(on_key);
        *self.close.borrow_mut() = Some(close);
    }

    pub(crate) fn demo(&self) -> Signal<Option<&'static str>> {
        (*self.demo.borrow()).expect("demo signal registered")
    }

    pub(crate) fn on_key(&self) -> Callback<Key> {
        (*self.on_key.borrow()).expect("demo key handler registered")
    }

    pub(crate) fn close(&self) -> Callback<()> {
        (*self.close.borrow()).expect("demo close registered")
    }
}
