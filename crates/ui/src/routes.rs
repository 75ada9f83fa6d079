use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};

use crate::views::{AboutView, HomeView, ProjectsView, ResumeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[layout(Subpage)]
            #[route("/projects", ProjectsView)] Projects {},
            #[route("/about", AboutView)] About {},
            #[route("/resume", ResumeView)] Resume {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "app",
            div { class: "crt-vignette" }
            div { class: "crt-scanlines" }
            Outlet::<Route> {}
        }
    }
}

/// Secondary pages share a floating back control.
#[component]
fn Subpage() -> Element {
    rsx! {
        BackButton {}
        Outlet::<Route> {}
    }
}

#[component]
fn BackButton() -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "back-button",
            r#type: "button",
            onclick: move |_| navigator.go_back(),
            "← Back"
        }
    }
}
