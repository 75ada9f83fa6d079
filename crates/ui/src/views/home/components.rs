use dioxus::prelude::*;

#[component]
pub(super) fn TranscriptItem(prompt: String, answer: String) -> Element {
    rsx! {
        div { class: "qa-entry",
            p { class: "qa-prompt", "{prompt}" }
            p { class: "qa-answer",
                span { class: "qa-caret", ">" }
                " {answer}"
            }
        }
    }
}

/// Block cursor trailing the prompt; transparent when idle.
#[component]
pub(super) fn Cursor(active: bool) -> Element {
    let class = if active {
        "qa-cursor qa-cursor--active"
    } else {
        "qa-cursor"
    };
    rsx! {
        span { class: "{class}", aria_hidden: "true" }
    }
}

#[component]
pub(super) fn Toggle(label: &'static str, on: bool, on_toggle: EventHandler<()>) -> Element {
    let dot = if on { "toggle__dot toggle__dot--on" } else { "toggle__dot" };
    rsx! {
        button {
            class: "toggle",
            r#type: "button",
            aria_pressed: "{on}",
            onclick: move |_| on_toggle.call(()),
            span { class: "{dot}" }
            span { class: "toggle__label", "{label}" }
        }
    }
}
