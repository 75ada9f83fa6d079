use dioxus::prelude::*;

use crate::vm::RESUME_DOCUMENT;

#[component]
pub fn ResumeView() -> Element {
    rsx! {
        div { class: "page subpage resume-page",
            h1 { "Professional Stuff" }
            p { class: "subpage__lede", "Here’s my resume. Feel free to download or zoom in." }
            div { class: "resume-frame",
                iframe { src: RESUME_DOCUMENT, title: "Resume" }
            }
        }
    }
}
