use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::projects::{Polaroid, Tilt};
use crate::vm::{CONTACT_EMAIL, PhotoVm, SOCIAL_LINKS};

const TRAIL_PHOTO: PhotoVm = PhotoVm {
    src: "/hollywood.png",
    alt: "Ryan at the Hollywood sign",
    caption: "LA trail day",
};

const KITCHEN_PHOTO: PhotoVm = PhotoVm {
    src: "/kitchen.jpg",
    alt: "Ryan cooking and plating dishes",
    caption: "Cooking at home",
};

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page subpage about-page",
            header { class: "subpage__header",
                h1 { "I’m Ryan, a software engineer who cooks, or a cook who codes, depending on the day." }
                p { class: "subpage__lede",
                    "I build things because I like understanding how they work. I cook because I like \
                     understanding people. Most of my life has been about figuring things out while \
                     already in motion, so if you’re doing the same, you’re in good company."
                }
            }
            section { class: "story",
                Polaroid { photo: TRAIL_PHOTO, tilt: Tilt::Left }
                p {
                    "I grew up in a Filipino household where food was the first love language. You \
                     don’t ask someone how they’re doing; you hand them a plate. Somewhere between \
                     late-night debugging sessions and 12-hour kitchen shifts, I realized everything I \
                     enjoy comes back to the same thing: "
                    strong { "helping people feel seen, fed, or understood" }
                    ", whether that’s through code or cooking."
                }
            }
            section { class: "story story--reversed",
                p {
                    strong { "Some people write with words. I write with food. " }
                    "But building tools scratches the same itch, feeding someone’s day in a different \
                     way. Whether I’m serving kare-kare or shipping a feature, I care about the same \
                     things: "
                    strong { "effort, kindness, and leaving someone better than I found them." }
                }
                Polaroid { photo: KITCHEN_PHOTO, tilt: Tilt::Right }
            }
            section { class: "contact",
                p { class: "contact__aside", "If you made it this far, thanks for taking a moment to know me." }
                p { class: "contact__lead", "Let’s build something good together." }
                p { class: "contact__aside", "If you want to build or eat something together, hit me up." }
                button {
                    class: "ghost-button",
                    r#type: "button",
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| ctx.open_url(CONTACT_EMAIL.href)
                    },
                    "{CONTACT_EMAIL.label}"
                }
                div { class: "contact__socials",
                    for link in SOCIAL_LINKS {
                        button {
                            key: "{link.href}",
                            class: "link-button",
                            r#type: "button",
                            onclick: {
                                let ctx = ctx.clone();
                                move |_| ctx.open_url(link.href)
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
