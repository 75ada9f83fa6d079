use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use folio_core::model::{PromptFlow, RevealTicket, SubmitOutcome};
use services::{KeySounds, run_reveal};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CompletionLink, WidgetIntent, map_prompt_widget};
use super::components::{Cursor, Toggle, TranscriptItem};
use super::scripts::{TRANSCRIPT_ID, scroll_to_end_script};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn completion_route(link: CompletionLink) -> Route {
    match link {
        CompletionLink::Projects => Route::Projects {},
        CompletionLink::About => Route::About {},
        CompletionLink::Resume => Route::Resume {},
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let settings = ctx.widget_settings();
    let progress = ctx.progress();

    let mut flow = use_signal(|| PromptFlow::new(ctx.prompts()));
    let mut sound_on = use_signal(|| settings.key_sound);
    let key_sounds = use_hook(|| KeySounds::new(ctx.audio_output()));

    let start_reveal = {
        let key_sounds = key_sounds.clone();
        use_callback(move |ticket: RevealTicket| {
            let key_sounds = key_sounds.clone();
            let reveal = settings.reveal;
            spawn(async move {
                let mut rng = rand::rng();
                let end = run_reveal(
                    &reveal,
                    ticket,
                    &mut rng,
                    |ticket| flow.write().reveal_next(ticket),
                    |unit, rng| {
                        if *sound_on.peek() {
                            key_sounds.tick(unit, rng);
                        }
                    },
                )
                .await;
                tracing::trace!(index = ticket.index(), ?end, "reveal ended");
            });
        })
    };

    {
        let progress = progress.clone();
        use_hook(move || {
            spawn(async move {
                let prompts = flow.peek().prompts().clone();
                let session = progress.restore(&prompts).await.into_session();
                let ticket = flow.write().restore(session);
                if let Some(ticket) = ticket {
                    start_reveal.call(ticket);
                }
            })
        });
    }

    use_drop(move || {
        if let Ok(mut flow) = flow.try_write() {
            flow.cancel_reveal();
        }
    });

    let dispatch = {
        let key_sounds = key_sounds.clone();
        use_callback(move |intent: WidgetIntent| match intent {
            WidgetIntent::Interact => {
                key_sounds.on_user_interaction();
            }
            WidgetIntent::Input(text) => flow.write().set_input(text),
            WidgetIntent::Skip => {
                flow.write().skip();
            }
            WidgetIntent::Submit => {
                let outcome = flow.write().submit();
                match outcome {
                    Ok(outcome) => {
                        let session = flow.peek().session().clone();
                        let progress = progress.clone();
                        spawn(async move {
                            progress.persist(&session).await;
                        });
                        if let SubmitOutcome::Advanced(ticket) = outcome {
                            start_reveal.call(ticket);
                        }
                    }
                    Err(err) => tracing::trace!(%err, "submit ignored"),
                }
            }
            WidgetIntent::Restart => {
                let ticket = flow.write().restart();
                let progress = progress.clone();
                spawn(async move {
                    progress.clear().await;
                });
                start_reveal.call(ticket);
            }
            WidgetIntent::ToggleSound => {
                let on = !*sound_on.peek();
                sound_on.set(on);
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WidgetTestHandles>() {
                handles.register(dispatch, flow);
            }
        }
    }

    use_effect(move || {
        // Reading the flow subscribes to every field of it.
        let _ = flow.read();
        let _ = eval(&scroll_to_end_script(TRANSCRIPT_ID));
    });

    let vm = map_prompt_widget(&flow.read());
    let sound = sound_on();

    rsx! {
        div {
            class: "page home-page",
            id: "home-root",
            tabindex: "0",
            onpointerdown: move |_| dispatch.call(WidgetIntent::Interact),
            onkeydown: move |_| dispatch.call(WidgetIntent::Interact),
            div { class: "home-column",
                header { class: "home-header",
                    h1 { "I build things to understand the world, and myself." }
                    p { class: "home-subtitle",
                        "Answer a few questions. I’ll show you what I create. "
                        span { class: "home-subtitle__cursor", "▉" }
                    }
                }
                div { class: "qa-panel", id: TRANSCRIPT_ID,
                    div { class: "qa-stack",
                        for (index, item) in vm.transcript.iter().enumerate() {
                            TranscriptItem {
                                key: "{index}",
                                prompt: item.prompt.clone(),
                                answer: item.answer.clone(),
                            }
                        }
                        if let Some(active) = vm.active.clone() {
                            div { class: "qa-active",
                                p { class: "qa-prompt",
                                    "{active.text}"
                                    Cursor { active: active.show_cursor() }
                                }
                                if active.accepts_input() {
                                    div { class: "qa-input-row",
                                        span { class: "qa-caret", ">" }
                                        input {
                                            class: "qa-input",
                                            id: "qa-input",
                                            autofocus: true,
                                            placeholder: "type and press Enter…",
                                            value: "{active.input}",
                                            oninput: move |evt| dispatch.call(WidgetIntent::Input(evt.value())),
                                            onkeydown: move |evt| {
                                                if evt.data.key() == Key::Enter {
                                                    evt.prevent_default();
                                                    dispatch.call(WidgetIntent::Submit);
                                                }
                                            },
                                        }
                                        button {
                                            class: "link-button qa-restart",
                                            id: "qa-restart",
                                            r#type: "button",
                                            onclick: move |_| dispatch.call(WidgetIntent::Restart),
                                            "restart"
                                        }
                                    }
                                }
                                if active.show_skip() {
                                    button {
                                        class: "pill-button",
                                        id: "qa-skip",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(WidgetIntent::Skip),
                                        "skip typing"
                                    }
                                }
                            }
                        } else if vm.done {
                            div { class: "qa-done",
                                p { class: "qa-done__thanks",
                                    "thanks for sharing a moment with me."
                                    br {}
                                    "if you'd like to go further:"
                                }
                                div { class: "qa-done__links",
                                    for link in CompletionLink::ALL {
                                        button {
                                            key: "{link.label()}",
                                            class: "ghost-button",
                                            r#type: "button",
                                            onclick: move |_| {
                                                let _ = navigator.push(completion_route(link));
                                            },
                                            "{link.label()}"
                                        }
                                    }
                                }
                                button {
                                    class: "pill-button",
                                    id: "qa-restart",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(WidgetIntent::Restart),
                                    "Restart"
                                }
                            }
                        }
                    }
                }
                footer { class: "home-footer",
                    Toggle {
                        label: "sound",
                        on: sound,
                        on_toggle: move |()| dispatch.call(WidgetIntent::ToggleSound),
                    }
                    span { "press Enter to submit" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WidgetTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WidgetIntent>>>>,
    flow: Rc<RefCell<Option<Signal<PromptFlow>>>>,
}

#[cfg(test)]
impl WidgetTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<WidgetIntent>, flow: Signal<PromptFlow>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.flow.borrow_mut() = Some(flow);
    }

    pub(crate) fn dispatch(&self) -> Callback<WidgetIntent> {
        (*self.dispatch.borrow()).expect("widget dispatch registered")
    }

    pub(crate) fn flow(&self) -> Signal<PromptFlow> {
        (*self.flow.borrow()).expect("widget flow registered")
    }
}
