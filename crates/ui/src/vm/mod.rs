mod prompt_vm;
mod showcase_vm;

pub use prompt_vm::{
    ActivePromptVm, CompletionLink, PromptWidgetVm, TranscriptItemVm, WidgetIntent,
    map_prompt_widget,
};
pub use showcase_vm::{
    CHEF_TAGLINE, CONTACT_EMAIL, ContactLinkVm, DISHES, ENGINEER_PROJECTS, PhotoVm,
    ProjectCardVm, RESUME_DOCUMENT, SOCIAL_LINKS, ShowcaseTab,
};
