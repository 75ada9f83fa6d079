mod components;
mod scripts;
mod view;

pub use view::HomeView;
#[cfg(test)]
pub(crate) use view::WidgetTestHandles;
