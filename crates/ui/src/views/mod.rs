mod about;
mod home;
mod projects;
mod resume;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use home::HomeView;
pub use projects::ProjectsView;
pub use resume::ResumeView;
