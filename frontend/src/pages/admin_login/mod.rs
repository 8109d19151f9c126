use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminLoginPanel;

/// Administrator sign-in. Credentials are verified by the backend.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <AdminLoginPanel /> }
}
