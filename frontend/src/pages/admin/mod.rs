use crate::components::guard::RequireAdmin;
use leptos::*;

pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminDashboardPanel />
        </RequireAdmin>
    }
}
