use crate::components::guard::RequireAuth;
use leptos::*;

pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AttendancePanel;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AttendancePanel />
        </RequireAuth>
    }
}
