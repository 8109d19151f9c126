use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    config,
    pages::{AdminDashboardPage, AdminLoginPage, AttendancePage, LoginPage, SignupPage},
    state::{admin::AdminProvider, auth::AuthProvider},
};

pub const ATTENDANCE_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ADMIN_LOGIN_PATH: &str = "/portal/admin";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

pub const ROUTE_PATHS: &[&str] = &[
    ATTENDANCE_PATH,
    LOGIN_PATH,
    SIGNUP_PATH,
    ADMIN_LOGIN_PATH,
    ADMIN_DASHBOARD_PATH,
];

/// Routes that need a student session.
pub const STUDENT_ROUTE_PATHS: &[&str] = &[ATTENDANCE_PATH];

/// Routes that need an admin session.
pub const ADMIN_ROUTE_PATHS: &[&str] = &[ADMIN_DASHBOARD_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH, SIGNUP_PATH, ADMIN_LOGIN_PATH];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    let title = config::current().event.name;
    view! {
        <Title text=title />
        <AuthProvider>
            <AdminProvider>
                <Router>
                    <Routes>
                        <Route path=ATTENDANCE_PATH view=AttendancePage/>
                        <Route path=LOGIN_PATH view=LoginPage/>
                        <Route path=SIGNUP_PATH view=SignupPage/>
                        <Route path=ADMIN_LOGIN_PATH view=AdminLoginPage/>
                        <Route path=ADMIN_DASHBOARD_PATH view=AdminDashboardPage/>
                    </Routes>
                </Router>
            </AdminProvider>
        </AuthProvider>
    }
}
