use crate::{
    config,
    state::{
        admin::{self, use_admin},
        auth::{self, use_auth},
    },
    utils::browser::redirect_to,
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (admin, _set_admin) = use_admin();
    let event_name = config::current().event.name;

    let student_name = move || auth.get().user.map(|user| user.name);
    let admin_email = move || admin.get().session.map(|session| session.email);

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            redirect_to("/login");
        }
    });

    let admin_logout_action = admin::use_admin_logout_action();
    let admin_logout_pending = admin_logout_action.pending();
    create_effect(move |_| {
        if admin_logout_action.value().get().is_some() {
            redirect_to("/portal/admin");
        }
    });

    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    let on_admin_logout = move |_| {
        if admin_logout_pending.get_untracked() {
            return;
        }
        admin_logout_action.dispatch(());
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-gray-900">{event_name}</a>
                    <nav class="flex items-center gap-3 text-sm">
                        {move || admin_email().map(|email| view! {
                            <span class="text-gray-500">{email}</span>
                            <a href="/admin/dashboard" class="text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md font-medium hover:bg-gray-100">
                                "Dashboard"
                            </a>
                            <button
                                on:click=on_admin_logout
                                class="text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md font-medium disabled:opacity-50 hover:bg-gray-100"
                                disabled=move || admin_logout_pending.get()
                            >
                                "Sign out"
                            </button>
                        })}
                        {move || student_name().map(|name| view! {
                            <span class="text-gray-500">{name}</span>
                            <button
                                on:click=on_logout
                                class="text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md font-medium disabled:opacity-50 hover:bg-gray-100"
                                disabled=move || logout_pending.get()
                            >
                                "Logout"
                            </button>
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_admin, provide_auth, student};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_signed_in_student() {
        let html = render_to_string(move || {
            provide_auth(Some(student("s1", false)));
            provide_admin(None);
            view! { <Header /> }
        });
        assert!(html.contains("Career Connect 2.0"));
        assert!(html.contains("Student s1"));
        assert!(html.contains("Logout"));
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn header_shows_admin_links_for_admin_session() {
        let html = render_to_string(move || {
            provide_auth(None);
            provide_admin(Some("admin@college.edu"));
            view! { <Header /> }
        });
        assert!(html.contains("admin@college.edu"));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(None);
            provide_admin(None);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Attendance failed" />
                    <SuccessMessage message="Attendance Posted Successfully" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Attendance failed"));
        assert!(html.contains("Attendance Posted Successfully"));
    }
}
