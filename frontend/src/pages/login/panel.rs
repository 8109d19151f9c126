use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            roll_no=vm.form.roll_no
            password=vm.form.password
            error=vm.error.into()
            success=vm.success.into()
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_auth, ssr::render_to_string};

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Roll Number"));
        assert!(html.contains("Password"));
        assert!(html.contains("/signup"));
    }
}
