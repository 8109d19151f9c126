use crate::{
    components::layout::LoadingSpinner,
    state::{admin::use_admin, auth::use_auth},
    utils::browser::redirect_to,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        redirect_to("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Login and signup pages: a signed-in student is sent to the attendance form.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if !state.loading && state.is_authenticated {
            redirect_to("/");
        }
    });
    view! {
        <Show
            when=move || should_render_public(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_public(is_authenticated: bool, is_loading: bool) -> bool {
    !is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (admin, _) = use_admin();
    let is_admin = create_memo(move |_| admin.get().is_admin());
    let is_loading = create_memo(move |_| admin.get().loading);
    create_effect(move |_| {
        let state = admin.get();
        if state.loading || state.is_admin() {
            return;
        }
        redirect_to("/portal/admin");
    });
    view! {
        <Show
            when=move || should_render_children(is_admin.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{should_render_children, should_render_public};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn public_pages_render_only_for_signed_out_users() {
        assert!(should_render_public(false, false));
        assert!(!should_render_public(true, false));
        assert!(!should_render_public(false, true));
    }
}
