use super::view_model::use_admin_login_view_model;
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminLoginPanel() -> impl IntoView {
    let vm = use_admin_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6 bg-white rounded-lg shadow-lg p-8">
                <div>
                    <h2 class="text-center text-2xl font-bold text-gray-900">"Admin Portal"</h2>
                    <p class="mt-2 text-center text-sm text-gray-600">"Sign in to manage attendance"</p>
                </div>
                <Show when=move || vm.already_signed_in.get()>
                    <p class="text-sm text-center text-green-700">
                        "You are already signed in. "
                        <a href="/admin/dashboard" class="font-medium underline">"Open dashboard"</a>
                    </p>
                </Show>
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="admin_email" class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            id="admin_email"
                            type="email"
                            required
                            autocomplete="username"
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md sm:text-sm"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| vm.email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="admin_password" class="block text-sm font-medium text-gray-700">"Password"</label>
                        <input
                            id="admin_password"
                            type="password"
                            required
                            autocomplete="current-password"
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md sm:text-sm"
                            prop:value=move || vm.password.get()
                            on:input=move |ev| vm.password.set(event_target_value(&ev))
                        />
                    </div>
                    <InlineErrorMessage error=vm.error.into() />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-gray-900 hover:bg-gray-800 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Verifying..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
