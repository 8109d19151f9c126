use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, layout::SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    roll_no: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    success: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Student Login"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Sign in to mark your attendance"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-4">
                        <div>
                            <label for="roll_no" class="block text-sm font-medium text-gray-700">"Roll Number"</label>
                            <input
                                id="roll_no"
                                name="roll_no"
                                type="text"
                                required
                                autocomplete="username"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                prop:value=move || roll_no.get()
                                on:input=move |ev| roll_no.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />
                    {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <a href="/signup" class="font-medium text-blue-600 hover:text-blue-500">"Sign up"</a>
                </p>
                <p class="text-center text-xs text-gray-500">
                    <a href="/portal/admin" class="hover:text-gray-700">"Admin portal"</a>
                </p>
            </div>
        </div>
    }
}
