use super::{utils::SignupFormState, view_model::use_signup_view_model};
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use leptos::{ev::SubmitEvent, *};

fn field_input(
    form: RwSignal<SignupFormState>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    read: fn(&SignupFormState) -> String,
    write: fn(&mut SignupFormState, String),
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                required
                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| write(state, value));
                }
            />
        </div>
    }
}

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let pending = vm.signup_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">"Create Account"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    {field_input(vm.form, "name", "Full Name", "text", |s| s.name.clone(), |s, v| s.name = v)}
                    {field_input(vm.form, "roll_no", "Roll Number", "text", |s| s.roll_no.clone(), |s, v| s.roll_no = v)}
                    {field_input(vm.form, "class_name", "Class", "text", |s| s.class_name.clone(), |s, v| s.class_name = v)}
                    {field_input(vm.form, "password", "Password", "password", |s| s.password.clone(), |s, v| s.password = v)}

                    <InlineErrorMessage error=vm.error.into() />
                    {move || vm.success.get().map(|message| view! { <SuccessMessage message=message /> })}

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "Already have an account? "
                    <a href="/login" class="font-medium text-blue-600 hover:text-blue-500">"Login"</a>
                </p>
            </div>
        </div>
    }
}
