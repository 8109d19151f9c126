use crate::state::auth::AuthState;
use leptos::*;

#[component]
pub fn StudentInfoCard(auth: ReadSignal<AuthState>) -> impl IntoView {
    let field = move |pick: fn(&crate::api::Student) -> String| {
        move || auth.with(|state| state.user.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <section class="bg-white shadow rounded-lg p-5">
            <h2 class="text-sm font-semibold text-gray-500 uppercase tracking-wide">"Student"</h2>
            <dl class="mt-3 grid grid-cols-1 sm:grid-cols-3 gap-3 text-sm">
                <div>
                    <dt class="text-gray-500">"Name"</dt>
                    <dd class="font-medium text-gray-900">{field(|s| s.name.clone())}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"Roll No"</dt>
                    <dd class="font-medium text-gray-900">{field(|s| s.roll_no.clone())}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"Class"</dt>
                    <dd class="font-medium text-gray-900">{field(|s| s.class_name.clone())}</dd>
                </div>
            </dl>
        </section>
    }
}
