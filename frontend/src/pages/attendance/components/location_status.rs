use crate::{
    pages::attendance::utils::LocationDetails,
    state::verification::{VerificationState, VerificationStatus},
};
use leptos::{ev::MouseEvent, *};

fn badge_classes(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Pending => "bg-gray-100 text-gray-700",
        VerificationStatus::Checking => "bg-yellow-100 text-yellow-800",
        VerificationStatus::Verified => "bg-green-100 text-green-800",
        VerificationStatus::NotVerified => "bg-red-100 text-red-800",
    }
}

#[component]
pub fn LocationStatusCard(
    verification: RwSignal<VerificationState>,
    on_verify: Callback<MouseEvent>,
) -> impl IntoView {
    let status = create_memo(move |_| verification.with(|state| state.status));
    let details = create_memo(move |_| verification.with(LocationDetails::from_state));
    let checking = move || status.get() == VerificationStatus::Checking;

    view! {
        <section class="bg-white shadow rounded-lg p-5 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900">"Location Verification"</h2>
                <span
                    class=move || format!("px-2 py-0.5 rounded-full text-xs font-medium {}", badge_classes(status.get()))
                    data-status=move || status.get().as_str()
                >
                    {move || status.get().label()}
                </span>
            </div>
            <p class="text-sm text-gray-700">{move || verification.with(VerificationState::message)}</p>
            {move || details.get().map(|details| view! {
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    <dt class="text-gray-500">"Your location"</dt>
                    <dd class="text-gray-900 font-mono">{details.coordinates}</dd>
                    <dt class="text-gray-500">"Accuracy"</dt>
                    <dd class="text-gray-900">{details.accuracy}</dd>
                    <dt class="text-gray-500">"Distance from venue"</dt>
                    <dd class="text-gray-900">{details.distance}</dd>
                    <dt class="text-gray-500">"Within premises"</dt>
                    <dd class="text-gray-900">{details.within_premises}</dd>
                </dl>
            })}
            <button
                type="button"
                class="w-full inline-flex justify-center items-center px-4 py-2 rounded-md text-sm font-medium border border-blue-600 text-blue-700 hover:bg-blue-50 disabled:opacity-50"
                disabled=checking
                on:click=move |ev| on_verify.call(ev)
            >
                {move || match status.get() {
                    VerificationStatus::Checking => "Checking...",
                    VerificationStatus::Pending => "Verify Location",
                    _ => "Verify Again",
                }}
            </button>
        </section>
    }
}
