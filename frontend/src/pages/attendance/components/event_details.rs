use crate::config::EventConfig;
use leptos::*;

#[component]
pub fn EventDetailsCard(event: EventConfig) -> impl IntoView {
    view! {
        <section class="bg-white shadow rounded-lg p-5">
            <h2 class="text-lg font-semibold text-gray-900">{event.name}</h2>
            <dl class="mt-3 space-y-2 text-sm">
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Venue"</dt>
                    <dd class="text-gray-900">{event.venue_name}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Schedule"</dt>
                    <dd class="text-gray-900">{event.schedule}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Check-in radius"</dt>
                    <dd class="text-gray-900">{format!("{}m", event.geofence.radius_m.round())}</dd>
                </div>
            </dl>
        </section>
    }
}
