use crate::{
    components::common::{Button, ButtonVariant},
    pages::admin::utils::StatusFilter,
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn RosterToolbar(
    query: RwSignal<String>,
    status_filter: RwSignal<StatusFilter>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] can_export: Signal<bool>,
    on_refresh: Callback<MouseEvent>,
    on_export: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-end">
            <div class="flex-1">
                <label for="roster-search" class="block text-sm font-medium text-gray-700">"Search"</label>
                <input
                    id="roster-search"
                    type="search"
                    placeholder="Search by name or roll number"
                    class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500 sm:text-sm"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="roster-status" class="block text-sm font-medium text-gray-700">"Status"</label>
                <select
                    id="roster-status"
                    class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500 sm:text-sm"
                    on:change=move |ev| status_filter.set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|filter| view! {
                            <option value=filter.as_str() selected=move || status_filter.get() == filter>
                                {filter.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    loading=loading
                    on:click=move |ev| on_refresh.call(ev)
                >
                    "Refresh"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || !can_export.get())
                    on:click=move |ev| on_export.call(ev)
                >
                    "Export CSV"
                </Button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_every_status_option() {
        let html = render_to_string(move || {
            view! {
                <RosterToolbar
                    query=create_rw_signal(String::new())
                    status_filter=create_rw_signal(StatusFilter::Absent)
                    loading=Signal::derive(|| false)
                    can_export=Signal::derive(|| true)
                    on_refresh=Callback::new(|_| {})
                    on_export=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All Students"));
        assert!(html.contains("value=\"present\""));
        assert!(html.contains("value=\"absent\""));
        assert!(html.contains("Export CSV"));
    }
}
