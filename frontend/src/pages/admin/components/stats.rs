use crate::state::roster::RosterStats;
use leptos::*;

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<String>, accent: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-4">
            <p class="text-xs font-medium uppercase tracking-wide text-gray-500">{label}</p>
            <p class=format!("mt-1 text-2xl font-semibold {}", accent)>{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn RosterStatsCards(#[prop(into)] stats: Signal<RosterStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
            <StatCard
                label="Total Students"
                value=Signal::derive(move || stats.get().total.to_string())
                accent="text-gray-900"
            />
            <StatCard
                label="Present"
                value=Signal::derive(move || stats.get().present.to_string())
                accent="text-green-700"
            />
            <StatCard
                label="Absent"
                value=Signal::derive(move || stats.get().absent.to_string())
                accent="text-red-700"
            />
            <StatCard
                label="Attendance Rate"
                value=Signal::derive(move || stats.get().rate_label())
                accent="text-blue-700"
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_counts_and_rate() {
        let html = render_to_string(move || {
            let stats = RosterStats {
                total: 4,
                present: 3,
                absent: 1,
                rate: 75.0,
            };
            view! { <RosterStatsCards stats=Signal::derive(move || stats) /> }
        });
        assert!(html.contains("Total Students"));
        assert!(html.contains("Attendance Rate"));
        assert!(html.contains("75.0%"));
    }
}
