use crate::{
    api::Student,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
    },
    config,
    pages::admin::utils::{status_label, EditState},
    utils::time::format_attended_at,
};
use leptos::*;

fn status_badge(has_attended: bool) -> &'static str {
    if has_attended {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    }
}

#[component]
pub fn RosterTable(
    #[prop(into)] rows: Signal<Vec<Student>>,
    edit: RwSignal<EditState>,
    #[prop(into)] saving: Signal<bool>,
    on_edit: Callback<String>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let tz = config::current_time_zone();

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! {
                <EmptyState title="No students found" description="Adjust the search or status filter." />
            }
        >
            <div class="overflow-x-auto bg-white shadow rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">"Name"</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">"Roll No"</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">"Class"</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">"Status"</th>
                            <th class="px-4 py-3 text-left font-medium text-gray-500">"Time"</th>
                            <th class="px-4 py-3 text-right font-medium text-gray-500">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=move || rows.get()
                            key=|student| (student.id.clone(), student.has_attended, student.attended_at)
                            children=move |student: Student| {
                                let id = student.id.clone();
                                let editing = {
                                    let id = id.clone();
                                    create_memo(move |_| edit.with(|e| e.is_editing(&id)))
                                };
                                let time = student
                                    .attended_at
                                    .map(|at| format_attended_at(at, tz))
                                    .map(|(date, time)| format!("{} {}", date, time))
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr data-student-id=id.clone()>
                                        <td class="px-4 py-3 font-medium text-gray-900">{student.name.clone()}</td>
                                        <td class="px-4 py-3 text-gray-700">{student.roll_no.clone()}</td>
                                        <td class="px-4 py-3 text-gray-700">{student.class_name.clone()}</td>
                                        <td class="px-4 py-3">
                                            <Show
                                                when=move || editing.get()
                                                fallback=move || view! {
                                                    <span class=format!(
                                                        "px-2 py-0.5 rounded-full text-xs font-medium {}",
                                                        status_badge(student.has_attended),
                                                    )>
                                                        {status_label(student.has_attended)}
                                                    </span>
                                                }
                                            >
                                                <select
                                                    class="rounded-md border-gray-300 text-sm"
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        edit.update(|e| e.select(&value));
                                                    }
                                                >
                                                    <option value="">"Select status"</option>
                                                    <option value="present">"Present"</option>
                                                    <option value="absent">"Absent"</option>
                                                </select>
                                            </Show>
                                        </td>
                                        <td class="px-4 py-3 text-gray-700">{time}</td>
                                        <td class="px-4 py-3 text-right">
                                            <Show
                                                when=move || editing.get()
                                                fallback={
                                                    let id = id.clone();
                                                    move || {
                                                        let id = id.clone();
                                                        view! {
                                                            <Button
                                                                variant=ButtonVariant::Secondary
                                                                on:click=move |_| on_edit.call(id.clone())
                                                            >
                                                                "Edit"
                                                            </Button>
                                                        }
                                                    }
                                                }
                                            >
                                                <div class="inline-flex gap-2">
                                                    <Button
                                                        variant=ButtonVariant::Success
                                                        disabled=Signal::derive(move || !edit.with(EditState::can_save))
                                                        loading=saving
                                                        on:click=move |_| on_save.call(())
                                                    >
                                                        "Save"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Secondary
                                                        on:click=move |_| on_cancel.call(())
                                                    >
                                                        "Cancel"
                                                    </Button>
                                                </div>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
