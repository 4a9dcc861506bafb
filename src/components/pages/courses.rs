use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::courses::{use_course_actions, use_courses, use_courses_by_department};
use crate::hooks::departments::use_departments;
use crate::models::CoursePayload;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let departments = use_departments();
    let actions = use_course_actions();

    // 过滤器：选中院系时切到按院系查询，否则展示全部
    let filter = RwSignal::new(Option::<i64>::None);
    let all = use_courses();
    let by_department = use_courses_by_department(filter.into());

    let visible = Signal::derive(move || match filter.get() {
        Some(_) => by_department.data.get(),
        None => all.data.get(),
    });
    let loading = Signal::derive(move || match filter.get() {
        Some(_) => by_department.loading.get(),
        None => all.loading.get(),
    });
    let error = Signal::derive(move || match filter.get() {
        Some(_) => by_department.error.get(),
        None => all.error.get(),
    });

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let department_id = RwSignal::new(Option::<i64>::None);
    let stage = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<i64>::None);

    let department_options = Signal::derive(move || {
        departments
            .data
            .get()
            .map(|list| list.into_iter().map(|d| (d.id, d.name)).collect::<Vec<_>>())
    });

    let reset_form = move || {
        name.set(String::new());
        code.set(String::new());
        department_id.set(None);
        stage.set(String::new());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(dep) = department_id.get() else {
            return;
        };
        if name.get().is_empty() || code.get().is_empty() {
            return;
        }
        let payload = CoursePayload {
            name: name.get_untracked(),
            code: code.get_untracked(),
            department_id: dep,
            stage: stage.get_untracked().parse().ok(),
        };
        match editing.get_untracked() {
            Some(id) => actions.update(id, payload),
            None => actions.create(payload),
        }
        reset_form();
    };

    let rows = move || visible.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());

    view! {
        <div>
            <PageHeader title="Courses" subtitle="Course catalogue" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title text-base">
                            {move || if editing.get().is_some() { "Edit course" } else { "New course" }}
                        </h3>
                        <TextField label="Name" placeholder="Operating Systems" value=name />
                        <TextField label="Code" placeholder="CS301" value=code />
                        <EntitySelect label="Department" options=department_options value=department_id />
                        <TextField label="Stage (optional)" placeholder="3" value=stage kind="number" />
                        <div class="card-actions mt-4">
                            <button class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" />
                                {move || if editing.get().is_some() { "Save" } else { "Create" }}
                            </button>
                            <Show when=move || editing.get().is_some()>
                                <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| reset_form()>
                                    "Cancel"
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>

                <div class="lg:col-span-2 flex flex-col gap-4">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body py-3">
                            <EntitySelect label="Filter by department" options=department_options value=filter />
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body p-0">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Code"</th>
                                        <th>"Name"</th>
                                        <th>"Stage"</th>
                                        <th class="text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <TableState colspan="4" loading=loading empty=empty error=error />
                                    <For
                                        each=rows
                                        key=|c| c.id
                                        children=move |c| {
                                            let id = c.id;
                                            let edit = c.clone();
                                            view! {
                                                <tr>
                                                    <td><span class="badge badge-ghost">{c.code.clone()}</span></td>
                                                    <td>{c.name.clone()}</td>
                                                    <td>{c.stage.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| {
                                                                editing.set(Some(id));
                                                                name.set(edit.name.clone());
                                                                code.set(edit.code.clone());
                                                                department_id.set(Some(edit.department_id));
                                                                stage.set(
                                                                    edit.stage.map(|s| s.to_string()).unwrap_or_default(),
                                                                );
                                                            }
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            on:click=move |_| actions.delete(id)
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
