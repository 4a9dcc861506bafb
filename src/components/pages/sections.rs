use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::departments::use_departments;
use crate::hooks::sections::{use_section_actions, use_sections, use_sections_by_department};
use crate::models::SectionPayload;

#[component]
pub fn SectionsPage() -> impl IntoView {
    let departments = use_departments();
    let actions = use_section_actions();

    // 过滤器：选中院系时切到按院系查询
    let filter = RwSignal::new(Option::<i64>::None);
    let all = use_sections();
    let by_department = use_sections_by_department(filter.into());

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
    let department_id = RwSignal::new(Option::<i64>::None);
    let stage = RwSignal::new(String::new());
    let editing = RwSignal::new(Option::<i64>::None);

    let department_options = Signal::derive(move || {
        departments
            .data
            .get()
            .map(|list| list.into_iter().map(|d| (d.id, d.name)).collect::<Vec<_>>())
    });

    // 渲染表格用的院系名查找
    let department_name = move |id: i64| {
        departments
            .data
            .get()
            .and_then(|list| list.into_iter().find(|d| d.id == id).map(|d| d.name))
            .unwrap_or_else(|| format!("#{}", id))
    };

    let reset_form = move || {
        name.set(String::new());
        department_id.set(None);
        stage.set(String::new());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(dep), Ok(stage_no)) = (department_id.get(), stage.get().parse::<i32>()) else {
            return;
        };
        if name.get().is_empty() {
            return;
        }
        let payload = SectionPayload {
            name: name.get_untracked(),
            department_id: dep,
            stage: stage_no,
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
            <PageHeader title="Sections" subtitle="Class sections per department and stage" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title text-base">
                            {move || if editing.get().is_some() { "Edit section" } else { "New section" }}
                        </h3>
                        <TextField label="Name" placeholder="CS-2A" value=name />
                        <EntitySelect label="Department" options=department_options value=department_id />
                        <TextField label="Stage" placeholder="2" value=stage kind="number" />
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
                                    <th>"Name"</th>
                                    <th>"Department"</th>
                                    <th>"Stage"</th>
                                    <th class="text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <TableState
                                    colspan="4"
                                    loading=loading
                                    empty=empty
                                    error=error
                                />
                                <For
                                    each=rows
                                    key=|s| s.id
                                    children=move |s| {
                                        let id = s.id;
                                        let edit = s.clone();
                                        view! {
                                            <tr>
                                                <td>{s.name.clone()}</td>
                                                <td>{move || department_name(s.department_id)}</td>
                                                <td>{s.stage}</td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            editing.set(Some(id));
                                                            name.set(edit.name.clone());
                                                            department_id.set(Some(edit.department_id));
                                                            stage.set(edit.stage.to_string());
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
