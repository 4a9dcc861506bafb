use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::departments::use_departments;
use crate::hooks::instructors::{
    use_instructor_actions, use_instructors, use_instructors_by_department,
};
use crate::models::InstructorPayload;

#[component]
pub fn InstructorsPage() -> impl IntoView {
    let departments = use_departments();
    let actions = use_instructor_actions();

    let filter = RwSignal::new(Option::<i64>::None);
    let all = use_instructors();
    let by_department = use_instructors_by_department(filter.into());

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
    let email = RwSignal::new(String::new());
    let department_id = RwSignal::new(Option::<i64>::None);
    let editing = RwSignal::new(Option::<i64>::None);

    let department_options = Signal::derive(move || {
        departments
            .data
            .get()
            .map(|list| list.into_iter().map(|d| (d.id, d.name)).collect::<Vec<_>>())
    });

    let department_name = move |id: i64| {
        departments
            .data
            .get()
            .and_then(|list| list.into_iter().find(|d| d.id == id).map(|d| d.name))
            .unwrap_or_else(|| format!("#{}", id))
    };

    let reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        department_id.set(None);
        editing.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(dep) = department_id.get() else {
            return;
        };
        if name.get().is_empty() || email.get().is_empty() {
            return;
        }
        let payload = InstructorPayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
            department_id: dep,
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
            <PageHeader title="Instructors" subtitle="Teaching staff directory" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title text-base">
                            {move || if editing.get().is_some() { "Edit instructor" } else { "New instructor" }}
                        </h3>
                        <TextField label="Name" placeholder="Dr. Ada Lovelace" value=name />
                        <TextField label="Email" placeholder="ada@university.edu" value=email kind="email" />
                        <EntitySelect label="Department" options=department_options value=department_id />
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
                                    <th>"Email"</th>
                                    <th>"Department"</th>
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
                                    key=|i| i.id
                                    children=move |i| {
                                        let id = i.id;
                                        let edit = i.clone();
                                        view! {
                                            <tr>
                                                <td>{i.name.clone()}</td>
                                                <td>{i.email.clone()}</td>
                                                <td>{move || department_name(i.department_id)}</td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            editing.set(Some(id));
                                                            name.set(edit.name.clone());
                                                            email.set(edit.email.clone());
                                                            department_id.set(Some(edit.department_id));
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
