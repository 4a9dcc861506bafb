//! 院系管理：列表 + 创建/编辑/删除

use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{PageHeader, TableState, TextField};
use crate::hooks::departments::{use_department_actions, use_departments};
use crate::models::DepartmentPayload;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let departments = use_departments();
    let actions = use_department_actions();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    // None = 创建模式，Some(id) = 编辑模式
    let editing = RwSignal::new(Option::<i64>::None);

    let reset_form = move || {
        name.set(String::new());
        code.set(String::new());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || code.get().is_empty() {
            return;
        }
        let payload = DepartmentPayload {
            name: name.get_untracked(),
            code: code.get_untracked(),
        };
        match editing.get_untracked() {
            Some(id) => actions.update(id, payload),
            None => actions.create(payload),
        }
        reset_form();
    };

    let rows = move || departments.data.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());

    view! {
        <div>
            <PageHeader title="Departments" subtitle="Academic departments and their codes" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body" on:submit=on_submit>
                        <h3 class="card-title text-base">
                            {move || if editing.get().is_some() { "Edit department" } else { "New department" }}
                        </h3>
                        <TextField label="Name" placeholder="Computer Science" value=name />
                        <TextField label="Code" placeholder="CS" value=code />
                        <div class="card-actions mt-4">
                            <button class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" />
                                {move || if editing.get().is_some() { "Save" } else { "Create" }}
                            </button>
                            <Show when=move || editing.get().is_some()>
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-sm"
                                    on:click=move |_| reset_form()
                                >
                                    "Cancel"
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>

                <div class="card bg-base-100 shadow lg:col-span-2">
                    <div class="card-body p-0">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Code"</th>
                                    <th class="text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <TableState
                                    colspan="3"
                                    loading=departments.loading
                                    empty=empty
                                    error=departments.error
                                />
                                <For
                                    each=rows
                                    key=|d| d.id
                                    children=move |d| {
                                        let id = d.id;
                                        let edit_name = d.name.clone();
                                        let edit_code = d.code.clone();
                                        view! {
                                            <tr>
                                                <td>{d.name.clone()}</td>
                                                <td><span class="badge badge-ghost">{d.code.clone()}</span></td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            editing.set(Some(id));
                                                            name.set(edit_name.clone());
                                                            code.set(edit_code.clone());
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
    }
}
