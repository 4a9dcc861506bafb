use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::courses::use_courses;
use crate::hooks::stage_materials::{use_stage_material_actions, use_student_materials};
use crate::layout::{ShellKind, select_shell};
use crate::models::StageMaterialPayload;
use crate::session::auth::use_auth;

#[component]
pub fn StageMaterialsPage() -> impl IntoView {
    let auth = use_auth();
    let materials = use_student_materials();
    let courses = use_courses();
    let actions = use_stage_material_actions();

    let is_admin = Signal::derive(move || {
        select_shell(auth.state.get().user.as_ref()) == ShellKind::Admin
    });

    let editing = RwSignal::new(Option::<i64>::None);
    let title = RwSignal::new(String::new());
    let course_id = RwSignal::new(Option::<i64>::None);
    let stage = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());

    let course_options = Signal::derive(move || {
        courses
            .data
            .get()
            .map(|list| list.into_iter().map(|c| (c.id, c.name)).collect::<Vec<_>>())
    });

    let course_name = move |id: i64| {
        courses
            .data
            .get()
            .and_then(|list| list.into_iter().find(|c| c.id == id).map(|c| c.name))
            .unwrap_or_else(|| format!("#{}", id))
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(course), Ok(stage_no)) = (course_id.get(), stage.get().parse::<i32>()) else {
            return;
        };
        if title.get().is_empty() || url.get().is_empty() {
            return;
        }
        let payload = StageMaterialPayload {
            title: title.get_untracked(),
            course_id: course,
            stage: stage_no,
            url: url.get_untracked(),
        };
        match editing.get() {
            Some(id) => {
                actions.update(id, payload);
                editing.set(None);
            }
            None => actions.create(payload),
        }
        title.set(String::new());
        url.set(String::new());
    };

    let rows = move || materials.data.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());

    view! {
        <div>
            <PageHeader title="Stage materials" subtitle="Lecture notes and resources for your stage" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Show when=move || is_admin.get()>
                    <div class="card bg-base-100 shadow h-fit">
                        <form class="card-body" on:submit=on_submit>
                            <h3 class="card-title text-base">
                                {move || if editing.get().is_some() { "Edit material" } else { "Upload material" }}
                            </h3>
                            <TextField label="Title" placeholder="Week 3 slides" value=title />
                            <EntitySelect label="Course" options=course_options value=course_id />
                            <TextField label="Stage" placeholder="2" value=stage kind="number" />
                            <TextField label="URL" placeholder="https://..." value=url />
                            <div class="card-actions mt-4">
                                <button class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" />
                                    {move || if editing.get().is_some() { "Save" } else { "Add" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div
                    class=move || {
                        if is_admin.get() {
                            "card bg-base-100 shadow lg:col-span-2"
                        } else {
                            "card bg-base-100 shadow lg:col-span-3"
                        }
                    }
                >
                    <div class="card-body p-0">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Course"</th>
                                    <th>"Stage"</th>
                                    <th class="text-right">"Link"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <TableState
                                    colspan="4"
                                    loading=materials.loading
                                    empty=empty
                                    error=materials.error
                                />
                                <For
                                    each=rows
                                    key=|m| m.id
                                    children=move |m| {
                                        let id = m.id;
                                        view! {
                                            <tr>
                                                <td>{m.title.clone()}</td>
                                                <td>{move || course_name(m.course_id)}</td>
                                                <td>{m.stage}</td>
                                                <td class="text-right">
                                                    <a
                                                        class="link link-primary text-sm"
                                                        href=m.url.clone()
                                                        target="_blank"
                                                    >
                                                        "Open"
                                                    </a>
                                                    <Show when=move || is_admin.get()>
                                                        <button
                                                            class="btn btn-ghost btn-xs ml-1"
                                                            on:click={
                                                                let m_title = m.title.clone();
                                                                let m_url = m.url.clone();
                                                                let m_course = m.course_id;
                                                                let m_stage = m.stage;
                                                                move |_| {
                                                                    editing.set(Some(id));
                                                                    title.set(m_title.clone());
                                                                    course_id.set(Some(m_course));
                                                                    stage.set(m_stage.to_string());
                                                                    url.set(m_url.clone());
                                                                }
                                                            }
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error ml-1"
                                                            on:click=move |_| actions.delete(id)
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </Show>
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
