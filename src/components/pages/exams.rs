use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::courses::use_courses;
use crate::hooks::exams::{use_exam_actions, use_student_exams};
use crate::hooks::sections::use_sections;
use crate::layout::{ShellKind, select_shell};
use crate::models::ExamPayload;
use crate::session::auth::use_auth;

#[component]
pub fn ExamsPage() -> impl IntoView {
    let auth = use_auth();
    let exams = use_student_exams();
    let courses = use_courses();
    let sections = use_sections();
    let actions = use_exam_actions();

    let is_admin = Signal::derive(move || {
        select_shell(auth.state.get().user.as_ref()) == ShellKind::Admin
    });

    let editing = RwSignal::new(Option::<i64>::None);
    let course_id = RwSignal::new(Option::<i64>::None);
    let section_id = RwSignal::new(Option::<i64>::None);
    let room = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());

    let course_options = Signal::derive(move || {
        courses
            .data
            .get()
            .map(|list| list.into_iter().map(|c| (c.id, c.name)).collect::<Vec<_>>())
    });
    let section_options = Signal::derive(move || {
        sections
            .data
            .get()
            .map(|list| list.into_iter().map(|s| (s.id, s.name)).collect::<Vec<_>>())
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
        let (Some(course), Some(section), Ok(room_id), Ok(exam_date)) = (
            course_id.get(),
            section_id.get(),
            room.get().parse::<i64>(),
            date.get().parse(),
        ) else {
            return;
        };
        if start_time.get().is_empty() {
            return;
        }
        let payload = ExamPayload {
            course_id: course,
            section_id: section,
            room_id,
            date: exam_date,
            start_time: start_time.get_untracked(),
        };
        match editing.get() {
            Some(id) => {
                actions.update(id, payload);
                editing.set(None);
            }
            None => actions.create(payload),
        }
        room.set(String::new());
        date.set(String::new());
        start_time.set(String::new());
    };

    let rows = move || exams.data.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());

    view! {
        <div>
            <PageHeader title="Exams" subtitle="Upcoming exam dates and rooms" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Show when=move || is_admin.get()>
                    <div class="card bg-base-100 shadow h-fit">
                        <form class="card-body" on:submit=on_submit>
                            <h3 class="card-title text-base">
                                {move || if editing.get().is_some() { "Edit exam" } else { "Schedule an exam" }}
                            </h3>
                            <EntitySelect label="Course" options=course_options value=course_id />
                            <EntitySelect label="Section" options=section_options value=section_id />
                            <TextField label="Room id" placeholder="12" value=room kind="number" />
                            <TextField label="Date" placeholder="2026-06-15" value=date kind="date" />
                            <TextField label="Starts" placeholder="09:00" value=start_time />
                            <div class="card-actions mt-4">
                                <button class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" />
                                    {move || if editing.get().is_some() { "Save" } else { "Create" }}
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
                                    <th>"Date"</th>
                                    <th>"Time"</th>
                                    <th>"Course"</th>
                                    <th>"Room"</th>
                                    <Show when=move || is_admin.get()>
                                        <th class="text-right">"Actions"</th>
                                    </Show>
                                </tr>
                            </thead>
                            <tbody>
                                <TableState
                                    colspan="5"
                                    loading=exams.loading
                                    empty=empty
                                    error=exams.error
                                />
                                <For
                                    each=rows
                                    key=|e| e.id
                                    children=move |e| {
                                        let id = e.id;
                                        view! {
                                            <tr>
                                                <td>{e.date.to_string()}</td>
                                                <td>{e.start_time.clone()}</td>
                                                <td>{move || course_name(e.course_id)}</td>
                                                <td>{format!("#{}", e.room_id)}</td>
                                                <Show when=move || is_admin.get()>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click={
                                                                let start = e.start_time.clone();
                                                                let exam_date = e.date;
                                                                let exam_course = e.course_id;
                                                                let exam_section = e.section_id;
                                                                let exam_room = e.room_id;
                                                                move |_| {
                                                                    editing.set(Some(id));
                                                                    course_id.set(Some(exam_course));
                                                                    section_id.set(Some(exam_section));
                                                                    room.set(exam_room.to_string());
                                                                    date.set(exam_date.to_string());
                                                                    start_time.set(start.clone());
                                                                }
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
                                                </Show>
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
