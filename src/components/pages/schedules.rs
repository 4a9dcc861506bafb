//! 课表：学生看自己的周课表，管理员按班级维护

use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{EntitySelect, PageHeader, TableState, TextField};
use crate::hooks::courses::use_courses;
use crate::hooks::facilities::{use_buildings, use_rooms_by_building};
use crate::hooks::instructors::use_instructors;
use crate::hooks::schedules::{
    use_schedule_actions, use_section_schedules, use_student_schedule,
};
use crate::hooks::sections::use_sections;
use crate::layout::{ShellKind, select_shell};
use crate::models::{ScheduleEntry, SchedulePayload};
use crate::session::auth::use_auth;

#[component]
fn ScheduleTable(
    entries: Signal<Option<Vec<ScheduleEntry>>>,
    loading: Signal<bool>,
    error: Signal<Option<crate::error::ApiError>>,
    #[prop(optional, into)] on_edit: Option<Callback<ScheduleEntry>>,
    #[prop(optional, into)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let rows = move || entries.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());
    let with_actions = on_delete.is_some();
    let colspan = if with_actions { "5" } else { "4" };

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Day"</th>
                    <th>"Time"</th>
                    <th>"Course"</th>
                    <th>"Room"</th>
                    <Show when=move || with_actions>
                        <th class="text-right">"Actions"</th>
                    </Show>
                </tr>
            </thead>
            <tbody>
                <TableState colspan=colspan loading=loading empty=empty error=error />
                <For
                    each=rows
                    key=|e| e.id
                    children=move |e| {
                        let id = e.id;
                        let entry = e.clone();
                        view! {
                            <tr>
                                <td>{e.day.clone()}</td>
                                <td>{format!("{} - {}", e.start_time, e.end_time)}</td>
                                <td>{format!("#{}", e.course_id)}</td>
                                <td>{format!("#{}", e.room_id)}</td>
                                <Show when=move || with_actions>
                                    <td class="text-right">
                                        {on_edit.map(|cb| {
                                            let entry = entry.clone();
                                            view! {
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click=move |_| cb.run(entry.clone())
                                                >
                                                    <Pencil attr:class="h-4 w-4" />
                                                </button>
                                            }
                                        })}
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            on:click=move |_| {
                                                if let Some(cb) = on_delete {
                                                    cb.run(id);
                                                }
                                            }
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
    }
}

/// 学生视图：只读周课表
#[component]
fn StudentSchedule() -> impl IntoView {
    let schedule = use_student_schedule();

    view! {
        <div>
            <PageHeader title="My timetable" subtitle="Your weekly class schedule" />
            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <ScheduleTable
                        entries=schedule.data
                        loading=schedule.loading
                        error=schedule.error
                    />
                </div>
            </div>
        </div>
    }
}

/// 管理视图：选班级后维护课表条目
#[component]
fn AdminSchedules() -> impl IntoView {
    let sections = use_sections();
    let courses = use_courses();
    let instructors = use_instructors();
    let buildings = use_buildings();
    let actions = use_schedule_actions();

    let section_id = RwSignal::new(Option::<i64>::None);
    let schedules = use_section_schedules(section_id.into());

    let editing = RwSignal::new(Option::<i64>::None);

    let course_id = RwSignal::new(Option::<i64>::None);
    let instructor_id = RwSignal::new(Option::<i64>::None);
    let building_id = RwSignal::new(Option::<i64>::None);
    let room_id = RwSignal::new(Option::<i64>::None);
    let rooms = use_rooms_by_building(building_id.into());
    let day = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());

    let section_options = Signal::derive(move || {
        sections
            .data
            .get()
            .map(|list| list.into_iter().map(|s| (s.id, s.name)).collect::<Vec<_>>())
    });
    let course_options = Signal::derive(move || {
        courses
            .data
            .get()
            .map(|list| list.into_iter().map(|c| (c.id, c.name)).collect::<Vec<_>>())
    });
    let instructor_options = Signal::derive(move || {
        instructors
            .data
            .get()
            .map(|list| list.into_iter().map(|i| (i.id, i.name)).collect::<Vec<_>>())
    });
    let building_options = Signal::derive(move || {
        buildings
            .data
            .get()
            .map(|list| list.into_iter().map(|b| (b.id, b.name)).collect::<Vec<_>>())
    });
    let room_options = Signal::derive(move || {
        rooms
            .data
            .get()
            .map(|list| list.into_iter().map(|r| (r.id, r.name)).collect::<Vec<_>>())
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(section), Some(course), Some(instructor), Some(room)) = (
            section_id.get(),
            course_id.get(),
            instructor_id.get(),
            room_id.get(),
        ) else {
            return;
        };
        if day.get().is_empty() || start_time.get().is_empty() || end_time.get().is_empty() {
            return;
        }
        let payload = SchedulePayload {
            section_id: section,
            course_id: course,
            instructor_id: instructor,
            room_id: room,
            day: day.get_untracked(),
            start_time: start_time.get_untracked(),
            end_time: end_time.get_untracked(),
        };
        match editing.get() {
            Some(id) => {
                actions.update(id, payload);
                editing.set(None);
            }
            None => actions.create(payload),
        }
        day.set(String::new());
        start_time.set(String::new());
        end_time.set(String::new());
    };

    let on_edit = Callback::new(move |entry: ScheduleEntry| {
        editing.set(Some(entry.id));
        course_id.set(Some(entry.course_id));
        instructor_id.set(Some(entry.instructor_id));
        room_id.set(Some(entry.room_id));
        day.set(entry.day);
        start_time.set(entry.start_time);
        end_time.set(entry.end_time);
    });
    let on_delete = Callback::new(move |id: i64| actions.delete(id));

    view! {
        <div>
            <PageHeader title="Schedules" subtitle="Timetable entries per section" />

            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body py-3">
                    <EntitySelect label="Section" options=section_options value=section_id />
                </div>
            </div>

            <Show
                when=move || section_id.get().is_some()
                fallback=|| view! { <p class="text-sm text-base-content/50">"Select a section to manage its timetable."</p> }
            >
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="card bg-base-100 shadow h-fit">
                        <form class="card-body" on:submit=on_submit>
                            <h3 class="card-title text-base">
                                {move || if editing.get().is_some() { "Edit entry" } else { "New entry" }}
                            </h3>
                            <EntitySelect label="Course" options=course_options value=course_id />
                            <EntitySelect label="Instructor" options=instructor_options value=instructor_id />
                            <EntitySelect label="Building" options=building_options value=building_id />
                            <EntitySelect label="Room" options=room_options value=room_id />
                            <TextField label="Day" placeholder="Monday" value=day />
                            <TextField label="Starts" placeholder="09:00" value=start_time />
                            <TextField label="Ends" placeholder="10:30" value=end_time />
                            <div class="card-actions mt-4">
                                <button class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" />
                                    {move || if editing.get().is_some() { "Save" } else { "Add" }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <div class="card bg-base-100 shadow lg:col-span-2">
                        <div class="card-body p-0">
                            <ScheduleTable
                                entries=schedules.data
                                loading=schedules.loading
                                error=schedules.error
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn SchedulesPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    move || {
        let user = state.get().user;
        match select_shell(user.as_ref()) {
            ShellKind::Student => view! { <StudentSchedule /> }.into_any(),
            ShellKind::Admin => view! { <AdminSchedules /> }.into_any(),
        }
    }
}
