//! 毕业设计/项目：总表、我的项目、加入与成员查看

use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::components::widgets::{EntitySelect, PageHeader, TextField};
use crate::hooks::instructors::use_instructors;
use crate::hooks::projects::{
    use_my_projects, use_project_actions, use_project_members, use_projects,
};
use crate::layout::{ShellKind, select_shell};
use crate::models::ProjectPayload;
use crate::session::auth::use_auth;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = use_auth();
    let projects = use_projects();
    let my_projects = use_my_projects();
    let instructors = use_instructors();
    let actions = use_project_actions();

    let is_admin = Signal::derive(move || {
        select_shell(auth.state.get().user.as_ref()) == ShellKind::Admin
    });

    // 选中项目后展开成员列表
    let selected = RwSignal::new(Option::<i64>::None);
    let members = use_project_members(selected.into());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let supervisor_id = RwSignal::new(Option::<i64>::None);
    let capacity = RwSignal::new(String::new());

    let supervisor_options = Signal::derive(move || {
        instructors
            .data
            .get()
            .map(|list| list.into_iter().map(|i| (i.id, i.name)).collect::<Vec<_>>())
    });

    let mine = move || my_projects.data.get().unwrap_or_default();
    let joined = move |id: i64| mine().iter().any(|p| p.id == id);

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(supervisor) = supervisor_id.get() else {
            return;
        };
        if title.get().is_empty() {
            return;
        }
        actions.create(ProjectPayload {
            title: title.get_untracked(),
            description: description.get_untracked(),
            supervisor_id: supervisor,
            capacity: capacity.get_untracked().parse().ok(),
        });
        title.set(String::new());
        description.set(String::new());
        supervisor_id.set(None);
        capacity.set(String::new());
    };

    view! {
        <div>
            <PageHeader title="Projects" subtitle="Supervised student projects" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="flex flex-col gap-6">
                    <Show when=move || is_admin.get()>
                        <div class="card bg-base-100 shadow">
                            <form class="card-body" on:submit=on_create>
                                <h3 class="card-title text-base">"New project"</h3>
                                <TextField label="Title" placeholder="Campus robot" value=title />
                                <TextField label="Description" placeholder="Short summary" value=description />
                                <EntitySelect label="Supervisor" options=supervisor_options value=supervisor_id />
                                <TextField label="Capacity" placeholder="4" value=capacity kind="number" />
                                <div class="card-actions mt-4">
                                    <button class="btn btn-primary btn-sm gap-1">
                                        <Plus attr:class="h-4 w-4" /> "Create"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title text-base">"My projects"</h3>
                            <Show
                                when=move || !mine().is_empty()
                                fallback=|| view! { <p class="text-sm text-base-content/50">"You haven't joined a project yet."</p> }
                            >
                                <ul class="text-sm space-y-1">
                                    <For
                                        each=mine
                                        key=|p| p.id
                                        children=move |p| view! { <li class="font-medium">{p.title}</li> }
                                    />
                                </ul>
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="lg:col-span-2 flex flex-col gap-4">
                    <For
                        each=move || projects.data.get().unwrap_or_default()
                        key=|p| p.id
                        children=move |p| {
                            let id = p.id;
                            let expanded = move || selected.get() == Some(id);
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex items-start justify-between gap-4">
                                            <div>
                                                <h3 class="card-title text-base">{p.title.clone()}</h3>
                                                <p class="text-sm text-base-content/70">{p.description.clone()}</p>
                                                {p.capacity
                                                    .map(|c| {
                                                        view! {
                                                            <span class="badge badge-ghost badge-sm mt-1">
                                                                {format!("capacity {}", c)}
                                                            </span>
                                                        }
                                                    })}
                                            </div>
                                            <div class="flex gap-2">
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| {
                                                        selected.set(if expanded() { None } else { Some(id) })
                                                    }
                                                >
                                                    {move || if expanded() { "Hide members" } else { "Members" }}
                                                </button>
                                                <Show when=move || !joined(id)>
                                                    <button
                                                        class="btn btn-primary btn-sm"
                                                        on:click=move |_| actions.join(id)
                                                    >
                                                        "Join"
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                        <Show when=expanded>
                                            <div class="mt-2 border-t border-base-200 pt-2">
                                                <Show
                                                    when=move || !members.loading.get()
                                                    fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                                                >
                                                    <ul class="text-sm flex flex-wrap gap-2">
                                                        <For
                                                            each=move || members.data.get().unwrap_or_default()
                                                            key=|m| m.user_id
                                                            children=move |m| {
                                                                view! { <li class="badge badge-outline">{m.name}</li> }
                                                            }
                                                        />
                                                    </ul>
                                                </Show>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
