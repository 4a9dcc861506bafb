use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::components::widgets::{PageHeader, TextField};
use crate::hooks::announcements::{use_announcement_actions, use_announcements};
use crate::layout::{ShellKind, select_shell};
use crate::models::AnnouncementPayload;
use crate::session::auth::use_auth;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let auth = use_auth();
    let announcements = use_announcements();
    let actions = use_announcement_actions();

    let is_admin = Signal::derive(move || {
        select_shell(auth.state.get().user.as_ref()) == ShellKind::Admin
    });

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    let on_post = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().is_empty() || body.get().is_empty() {
            return;
        }
        actions.create(AnnouncementPayload {
            title: title.get_untracked(),
            body: body.get_untracked(),
        });
        title.set(String::new());
        body.set(String::new());
    };

    let rows = move || announcements.data.get().unwrap_or_default();

    view! {
        <div>
            <PageHeader title="Announcements" subtitle="Campus-wide notices" />

            <Show when=move || is_admin.get()>
                <div class="card bg-base-100 shadow mb-6">
                    <form class="card-body" on:submit=on_post>
                        <h3 class="card-title text-base">"Post an announcement"</h3>
                        <TextField label="Title" placeholder="Exam week reminder" value=title />
                        <TextField label="Body" placeholder="Details..." value=body />
                        <div class="card-actions mt-2">
                            <button class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" /> "Post"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || announcements.loading.get()>
                <span class="loading loading-spinner"></span>
            </Show>
            <Show when=move || !announcements.loading.get() && rows().is_empty()>
                <p class="text-sm text-base-content/50">"No announcements yet."</p>
            </Show>

            <div class="flex flex-col gap-4">
                <For
                    each=rows
                    key=|a| a.id
                    children=move |a| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <div class="flex items-baseline justify-between">
                                        <h3 class="card-title text-base">{a.title}</h3>
                                        {a.posted_at
                                            .map(|at| {
                                                view! {
                                                    <span class="text-xs text-base-content/50">{at}</span>
                                                }
                                            })}
                                    </div>
                                    <p class="text-sm">{a.body}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
