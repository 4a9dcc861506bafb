use leptos::prelude::*;

use crate::components::icons::{Check, Plus, Trash2};
use crate::components::widgets::{PageHeader, TextField};
use crate::hooks::lost_found::{use_lost_found_actions, use_lost_items};
use crate::layout::{ShellKind, select_shell};
use crate::models::LostItemPayload;
use crate::session::auth::use_auth;

#[component]
pub fn LostFoundPage() -> impl IntoView {
    let auth = use_auth();
    let items = use_lost_items();
    let actions = use_lost_found_actions();

    let is_admin = Signal::derive(move || {
        select_shell(auth.state.get().user.as_ref()) == ShellKind::Admin
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let on_report = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().is_empty() {
            return;
        }
        let loc = location.get_untracked();
        actions.report(LostItemPayload {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: if loc.is_empty() { None } else { Some(loc) },
        });
        title.set(String::new());
        description.set(String::new());
        location.set(String::new());
    };

    let rows = move || items.data.get().unwrap_or_default();

    view! {
        <div>
            <PageHeader title="Lost & Found" subtitle="Report and track lost items" />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body" on:submit=on_report>
                        <h3 class="card-title text-base">"Report an item"</h3>
                        <TextField label="What was lost" placeholder="Blue backpack" value=title />
                        <TextField label="Description" placeholder="Has a laptop inside" value=description />
                        <TextField label="Last seen at" placeholder="Library, 2nd floor" value=location />
                        <div class="card-actions mt-4">
                            <button class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" /> "Report"
                            </button>
                        </div>
                    </form>
                </div>

                <div class="lg:col-span-2 flex flex-col gap-3">
                    <Show when=move || items.loading.get()>
                        <span class="loading loading-spinner"></span>
                    </Show>
                    <Show when=move || !items.loading.get() && rows().is_empty()>
                        <p class="text-sm text-base-content/50">"Nothing reported."</p>
                    </Show>
                    <For
                        each=rows
                        key=|i| (i.id, i.resolved)
                        children=move |i| {
                            let id = i.id;
                            let resolved = i.resolved;
                            view! {
                                <div class=move || {
                                    if resolved {
                                        "card bg-base-100 shadow-sm opacity-60"
                                    } else {
                                        "card bg-base-100 shadow"
                                    }
                                }>
                                    <div class="card-body py-3">
                                        <div class="flex items-center justify-between gap-4">
                                            <div>
                                                <span class="font-medium">{i.title.clone()}</span>
                                                {if resolved {
                                                    Some(view! { <span class="badge badge-success badge-sm ml-2">"found"</span> })
                                                } else {
                                                    None
                                                }}
                                                <p class="text-sm text-base-content/70">{i.description.clone()}</p>
                                                {i.location
                                                    .clone()
                                                    .map(|loc| {
                                                        view! {
                                                            <p class="text-xs text-base-content/50">{format!("Last seen: {}", loc)}</p>
                                                        }
                                                    })}
                                            </div>
                                            <div class="flex gap-1">
                                                <Show when=move || !resolved>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-success gap-1"
                                                        on:click=move |_| actions.resolve(id)
                                                    >
                                                        <Check attr:class="h-4 w-4" /> "Found"
                                                    </button>
                                                </Show>
                                                <Show when=move || is_admin.get()>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |_| actions.delete(id)
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
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
