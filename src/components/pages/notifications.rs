use leptos::prelude::*;

use crate::components::icons::Check;
use crate::components::widgets::PageHeader;
use crate::hooks::notifications::{use_notification_actions, use_notifications};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = use_notifications();
    let actions = use_notification_actions();

    let rows = move || notifications.data.get().unwrap_or_default();

    view! {
        <div>
            <PageHeader title="Notifications" subtitle="Messages addressed to you" />

            <Show when=move || notifications.loading.get()>
                <span class="loading loading-spinner"></span>
            </Show>
            <Show when=move || !notifications.loading.get() && rows().is_empty()>
                <p class="text-sm text-base-content/50">"No notifications."</p>
            </Show>

            <ul class="flex flex-col gap-2">
                <For
                    each=rows
                    key=|n| (n.id, n.read)
                    children=move |n| {
                        let id = n.id;
                        let read = n.read;
                        view! {
                            <li class=move || {
                                if read {
                                    "card bg-base-100 shadow-sm opacity-60"
                                } else {
                                    "card bg-base-100 shadow"
                                }
                            }>
                                <div class="card-body py-3 flex-row items-center justify-between">
                                    <span class="text-sm">{n.message.clone()}</span>
                                    <Show when=move || !read>
                                        <button
                                            class="btn btn-ghost btn-xs gap-1"
                                            on:click=move |_| actions.mark_read(id)
                                        >
                                            <Check attr:class="h-4 w-4" /> "Mark read"
                                        </button>
                                    </Show>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
