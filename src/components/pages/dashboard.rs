use leptos::prelude::*;

use crate::components::widgets::PageHeader;
use crate::hooks::announcements::use_announcements;
use crate::session::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
fn QuickLink(route: AppRoute, title: &'static str, blurb: &'static str) -> impl IntoView {
    let router = use_router();

    view! {
        <button
            class="card bg-base-100 shadow hover:shadow-lg transition-shadow text-left"
            on:click=move |_| router.navigate(route)
        >
            <div class="card-body">
                <h3 class="card-title text-base">{title}</h3>
                <p class="text-sm text-base-content/70">{blurb}</p>
            </div>
        </button>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let announcements = use_announcements();

    let greeting = move || {
        auth.state
            .get()
            .user
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    let latest = move || {
        announcements
            .data
            .get()
            .unwrap_or_default()
            .into_iter()
            .take(3)
            .collect::<Vec<_>>()
    };

    view! {
        <div>
            <PageHeader title="Dashboard" subtitle="Your campus at a glance" />
            <p class="text-lg mb-6">{greeting}</p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                <QuickLink
                    route=AppRoute::Schedules
                    title="Timetable"
                    blurb="Weekly class schedule"
                />
                <QuickLink route=AppRoute::Exams title="Exams" blurb="Upcoming exam dates" />
                <QuickLink
                    route=AppRoute::Navigator
                    title="Room navigator"
                    blurb="Directions between rooms"
                />
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-base">"Latest announcements"</h3>
                    <Show
                        when=move || !latest().is_empty()
                        fallback=|| view! { <p class="text-sm text-base-content/50">"No announcements yet."</p> }
                    >
                        <ul class="divide-y divide-base-200">
                            <For
                                each=latest
                                key=|a| a.id
                                children=move |a| {
                                    view! {
                                        <li class="py-2">
                                            <div class="font-medium">{a.title}</div>
                                            <div class="text-sm text-base-content/70">{a.body}</div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
}
