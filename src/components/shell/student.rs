//! 学生外壳：顶栏布局

use leptos::prelude::*;

use crate::components::icons::{Bell, GraduationCap, LogOut};
use crate::hooks::notifications::use_notifications;
use crate::layout::page_view;
use crate::session::auth::{logout, use_auth};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const STUDENT_NAV: &[(AppRoute, &str)] = &[
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::Schedules, "Schedule"),
    (AppRoute::Exams, "Exams"),
    (AppRoute::Projects, "Projects"),
    (AppRoute::StageMaterials, "Materials"),
    (AppRoute::Announcements, "Announcements"),
    (AppRoute::LostFound, "Lost & Found"),
    (AppRoute::Navigator, "Navigator"),
];

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let router = use_router();
    let active = move || router.current_route().get() == route;

    view! {
        <li>
            <a
                class=move || if active() { "active" } else { "" }
                on:click=move |_| router.navigate(route)
            >
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn StudentShell(route: AppRoute) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notifications = use_notifications();

    let user_name = move || {
        auth.state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Student".to_string())
    };
    let unread = move || {
        notifications
            .data
            .get()
            .map(|list| list.iter().filter(|n| !n.read).count())
            .unwrap_or(0)
    };
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <header class="navbar bg-base-100 shadow px-4">
                <div class="navbar-start gap-2">
                    <div class="dropdown lg:hidden">
                        <label tabindex="0" class="btn btn-ghost">"☰"</label>
                        <ul tabindex="0" class="menu dropdown-content z-10 mt-3 w-52 rounded-box bg-base-100 p-2 shadow">
                            {STUDENT_NAV
                                .iter()
                                .map(|(route, label)| view! { <NavLink route=*route label=label /> })
                                .collect_view()}
                        </ul>
                    </div>
                    <span class="text-primary h-6 w-6">
                        <GraduationCap attr:class="h-6 w-6" />
                    </span>
                    <span class="text-lg font-bold">"UniPortal"</span>
                </div>
                <div class="navbar-center hidden lg:flex">
                    <ul class="menu menu-horizontal px-1">
                        {STUDENT_NAV
                            .iter()
                            .map(|(route, label)| view! { <NavLink route=*route label=label /> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="navbar-end gap-1">
                    <button
                        class="btn btn-ghost btn-circle"
                        on:click=move |_| router.navigate(AppRoute::Notifications)
                    >
                        <div class="indicator">
                            <Bell attr:class="h-5 w-5" />
                            <Show when=move || { unread() > 0 }>
                                <span class="badge badge-primary badge-xs indicator-item">{unread}</span>
                            </Show>
                        </div>
                    </button>
                    <span class="hidden md:inline text-sm text-base-content/70">{user_name}</span>
                    <button on:click=on_logout class="btn btn-ghost btn-circle text-error" title="Sign out">
                        <LogOut attr:class="h-5 w-5" />
                    </button>
                </div>
            </header>
            <main class="flex-1 p-4 md:p-8">{page_view(route)}</main>
        </div>
    }
}
