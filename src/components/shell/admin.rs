//! 管理外壳：响应式侧边栏布局

use leptos::prelude::*;

use crate::components::icons::{GraduationCap, LogOut};
use crate::layout::page_view;
use crate::session::auth::{logout, use_auth};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 侧边栏条目
#[component]
fn SidebarLink(route: AppRoute, label: &'static str) -> impl IntoView {
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

const ADMIN_NAV: &[(AppRoute, &str)] = &[
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::Departments, "Departments"),
    (AppRoute::Sections, "Sections"),
    (AppRoute::Courses, "Courses"),
    (AppRoute::Instructors, "Instructors"),
    (AppRoute::Users, "Users"),
    (AppRoute::Facilities, "Facilities"),
    (AppRoute::Schedules, "Schedules"),
    (AppRoute::Exams, "Exams"),
    (AppRoute::Projects, "Projects"),
    (AppRoute::Announcements, "Announcements"),
    (AppRoute::Notifications, "Notifications"),
    (AppRoute::LostFound, "Lost & Found"),
    (AppRoute::StageMaterials, "Stage Materials"),
    (AppRoute::Navigator, "Room Navigator"),
    (AppRoute::AuditLogs, "Audit Logs"),
];

#[component]
pub fn AdminShell(route: AppRoute) -> impl IntoView {
    let auth = use_auth();
    let user_name = move || {
        auth.state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Administrator".to_string())
    };
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow lg:hidden">
                    <label for="admin-drawer" class="btn btn-ghost drawer-button">"☰"</label>
                    <span class="text-lg font-bold">"UniPortal Admin"</span>
                </div>
                <main class="p-4 md:p-8">{page_view(route)}</main>
            </div>
            <div class="drawer-side">
                <label for="admin-drawer" class="drawer-overlay"></label>
                <aside class="w-64 min-h-full bg-base-100 flex flex-col">
                    <div class="p-4 flex items-center gap-2 border-b border-base-200">
                        <span class="text-primary h-8 w-8">
                            <GraduationCap attr:class="h-8 w-8" />
                        </span>
                        <div>
                            <div class="font-bold">"UniPortal"</div>
                            <div class="text-xs text-base-content/60">{user_name}</div>
                        </div>
                    </div>
                    <ul class="menu p-2 flex-1 overflow-y-auto">
                        {ADMIN_NAV
                            .iter()
                            .map(|(route, label)| {
                                view! { <SidebarLink route=*route label=label /> }
                            })
                            .collect_view()}
                    </ul>
                    <div class="p-2 border-t border-base-200">
                        <button on:click=on_logout class="btn btn-ghost btn-sm w-full justify-start gap-2 text-error">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
