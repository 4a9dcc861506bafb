//! 角色布局选择器
//!
//! 读取持久化的用户记录（防御式解析，失败按"无用户"处理），
//! 在两个互斥的展示外壳中选择一个挂载：
//! Student 角色挂学生外壳，Admin/未知/缺失一律挂管理外壳。
//! 外壳按需挂载：路由匹配时只实例化被选中的那一个。

use leptos::prelude::*;

use crate::components::shell::admin::AdminShell;
use crate::components::shell::student::StudentShell;
use crate::models::{Role, User};
use crate::session::auth::use_auth;
use crate::web::route::AppRoute;

/// 可挂载的展示外壳
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Admin,
    Student,
}

/// 核心选择逻辑：用户记录 → 外壳
///
/// 缺失记录与未知角色都回退到管理外壳（既定默认）。
pub fn select_shell(user: Option<&User>) -> ShellKind {
    match user.map(User::role) {
        Some(Role::Student) => ShellKind::Student,
        Some(Role::Admin) | None => ShellKind::Admin,
    }
}

/// 门户页面分发
///
/// 外壳只负责导航与框架，页面内容在这里按路由实例化。
pub(crate) fn page_view(route: AppRoute) -> AnyView {
    use crate::components::pages;
    match route {
        AppRoute::Departments => view! { <pages::departments::DepartmentsPage /> }.into_any(),
        AppRoute::Sections => view! { <pages::sections::SectionsPage /> }.into_any(),
        AppRoute::Courses => view! { <pages::courses::CoursesPage /> }.into_any(),
        AppRoute::Instructors => view! { <pages::instructors::InstructorsPage /> }.into_any(),
        AppRoute::Users => view! { <pages::users::UsersPage /> }.into_any(),
        AppRoute::Facilities => view! { <pages::facilities::FacilitiesPage /> }.into_any(),
        AppRoute::AuditLogs => view! { <pages::audit_logs::AuditLogsPage /> }.into_any(),
        AppRoute::Navigator => view! { <pages::navigator::NavigatorPage /> }.into_any(),
        AppRoute::Schedules => view! { <pages::schedules::SchedulesPage /> }.into_any(),
        AppRoute::Exams => view! { <pages::exams::ExamsPage /> }.into_any(),
        AppRoute::Projects => view! { <pages::projects::ProjectsPage /> }.into_any(),
        AppRoute::Announcements => view! { <pages::announcements::AnnouncementsPage /> }.into_any(),
        AppRoute::Notifications => view! { <pages::notifications::NotificationsPage /> }.into_any(),
        AppRoute::LostFound => view! { <pages::lost_found::LostFoundPage /> }.into_any(),
        AppRoute::StageMaterials => {
            view! { <pages::stage_materials::StageMaterialsPage /> }.into_any()
        }
        // Dashboard 与其余路由落到首页
        _ => view! { <pages::dashboard::DashboardPage /> }.into_any(),
    }
}

/// 门户外壳：按角色挂载管理或学生布局
#[component]
pub fn PortalShell(route: AppRoute) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    move || {
        let user = state.get().user;
        match select_shell(user.as_ref()) {
            ShellKind::Student => view! { <StudentShell route=route /> }.into_any(),
            ShellKind::Admin => view! { <AdminShell route=route /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_record(raw: &str) -> Option<User> {
        serde_json::from_str(raw).ok()
    }

    const STUDENT_RECORD: &str =
        r#"{"id":1,"name":"Sam","email":"sam@uni.edu","role":"Student"}"#;
    const ADMIN_RECORD: &str =
        r#"{"id":2,"name":"Amal","email":"amal@uni.edu","role":"Admin"}"#;

    #[test]
    fn student_record_selects_student_shell() {
        let user = parse_record(STUDENT_RECORD);
        assert_eq!(select_shell(user.as_ref()), ShellKind::Student);
    }

    #[test]
    fn admin_record_selects_admin_shell() {
        let user = parse_record(ADMIN_RECORD);
        assert_eq!(select_shell(user.as_ref()), ShellKind::Admin);
    }

    #[test]
    fn missing_record_defaults_to_admin_shell() {
        assert_eq!(select_shell(None), ShellKind::Admin);
    }

    #[test]
    fn unparsable_record_defaults_to_admin_shell() {
        // 解析失败映射为"无用户"，不是致命错误
        let user = parse_record("{broken json");
        assert!(user.is_none());
        assert_eq!(select_shell(user.as_ref()), ShellKind::Admin);
    }

    #[test]
    fn unknown_role_defaults_to_admin_shell() {
        let user = parse_record(
            r#"{"id":3,"name":"Rida","email":"rida@uni.edu","role":"Registrar"}"#,
        );
        assert_eq!(select_shell(user.as_ref()), ShellKind::Admin);
    }
}
