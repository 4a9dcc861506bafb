use super::*;

#[test]
fn path_round_trip() {
    let routes = [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::ForgotPassword,
        AppRoute::Dashboard,
        AppRoute::Departments,
        AppRoute::Sections,
        AppRoute::Courses,
        AppRoute::Instructors,
        AppRoute::Users,
        AppRoute::Facilities,
        AppRoute::AuditLogs,
        AppRoute::Navigator,
        AppRoute::Schedules,
        AppRoute::Exams,
        AppRoute::Projects,
        AppRoute::Announcements,
        AppRoute::Notifications,
        AppRoute::LostFound,
        AppRoute::StageMaterials,
    ];
    for route in routes {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

#[test]
fn root_maps_to_login() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/no/such/page"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
}

#[test]
fn auth_pages_are_public_everything_else_guarded() {
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Register.requires_auth());
    assert!(!AppRoute::ForgotPassword.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());

    assert!(AppRoute::Dashboard.requires_auth());
    assert!(AppRoute::Departments.requires_auth());
    assert!(AppRoute::Schedules.requires_auth());
    assert!(AppRoute::AuditLogs.requires_auth());
}

#[test]
fn denied_navigation_preserves_the_attempted_route() {
    assert_eq!(
        guard(AppRoute::Schedules, false),
        GuardVerdict::DenyToLogin {
            preserve: AppRoute::Schedules
        }
    );
    assert_eq!(
        guard(AppRoute::AuditLogs, false),
        GuardVerdict::DenyToLogin {
            preserve: AppRoute::AuditLogs
        }
    );
}

#[test]
fn guard_allows_public_pages_and_authenticated_access() {
    assert_eq!(guard(AppRoute::Login, false), GuardVerdict::Allow);
    assert_eq!(guard(AppRoute::ForgotPassword, false), GuardVerdict::Allow);
    assert_eq!(guard(AppRoute::Dashboard, true), GuardVerdict::Allow);
    assert_eq!(guard(AppRoute::Login, true), GuardVerdict::SkipToDashboard);
    assert_eq!(guard(AppRoute::Register, true), GuardVerdict::SkipToDashboard);
}

#[test]
fn authenticated_users_leave_login_and_register() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(AppRoute::Register.should_redirect_when_authenticated());
    assert!(!AppRoute::ForgotPassword.should_redirect_when_authenticated());
    assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
}
