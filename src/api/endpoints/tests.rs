use super::*;
use crate::web::http::HttpMethod;

#[test]
fn auth_endpoints_are_posts() {
    for ep in [
        Endpoint::Login,
        Endpoint::Register,
        Endpoint::VerifyEmail,
        Endpoint::ForgotPassword,
        Endpoint::ResetPassword,
        Endpoint::RefreshToken,
        Endpoint::ResendVerification,
        Endpoint::ApproveUser(4),
    ] {
        assert_eq!(ep.method(), HttpMethod::Post, "{:?}", ep);
    }
    assert_eq!(Endpoint::ApproveUser(4).path(), "/auth/approve-user/4");
}

#[test]
fn entity_crud_templates() {
    assert_eq!(Endpoint::List(Entity::Departments).path(), "/departments");
    assert_eq!(Endpoint::Create(Entity::Courses).path(), "/courses");
    assert_eq!(Endpoint::Update(Entity::Rooms, 12).path(), "/rooms/12");
    assert_eq!(Endpoint::Delete(Entity::Sections, 3).path(), "/sections/3");

    assert_eq!(Endpoint::List(Entity::Equipment).method(), HttpMethod::Get);
    assert_eq!(Endpoint::Create(Entity::Buildings).method(), HttpMethod::Post);
    assert_eq!(Endpoint::Update(Entity::Instructors, 1).method(), HttpMethod::Put);
    assert_eq!(Endpoint::Delete(Entity::Departments, 1).method(), HttpMethod::Delete);
}

#[test]
fn parent_scoped_templates_interpolate_ids() {
    assert_eq!(Endpoint::SectionsByDepartment(2).path(), "/departments/2/sections");
    assert_eq!(Endpoint::CoursesByDepartment(2).path(), "/departments/2/courses");
    assert_eq!(Endpoint::InstructorsByDepartment(9).path(), "/departments/9/instructors");
    assert_eq!(Endpoint::RoomsByBuilding(5).path(), "/buildings/5/rooms");
    assert_eq!(Endpoint::EquipmentByRoom(7).path(), "/rooms/7/equipment");
    assert_eq!(Endpoint::RoomAvailability(7).path(), "/rooms/7/availability");
}

#[test]
fn project_and_notification_actions() {
    assert_eq!(Endpoint::MyProjects.path(), "/projects/mine");
    assert_eq!(Endpoint::JoinProject(5).path(), "/projects/5/join");
    assert_eq!(Endpoint::JoinProject(5).method(), HttpMethod::Post);
    assert_eq!(Endpoint::ProjectMembers(5).path(), "/projects/5/members");

    assert_eq!(Endpoint::MarkNotificationRead(8).path(), "/notifications/8/read");
    assert_eq!(Endpoint::MarkNotificationRead(8).method(), HttpMethod::Put);
    assert_eq!(Endpoint::ResolveLostItem(3).path(), "/lost-items/3/resolve");
}

#[test]
fn room_path_takes_from_and_to() {
    assert_eq!(Endpoint::RoomPaths.path(), "/room-paths");
    assert_eq!(Endpoint::RoomPath { from: 10, to: 42 }.path(), "/room-paths/10/42");
    assert_eq!(Endpoint::RoomPath { from: 10, to: 42 }.method(), HttpMethod::Get);
}

#[test]
fn only_gets_are_reads() {
    assert!(Endpoint::Users.is_read());
    assert!(Endpoint::StudentSchedule.is_read());
    assert!(!Endpoint::CreateSchedule.is_read());
    assert!(!Endpoint::DeleteExam(1).is_read());
    assert!(!Endpoint::RefreshToken.is_read());
}
