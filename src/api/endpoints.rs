//! 端点注册表
//!
//! 逻辑操作名到 URL 模板的静态映射，部分模板以实体 id 参数化。
//! 所有相对路径都由 `ApiClient` 拼接到统一配置的 base URL 之后。

use crate::web::http::HttpMethod;

/// 可做通用 CRUD 的实体集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Departments,
    Sections,
    Courses,
    Instructors,
    Buildings,
    Rooms,
    Equipment,
}

impl Entity {
    fn base(&self) -> &'static str {
        match self {
            Entity::Departments => "/departments",
            Entity::Sections => "/sections",
            Entity::Courses => "/courses",
            Entity::Instructors => "/instructors",
            Entity::Buildings => "/buildings",
            Entity::Rooms => "/rooms",
            Entity::Equipment => "/equipment",
        }
    }
}

/// 逻辑端点
///
/// 每个变体对应远端的一个操作；`path()` 渲染 URL 模板，
/// `method()` 给出 HTTP 动词。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    // ---- 认证 ----
    Login,
    Register,
    VerifyEmail,
    ForgotPassword,
    ResetPassword,
    RefreshToken,
    ResendVerification,
    ApproveUser(i64),

    // ---- 用户 ----
    Users,
    User(i64),
    DeleteUser(i64),

    // ---- 通用实体 CRUD ----
    List(Entity),
    Create(Entity),
    Update(Entity, i64),
    Delete(Entity, i64),

    // ---- 按父实体筛选 ----
    SectionsByDepartment(i64),
    CoursesByDepartment(i64),
    InstructorsByDepartment(i64),
    RoomsByBuilding(i64),
    EquipmentByRoom(i64),
    RoomAvailability(i64),

    // ---- 课表 ----
    StudentSchedule,
    SchedulesBySection(i64),
    CreateSchedule,
    UpdateSchedule(i64),
    DeleteSchedule(i64),

    // ---- 考试 ----
    StudentExams,
    CreateExam,
    UpdateExam(i64),
    DeleteExam(i64),

    // ---- 项目 ----
    Projects,
    MyProjects,
    ProjectMembers(i64),
    CreateProject,
    JoinProject(i64),

    // ---- 失物招领 ----
    LostItems,
    CreateLostItem,
    ResolveLostItem(i64),
    DeleteLostItem(i64),

    // ---- 公告 / 通知 ----
    Announcements,
    CreateAnnouncement,
    Notifications,
    MarkNotificationRead(i64),

    // ---- 阶段资料 ----
    StudentMaterials,
    CreateStageMaterial,
    UpdateStageMaterial(i64),
    DeleteStageMaterial(i64),

    // ---- 审计 / 导航 ----
    AuditLogs,
    RoomPaths,
    RoomPath { from: i64, to: i64 },
}

impl Endpoint {
    /// 渲染 URL 模板（相对于 base URL）
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::Register => "/auth/register".to_string(),
            Endpoint::VerifyEmail => "/auth/verify-email".to_string(),
            Endpoint::ForgotPassword => "/auth/forgot-password".to_string(),
            Endpoint::ResetPassword => "/auth/reset-password".to_string(),
            Endpoint::RefreshToken => "/auth/refresh-token".to_string(),
            Endpoint::ResendVerification => "/auth/resend-verification".to_string(),
            Endpoint::ApproveUser(id) => format!("/auth/approve-user/{}", id),

            Endpoint::Users => "/users".to_string(),
            Endpoint::User(id) | Endpoint::DeleteUser(id) => format!("/users/{}", id),

            Endpoint::List(entity) | Endpoint::Create(entity) => entity.base().to_string(),
            Endpoint::Update(entity, id) | Endpoint::Delete(entity, id) => {
                format!("{}/{}", entity.base(), id)
            }

            Endpoint::SectionsByDepartment(id) => format!("/departments/{}/sections", id),
            Endpoint::CoursesByDepartment(id) => format!("/departments/{}/courses", id),
            Endpoint::InstructorsByDepartment(id) => format!("/departments/{}/instructors", id),
            Endpoint::RoomsByBuilding(id) => format!("/buildings/{}/rooms", id),
            Endpoint::EquipmentByRoom(id) => format!("/rooms/{}/equipment", id),
            Endpoint::RoomAvailability(id) => format!("/rooms/{}/availability", id),

            Endpoint::StudentSchedule => "/schedules/student".to_string(),
            Endpoint::SchedulesBySection(id) => format!("/sections/{}/schedules", id),
            Endpoint::CreateSchedule => "/schedules".to_string(),
            Endpoint::UpdateSchedule(id) | Endpoint::DeleteSchedule(id) => {
                format!("/schedules/{}", id)
            }

            Endpoint::StudentExams => "/exams/student".to_string(),
            Endpoint::CreateExam => "/exams".to_string(),
            Endpoint::UpdateExam(id) | Endpoint::DeleteExam(id) => format!("/exams/{}", id),

            Endpoint::Projects | Endpoint::CreateProject => "/projects".to_string(),
            Endpoint::MyProjects => "/projects/mine".to_string(),
            Endpoint::ProjectMembers(id) => format!("/projects/{}/members", id),
            Endpoint::JoinProject(id) => format!("/projects/{}/join", id),

            Endpoint::LostItems | Endpoint::CreateLostItem => "/lost-items".to_string(),
            Endpoint::ResolveLostItem(id) => format!("/lost-items/{}/resolve", id),
            Endpoint::DeleteLostItem(id) => format!("/lost-items/{}", id),

            Endpoint::Announcements | Endpoint::CreateAnnouncement => {
                "/announcements".to_string()
            }
            Endpoint::Notifications => "/notifications".to_string(),
            Endpoint::MarkNotificationRead(id) => format!("/notifications/{}/read", id),

            Endpoint::StudentMaterials => "/materials/student".to_string(),
            Endpoint::CreateStageMaterial => "/materials".to_string(),
            Endpoint::UpdateStageMaterial(id) | Endpoint::DeleteStageMaterial(id) => {
                format!("/materials/{}", id)
            }

            Endpoint::AuditLogs => "/audit-logs".to_string(),
            Endpoint::RoomPaths => "/room-paths".to_string(),
            Endpoint::RoomPath { from, to } => format!("/room-paths/{}/{}", from, to),
        }
    }

    /// 该操作使用的 HTTP 动词
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::VerifyEmail
            | Endpoint::ForgotPassword
            | Endpoint::ResetPassword
            | Endpoint::RefreshToken
            | Endpoint::ResendVerification
            | Endpoint::ApproveUser(_)
            | Endpoint::Create(_)
            | Endpoint::CreateSchedule
            | Endpoint::CreateExam
            | Endpoint::CreateProject
            | Endpoint::JoinProject(_)
            | Endpoint::CreateLostItem
            | Endpoint::CreateAnnouncement
            | Endpoint::CreateStageMaterial => HttpMethod::Post,

            Endpoint::Update(_, _)
            | Endpoint::UpdateSchedule(_)
            | Endpoint::UpdateExam(_)
            | Endpoint::ResolveLostItem(_)
            | Endpoint::MarkNotificationRead(_)
            | Endpoint::UpdateStageMaterial(_) => HttpMethod::Put,

            Endpoint::DeleteUser(_)
            | Endpoint::Delete(_, _)
            | Endpoint::DeleteSchedule(_)
            | Endpoint::DeleteExam(_)
            | Endpoint::DeleteLostItem(_)
            | Endpoint::DeleteStageMaterial(_) => HttpMethod::Delete,

            _ => HttpMethod::Get,
        }
    }

    /// 是否为读操作（只有读操作适用固定次数的传输重试）
    pub fn is_read(&self) -> bool {
        self.method() == HttpMethod::Get
    }
}

#[cfg(test)]
mod tests;
