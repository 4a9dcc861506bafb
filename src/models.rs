//! 领域模型（瘦 DTO）
//!
//! 所有实体只是远端记录的镜像，客户端不持有形状之外的不变量。
//! 实体的创建/更新/删除只在服务端操作成功后才反映到本地缓存。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// 角色 (Roles)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// 从持久化记录中的角色字段解析
    ///
    /// 未知或缺失的角色一律回退为管理角色（安全默认，见布局选择器）。
    pub fn parse(raw: &str) -> Role {
        if raw.eq_ignore_ascii_case("student") {
            Role::Student
        } else {
            Role::Admin
        }
    }
}

// =========================================================
// 用户与认证 (Users & Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub department_id: Option<i64>,
    /// 学生所在年级（stage），教职员为空
    #[serde(default)]
    pub stage: Option<i32>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department_id: Option<i64>,
    pub stage: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

// =========================================================
// 教务实体 (Academic Entities)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    /// 年级（stage）编号
    pub stage: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPayload {
    pub name: String,
    pub department_id: i64,
    pub stage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub department_id: i64,
    #[serde(default)]
    pub stage: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePayload {
    pub name: String,
    pub code: String,
    pub department_id: i64,
    pub stage: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorPayload {
    pub name: String,
    pub email: String,
    pub department_id: i64,
}

// =========================================================
// 场地实体 (Facilities)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingPayload {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub building_id: i64,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub floor: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPayload {
    pub name: String,
    pub building_id: i64,
    pub capacity: Option<i32>,
    pub floor: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub room_id: i64,
    #[serde(default)]
    pub working: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentPayload {
    pub name: String,
    pub room_id: i64,
    pub working: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room_id: i64,
    pub day: String,
    pub free_slots: Vec<String>,
}

/// 房间导航路径：由远端路径服务计算，客户端只渲染
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPath {
    pub from_room_id: i64,
    pub to_room_id: i64,
    pub steps: Vec<String>,
}

// =========================================================
// 课表与考试 (Schedules & Exams)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub section_id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub room_id: i64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub section_id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub room_id: i64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub course_id: i64,
    pub section_id: i64,
    pub room_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamPayload {
    pub course_id: i64,
    pub section_id: i64,
    pub room_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
}

// =========================================================
// 项目 (Projects)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub supervisor_id: i64,
    #[serde(default)]
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub supervisor_id: i64,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub user_id: i64,
    pub name: String,
}

// =========================================================
// 公告 / 通知 / 失物招领 / 阶段资料 / 审计
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub posted_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementPayload {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostItemPayload {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
}

/// 阶段（年级）教学资料，由阶段负责人（stage driver）维护
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageMaterial {
    pub id: i64,
    pub title: String,
    pub course_id: i64,
    pub stage: i32,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageMaterialPayload {
    pub title: String,
    pub course_id: i64,
    pub stage: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub actor: String,
    pub action: String,
    pub at: String,
}
