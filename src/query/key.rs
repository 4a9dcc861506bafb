//! 缓存键模式与失效图
//!
//! 缓存条目以 (逻辑资源名, 可选判别参数) 的有序二元组为键。
//! 不变量：改变资源 R 的变更必须使所有键的资源名为 R、
//! 或 R 的已声明依赖者的缓存条目失效。

/// 逻辑资源名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTag {
    Users,
    Departments,
    Sections,
    Courses,
    Instructors,
    Buildings,
    Rooms,
    Equipment,
    RoomAvailability,
    RoomPaths,
    Schedules,
    Exams,
    Projects,
    MyProjects,
    ProjectMembers,
    Announcements,
    Notifications,
    LostItems,
    StageMaterials,
    AuditLogs,
}

impl ResourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceTag::Users => "users",
            ResourceTag::Departments => "departments",
            ResourceTag::Sections => "sections",
            ResourceTag::Courses => "courses",
            ResourceTag::Instructors => "instructors",
            ResourceTag::Buildings => "buildings",
            ResourceTag::Rooms => "rooms",
            ResourceTag::Equipment => "equipment",
            ResourceTag::RoomAvailability => "room-availability",
            ResourceTag::RoomPaths => "room-paths",
            ResourceTag::Schedules => "schedules",
            ResourceTag::Exams => "exams",
            ResourceTag::Projects => "projects",
            ResourceTag::MyProjects => "my-projects",
            ResourceTag::ProjectMembers => "project-members",
            ResourceTag::Announcements => "announcements",
            ResourceTag::Notifications => "notifications",
            ResourceTag::LostItems => "lost-items",
            ResourceTag::StageMaterials => "stage-materials",
            ResourceTag::AuditLogs => "audit-logs",
        }
    }

    /// 失效图：资源 R 变更时，除 R 自身外还需失效的资源
    ///
    /// 例：加入项目会同时改变全局项目列表与"我的项目"列表；
    /// 房间变更会影响可用性与导航路径。
    pub fn dependents(&self) -> &'static [ResourceTag] {
        match self {
            ResourceTag::Projects => &[ResourceTag::MyProjects, ResourceTag::ProjectMembers],
            ResourceTag::Rooms => &[ResourceTag::RoomAvailability, ResourceTag::RoomPaths],
            ResourceTag::Buildings => &[ResourceTag::Rooms],
            ResourceTag::Sections => &[ResourceTag::Schedules],
            ResourceTag::Schedules => &[ResourceTag::RoomAvailability],
            _ => &[],
        }
    }
}

/// 缓存键：(资源名, 可选判别参数)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: ResourceTag,
    pub param: Option<String>,
}

impl QueryKey {
    /// 无参数的全量列表键
    pub fn list(resource: ResourceTag) -> Self {
        Self {
            resource,
            param: None,
        }
    }

    /// 带判别参数的键（如"某楼的房间"按楼 id 区分）
    pub fn scoped(resource: ResourceTag, param: impl ToString) -> Self {
        Self {
            resource,
            param: Some(param.to_string()),
        }
    }

    /// 日志用的可读形式
    pub fn render(&self) -> String {
        match &self.param {
            Some(param) => format!("{}:{}", self.resource.as_str(), param),
            None => self.resource.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinguished_by_param() {
        let all = QueryKey::list(ResourceTag::Rooms);
        let scoped = QueryKey::scoped(ResourceTag::Rooms, 3);
        assert_ne!(all, scoped);
        assert_eq!(scoped, QueryKey::scoped(ResourceTag::Rooms, 3));
        assert_eq!(all.render(), "rooms");
        assert_eq!(scoped.render(), "rooms:3");
    }

    #[test]
    fn project_mutations_reach_both_lists() {
        let deps = ResourceTag::Projects.dependents();
        assert!(deps.contains(&ResourceTag::MyProjects));
        assert!(deps.contains(&ResourceTag::ProjectMembers));
    }

    #[test]
    fn leaf_resources_have_no_dependents() {
        assert!(ResourceTag::Departments.dependents().is_empty());
        assert!(ResourceTag::Announcements.dependents().is_empty());
        assert!(ResourceTag::AuditLogs.dependents().is_empty());
    }
}
