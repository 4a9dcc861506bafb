//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义门户的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Register,
    ForgotPassword,
    /// 门户首页 (需要认证，下同)
    Dashboard,
    Departments,
    Sections,
    Courses,
    Instructors,
    Users,
    Facilities,
    Navigator,
    Schedules,
    Exams,
    Projects,
    Announcements,
    Notifications,
    LostFound,
    StageMaterials,
    AuditLogs,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/dashboard" => Self::Dashboard,
            "/admin/departments" => Self::Departments,
            "/admin/sections" => Self::Sections,
            "/admin/courses" => Self::Courses,
            "/admin/instructors" => Self::Instructors,
            "/admin/users" => Self::Users,
            "/admin/facilities" => Self::Facilities,
            "/admin/audit-logs" => Self::AuditLogs,
            "/navigator" => Self::Navigator,
            "/schedules" => Self::Schedules,
            "/exams" => Self::Exams,
            "/projects" => Self::Projects,
            "/announcements" => Self::Announcements,
            "/notifications" => Self::Notifications,
            "/lost-and-found" => Self::LostFound,
            "/materials" => Self::StageMaterials,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
            Self::Departments => "/admin/departments",
            Self::Sections => "/admin/sections",
            Self::Courses => "/admin/courses",
            Self::Instructors => "/admin/instructors",
            Self::Users => "/admin/users",
            Self::Facilities => "/admin/facilities",
            Self::AuditLogs => "/admin/audit-logs",
            Self::Navigator => "/navigator",
            Self::Schedules => "/schedules",
            Self::Exams => "/exams",
            Self::Projects => "/projects",
            Self::Announcements => "/announcements",
            Self::Notifications => "/notifications",
            Self::LostFound => "/lost-and-found",
            Self::StageMaterials => "/materials",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 守卫只同步检查令牌存在性，从不向服务端异步验证。
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Login | Self::Register | Self::ForgotPassword | Self::NotFound
        )
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 登录成功且没有保留的原始目标时的默认落点
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

/// 守卫裁决结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// 放行
    Allow,
    /// 未认证访问受保护路由：转登录页，保留原始目标待登录后返回
    DenyToLogin { preserve: AppRoute },
    /// 已认证访问登录/注册页：直接进门户首页
    SkipToDashboard,
}

/// 同步守卫裁决：只看令牌存在性，不做服务端验证
pub fn guard(target: AppRoute, authenticated: bool) -> GuardVerdict {
    if target.requires_auth() && !authenticated {
        GuardVerdict::DenyToLogin { preserve: target }
    } else if target.should_redirect_when_authenticated() && authenticated {
        GuardVerdict::SkipToDashboard
    } else {
        GuardVerdict::Allow
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
