//! UniPortal 前端应用
//!
//! 校园门户单页应用，采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（含认证守卫）
//! - `session`: 令牌存储与认证状态管理
//! - `api`: HTTP 客户端封装与端点注册表
//! - `query`: 缓存键、失效图与查询/变更钩子（数据访问核心）
//! - `hooks`: 按领域实体划分的资源钩子
//! - `layout` + `components`: 角色布局选择与 UI 组件层

mod logging;

mod api {
    pub mod client;
    pub mod endpoints;
}
mod error;
mod layout;
mod models;
mod query {
    pub mod cache;
    pub mod hook;
    pub mod key;
}
mod session {
    pub mod auth;
    pub mod store;
}
mod toast;

mod hooks {
    pub mod announcements;
    pub mod audit_logs;
    pub mod courses;
    pub mod departments;
    pub mod exams;
    pub mod facilities;
    pub mod instructors;
    pub mod lost_found;
    pub mod notifications;
    pub mod projects;
    pub mod schedules;
    pub mod sections;
    pub mod stage_materials;
    pub mod users;
}

mod components {
    pub mod forgot_password;
    pub mod icons;
    pub mod login;
    pub mod register;
    pub mod shell {
        pub mod admin;
        pub mod student;
    }
    pub mod pages {
        pub mod announcements;
        pub mod audit_logs;
        pub mod courses;
        pub mod dashboard;
        pub mod departments;
        pub mod exams;
        pub mod facilities;
        pub mod instructors;
        pub mod lost_found;
        pub mod navigator;
        pub mod notifications;
        pub mod projects;
        pub mod schedules;
        pub mod sections;
        pub mod stage_materials;
        pub mod users;
    }
    pub mod widgets;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub(crate) mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{HttpClient, HttpError};
    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::api::client::ApiClient;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::layout::PortalShell;
use crate::query::cache::QueryClient;
use crate::session::auth::{AuthContext, init_auth, refresh_token};
use crate::toast::{ToastContext, ToastHost};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 认证页面直接渲染；门户页面统一交给 `PortalShell`，
/// 由角色布局选择器决定挂载哪一个外壳。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
        portal => view! { <PortalShell route=portal /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组合根：创建并提供全部共享上下文
    let toasts = ToastContext::new();
    provide_context(toasts);

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 缓存存储由组合根持有，钩子通过 Context 引用，而非环境全局变量
    let cache = QueryClient::new();
    provide_context(cache);

    let api = ApiClient::from_default_base();
    provide_context(api);

    // 2. 初始化认证状态（同步读取持久化的令牌与用户记录），
    //    已有令牌时在后台做一次显式续期；失败只记录，由后续请求的
    //    服务端拒绝来驱动登出
    init_auth(&auth_ctx);
    if auth_ctx.state.get_untracked().is_authenticated {
        let api_for_refresh = ApiClient::from_default_base();
        leptos::task::spawn_local(async move {
            if let Err(err) = refresh_token(&auth_ctx, &api_for_refresh).await {
                crate::logging::log_warn!("[Auth] token refresh failed: {}", err);
            }
        });
    }

    // 3. 认证信号注入路由服务，实现守卫与认证系统解耦
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
