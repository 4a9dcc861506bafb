//! 路由服务模块 - 核心引擎
//!
//! 封装 History API，实现"监听 -> 验证 -> 处理 -> 加载"的导航流程。
//! 认证状态通过注入的信号检查，与认证系统解耦。
//! 未认证访问受保护路由时，保留原始目标，登录成功后自动返回。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardVerdict, guard};
use crate::logging::log_info;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 所有对 window.history 的操作都集中在此模块，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 守卫拒绝时保留的原始目标，登录成功后优先返回这里
    pending_redirect: RwSignal<Option<AppRoute>>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            pending_redirect: RwSignal::new(None),
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 同步守卫：令牌缺失即未认证，不做任何服务端验证
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        match guard(target_route, is_auth) {
            GuardVerdict::DenyToLogin { preserve } => {
                log_info!(
                    "[Router] access denied for {}, redirecting to login",
                    target_route
                );
                // 保留原始目标，登录成功后返回
                self.pending_redirect.set(Some(preserve));
                self.apply(AppRoute::auth_failure_redirect(), use_push);
            }
            GuardVerdict::SkipToDashboard => {
                self.apply(AppRoute::auth_success_redirect(), use_push);
            }
            GuardVerdict::Allow => self.apply(target_route, use_push),
        }
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let pending_redirect = self.pending_redirect;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            // popstate 时也执行守卫逻辑
            match guard(target_route, is_auth) {
                GuardVerdict::DenyToLogin { preserve } => {
                    pending_redirect.set(Some(preserve));
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                GuardVerdict::SkipToDashboard => {
                    let target = AppRoute::auth_success_redirect();
                    replace_history_state(target.to_path());
                    set_route.set(target);
                }
                GuardVerdict::Allow => set_route.set(target_route),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向
    ///
    /// 登录后优先返回守卫拦截时保留的目标；登出后离开受保护页面。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let pending_redirect = self.pending_redirect;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let target = pending_redirect
                        .try_update(Option::take)
                        .flatten()
                        .unwrap_or_else(AppRoute::auth_success_redirect);
                    log_info!("[Router] logged in, continuing to {}", target);
                    push_history_state(target.to_path());
                    set_route.set(target);
                }
            } else if route.requires_auth() {
                log_info!("[Router] logged out, redirecting to login");
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    let router = provide_router(is_authenticated);

    // 首次渲染也要过守卫：直接通过 URL 进入受保护页面时拦截
    let initial = router.current_route().get_untracked();
    router.navigate_to_route(initial, false);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
