//! 认证状态管理
//!
//! 管理令牌生命周期与认证信号，与路由系统解耦：
//! 路由服务通过注入的认证信号检查状态。
//! 令牌刷新是显式操作，不是请求拦截器。

use leptos::prelude::*;

use crate::api::client::ApiClient;
use crate::api::endpoints::Endpoint;
use crate::error::ApiResult;
use crate::logging::log_info;
use crate::models::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResendVerificationRequest, ResetPasswordRequest, User, VerifyEmailRequest,
};
use crate::session::store::Session;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅在认证成功后存在）
    pub user: Option<User>,
    /// 是否已认证（令牌存在即认证，不做服务端验证）
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 同步读取持久化的令牌与用户记录；两者是页面刷新后唯一存活的状态。
/// 用户记录解析失败按"无用户"处理，不是致命错误。
pub fn init_auth(ctx: &AuthContext) {
    let token = Session::token();
    let user = Session::stored_user();
    ctx.set_state.update(|state| {
        state.is_authenticated = token.is_some();
        state.user = user;
    });
}

/// 登录并持久化会话
pub async fn login(ctx: &AuthContext, api: &ApiClient, email: String, password: String) -> ApiResult<()> {
    let response: LoginResponse = api
        .send_json(Endpoint::Login, &LoginRequest { email, password })
        .await
        .and_then(|value| {
            serde_json::from_value(value).map_err(|e| crate::error::ApiError::parse(e.to_string()))
        })?;

    Session::set_token(&response.token);
    Session::set_user(&response.user);
    log_info!("[Auth] logged in as {}", response.user.email);

    ctx.set_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// 显式刷新令牌（不会被任何拦截器自动调用）
pub async fn refresh_token(ctx: &AuthContext, api: &ApiClient) -> ApiResult<()> {
    let value = api.send_empty(Endpoint::RefreshToken).await?;
    let response: LoginResponse = serde_json::from_value(value)
        .map_err(|e| crate::error::ApiError::parse(e.to_string()))?;

    Session::set_token(&response.token);
    Session::set_user(&response.user);

    ctx.set_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注销并清除持久化状态
///
/// 导航由路由服务监听认证信号自动处理。
pub fn logout(ctx: &AuthContext) {
    Session::clear();
    log_info!("[Auth] logged out");
    ctx.set_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}

// =========================================================
// 不触及会话状态的认证操作
// =========================================================

pub async fn register(api: &ApiClient, request: RegisterRequest) -> ApiResult<()> {
    api.send_json(Endpoint::Register, &request).await.map(|_| ())
}

pub async fn forgot_password(api: &ApiClient, email: String) -> ApiResult<()> {
    api.send_json(Endpoint::ForgotPassword, &ForgotPasswordRequest { email })
        .await
        .map(|_| ())
}

pub async fn reset_password(api: &ApiClient, request: ResetPasswordRequest) -> ApiResult<()> {
    api.send_json(Endpoint::ResetPassword, &request).await.map(|_| ())
}

pub async fn verify_email(api: &ApiClient, token: String) -> ApiResult<()> {
    api.send_json(Endpoint::VerifyEmail, &VerifyEmailRequest { token })
        .await
        .map(|_| ())
}

pub async fn resend_verification(api: &ApiClient, email: String) -> ApiResult<()> {
    api.send_json(Endpoint::ResendVerification, &ResendVerificationRequest { email })
        .await
        .map(|_| ())
}
