//! 会话存储：令牌与持久化用户记录
//!
//! 进程级的访问令牌持有者。令牌在登录/刷新时创建，随每个出站请求读取，
//! 登出时销毁；客户端不做过期跟踪，过期只能通过服务端拒绝请求发现。
//! 不变量：每个会话最多一个存活令牌，令牌缺失即"未认证"。

use std::marker::PhantomData;

use crate::models::User;
use crate::web::LocalStorage;

const TOKEN_KEY: &str = "uniportal_token";
const USER_KEY: &str = "uniportal_user";

/// 持久化后端的最小接口
///
/// 生产环境由浏览器 LocalStorage 实现；
/// 单元测试用内存表替换（见 tests.rs）。
pub trait StorageBackend {
    fn read(key: &str) -> Option<String>;
    fn write(key: &str, value: &str) -> bool;
    fn remove(key: &str) -> bool;
}

/// 浏览器 LocalStorage 后端
pub struct WebStorage;

impl StorageBackend for WebStorage {
    fn read(key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn write(key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }

    fn remove(key: &str) -> bool {
        LocalStorage::delete(key)
    }
}

/// 令牌与用户记录的存取操作
pub struct SessionStore<B: StorageBackend>(PhantomData<B>);

impl<B: StorageBackend> SessionStore<B> {
    /// 持久化令牌，使其对后续请求可用
    pub fn set_token(token: &str) -> bool {
        B::write(TOKEN_KEY, token)
    }

    /// 当前令牌；缺失即未认证
    pub fn token() -> Option<String> {
        B::read(TOKEN_KEY)
    }

    pub fn clear_token() -> bool {
        B::remove(TOKEN_KEY)
    }

    /// 持久化序列化后的用户记录
    pub fn set_user(user: &User) -> bool {
        match serde_json::to_string(user) {
            Ok(json) => B::write(USER_KEY, &json),
            Err(_) => false,
        }
    }

    /// 防御式读取用户记录
    ///
    /// 记录缺失或无法解析都映射为 `None`（既定默认），绝不 panic。
    pub fn stored_user() -> Option<User> {
        let raw = B::read(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// 登出：同时销毁令牌与用户记录
    pub fn clear() {
        B::remove(TOKEN_KEY);
        B::remove(USER_KEY);
    }
}

/// 生产环境使用的会话存储别名
pub type Session = SessionStore<WebStorage>;

#[cfg(test)]
mod tests;
