//! HTTP 客户端封装
//!
//! 单一配置的请求发送器：集中 base URL 配置，为每个出站请求自动附加
//! Bearer 令牌。不做自动令牌刷新（刷新是显式的认证操作，不是拦截器）；
//! 只对读操作应用小而固定的传输重试次数，写操作从不重试。

use serde::Serialize;
use serde_json::Value;

use super::endpoints::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::logging::log_warn;
use crate::session::store::Session;
use crate::web::HttpClient;

/// 默认的远端 API 前缀（同源部署）
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// 读操作在传输失败后的额外尝试次数
const READ_RETRIES: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_default_base() -> Self {
        Self::new(DEFAULT_API_BASE)
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// 单次发送：构建请求、附加令牌、归一化失败
    async fn send_once(&self, endpoint: Endpoint, body: Option<&str>) -> ApiResult<String> {
        let mut builder = HttpClient::request(endpoint.method(), &self.url(endpoint));

        // 令牌存在时一律作为 Bearer 凭据附加；缺失时请求按匿名发送，
        // 过期与越权都由服务端拒绝来发现
        if let Some(token) = Session::token() {
            let bearer = format!("Bearer {}", token);
            builder = builder.header("Authorization", &bearer);
        }

        if let Some(body) = body {
            builder = builder.json_body(body.to_string());
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status, &text));
        }
        Ok(text)
    }

    /// 发送并按端点策略重试
    async fn send_with_policy(&self, endpoint: Endpoint, body: Option<String>) -> ApiResult<String> {
        let retries = if endpoint.is_read() { READ_RETRIES } else { 0 };
        let mut attempt = 0;
        loop {
            match self.send_once(endpoint, body.as_deref()).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_transient() && attempt < retries => {
                    attempt += 1;
                    log_warn!(
                        "[Api] transient failure on {} (attempt {}): {}",
                        endpoint.path(),
                        attempt,
                        err
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn parse_body(text: &str) -> ApiResult<Value> {
        if text.trim().is_empty() {
            // 204 / 空响应体视为成功但无负载
            return Ok(Value::Null);
        }
        serde_json::from_str(text).map_err(|e| ApiError::parse(e.to_string()))
    }

    /// 读操作：GET 为未定型的 JSON（缓存层按此存储）
    pub async fn fetch_value(&self, endpoint: Endpoint) -> ApiResult<Value> {
        let text = self.send_with_policy(endpoint, None).await?;
        Self::parse_body(&text)
    }

    /// 写操作：发送 JSON 负载，返回服务端回显的对象（可能为空）
    pub async fn send_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ApiResult<Value> {
        let payload =
            serde_json::to_string(body).map_err(|e| ApiError::parse(e.to_string()))?;
        let text = self.send_with_policy(endpoint, Some(payload)).await?;
        Self::parse_body(&text)
    }

    /// 写操作：无请求体（删除、加入、标记已读等）
    pub async fn send_empty(&self, endpoint: Endpoint) -> ApiResult<Value> {
        let text = self.send_with_policy(endpoint, None).await?;
        Self::parse_body(&text)
    }
}
