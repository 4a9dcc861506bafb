//! 查询/变更钩子
//!
//! 每个资源钩子 H 对资源 R 提供：
//! - 查询操作：声明缓存键与端点，返回 (数据, 加载标志, 错误, 重抓能力)。
//!   参数化查询只在参数存在时启用；参数缺失时完全不发请求。
//! - 变更操作：执行副作用，成功后使自身资源与声明的依赖者失效，
//!   并发出用户可见的确认；失败时发出由服务端错误负载推导的提示。

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cache::{ListPatch, QueryClient};
use super::key::{QueryKey, ResourceTag};
use crate::api::client::ApiClient;
use crate::api::endpoints::Endpoint;
use crate::error::ApiError;
use crate::logging::log_error;
use crate::toast::ToastContext;

// =========================================================
// 查询 (Queries)
// =========================================================

/// 一次查询的完整声明：缓存键 + 抓取端点
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub key: QueryKey,
    pub endpoint: Endpoint,
}

impl QuerySpec {
    pub fn new(key: QueryKey, endpoint: Endpoint) -> Self {
        Self { key, endpoint }
    }

    /// 参数化查询的启用门：参数缺失 ⇒ `None` ⇒ 不发任何请求
    pub fn when<P, F>(param: Option<P>, build: F) -> Option<Self>
    where
        F: FnOnce(P) -> Self,
    {
        param.map(build)
    }
}

/// 查询操作返回的句柄
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    /// 尚未完成过任何抓取（与"空列表"可区分）
    pub loading: Signal<bool>,
    pub error: Signal<Option<ApiError>>,
    pub refetch: Callback<()>,
}

// 手写 Clone/Copy：句柄只含 arena 信号，无论 T 是否 Copy 都可自由复制
impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

/// 声明一个查询
///
/// `spec` 为 `None` 时查询被抑制。订阅端的 Effect 跟踪槽位纪元，
/// 失效后在下一个调度点触发后台重抓；去重由缓存层保证。
pub fn use_query<T>(spec: Signal<Option<QuerySpec>>) -> QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let client: QueryClient = expect_context();
    let api: ApiClient = expect_context();

    Effect::new({
        let api = api.clone();
        move |_| {
            // 参数缺失：抑制请求，而不是带无效值发出
            let Some(spec) = spec.get() else {
                return;
            };
            let slot = client.slot(&spec.key);
            // 跟踪纪元：失效后 Effect 重新进入并触发重抓
            slot.epoch.track();
            client.ensure_fetch(&api, &spec.key, spec.endpoint);
        }
    });

    let data = Signal::derive(move || {
        let spec = spec.get()?;
        let raw = client.slot(&spec.key).data.get()?;
        decode(raw).ok()
    });

    let loading = Signal::derive(move || {
        spec.get()
            .map(|s| {
                let slot = client.slot(&s.key);
                slot.data.get().is_none() && slot.fetched_epoch.get() == 0
            })
            .unwrap_or(false)
    });

    // 抓取错误优先；200 但形状解析失败时同样要让视图看到错误，
    // 而不是呈现成"空列表"
    let error = Signal::derive(move || {
        let spec = spec.get()?;
        let slot = client.slot(&spec.key);
        if let Some(err) = slot.error.get() {
            return Some(err);
        }
        let raw = slot.data.get()?;
        decode::<T>(raw).err()
    });

    let refetch = Callback::new(move |()| {
        if let Some(spec) = spec.get_untracked() {
            client.invalidate_key(&spec.key);
        }
    });

    QueryHandle {
        data,
        loading,
        error,
        refetch,
    }
}

/// 缓存的 JSON 负载按目标形状解码，失败归一化为 Parse 错误
fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, ApiError> {
    serde_json::from_value(raw).map_err(|e| ApiError::parse(e.to_string()))
}

/// 固定键的便捷封装（非参数化查询）
pub fn use_list_query<T>(resource: ResourceTag, endpoint: Endpoint) -> QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let spec = QuerySpec::new(QueryKey::list(resource), endpoint);
    use_query(Signal::derive(move || Some(spec.clone())))
}

// =========================================================
// 变更 (Mutations)
// =========================================================

/// 变更成功后对缓存列表的直接修补计划
#[derive(Debug, Clone, Copy)]
pub enum PatchPlan {
    /// 不修补，只靠失效-重抓
    None,
    /// 服务端回显对象插入 R 的缓存列表
    Insert(ResourceTag),
    /// 服务端回显对象按 id 替换 R 列表中的旧对象
    ReplaceById(ResourceTag),
    /// 按已知 id 从 R 的缓存列表滤除
    RemoveById(ResourceTag, i64),
}

/// 一次变更的声明：失效集合、补丁计划与成功提示
#[derive(Debug, Clone)]
pub struct MutationPlan {
    /// 成功后失效的资源（各自的依赖者随失效图展开）
    pub invalidates: &'static [ResourceTag],
    pub patch: PatchPlan,
    pub success: &'static str,
}

impl MutationPlan {
    pub fn new(invalidates: &'static [ResourceTag], success: &'static str) -> Self {
        Self {
            invalidates,
            patch: PatchPlan::None,
            success,
        }
    }

    pub fn with_patch(mut self, patch: PatchPlan) -> Self {
        self.patch = patch;
        self
    }
}

/// 变更上下文：把 API 客户端、缓存存储与提示通道绑在一起
///
/// 整体为 Copy，页面可以把同一组动作自由移进多个事件闭包。
#[derive(Clone, Copy)]
pub struct MutationCtx {
    api: StoredValue<ApiClient>,
    client: QueryClient,
    toasts: ToastContext,
}

/// 从 Context 组装变更上下文
pub fn use_mutation_ctx() -> MutationCtx {
    MutationCtx {
        api: StoredValue::new(expect_context()),
        client: expect_context(),
        toasts: expect_context(),
    }
}

impl MutationCtx {
    /// 带 JSON 负载的变更（创建/更新）
    pub fn submit<B: Serialize + 'static>(&self, endpoint: Endpoint, body: B, plan: MutationPlan) {
        let api = self.api.get_value();
        let client = self.client;
        let toasts = self.toasts;
        spawn_local(async move {
            let outcome = api.send_json(endpoint, &body).await;
            settle(client, toasts, plan, outcome);
        });
    }

    /// 无负载的变更（删除/加入/标记等）
    pub fn submit_empty(&self, endpoint: Endpoint, plan: MutationPlan) {
        let api = self.api.get_value();
        let client = self.client;
        let toasts = self.toasts;
        spawn_local(async move {
            let outcome = api.send_empty(endpoint).await;
            settle(client, toasts, plan, outcome);
        });
    }
}

/// 变更落定：补丁（可选优化）→ 失效（权威）→ 用户可见提示
fn settle(
    client: QueryClient,
    toasts: ToastContext,
    plan: MutationPlan,
    outcome: Result<Value, ApiError>,
) {
    match outcome {
        Ok(returned) => {
            match plan.patch {
                PatchPlan::None => {}
                PatchPlan::Insert(resource) => {
                    if returned.is_object() {
                        client.patch_lists(resource, &ListPatch::Insert(returned));
                    }
                }
                PatchPlan::ReplaceById(resource) => {
                    if returned.is_object() {
                        client.patch_lists(resource, &ListPatch::ReplaceById(returned));
                    }
                }
                PatchPlan::RemoveById(resource, id) => {
                    client.patch_lists(resource, &ListPatch::RemoveById(id));
                }
            }
            for resource in plan.invalidates {
                client.invalidate_with_dependents(*resource);
            }
            toasts.success(plan.success);
        }
        Err(err) => {
            // 服务端错误负载优先，否则通用消息；绝不静默吞掉
            log_error!("[Mutation] failed: {}", err);
            toasts.error(err.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::key::QueryKey;

    #[test]
    fn absent_parameter_suppresses_the_query() {
        // 参数缺失 ⇒ 不构造 QuerySpec ⇒ 不会发出网络请求
        let spec = QuerySpec::when(None::<i64>, |building_id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Rooms, building_id),
                Endpoint::RoomsByBuilding(building_id),
            )
        });
        assert!(spec.is_none());
    }

    #[test]
    fn undecodable_payload_surfaces_a_parse_error() {
        // 200 响应但形状不对：不能退化成"空列表"，要走错误通道
        let err = decode::<Vec<crate::models::Department>>(serde_json::json!({"odd": true}))
            .unwrap_err();
        assert_eq!(err.kind, crate::error::ApiErrorKind::Parse);
    }

    #[test]
    fn present_parameter_builds_a_scoped_spec() {
        let spec = QuerySpec::when(Some(5), |building_id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Rooms, building_id),
                Endpoint::RoomsByBuilding(building_id),
            )
        })
        .expect("spec should be built");
        assert_eq!(spec.key, QueryKey::scoped(ResourceTag::Rooms, 5));
        assert_eq!(spec.endpoint, Endpoint::RoomsByBuilding(5));
    }
}
