//! 缓存存储与失效
//!
//! 显式的缓存存储对象：由组合根持有、通过 Context 传给各个资源钩子，
//! 而不是环境全局状态。每个槽位保存最近一次抓取的 JSON 负载、错误、
//! 失效纪元与在途标记。
//!
//! 顺序保证：失效只是把纪元 +1，真正的重新抓取由订阅端的 Effect
//! 在下一个调度点发起（invalidate-then-refetch 是调度的，不是同步的）。
//! 同一键同时最多一个网络请求在途；抓取失败不清除已有数据
//! （stale-while-revalidate 下限：错误绝不破坏读路径）。

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::key::{QueryKey, ResourceTag};
use crate::api::client::ApiClient;
use crate::api::endpoints::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::logging::{log_info, log_warn};

// =========================================================
// 槽位 (Cache Slot)
// =========================================================

/// 单个缓存键对应的槽位
///
/// 纪元从 1 开始，`fetched_epoch` 从 0 开始：
/// 新建槽位天然处于"需要抓取"状态。
#[derive(Clone, Copy)]
pub(crate) struct Slot {
    pub data: RwSignal<Option<Value>>,
    pub error: RwSignal<Option<ApiError>>,
    /// 失效纪元：每次失效 +1
    pub epoch: RwSignal<u64>,
    /// 最近一次完成的抓取所满足的纪元
    pub fetched_epoch: RwSignal<u64>,
    pub inflight: RwSignal<bool>,
}

impl Slot {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            epoch: RwSignal::new(1),
            fetched_epoch: RwSignal::new(0),
            inflight: RwSignal::new(false),
        }
    }

    /// 标记抓取开始，返回本次抓取要满足的纪元
    pub(crate) fn begin(&self) -> u64 {
        self.inflight.set(true);
        self.epoch.get_untracked()
    }

    /// 抓取结束：成功覆盖数据并清除错误；失败保留旧数据
    pub(crate) fn complete(&self, result: ApiResult<Value>, target_epoch: u64) {
        match result {
            Ok(value) => {
                self.error.set(None);
                self.data.set(Some(value));
            }
            Err(err) => {
                // 旧数据保留，读路径不受影响
                self.error.set(Some(err));
            }
        }
        self.fetched_epoch.set(target_epoch);
        self.inflight.set(false);
    }
}

// =========================================================
// 抓取决策
// =========================================================

/// 是否需要发起一次网络抓取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchDecision {
    /// 需要抓取
    Start,
    /// 已有同键请求在途（去重：每键最多一个在途请求）
    AlreadyInFlight,
    /// 缓存仍然新鲜
    Fresh,
}

pub(crate) fn decide(inflight: bool, epoch: u64, fetched_epoch: u64) -> FetchDecision {
    if inflight {
        FetchDecision::AlreadyInFlight
    } else if fetched_epoch >= epoch {
        FetchDecision::Fresh
    } else {
        FetchDecision::Start
    }
}

// =========================================================
// 列表补丁 (List Patches)
// =========================================================

/// 对缓存中列表的直接修补
///
/// 这是允许的优化，不是语义来源：失效-重抓路径才是权威的。
#[derive(Debug, Clone)]
pub enum ListPatch {
    /// 创建成功后把服务端回显的对象插入列表
    Insert(Value),
    /// 更新成功后按 id 替换列表中的对象
    ReplaceById(Value),
    /// 删除成功后按 id 从列表中滤除
    RemoveById(i64),
}

fn entry_id(value: &Value) -> Option<i64> {
    value.get("id")?.as_i64()
}

/// 对一个 JSON 数组应用补丁，返回是否有改动
pub(crate) fn apply_list_patch(list: &mut Vec<Value>, patch: &ListPatch) -> bool {
    match patch {
        ListPatch::Insert(item) => {
            list.push(item.clone());
            true
        }
        ListPatch::ReplaceById(item) => {
            let Some(id) = entry_id(item) else {
                return false;
            };
            let mut changed = false;
            for entry in list.iter_mut() {
                if entry_id(entry) == Some(id) {
                    *entry = item.clone();
                    changed = true;
                }
            }
            changed
        }
        ListPatch::RemoveById(id) => {
            let before = list.len();
            list.retain(|entry| entry_id(entry) != Some(*id));
            list.len() != before
        }
    }
}

// =========================================================
// 缓存存储 (QueryClient)
// =========================================================

/// 进程内唯一的缓存存储
///
/// 句柄可以随处复制；底层映射只被单一事件循环访问，无数据竞争。
#[derive(Clone, Copy)]
pub struct QueryClient {
    slots: StoredValue<HashMap<QueryKey, Slot>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            slots: StoredValue::new(HashMap::new()),
        }
    }

    /// 取得（或惰性创建）键对应的槽位
    pub(crate) fn slot(&self, key: &QueryKey) -> Slot {
        let existing = self.slots.with_value(|slots| slots.get(key).copied());
        if let Some(slot) = existing {
            return slot;
        }
        let slot = Slot::new();
        self.slots.update_value(|slots| {
            slots.insert(key.clone(), slot);
        });
        slot
    }

    /// 使单个键失效
    pub fn invalidate_key(&self, key: &QueryKey) {
        let slot = self.slot(key);
        slot.epoch.update(|e| *e += 1);
    }

    /// 使资源名为 R 的所有缓存条目失效（不含依赖者）
    pub fn invalidate(&self, resource: ResourceTag) {
        let touched: Vec<Slot> = self.slots.with_value(|slots| {
            slots
                .iter()
                .filter(|(key, _)| key.resource == resource)
                .map(|(_, slot)| *slot)
                .collect()
        });
        if !touched.is_empty() {
            log_info!("[Cache] invalidating {} ({} keys)", resource.as_str(), touched.len());
        }
        for slot in touched {
            slot.epoch.update(|e| *e += 1);
        }
    }

    /// 使资源 R 及其失效图中声明的依赖者全部失效
    pub fn invalidate_with_dependents(&self, resource: ResourceTag) {
        self.invalidate(resource);
        for dependent in resource.dependents() {
            self.invalidate(*dependent);
        }
    }

    /// 对资源名为 R 的已缓存列表应用补丁
    ///
    /// 插入只作用于无参数的全量列表键：带参数的键是按父实体过滤的
    /// 切片，新对象是否属于某个切片只有服务端知道，交给重抓判定。
    /// 按 id 替换/滤除对任何切片都安全，作用于全部匹配键。
    pub fn patch_lists(&self, resource: ResourceTag, patch: &ListPatch) {
        let insert_only_unscoped = matches!(patch, ListPatch::Insert(_));
        let touched: Vec<Slot> = self.slots.with_value(|slots| {
            slots
                .iter()
                .filter(|(key, _)| {
                    key.resource == resource && (!insert_only_unscoped || key.param.is_none())
                })
                .map(|(_, slot)| *slot)
                .collect()
        });
        for slot in touched {
            slot.data.update(|data| {
                if let Some(Value::Array(list)) = data {
                    let mut items = std::mem::take(list);
                    apply_list_patch(&mut items, patch);
                    *list = items;
                }
            });
        }
    }

    /// 确保键处于"已抓取或在途"状态
    ///
    /// 去重：同键已有在途请求时直接返回，后续订阅者共享同一槽位。
    /// 抓取完成时若纪元又前进了（抓取期间发生失效），立即补一轮。
    pub(crate) fn ensure_fetch(&self, api: &ApiClient, key: &QueryKey, endpoint: Endpoint) {
        let slot = self.slot(key);
        let decision = decide(
            slot.inflight.get_untracked(),
            slot.epoch.get_untracked(),
            slot.fetched_epoch.get_untracked(),
        );
        if decision != FetchDecision::Start {
            return;
        }

        let target_epoch = slot.begin();
        let client = *self;
        let api = api.clone();
        let key = key.clone();
        spawn_local(async move {
            let result = api.fetch_value(endpoint).await;
            if let Err(err) = &result {
                log_warn!("[Cache] fetch {} failed: {}", key.render(), err);
            }
            slot.complete(result, target_epoch);

            // 在途期间又失效过：订阅端的 Effect 已触发并被去重挡回，
            // 由这里负责续抓
            if slot.epoch.get_untracked() > target_epoch {
                client.ensure_fetch(&api, &key, endpoint);
            }
        });
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
