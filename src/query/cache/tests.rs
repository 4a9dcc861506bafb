use serde_json::{Value, json};

use super::*;
use crate::query::key::{QueryKey, ResourceTag};

fn dept(id: i64, name: &str, code: &str) -> Value {
    json!({ "id": id, "name": name, "code": code })
}

fn slot_list(client: &QueryClient, key: &QueryKey) -> Vec<Value> {
    match client.slot(key).data.get_untracked() {
        Some(Value::Array(items)) => items,
        other => panic!("expected cached array, got {:?}", other),
    }
}

// ---------------------------------------------------------
// 抓取决策
// ---------------------------------------------------------

#[test]
fn fresh_slot_needs_a_fetch() {
    // 新槽位：epoch 1, fetched 0
    assert_eq!(decide(false, 1, 0), FetchDecision::Start);
}

#[test]
fn in_flight_requests_are_deduplicated() {
    assert_eq!(decide(true, 2, 0), FetchDecision::AlreadyInFlight);
}

#[test]
fn satisfied_epoch_is_fresh_until_invalidated() {
    assert_eq!(decide(false, 3, 3), FetchDecision::Fresh);
    // 失效把纪元推进一格，缓存重新变为待抓取
    assert_eq!(decide(false, 4, 3), FetchDecision::Start);
}

// ---------------------------------------------------------
// 失效
// ---------------------------------------------------------

#[test]
fn invalidation_bumps_only_matching_resource() {
    let client = QueryClient::new();
    let departments = QueryKey::list(ResourceTag::Departments);
    let users = QueryKey::list(ResourceTag::Users);
    let scoped = QueryKey::scoped(ResourceTag::Departments, 2);
    client.slot(&departments);
    client.slot(&users);
    client.slot(&scoped);

    client.invalidate(ResourceTag::Departments);

    assert_eq!(client.slot(&departments).epoch.get_untracked(), 2);
    assert_eq!(client.slot(&scoped).epoch.get_untracked(), 2);
    assert_eq!(client.slot(&users).epoch.get_untracked(), 1);
}

#[test]
fn project_mutation_invalidates_both_project_lists() {
    // 场景：加入项目后，"projects" 与 "my-projects" 同时失效
    let client = QueryClient::new();
    let projects = QueryKey::list(ResourceTag::Projects);
    let mine = QueryKey::list(ResourceTag::MyProjects);
    client.slot(&projects);
    client.slot(&mine);

    client.invalidate_with_dependents(ResourceTag::Projects);

    assert_eq!(client.slot(&projects).epoch.get_untracked(), 2);
    assert_eq!(client.slot(&mine).epoch.get_untracked(), 2);
}

#[test]
fn create_invalidates_the_list_key() {
    // 创建成功后列表键失效，可由"重抓被触发"（纪元大于已满足纪元）验证
    let client = QueryClient::new();
    let key = QueryKey::list(ResourceTag::Departments);
    let slot = client.slot(&key);

    let target = slot.begin();
    slot.complete(Ok(json!([dept(1, "Math", "MA01")])), target);
    assert_eq!(
        decide(false, slot.epoch.get_untracked(), slot.fetched_epoch.get_untracked()),
        FetchDecision::Fresh
    );

    client.invalidate_with_dependents(ResourceTag::Departments);
    assert_eq!(
        decide(false, slot.epoch.get_untracked(), slot.fetched_epoch.get_untracked()),
        FetchDecision::Start
    );
}

// ---------------------------------------------------------
// 列表补丁
// ---------------------------------------------------------

#[test]
fn delete_patch_removes_the_entry() {
    let client = QueryClient::new();
    let key = QueryKey::list(ResourceTag::Courses);
    let slot = client.slot(&key);
    let target = slot.begin();
    slot.complete(Ok(json!([dept(1, "A", "A1"), dept(2, "B", "B1")])), target);

    client.patch_lists(ResourceTag::Courses, &ListPatch::RemoveById(1));

    let list = slot_list(&client, &key);
    assert_eq!(list.len(), 1);
    assert!(list.iter().all(|v| v["id"] != 1));
}

#[test]
fn replace_patch_swaps_by_id() {
    let mut list = vec![dept(1, "Old", "X"), dept(2, "Keep", "Y")];
    let changed = apply_list_patch(&mut list, &ListPatch::ReplaceById(dept(1, "New", "X")));
    assert!(changed);
    assert_eq!(list[0]["name"], "New");
    assert_eq!(list[1]["name"], "Keep");
}

#[test]
fn replace_without_id_is_a_no_op() {
    let mut list = vec![dept(1, "A", "X")];
    let changed = apply_list_patch(&mut list, &ListPatch::ReplaceById(json!({"name":"?"})));
    assert!(!changed);
    assert_eq!(list.len(), 1);
}

#[test]
fn created_department_appears_exactly_once_after_refetch() {
    // 场景：create {name:"CS", code:"CS01"} → 列表失效 → 重抓 →
    // 新院系在返回列表中恰好出现一次
    let client = QueryClient::new();
    let key = QueryKey::list(ResourceTag::Departments);
    let slot = client.slot(&key);
    let target = slot.begin();
    slot.complete(Ok(json!([dept(1, "Math", "MA01")])), target);

    // 乐观补丁 + 权威失效
    client.patch_lists(
        ResourceTag::Departments,
        &ListPatch::Insert(dept(9, "CS", "CS01")),
    );
    client.invalidate_with_dependents(ResourceTag::Departments);

    // 服务端重抓结果覆盖乐观状态
    let target = slot.begin();
    slot.complete(
        Ok(json!([dept(1, "Math", "MA01"), dept(9, "CS", "CS01")])),
        target,
    );

    let list = slot_list(&client, &key);
    let matches = list
        .iter()
        .filter(|v| v["name"] == "CS" && v["code"] == "CS01")
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn insert_patch_skips_scoped_lists() {
    // "某院系的班级" 这类切片是否应包含新对象只有服务端知道：
    // 插入补丁只动全量列表键，切片等权威重抓
    let client = QueryClient::new();
    let all = QueryKey::list(ResourceTag::Sections);
    let other_dept = QueryKey::scoped(ResourceTag::Sections, 2);

    let slot = client.slot(&all);
    let target = slot.begin();
    slot.complete(Ok(json!([])), target);
    let scoped_slot = client.slot(&other_dept);
    let target = scoped_slot.begin();
    scoped_slot.complete(Ok(json!([dept(7, "CS-2A", "X")])), target);

    client.patch_lists(
        ResourceTag::Sections,
        &ListPatch::Insert(json!({ "id": 9, "name": "MA-1B", "department_id": 1 })),
    );

    assert_eq!(slot_list(&client, &all).len(), 1);
    let scoped = slot_list(&client, &other_dept);
    assert_eq!(scoped.len(), 1);
    assert!(scoped.iter().all(|v| v["id"] != 9));
}

#[test]
fn remove_patch_still_reaches_scoped_lists() {
    // 按 id 滤除对切片是安全的：被删对象在哪个切片里都不该留下
    let client = QueryClient::new();
    let scoped = QueryKey::scoped(ResourceTag::Sections, 1);
    let slot = client.slot(&scoped);
    let target = slot.begin();
    slot.complete(Ok(json!([dept(1, "CS-1A", "X"), dept(2, "CS-1B", "Y")])), target);

    client.patch_lists(ResourceTag::Sections, &ListPatch::RemoveById(2));

    let list = slot_list(&client, &scoped);
    assert_eq!(list.len(), 1);
    assert!(list.iter().all(|v| v["id"] != 2));
}

// ---------------------------------------------------------
// 错误与旧数据
// ---------------------------------------------------------

#[test]
fn fetch_error_keeps_previous_data() {
    let client = QueryClient::new();
    let key = QueryKey::list(ResourceTag::Announcements);
    let slot = client.slot(&key);

    let target = slot.begin();
    slot.complete(Ok(json!([{ "id": 1, "title": "Welcome" }])), target);

    client.invalidate(ResourceTag::Announcements);
    let target = slot.begin();
    slot.complete(Err(crate::error::ApiError::network("offline")), target);

    // stale-while-revalidate 下限：错误不清空读路径
    assert!(slot.data.get_untracked().is_some());
    assert!(slot.error.get_untracked().is_some());
    assert!(!slot.inflight.get_untracked());
}

#[test]
fn loading_and_empty_are_distinguishable() {
    let client = QueryClient::new();
    let key = QueryKey::list(ResourceTag::Exams);
    let slot = client.slot(&key);

    // 尚未加载：无数据且没有任何已满足的纪元
    assert!(slot.data.get_untracked().is_none());
    assert_eq!(slot.fetched_epoch.get_untracked(), 0);

    // 空列表是已加载的数据，不是加载中
    let target = slot.begin();
    slot.complete(Ok(json!([])), target);
    assert_eq!(slot.data.get_untracked(), Some(json!([])));
    assert!(slot.fetched_epoch.get_untracked() > 0);
}
