//! 用户管理：审批注册、移除账号

use leptos::prelude::*;

use crate::components::icons::{Check, Trash2};
use crate::components::widgets::{PageHeader, TableState};
use crate::hooks::users::{use_user, use_user_actions, use_users};

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = use_users();
    let actions = use_user_actions();

    // 行点击后按 id 加载单条记录作为详情
    let selected = RwSignal::new(Option::<i64>::None);
    let detail = use_user(selected.into());

    let rows = move || users.data.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());
    let pending = move || rows().iter().filter(|u| !u.approved).count();

    view! {
        <div>
            <PageHeader title="Users" subtitle="Accounts and registration approvals" />

            <Show when=move || { pending() > 0 }>
                <div class="alert alert-warning mb-4 text-sm py-2">
                    <span>{move || format!("{} account(s) awaiting approval", pending())}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TableState
                                colspan="5"
                                loading=users.loading
                                empty=empty
                                error=users.error
                            />
                            <For
                                each=rows
                                key=|u| u.id
                                children=move |u| {
                                    let id = u.id;
                                    let approved = u.approved;
                                    view! {
                                        <tr
                                            class="cursor-pointer hover"
                                            on:click=move |_| selected.set(Some(id))
                                        >
                                            <td>{u.name.clone()}</td>
                                            <td>{u.email.clone()}</td>
                                            <td><span class="badge badge-outline">{u.role.clone()}</span></td>
                                            <td>
                                                {if approved {
                                                    view! { <span class="badge badge-success badge-sm">"approved"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge-warning badge-sm">"pending"</span> }.into_any()
                                                }}
                                            </td>
                                            <td class="text-right">
                                                <Show when=move || !approved>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-success"
                                                        title="Approve"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            actions.approve(id);
                                                        }
                                                    >
                                                        <Check attr:class="h-4 w-4" />
                                                    </button>
                                                </Show>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    title="Delete"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        actions.delete(id);
                                                    }
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=move || selected.get().is_some()>
                <div class="card bg-base-100 shadow mt-4">
                    <div class="card-body py-4">
                        <div class="flex items-start justify-between">
                            <h3 class="card-title text-base">"Account details"</h3>
                            <button class="btn btn-ghost btn-xs" on:click=move |_| selected.set(None)>
                                "Close"
                            </button>
                        </div>
                        <Show
                            when=move || !detail.loading.get()
                            fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                        >
                            {move || {
                                detail.data.get().map(|u| {
                                    view! {
                                        <div class="text-sm grid grid-cols-2 gap-x-8 gap-y-1 w-fit">
                                            <span class="text-base-content/60">"Name"</span>
                                            <span>{u.name.clone()}</span>
                                            <span class="text-base-content/60">"Email"</span>
                                            <span>{u.email.clone()}</span>
                                            <span class="text-base-content/60">"Role"</span>
                                            <span>{u.role.clone()}</span>
                                            <span class="text-base-content/60">"Department"</span>
                                            <span>
                                                {u.department_id
                                                    .map(|d| format!("#{}", d))
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </span>
                                            <span class="text-base-content/60">"Stage"</span>
                                            <span>
                                                {u.stage
                                                    .map(|s| s.to_string())
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </span>
                                        </div>
                                    }
                                })
                            }}
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
