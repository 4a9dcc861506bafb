//! 页面共用的小部件：表格状态行、通用下拉选择器、页头

use leptos::prelude::*;

use crate::error::ApiError;

/// 页头：标题 + 说明
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-4">
            <h2 class="text-2xl font-bold">{title}</h2>
            <p class="text-base-content/70 text-sm">{subtitle}</p>
        </div>
    }
}

/// 列表页的三种非数据状态行：加载中 / 空 / 错误
///
/// 加载中与空列表是两种可区分的状态；错误行展示归一化后的消息，
/// 但不影响已经渲染出来的旧数据。
#[component]
pub fn TableState(
    colspan: &'static str,
    loading: Signal<bool>,
    empty: Signal<bool>,
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <tr>
                <td colspan=colspan class="text-center py-8 text-base-content/50">
                    <span class="loading loading-spinner loading-md"></span>
                    " Loading..."
                </td>
            </tr>
        </Show>
        <Show when=move || !loading.get() && empty.get()>
            <tr>
                <td colspan=colspan class="text-center py-8 text-base-content/50">
                    "Nothing here yet."
                </td>
            </tr>
        </Show>
        <Show when=move || error.get().is_some()>
            <tr>
                <td colspan=colspan class="text-center py-2 text-error text-sm">
                    {move || error.get().map(|e| e.message)}
                </td>
            </tr>
        </Show>
    }
}

/// 通用下拉选择器
///
/// 渲染 (id, 标签) 对的列表；选项数据尚未加载时禁用。
/// 这是所有外键选择（院系、班级、楼宇、房间等）共用的一个组件。
#[component]
pub fn EntitySelect(
    label: &'static str,
    /// 候选项：None 表示仍在加载
    options: Signal<Option<Vec<(i64, String)>>>,
    /// 当前选中的 id
    value: RwSignal<Option<i64>>,
) -> impl IntoView {
    let on_change = move |ev| {
        value.set(event_target_value(&ev).parse().ok());
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered"
                disabled=move || options.get().is_none()
                on:change=on_change
            >
                <option value="" selected=move || value.get().is_none()>
                    {move || if options.get().is_none() { "Loading..." } else { "Select..." }}
                </option>
                <For
                    each=move || options.get().unwrap_or_default()
                    key=|(id, _)| *id
                    children=move |(id, name)| {
                        view! {
                            <option value=id.to_string() selected=move || value.get() == Some(id)>
                                {name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// 文本输入框
#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=kind
                placeholder=placeholder
                class="input input-bordered"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
