//! 瞬态通知
//!
//! 变更成功/失败的唯一用户可见出口：错误从不静默吞掉，
//! 也从不越过视图边界升级为崩溃。

use leptos::prelude::*;

/// 通知上下文：消息内容与是否为错误
#[derive(Clone, Copy)]
pub struct ToastContext {
    message: RwSignal<Option<(String, bool)>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.message.set(Some((text.into(), false)));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.message.set(Some((text.into(), true)));
    }
}

/// 从 Context 获取通知上下文
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 全局通知宿主
///
/// 固定挂在应用根部；消息出现 3 秒后自动清除。
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let message = toasts.message;

    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || message.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = message.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().map(|(text, _)| text)}</span>
                </div>
            </div>
        </Show>
    }
}
