use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::ApiClient;
use crate::components::widgets::TextField;
use crate::models::ResetPasswordRequest;
use crate::session::auth::{forgot_password, reset_password};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 找回密码：先请求重置邮件，再凭邮件里的令牌设置新密码。
/// 两个阶段放在同一页，避免为邮件链接单独建路由。
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    // Copy 句柄：提交处理器要被 <Show> 的 Fn 闭包反复使用
    let api = StoredValue::new(expect_context::<ApiClient>());
    let router = use_router();

    let email = RwSignal::new(String::new());
    let token = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (mail_sent, set_mail_sent) = signal(false);
    let (reset_done, set_reset_done) = signal(false);

    let on_request = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            set_error_msg.set(Some("Please enter your email".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.get_value();
        spawn_local(async move {
            match forgot_password(&api, email.get_untracked()).await {
                Ok(()) => set_mail_sent.set(true),
                Err(err) => set_error_msg.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    let on_reset = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if token.get().is_empty() || new_password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let request = ResetPasswordRequest {
            token: token.get_untracked(),
            new_password: new_password.get_untracked(),
        };

        let api = api.get_value();
        spawn_local(async move {
            match reset_password(&api, request).await {
                Ok(()) => set_reset_done.set(true),
                Err(err) => set_error_msg.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Reset password"</h1>
                    <p class="text-base-content/70">
                        "We'll email you a reset token"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show
                            when=move || !reset_done.get()
                            fallback=move || view! {
                                <div class="flex flex-col items-center gap-4">
                                    <div class="alert alert-success">
                                        <span>"Password updated. You can sign in now."</span>
                                    </div>
                                    <button class="btn btn-primary" on:click=move |_| router.navigate(AppRoute::Login)>
                                        "Back to sign in"
                                    </button>
                                </div>
                            }
                        >
                            <Show
                                when=move || !mail_sent.get()
                                fallback=move || view! {
                                    <form on:submit=on_reset class="flex flex-col gap-2">
                                        <div class="alert alert-info text-sm py-2">
                                            <span>"Check your inbox and paste the token below."</span>
                                        </div>
                                        <TextField label="Reset token" placeholder="token from email" value=token />
                                        <TextField label="New password" placeholder="••••••••" value=new_password kind="password" />
                                        <div class="form-control mt-4">
                                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                                "Set new password"
                                            </button>
                                        </div>
                                    </form>
                                }
                            >
                                <form on:submit=on_request class="flex flex-col gap-2">
                                    <TextField label="Email" placeholder="you@university.edu" value=email kind="email" />
                                    <div class="form-control mt-4">
                                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                            "Send reset email"
                                        </button>
                                    </div>
                                </form>
                            </Show>
                        </Show>

                        <div class="text-center text-sm mt-2">
                            <a class="link link-hover" on:click=move |_| router.navigate(AppRoute::Login)>
                                "Back to sign in"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
