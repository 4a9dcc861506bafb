use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::ApiClient;
use crate::components::widgets::{EntitySelect, TextField};
use crate::hooks::departments::use_departments;
use crate::models::RegisterRequest;
use crate::session::auth::{register, resend_verification, verify_email};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    // Copy 句柄：提交/重发处理器要被 <Show> 的 Fn 闭包反复使用
    let api = StoredValue::new(expect_context::<ApiClient>());
    let router = use_router();
    let departments = use_departments();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let department_id = RwSignal::new(Option::<i64>::None);
    let stage = RwSignal::new(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // 注册成功后不自动登录，提示用户查收验证邮件
    let (done, set_done) = signal(false);
    let verify_token = RwSignal::new(String::new());
    let (verified, set_verified) = signal(false);

    let department_options = Signal::derive(move || {
        departments
            .data
            .get()
            .map(|list| list.into_iter().map(|d| (d.id, d.name)).collect::<Vec<_>>())
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all required fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            department_id: department_id.get_untracked(),
            stage: stage.get_untracked().parse().ok(),
        };

        let api = api.get_value();
        spawn_local(async move {
            match register(&api, request).await {
                Ok(()) => set_done.set(true),
                Err(err) => set_error_msg.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create your account"</h1>
                    <p class="text-base-content/70">"Join the campus portal"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || !done.get()
                        fallback=move || {
                            let on_verify = move |ev: leptos::web_sys::SubmitEvent| {
                                ev.prevent_default();
                                if verify_token.get().is_empty() {
                                    return;
                                }
                                let api = api.get_value();
                                spawn_local(async move {
                                    match verify_email(&api, verify_token.get_untracked()).await {
                                        Ok(()) => set_verified.set(true),
                                        Err(err) => set_error_msg.set(Some(err.to_string())),
                                    }
                                });
                            };
                            let on_resend = move |_| {
                                let api = api.get_value();
                                spawn_local(async move {
                                    if let Err(err) = resend_verification(&api, email.get_untracked()).await {
                                        set_error_msg.set(Some(err.to_string()));
                                    }
                                });
                            };
                            view! {
                                <div class="card-body gap-4">
                                    <Show
                                        when=move || !verified.get()
                                        fallback=move || view! {
                                            <div class="alert alert-success">
                                                <span>"Email verified. An administrator will approve your account."</span>
                                            </div>
                                        }
                                    >
                                        <div class="alert alert-success text-sm py-2">
                                            <span>"Account created. Check your inbox for a verification email."</span>
                                        </div>
                                        <Show when=move || error_msg.get().is_some()>
                                            <div role="alert" class="alert alert-error text-sm py-2">
                                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                                            </div>
                                        </Show>
                                        <form class="flex flex-col gap-2" on:submit=on_verify>
                                            <TextField label="Verification token" placeholder="token from email" value=verify_token />
                                            <button class="btn btn-primary btn-sm">"Verify email"</button>
                                        </form>
                                        <button class="btn btn-ghost btn-sm" on:click=on_resend>
                                            "Resend verification email"
                                        </button>
                                    </Show>
                                    <button class="btn btn-outline btn-sm" on:click=move |_| router.navigate(AppRoute::Login)>
                                        "Back to sign in"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <TextField label="Full name" placeholder="Jane Doe" value=name />
                            <TextField label="Email" placeholder="you@university.edu" value=email kind="email" />
                            <TextField label="Password" placeholder="••••••••" value=password kind="password" />
                            <EntitySelect label="Department" options=department_options value=department_id />
                            <TextField label="Stage / year" placeholder="1" value=stage kind="number" />

                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                    } else {
                                        "Create account".into_any()
                                    }}
                                </button>
                            </div>
                            <div class="text-center text-sm mt-2">
                                <a class="link link-hover" on:click=move |_| router.navigate(AppRoute::Login)>
                                    "Already have an account? Sign in"
                                </a>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
