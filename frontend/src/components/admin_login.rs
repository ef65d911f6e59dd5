use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth};
use crate::client::ApiClient;
use crate::components::icons::ShieldCheck;
use crate::web::FetchTransport;

/// 登录成功后由路由服务的认证监听跳转到后台，本页不负责导航
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let client = expect_context::<ApiClient<FetchTransport>>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let client = client.clone();
        spawn_local(async move {
            let result = login(
                &auth,
                &client,
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            if let Err(e) = result {
                set_error_msg.set(Some(e.to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-slate-50">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-4 text-center">
                    <div class="p-3 bg-[#1e3a5f]/10 rounded-2xl text-[#1e3a5f]">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold text-[#1e3a5f]">"Admin Login"</h1>
                    <p class="text-slate-500">"Sign in to manage products and hero images"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="username"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn bg-[#1e3a5f] hover:bg-[#15233f] text-white" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
