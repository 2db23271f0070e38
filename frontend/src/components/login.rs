use crate::app::use_app;
use crate::web::router::{Link, path_of};
use colorgame::RouteKey;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 以 user agent 作为设备指纹
fn device_fingerprint() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = app.api();
        spawn_local(async move {
            match api
                .login(&email.get_untracked(), &password.get_untracked(), &device_fingerprint())
                .await
            {
                Ok(user) => {
                    app.user.set(Some(user));
                    app.navigate(path_of(RouteKey::Dashboard));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] {}", e).into());
                    set_password.set(String::new());
                    set_error_msg.set(Some(
                        "Invalid email or password. Please try again.".to_string(),
                    ));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Color Game"</h1>
                    <p class="text-base-content/70">"Welcome back! Please login to continue."</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <input
                                type="email"
                                placeholder="Email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <input
                                type="password"
                                placeholder="Password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>

                        {move || error_msg.get().map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control mt-6 gap-2">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log In".into_any()
                                }}
                            </button>
                            <Link to=path_of(RouteKey::Signup) class="btn btn-outline">
                                "Sign Up"
                            </Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
