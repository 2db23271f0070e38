use crate::app::use_app;
use crate::web::router::{Link, path_of};
use colorgame::RouteKey;
use colorgame_shared::protocol::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignupPage() -> impl IntoView {
    let app = use_app();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (success, set_success) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match.".to_string()));
            return;
        }

        let request = SignupRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get().trim().to_lowercase(),
            password: password.get(),
        };
        let api = app.api();
        spawn_local(async move {
            match api.signup(&request).await {
                Ok(_) => set_success.set(true),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Signup] {}", e).into());
                    set_error_msg.set(Some(
                        "There was a problem creating your account. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || success.get()
                        fallback=move || view! {
                            <form class="card-body" on:submit=on_submit>
                                <h1 class="text-3xl font-bold text-center">"Create Account"</h1>
                                <p class="text-center text-base-content/70">"Join Color Game today!"</p>

                                {field("First Name", "text", first_name)}
                                {field("Last Name", "text", last_name)}
                                {field("Email", "email", email)}
                                {field("Password", "password", password)}
                                {field("Confirm Password", "password", confirm)}

                                {move || error_msg.get().map(|msg| view! {
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{msg}</span>
                                    </div>
                                })}

                                <div class="form-control mt-6 gap-2">
                                    <button class="btn btn-primary">"Sign Up"</button>
                                    <Link to=path_of(RouteKey::Login) class="btn btn-outline">
                                        "Back to Login"
                                    </Link>
                                </div>
                            </form>
                        }
                    >
                        <div class="card-body text-center">
                            <h1 class="text-3xl font-bold">"Success!"</h1>
                            <p>"Your account has been created successfully."</p>
                            <Link to=path_of(RouteKey::Login) class="btn btn-primary">
                                "Go to Login"
                            </Link>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
