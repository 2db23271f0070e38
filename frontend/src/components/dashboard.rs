use crate::app::use_app;
use crate::web::router::{Link, path_of};
use colorgame::RouteKey;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let user = app.user;

    let (refreshing, set_refreshing) = signal(false);
    let (notification, set_notification) = signal(Option::<String>::None);

    let refresh = move |_| {
        set_refreshing.set(true);
        let api = app.api();
        spawn_local(async move {
            match api.refresh_user().await {
                Ok(fresh) => user.set(fresh),
                Err(e) => set_notification.set(Some(format!("Failed to load user: {}", e))),
            }
            set_refreshing.set(false);
        });
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let stat = move |title: &'static str, value: fn(&colorgame_shared::SessionUser) -> i64| {
        view! {
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class="stat-value text-primary">
                    {move || user.with(|u| u.as_ref().map(value).unwrap_or_default())}
                </div>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                {move || notification.get().map(|msg| view! {
                    <div class="toast toast-top toast-end z-50">
                        <div class="alert alert-error shadow-lg">
                            <span>{msg}</span>
                        </div>
                    </div>
                })}

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <h2 class="text-xl font-bold px-2">
                            "Welcome, "
                            {move || user.with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())}
                            "!"
                        </h2>
                    </div>
                    <div class="flex-none gap-2">
                        <Show when=move || user.with(|u| u.as_ref().is_some_and(|u| u.is_admin()))>
                            <Link to=path_of(RouteKey::Admin) class="btn btn-ghost">"Admin Panel"</Link>
                        </Show>
                        <button on:click=refresh disabled=move || refreshing.get() class="btn btn-ghost">
                            "Refresh"
                        </button>
                        <button on:click=move |_| app.logout() class="btn btn-outline btn-error">
                            "Logout"
                        </button>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    {stat("Points", |u| u.points)}
                    {stat("Level", |u| u.level)}
                    {stat("Credits", |u| u.credits)}
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <p>"Match today's color to earn points!"</p>
                        <Link to=path_of(RouteKey::Scanner) class="btn btn-primary">"Start Scanning"</Link>
                    </div>
                </div>
            </div>
        </div>
    }
}
