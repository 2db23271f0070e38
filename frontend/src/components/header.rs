use crate::app::use_app;
use crate::web::router::{Link, path_of};
use colorgame::RouteKey;
use leptos::prelude::*;

const NAV_LINKS: [(RouteKey, &str); 4] = [
    (RouteKey::Dashboard, "Dashboard"),
    (RouteKey::Friends, "Friends"),
    (RouteKey::Scanner, "Scanner"),
    (RouteKey::Store, "Store"),
];

/// 顶部导航，登录页和注册页不显示
#[component]
pub fn AppHeader() -> impl IntoView {
    let app = use_app();
    let visible = app.outlet.header_visible;
    let user = app.user;

    view! {
        <Show when=move || visible.get()>
            <header class="navbar bg-primary text-primary-content shadow-xl">
                <div class="flex-1">
                    <h1 class="text-xl font-bold px-4">"Color Game"</h1>
                </div>
                <nav class="flex-none gap-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(key, label)| view! {
                            <Link to=path_of(key) class="btn btn-ghost btn-sm">{label}</Link>
                        })
                        .collect_view()}
                    <span class="badge badge-neutral hidden md:inline-flex">
                        {move || user.with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())}
                    </span>
                </nav>
            </header>
        </Show>
    }
}
