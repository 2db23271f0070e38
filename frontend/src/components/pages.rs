//! 扫描、管理、商店、好友页面

use crate::app::use_app;
use crate::web::router::{Link, path_of};
use colorgame::RouteKey;
use leptos::prelude::*;

#[component]
fn PageCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="card max-w-3xl mx-auto bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{title}</h2>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ScannerPage() -> impl IntoView {
    view! {
        <PageCard title="Color Scanner">
            <p>"Point your camera at something that matches today's color."</p>
        </PageCard>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let user = use_app().user;
    let is_admin = move || user.with(|u| u.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <PageCard title="Admin Panel">
            <Show
                when=is_admin
                fallback=|| view! {
                    <div role="alert" class="alert alert-error">
                        <span>"Access denied. Admin privileges required."</span>
                    </div>
                }
            >
                <p>"Manage daily colors and players."</p>
            </Show>
            <Link to=path_of(RouteKey::Dashboard) class="btn btn-ghost">"Back"</Link>
        </PageCard>
    }
}

#[component]
pub fn StorePage() -> impl IntoView {
    let user = use_app().user;

    view! {
        <PageCard title="Store">
            <p>
                "Credits: "
                {move || user.with(|u| u.as_ref().map(|u| u.credits).unwrap_or_default())}
            </p>
        </PageCard>
    }
}

#[component]
pub fn FriendsPage() -> impl IntoView {
    view! {
        <PageCard title="Friends">
            <p>"See what your friends have been matching."</p>
        </PageCard>
    }
}
