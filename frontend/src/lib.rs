//! Color Game 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `colorgame`: 路由表、会话存储、导航控制器（不依赖 DOM）
//! - `web`: 浏览器 API 适配（History、sessionStorage、fetch、定时器）
//! - `views`: 视图注册表与进入钩子
//! - `app`: 应用上下文
//! - `components`: UI 组件层

mod app;
mod components {
    pub mod dashboard;
    pub mod header;
    pub mod login;
    pub mod pages;
    pub mod signup;
}
mod views;

use crate::app::AppContext;
use crate::components::dashboard::DashboardPage;
use crate::components::header::AppHeader;
use crate::components::login::LoginPage;
use crate::components::pages::{AdminPage, FriendsPage, ScannerPage, StorePage};
use crate::components::signup::SignupPage;
use crate::views::AppView;

use colorgame::RouteKey;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块为核心库提供浏览器端实现。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use storage::SessionStorageArea;
}

use web::router::{Router, RouterOutlet};

/// 视图渲染函数
///
/// 根据挂载的视图返回对应的组件。
fn view_matcher(view: &AppView) -> AnyView {
    match view.key() {
        RouteKey::Login => view! { <LoginPage /> }.into_any(),
        RouteKey::Signup => view! { <SignupPage /> }.into_any(),
        RouteKey::Dashboard => view! { <DashboardPage /> }.into_any(),
        RouteKey::Scanner => view! { <ScannerPage /> }.into_any(),
        RouteKey::Admin => view! { <AdminPage /> }.into_any(),
        RouteKey::Store => view! { <StorePage /> }.into_any(),
        RouteKey::Friends => view! { <FriendsPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建会话、API 和导航控制器
    provide_context(AppContext::new());

    view! {
        // 2. 路由器组件：注册浏览器事件并发起首次导航
        <Router>
            <div class="flex flex-col h-screen w-full">
                <AppHeader />
                <main class="flex-1 overflow-auto">
                    <RouterOutlet matcher=view_matcher />
                </main>
            </div>
        </Router>
    }
}
