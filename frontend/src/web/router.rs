//! 路由服务模块 - 浏览器适配
//!
//! 封装了 web_sys 的 History API 和事件监听，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程本身由核心库的 [`NavigationController`] 驱动。

use std::rc::Rc;

use colorgame::navigation::{History, NavigationController, Outlet, ReadyState};
use colorgame::route::{Route, RouteTable};
use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::storage::SessionStorageArea;
use super::timer::Timeout;
use crate::app::use_app;
use crate::views::{AppView, StaticViewLoader};

pub type AppController =
    NavigationController<BrowserHistory, StaticViewLoader, SignalOutlet, SessionStorageArea>;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 读取 `document.readyState`
pub fn document_ready_state() -> ReadyState {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| ReadyState::parse(&d.ready_state()))
        .unwrap_or(ReadyState::Loading)
}

// ============================================================================
// 协作者实现
// ============================================================================

/// `window.history`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn pathname(&self) -> String {
        current_path()
    }

    fn push(&self, path: &str) {
        if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }

    fn replace(&self, path: &str) {
        if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 页面外壳的出口：挂载的视图和顶部导航可见性都保存在信号里
#[derive(Clone, Copy)]
pub struct SignalOutlet {
    pub view: RwSignal<Option<AppView>, LocalStorage>,
    pub header_visible: RwSignal<bool>,
}

impl SignalOutlet {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new_local(None),
            header_visible: RwSignal::new(false),
        }
    }
}

impl Outlet for SignalOutlet {
    type View = AppView;

    fn set_header_visible(&self, visible: bool) {
        self.header_visible.set(visible);
    }

    fn mount(&self, _route: &Route, view: AppView) {
        self.view.set(Some(view));
    }
}

/// 把导航周期调度到浏览器微任务队列
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

// ============================================================================
// 事件监听
// ============================================================================

fn add_window_listener(event: &str, callback: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(callback);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    // 泄漏闭包以保持监听器存活
    closure.forget();
}

/// 注册 `load` / `popstate` 监听并发起首次导航
fn start_router(controller: Rc<AppController>) {
    let on_load = {
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            Timeout::new(0, move || controller.popstate_guard().release()).forget();
        }
    };

    if document_ready_state() == ReadyState::Complete {
        // wasm 模块加载完成时 load 事件通常已经触发
        on_load();
        controller.start();
    } else {
        let controller = controller.clone();
        add_window_listener("load", move || {
            on_load();
            controller.start();
        });
    }

    add_window_listener("popstate", move || {
        controller.on_popstate(document_ready_state());
    });
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 启动导航控制器，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    start_router(use_app().controller());

    children()
}

/// 路由出口组件
///
/// 渲染最近一次挂载的视图，外层元素带上视图标签。
#[component]
pub fn RouterOutlet(
    /// 视图渲染函数
    matcher: fn(&AppView) -> AnyView,
) -> impl IntoView {
    let outlet = use_app().outlet;

    move || {
        outlet.view.with(|view| match view {
            Some(view) => {
                let tag = view.route().view_tag;
                view! { <div class="view-slot" data-view=tag>{matcher(view)}</div> }.into_any()
            }
            None => view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
                .into_any(),
        })
    }
}

/// 站内链接：阻止默认跳转，交给导航控制器
#[component]
pub fn Link(
    /// 目标路径
    to: &'static str,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let app = use_app();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        app.navigate(to);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}

/// 路由表中的路径
pub fn path_of(key: colorgame::RouteKey) -> &'static str {
    RouteTable::standard().get(key).path
}
