//! 应用上下文
//!
//! 会话存储、API 客户端和导航控制器在启动时构建一次，
//! 通过 Context 在组件间共享。界面只订阅用户快照信号和出口信号。

use std::rc::Rc;

use colorgame::api::ApiClient;
use colorgame::navigation::{NavigationController, Navigator};
use colorgame::route::RouteKey;
use colorgame::{ClientConfig, SessionStore};
use colorgame_shared::SessionUser;
use leptos::prelude::*;

use crate::views::StaticViewLoader;
use crate::web::router::{
    AppController, BrowserHistory, BrowserSpawner, SignalOutlet, document_ready_state, path_of,
};
use crate::web::{FetchHttpClient, SessionStorageArea};

pub type AppSession = SessionStore<SessionStorageArea>;
pub type AppApi = ApiClient<FetchHttpClient, SessionStorageArea>;

/// 应用上下文
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<AppController>, LocalStorage>,
    /// 挂载出口
    pub outlet: SignalOutlet,
    /// 当前用户快照（界面展示用）
    pub user: RwSignal<Option<SessionUser>>,
}

impl AppContext {
    /// 构建全部服务
    pub fn new() -> Self {
        let config = ClientConfig::from_build_env();
        let session = Rc::new(SessionStore::new(
            SessionStorageArea::open(),
            &config.storage_namespace,
        ));
        let user = RwSignal::new(session.user());
        let outlet = SignalOutlet::new();

        let controller = NavigationController::new(
            &config,
            BrowserHistory,
            outlet,
            session.clone(),
            BrowserSpawner,
            document_ready_state(),
            |navigator| StaticViewLoader {
                api: Rc::new(
                    ApiClient::new(&config, FetchHttpClient, session.clone(), navigator.clone())
                        .with_on_reject(move || user.set(None)),
                ),
                session: session.clone(),
                navigator,
                user,
            },
        );

        Self {
            controller: StoredValue::new_local(controller),
            outlet,
            user,
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    pub fn api(&self) -> Rc<AppApi> {
        self.controller.with_value(|c| c.loader().api().clone())
    }

    pub fn session(&self) -> Rc<AppSession> {
        self.controller.with_value(|c| c.session().clone())
    }

    pub fn navigate(&self, path: &str) {
        self.controller.with_value(|c| c.navigate(path));
    }

    /// 注销：清除会话并回到登录页
    pub fn logout(&self) {
        if let Err(e) = self.session().clear() {
            web_sys::console::error_1(&format!("[Auth] {}", e).into());
        }
        self.user.set(None);
        self.navigate(path_of(RouteKey::Login));
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
