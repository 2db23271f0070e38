//! 视图注册表
//!
//! 所有视图都静态链接进 wasm 模块，加载只是按路由创建视图实例。
//! 部分视图带有进入钩子，在挂载前完成会话检查或数据刷新。

use std::rc::{Rc, Weak};

use async_trait::async_trait;
use colorgame::navigation::{Navigator, OnEnter, View, ViewLoader};
use colorgame::route::{Route, RouteKey, RouteTable};
use colorgame::{ClientResult, LoginEntry};
use colorgame_shared::SessionUser;
use leptos::prelude::*;

use crate::app::{AppApi, AppSession};
use crate::web::router::path_of;

/// 视图进入钩子
pub enum EnterHook {
    /// 登录页：会话仍有效则直接进入面板，否则清除会话
    ResumeSession {
        session: Rc<AppSession>,
        navigator: Weak<dyn Navigator>,
        user: RwSignal<Option<SessionUser>>,
    },
    /// 面板、管理页、商店：刷新缓存的用户快照
    RefreshUser {
        api: Rc<AppApi>,
        user: RwSignal<Option<SessionUser>>,
    },
}

#[async_trait(?Send)]
impl OnEnter for EnterHook {
    async fn on_enter(&mut self) -> ClientResult<()> {
        match self {
            Self::ResumeSession {
                session,
                navigator,
                user,
            } => match session.login_entry()? {
                LoginEntry::Resume => {
                    if let Some(navigator) = navigator.upgrade() {
                        navigator.navigate(path_of(RouteKey::Dashboard));
                    }
                    Ok(())
                }
                LoginEntry::Fresh => {
                    user.set(None);
                    Ok(())
                }
            },
            Self::RefreshUser { api, user } => {
                if let Some(fresh) = api.refresh_user().await? {
                    user.set(Some(fresh));
                }
                Ok(())
            }
        }
    }
}

/// 可挂载的视图实例
pub struct AppView {
    route: &'static Route,
    hook: Option<EnterHook>,
}

impl AppView {
    pub fn route(&self) -> &'static Route {
        self.route
    }

    pub fn key(&self) -> RouteKey {
        self.route.key
    }
}

impl View for AppView {
    fn enter_hook(&mut self) -> Option<&mut dyn OnEnter> {
        self.hook.as_mut().map(|hook| hook as &mut dyn OnEnter)
    }
}

pub struct StaticViewLoader {
    pub session: Rc<AppSession>,
    pub api: Rc<AppApi>,
    pub navigator: Weak<dyn Navigator>,
    pub user: RwSignal<Option<SessionUser>>,
}

impl StaticViewLoader {
    pub fn api(&self) -> &Rc<AppApi> {
        &self.api
    }
}

#[async_trait(?Send)]
impl ViewLoader for StaticViewLoader {
    type View = AppView;

    async fn load(&self, route: &Route) -> ClientResult<AppView> {
        let hook = match route.key {
            RouteKey::Login => Some(EnterHook::ResumeSession {
                session: self.session.clone(),
                navigator: self.navigator.clone(),
                user: self.user,
            }),
            RouteKey::Dashboard | RouteKey::Admin | RouteKey::Store => Some(EnterHook::RefreshUser {
                api: self.api.clone(),
                user: self.user,
            }),
            _ => None,
        };

        Ok(AppView {
            route: RouteTable::standard().get(route.key),
            hook,
        })
    }
}
