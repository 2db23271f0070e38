//! SessionStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`KeyValueStorage`]。
//! 隐私模式等环境下拿不到 `sessionStorage` 时退回到内存存储。

use colorgame::error::{ClientError, ClientResult};
use colorgame::session::{KeyValueStorage, MemoryStorage};
use wasm_bindgen::JsValue;

fn storage_error(e: JsValue) -> ClientError {
    ClientError::storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// 会话级存储（标签页关闭即失效）
pub enum SessionStorageArea {
    Browser(web_sys::Storage),
    Memory(MemoryStorage),
}

impl SessionStorageArea {
    /// 打开 `window.sessionStorage`
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            Some(storage) => Self::Browser(storage),
            None => {
                web_sys::console::warn_1(
                    &"[Storage] sessionStorage unavailable, using memory storage".into(),
                );
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for SessionStorageArea {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        match self {
            Self::Browser(s) => s.get_item(key).map_err(storage_error),
            Self::Memory(m) => m.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        match self {
            Self::Browser(s) => s.set_item(key, value).map_err(storage_error),
            Self::Memory(m) => m.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        match self {
            Self::Browser(s) => s.remove_item(key).map_err(storage_error),
            Self::Memory(m) => m.remove(key),
        }
    }
}
