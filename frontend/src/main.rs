use colorgame_frontend::App;
use leptos::prelude::*;

// wasm 体积优化：单线程的 lol_alloc 分配器
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    // panic 信息输出到浏览器控制台
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[ColorGame] Mounting app".into());
    mount_to_body(App);
}
