use leptos::prelude::*;
use sarhad_frontend::App;
use sarhad_frontend::config::AppConfig;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = AppConfig::from_build_env();
    sarhad_frontend::web::init_tracing(&config.log_filter);
    for problem in &problems {
        tracing::warn!(%problem, "invalid build configuration, using default");
    }
    tracing::info!(api = %config.api_base_url, "starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
