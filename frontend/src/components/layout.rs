//! 公共布局：导航栏、页脚、WhatsApp 悬浮按钮

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::icons::{Mail, MapPin, Menu, WhatsApp};
use crate::config::AppConfig;
use crate::web::after;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// 首页锚点 (标签, 元素 id)
const SECTIONS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Capabilities", "capabilities"),
    ("Products", "products"),
    ("Contact", "contact"),
];

/// 平滑滚动到首页中的某个区块
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();

    // 不在首页时先回到首页，等待渲染后再滚动
    let go_to_section = move |id: &'static str| {
        if router.current_route().get_untracked() == AppRoute::Home {
            scroll_to_section(id);
        } else {
            router.navigate_to_route(AppRoute::Home);
            after(100, move || scroll_to_section(id));
        }
    };

    let links = move || {
        SECTIONS
            .iter()
            .map(|&(label, id)| {
                view! {
                    <li>
                        <a
                            href=format!("/#{}", id)
                            on:click=move |ev| {
                                ev.prevent_default();
                                go_to_section(id);
                            }
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="navbar sticky top-0 z-40 bg-base-100/95 backdrop-blur border-b border-base-200 px-4 md:px-8">
            <div class="flex-1">
                <Link to=AppRoute::Home class="flex items-center gap-3">
                    <img src="/logosarhad.webp" alt="Sarhad Corporation logo" class="h-10 w-10 object-contain" />
                    <div class="leading-tight">
                        <div class="font-bold tracking-wide text-slate-900">"SARHAD CORPORATION"</div>
                        <div class="text-xs text-slate-500">"Industrial Minerals & Exports"</div>
                    </div>
                </Link>
            </div>
            <div class="flex-none hidden md:block">
                <ul class="menu menu-horizontal gap-1 font-medium">{links}</ul>
            </div>
            <div class="flex-none md:hidden dropdown dropdown-end">
                <button tabindex="0" class="btn btn-ghost btn-square" aria-label="Open menu">
                    <Menu attr:class="h-6 w-6" />
                </button>
                <ul tabindex="0" class="menu dropdown-content bg-base-100 rounded-box shadow-lg mt-3 w-52 p-2">
                    {links}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year();
    let mailto = format!("mailto:{}", config.contact_email);

    view! {
        <footer class="bg-[#1e3a5f] text-white">
            <div class="max-w-6xl mx-auto px-6 py-12 grid gap-10 md:grid-cols-3">
                <div>
                    <h3 class="text-lg font-bold mb-3">"Sarhad Corporation"</h3>
                    <p class="text-sm opacity-80 leading-relaxed">
                        "Leading producers and exporters of premium-quality industrial minerals."
                    </p>
                </div>
                <div>
                    <h3 class="text-lg font-bold mb-3">"Quick Links"</h3>
                    <ul class="space-y-2 text-sm">
                        <li><a class="opacity-80 hover:opacity-100" href="/">"Home"</a></li>
                        <li><a class="opacity-80 hover:opacity-100" href="/#about">"About"</a></li>
                        <li><a class="opacity-80 hover:opacity-100" href="/#products">"Products"</a></li>
                        <li><a class="opacity-80 hover:opacity-100" href="/#contact">"Contact"</a></li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-lg font-bold mb-3">"Contact Info"</h3>
                    <p class="text-sm opacity-80 flex items-center gap-2">
                        <Mail attr:class="h-4 w-4" />
                        <a href=mailto>{config.contact_email.clone()}</a>
                    </p>
                    <p class="text-sm opacity-80 flex items-center gap-2 mt-2">
                        <MapPin attr:class="h-4 w-4" /> "Peshawar, Pakistan"
                    </p>
                </div>
            </div>
            <div class="border-t border-white/10 py-4 text-center text-xs opacity-70">
                "© " {year} " Sarhad Corporation. All rights reserved."
            </div>
        </footer>
    }
}

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let link = use_context::<AppConfig>()
        .unwrap_or_default()
        .whatsapp_link();

    view! {
        <a
            href=link
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            class="btn btn-circle btn-lg fixed bottom-6 right-6 z-50 bg-[#25D366] hover:bg-[#1ebe5b] border-none text-white shadow-xl"
        >
            <WhatsApp attr:class="h-7 w-7" />
        </a>
    }
}
