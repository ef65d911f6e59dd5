use leptos::prelude::*;
use sarhad_shared::protocol::{ListHeroSlides, ListProducts};
use sarhad_shared::{HeroSlide, Product};
use std::time::Duration;

use crate::admin::{HeroDraft, MutationFlow, Notice, ProductDraft};
use crate::auth::{logout, use_auth};
use crate::client::ApiClient;
use crate::components::form_dialog::{FlowDeps, delete_record};
use crate::components::hero_dialog::HeroDialog;
use crate::components::icons::{LogOut, Pencil, Plus, Trash};
use crate::components::product_dialog::ProductDialog;
use crate::config::AppConfig;
use crate::loader::{FailurePolicy, LoadState, LoaderSignal};
use crate::web::FetchTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Products,
    HeroImages,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let client = expect_context::<ApiClient<FetchTransport>>();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let (tab, set_tab) = signal(Tab::Products);
    let notice = RwSignal::new(Option::<Notice>::None);

    let products = LoaderSignal::new(FailurePolicy::Surface("Failed to load products"));
    let slides = LoaderSignal::new(FailurePolicy::Surface("Failed to load hero slides"));

    let reload_products = Callback::new({
        let client = client.clone();
        move |_: ()| {
            let client = client.clone();
            products.load(async move { client.call(&ListProducts).await });
        }
    });
    let reload_slides = Callback::new({
        let client = client.clone();
        move |_: ()| {
            let client = client.clone();
            slides.load(async move {
                let mut list = client.call(&ListHeroSlides).await?;
                HeroSlide::sort_for_display(&mut list);
                Ok(list)
            });
        }
    });
    reload_products.run(());
    reload_slides.run(());

    let product_flow = RwSignal::new(MutationFlow::<ProductDraft>::new());
    let hero_flow = RwSignal::new(MutationFlow::<HeroDraft>::new());
    let product_open = RwSignal::new(false);
    let hero_open = RwSignal::new(false);
    // 任一写操作进行中时锁定新建、编辑和删除
    let busy = RwSignal::new(false);

    let on_notice = Callback::new(move |n: Notice| notice.set(Some(n)));
    let deps = move |refetch: Callback<()>| FlowDeps {
        client: client.clone(),
        auth,
        close_delay_ms: config.dialog_close_delay_ms,
        refetch,
        on_notice,
        busy,
    };
    let product_deps = deps(reload_products);
    let hero_deps = deps(reload_slides);

    // 只清除自己设置的那条提示，新的提示重新计时
    let notice_timeout = Duration::from_millis(u64::from(config.notice_timeout_ms));
    Effect::new(move |_| {
        if let Some(current) = notice.get() {
            set_timeout(
                move || {
                    notice.try_update(|n| {
                        if n.as_ref() == Some(&current) {
                            *n = None;
                        }
                    });
                },
                notice_timeout,
            );
        }
    });

    // 若请求返回 401 令牌已被清除，同步后路由会跳回登录页
    Effect::new(move |_| {
        let failed = products.error().is_some() || slides.error().is_some();
        if failed {
            auth.sync();
        }
    });

    let open_product = move |record: Option<Product>| {
        if busy.get_untracked() {
            return;
        }
        let len = products.with_data(|d| d.map_or(0, Vec::len));
        product_flow.update(|f| f.open_for_edit(record.as_ref(), len));
        product_open.set(true);
    };
    let open_hero = move |record: Option<HeroSlide>| {
        if busy.get_untracked() {
            return;
        }
        let len = slides.with_data(|d| d.map_or(0, Vec::len));
        hero_flow.update(|f| f.open_for_edit(record.as_ref(), len));
        hero_open.set(true);
    };

    let delete_product = {
        let deps = product_deps.clone();
        move |id: String| delete_record(product_flow, id, deps.clone())
    };
    let delete_hero = {
        let deps = hero_deps.clone();
        move |id: String| delete_record(hero_flow, id, deps.clone())
    };

    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-6">
                <Show when=move || notice.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            if notice.with(|n| n.as_ref().is_some_and(Notice::is_error)) {
                                "alert alert-error shadow-lg"
                            } else {
                                "alert alert-success shadow-lg"
                            }
                        }>
                            <span>
                                {move || notice.with(|n| n.as_ref().map(|n| n.message().to_string()).unwrap_or_default())}
                            </span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <h1 class="px-2 text-2xl font-bold text-[#1e3a5f]">"Admin Dashboard"</h1>
                    </div>
                    <div class="flex-none gap-2">
                        {move || match tab.get() {
                            Tab::Products => view! {
                                <button
                                    class="btn bg-[#1e3a5f] hover:bg-[#15233f] text-white gap-2"
                                    disabled=move || busy.get()
                                    on:click=move |_| open_product(None)
                                >
                                    <Plus attr:class="h-4 w-4" /> "Add Product"
                                </button>
                            }
                            .into_any(),
                            Tab::HeroImages => view! {
                                <button
                                    class="btn bg-[#1e3a5f] hover:bg-[#15233f] text-white gap-2"
                                    disabled=move || busy.get()
                                    on:click=move |_| open_hero(None)
                                >
                                    <Plus attr:class="h-4 w-4" /> "Add Hero Slide"
                                </button>
                            }
                            .into_any(),
                        }}
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>

                <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit">
                    <a
                        role="tab"
                        class=move || if tab.get() == Tab::Products { "tab tab-active" } else { "tab" }
                        on:click=move |_| set_tab.set(Tab::Products)
                    >
                        "Products"
                    </a>
                    <a
                        role="tab"
                        class=move || if tab.get() == Tab::HeroImages { "tab tab-active" } else { "tab" }
                        on:click=move |_| set_tab.set(Tab::HeroImages)
                    >
                        "Hero Images"
                    </a>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0 overflow-x-auto">
                        {move || match tab.get() {
                            Tab::Products => view! {
                                <ProductTable
                                    state=products
                                    busy=busy
                                    on_edit=Callback::new(move |p: Product| open_product(Some(p)))
                                    on_delete=Callback::new(delete_product.clone())
                                />
                            }
                            .into_any(),
                            Tab::HeroImages => view! {
                                <HeroTable
                                    state=slides
                                    busy=busy
                                    on_edit=Callback::new(move |s: HeroSlide| open_hero(Some(s)))
                                    on_delete=Callback::new(delete_hero.clone())
                                />
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>

            <ProductDialog flow=product_flow open=product_open deps=product_deps />
            <HeroDialog flow=hero_flow open=hero_open deps=hero_deps />
        </div>
    }
}

/// 表格内的加载与错误状态行
fn status_row<T>(state: &LoadState<T>, columns: u8) -> Option<AnyView> {
    let colspan = columns.to_string();
    match state {
        LoadState::Idle | LoadState::Loading => Some(
            view! {
                <tr>
                    <td colspan=colspan class="text-center py-8 text-base-content/50">
                        <span class="loading loading-spinner loading-md"></span>
                    </td>
                </tr>
            }
            .into_any(),
        ),
        LoadState::Error(message) => Some(
            view! {
                <tr>
                    <td colspan=colspan class="py-6">
                        <div role="alert" class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    </td>
                </tr>
            }
            .into_any(),
        ),
        LoadState::Success(_) => None,
    }
}

#[component]
fn ProductTable(
    state: LoaderSignal<Vec<Product>>,
    busy: RwSignal<bool>,
    on_edit: Callback<Product>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Images"</th>
                    <th>"Featured"</th>
                    <th class="hidden md:table-cell">"Last Updated"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || status_row(&state.state(), 6)}
                {move || {
                    state
                        .with_data(|d| d.cloned().unwrap_or_default())
                        .into_iter()
                        .map(|product| {
                            let id = product.id.clone();
                            let category = product.category_label().unwrap_or("N/A").to_string();
                            let updated = product
                                .updated_at
                                .map(|at| at.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "-".to_string());
                            let images = format!("{} images", product.images.len());
                            let featured = product.is_featured;
                            let name = product.name.clone();
                            view! {
                                <tr>
                                    <td class="font-semibold">{name}</td>
                                    <td>{category}</td>
                                    <td>{images}</td>
                                    <td>
                                        {if featured {
                                            view! { <span class="badge badge-primary">"Yes"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-ghost">"No"</span> }.into_any()
                                        }}
                                    </td>
                                    <td class="hidden md:table-cell text-sm opacity-70">{updated}</td>
                                    <td class="flex gap-1">
                                        <button
                                            class="btn btn-ghost btn-sm btn-square"
                                            disabled=move || busy.get()
                                            aria-label="Edit product"
                                            on:click=move |_| on_edit.run(product.clone())
                                        >
                                            <Pencil attr:class="h-4 w-4" />
                                        </button>
                                        <button
                                            class="btn btn-ghost btn-sm btn-square text-error"
                                            disabled=move || busy.get()
                                            aria-label="Delete product"
                                            on:click=move |_| on_delete.run(id.clone())
                                        >
                                            <Trash attr:class="h-4 w-4" />
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn HeroTable(
    state: LoaderSignal<Vec<HeroSlide>>,
    busy: RwSignal<bool>,
    on_edit: Callback<HeroSlide>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let is_empty = move || state.with_data(|d| d.is_some_and(Vec::is_empty));

    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Label"</th>
                    <th>"Order"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || status_row(&state.state(), 4)}
                <Show when=is_empty>
                    <tr>
                        <td colspan="4" class="text-center py-8 text-base-content/50">
                            "No hero slides yet. Add one to get started."
                        </td>
                    </tr>
                </Show>
                {move || {
                    state
                        .with_data(|d| d.cloned().unwrap_or_default())
                        .into_iter()
                        .map(|slide| {
                            let id = slide.id.clone();
                            let label = slide.label.clone().unwrap_or_else(|| "No label".to_string());
                            let image = slide.image.clone();
                            let order = slide.order;
                            view! {
                                <tr>
                                    <td>
                                        <img src=image class="h-16 w-28 rounded-lg object-cover" />
                                    </td>
                                    <td>{label}</td>
                                    <td>{order}</td>
                                    <td class="flex gap-1">
                                        <button
                                            class="btn btn-ghost btn-sm btn-square"
                                            disabled=move || busy.get()
                                            aria-label="Edit hero slide"
                                            on:click=move |_| on_edit.run(slide.clone())
                                        >
                                            <Pencil attr:class="h-4 w-4" />
                                        </button>
                                        <button
                                            class="btn btn-ghost btn-sm btn-square text-error"
                                            disabled=move || busy.get()
                                            aria-label="Delete hero slide"
                                            on:click=move |_| on_delete.run(id.clone())
                                        >
                                            <Trash attr:class="h-4 w-4" />
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
