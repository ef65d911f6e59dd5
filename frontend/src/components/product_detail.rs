//! 产品详情页

use leptos::prelude::*;
use sarhad_shared::Product;
use sarhad_shared::protocol::GetProduct;

use crate::carousel::Carousel;
use crate::client::ApiClient;
use crate::components::icons::{ArrowLeft, ChevronLeft, ChevronRight};
use crate::components::products::PLACEHOLDER_IMAGE;
use crate::loader::{FailurePolicy, LoadState, LoaderSignal};
use crate::web::FetchTransport;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// slug 变化时路由出口会重新挂载本组件，因此挂载时加载一次即可
#[component]
pub fn ProductDetail(slug: String) -> impl IntoView {
    let client = expect_context::<ApiClient<FetchTransport>>();
    let router = use_router();

    let product = LoaderSignal::new(FailurePolicy::Surface("Product not found"));
    product.load(async move { client.call(&GetProduct { slug }).await });

    let go_home = move |_: leptos::ev::MouseEvent| router.navigate_to_route(AppRoute::Home);

    view! {
        <div class="min-h-[80vh] py-8 md:py-16">
            <div class="max-w-6xl mx-auto px-6">
                {move || match product.state() {
                    LoadState::Idle | LoadState::Loading => view! {
                        <div class="flex justify-center py-20">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    }
                    .into_any(),
                    LoadState::Error(message) => view! {
                        <div role="alert" class="alert alert-error">
                            <span>{message}</span>
                        </div>
                        <button class="btn btn-ghost mt-4" on:click=go_home>
                            <ArrowLeft attr:class="h-4 w-4" /> "Back to Home"
                        </button>
                    }
                    .into_any(),
                    LoadState::Success(data) => view! {
                        <button class="btn btn-ghost mb-6" on:click=go_home>
                            <ArrowLeft attr:class="h-4 w-4" /> "Back to Products"
                        </button>
                        <ProductBody product=data />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductBody(product: Product) -> impl IntoView {
    let images = if product.images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.images.clone()
    };
    let category = product.category_label().map(str::to_string);
    let specs: Vec<(String, String)> = product
        .specifications
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let applications = product.applications.clone();
    let has_specs = !specs.is_empty();
    let has_applications = !applications.is_empty();

    view! {
        <div class="grid gap-10 md:grid-cols-2">
            <div class="card bg-base-100 border border-slate-200 p-4">
                <Gallery images=images alt=product.name.clone() />
            </div>

            <div class="space-y-6">
                <h1 class="text-3xl md:text-4xl font-bold text-[#1e3a5f]">{product.name.clone()}</h1>
                {category.map(|c| view! { <span class="badge badge-primary badge-lg">{c}</span> })}
                <p class="text-slate-600 leading-relaxed whitespace-pre-line">{product.description.clone()}</p>

                <Show when=move || has_specs>
                    <div>
                        <h2 class="text-xl font-bold text-[#1e3a5f] mb-3">"Technical Specifications"</h2>
                        <div class="overflow-x-auto rounded-box border border-slate-200">
                            <table class="table table-zebra">
                                <tbody>
                                    {specs
                                        .clone()
                                        .into_iter()
                                        .map(|(key, value)| {
                                            view! {
                                                <tr>
                                                    <th class="font-semibold text-[#1e3a5f] w-1/3">{key}</th>
                                                    <td class="text-slate-600">{value}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>

                <Show when=move || has_applications>
                    <div>
                        <h2 class="text-xl font-bold text-[#1e3a5f] mb-3">"Applications"</h2>
                        <div class="flex flex-wrap gap-2">
                            {applications
                                .clone()
                                .into_iter()
                                .map(|app| view! { <span class="badge badge-outline badge-lg">{app}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// 图片画廊：手动切换，带缩略图
#[component]
fn Gallery(images: Vec<String>, alt: String) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let multiple = images.len() > 1;
    let main_images = images.clone();

    let current = move || {
        let index = carousel.with(|c| c.active());
        main_images.get(index).cloned().unwrap_or_default()
    };

    view! {
        <div class="relative aspect-square overflow-hidden rounded-box bg-slate-50">
            <img src=current alt=alt class="h-full w-full object-contain" />
            <Show when=move || multiple>
                <button
                    class="btn btn-circle btn-sm absolute left-3 top-1/2 -translate-y-1/2"
                    aria-label="Previous image"
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.prev();
                        })
                    }
                >
                    <ChevronLeft attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-circle btn-sm absolute right-3 top-1/2 -translate-y-1/2"
                    aria-label="Next image"
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.next();
                        })
                    }
                >
                    <ChevronRight attr:class="h-4 w-4" />
                </button>
            </Show>
        </div>

        <Show when=move || multiple>
            <div class="mt-3 flex gap-2 overflow-x-auto">
                {images
                    .clone()
                    .into_iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <button
                                class=move || {
                                    if carousel.with(|c| c.active()) == index {
                                        "h-16 w-16 shrink-0 overflow-hidden rounded-lg ring-2 ring-[#1e3a5f]"
                                    } else {
                                        "h-16 w-16 shrink-0 overflow-hidden rounded-lg opacity-70 hover:opacity-100"
                                    }
                                }
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.jump_to(index);
                                    })
                                }
                            >
                                <img src=src class="h-full w-full object-cover" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
