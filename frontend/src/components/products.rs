//! 首页产品网格

use leptos::prelude::*;
use sarhad_shared::Product;
use sarhad_shared::protocol::ListProducts;

use crate::client::ApiClient;
use crate::loader::{FailurePolicy, LoadState, LoaderSignal};
use crate::web::FetchTransport;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 产品没有图片时的占位图
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1581092160562-40aa08e78837?w=600&q=80";

/// 没有分类的产品在卡片上显示的文字
pub const DEFAULT_CATEGORY: &str = "Industrial Mineral";

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Fertilizer grade", "bg-sky-100 text-sky-700"),
    ("Ceramics & glass", "bg-violet-100 text-violet-800"),
    ("Paints & coatings", "bg-amber-100 text-amber-800"),
    ("Custom sizing", "bg-green-100 text-green-800"),
];

#[component]
pub fn Products() -> impl IntoView {
    let client = expect_context::<ApiClient<FetchTransport>>();

    let products = LoaderSignal::new(FailurePolicy::Surface("Failed to load products"));
    products.load(async move { client.call(&ListProducts).await });

    view! {
        <section id="products" class="py-16 md:py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid gap-8 md:grid-cols-12 items-center mb-12">
                    <div class="md:col-span-7">
                        <p class="text-xs font-semibold tracking-[0.2em] text-slate-500">"OUR MINERAL PORTFOLIO"</p>
                        <h2 class="mt-2 text-3xl md:text-4xl font-bold text-slate-900">
                            "Industrial minerals engineered for performance."
                        </h2>
                        <p class="mt-4 max-w-xl text-slate-500 leading-relaxed">
                            "From Rock Phosphate and Talc to Quartz and Mica, every product is mined, processed, "
                            "and graded to meet demanding global specifications for fertilizers, ceramics, "
                            "paper, paints, plastics, and more."
                        </p>
                    </div>
                    <div class="md:col-span-5 flex flex-wrap gap-2 md:justify-end">
                        {HIGHLIGHTS
                            .iter()
                            .map(|&(label, colors)| {
                                view! { <span class=format!("badge border-none {}", colors)>{label}</span> }
                            })
                            .collect_view()}
                    </div>
                </div>

                {move || match products.state() {
                    LoadState::Idle | LoadState::Loading => view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    }
                    .into_any(),
                    LoadState::Error(message) => view! {
                        <div role="alert" class="alert alert-error">
                            <span>{message}</span>
                        </div>
                    }
                    .into_any(),
                    LoadState::Success(list) => view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {list
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cover = product.cover_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    let category = product
        .category_label()
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();
    let featured = product.is_featured;

    view! {
        <Link
            to=AppRoute::Product(product.slug.clone())
            class="card bg-base-100 border border-slate-200 shadow-sm hover:shadow-xl hover:-translate-y-1 transition"
        >
            <figure class="relative h-52">
                <img src=cover alt=product.name.clone() class="h-full w-full object-cover" />
                <Show when=move || featured>
                    <span class="badge absolute top-3 left-3 border-none bg-amber-400 text-slate-900 font-semibold">
                        "Featured"
                    </span>
                </Show>
            </figure>
            <div class="card-body">
                <p class="text-xs uppercase tracking-wider text-slate-500">{category}</p>
                <h3 class="card-title text-slate-900">{product.name.clone()}</h3>
                <p class="text-sm text-slate-500 line-clamp-3">{product.description.clone()}</p>
                <div class="card-actions items-center justify-between mt-2">
                    <span class="text-xs text-slate-400">"Tap card to view full technical data"</span>
                    <span class="btn btn-sm btn-outline rounded-full">"Details"</span>
                </div>
            </div>
        </Link>
    }
}
