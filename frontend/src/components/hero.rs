//! 首页横幅与轮播

use leptos::prelude::*;

use crate::carousel::{AutoAdvance, Carousel};
use crate::client::ApiClient;
use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::layout::scroll_to_section;
use crate::config::AppConfig;
use crate::hero::{FALLBACK, fetch_slides};
use crate::loader::LoaderSignal;
use crate::web::{FetchTransport, IntervalScheduler};

#[component]
pub fn Hero() -> impl IntoView {
    let client = expect_context::<ApiClient<FetchTransport>>();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let slides = LoaderSignal::new(FALLBACK);
    slides.load(async move { fetch_slides(&client).await });

    let carousel = RwSignal::new(Carousel::default());
    let timer = StoredValue::new_local(AutoAdvance::new(
        IntervalScheduler,
        config.carousel_interval_ms,
    ));

    // 手动切换后重新计时，避免刚切换就被自动切走
    let schedule = move || {
        let count = carousel.with_untracked(|c| c.count());
        timer.try_update_value(|t| {
            t.restart(count, move || {
                carousel.try_update(|c| c.next());
            })
        });
    };

    // 幻灯片列表被替换时回到第一张
    Effect::new(move |_| {
        let count = slides.with_data(|data| data.map_or(0, Vec::len));
        carousel.set(Carousel::new(count));
        schedule();
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.stop());
    });

    let step = move |forward: bool| {
        carousel.update(|c| {
            if forward {
                c.next();
            } else {
                c.prev();
            }
        });
        schedule();
    };
    let jump = move |index: usize| {
        carousel.update(|c| {
            c.jump_to(index);
        });
        schedule();
    };

    let slide_list = move || slides.with_data(|data| data.cloned().unwrap_or_default());

    view! {
        <section id="home" class="py-16 md:py-20 bg-slate-50 border-b border-slate-200">
            <div class="max-w-6xl mx-auto px-6 grid gap-12 md:grid-cols-2 items-center">
                <div class="space-y-5 max-w-xl">
                    <span class="badge badge-lg border-none bg-sky-100 text-sky-700 font-semibold">
                        "Producers & Exporters • Since 1998"
                    </span>
                    <h1 class="text-4xl md:text-5xl font-bold leading-tight">
                        <span class="block text-slate-900">"Pure Beauty,"</span>
                        <span class="block text-[#1e3a5f]">"Natural Brilliance."</span>
                    </h1>
                    <p class="text-lg text-slate-600 leading-relaxed">
                        "At Sarhad Corporation, we mine, process, and export premium industrial minerals "
                        "that power fertilizers, ceramics, glass, paints, plastics and more."
                    </p>
                    <p class="text-slate-500">
                        "Backed by long-term leases and strict quality control, we deliver consistent, "
                        "specification-driven minerals from Pakistan to partners across the globe."
                    </p>
                    <button
                        class="btn btn-lg rounded-full px-8 bg-[#1e3a5f] hover:bg-[#15233f] text-white shadow-xl"
                        on:click=move |_| scroll_to_section("products")
                    >
                        "View mineral portfolio"
                    </button>
                </div>

                <div class="relative h-64 md:h-96 rounded-2xl overflow-hidden border border-slate-200 bg-white">
                    <Show
                        when=move || !slides.is_loading()
                        fallback=|| view! {
                            <div class="flex h-full items-center justify-center">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }
                    >
                        <div class=move || {
                            format!("absolute inset-0 {}", carousel.with(|c| c.direction().css_class()))
                        }>
                            {move || {
                                slide_list()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, slide)| {
                                        let alt = slide.label.clone().unwrap_or_default();
                                        view! {
                                            <div class=move || {
                                                if carousel.with(|c| c.active()) == index {
                                                    "absolute inset-0 transition-opacity duration-700 opacity-100"
                                                } else {
                                                    "absolute inset-0 transition-opacity duration-700 opacity-0 pointer-events-none"
                                                }
                                            }>
                                                <img src=slide.image alt=alt.clone() class="h-full w-full object-cover" />
                                                <Show when={
                                                    let has_label = !alt.is_empty();
                                                    move || has_label
                                                }>
                                                    <span class="badge absolute bottom-4 left-4 bg-black/60 border-none text-white">
                                                        {alt.clone()}
                                                    </span>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <Show when=move || { carousel.with(|c| c.count()) > 1 }>
                            <button
                                class="btn btn-circle btn-sm absolute left-3 top-1/2 -translate-y-1/2 bg-white/80 border-none"
                                aria-label="Previous slide"
                                on:click=move |_| step(false)
                            >
                                <ChevronLeft attr:class="h-4 w-4" />
                            </button>
                            <button
                                class="btn btn-circle btn-sm absolute right-3 top-1/2 -translate-y-1/2 bg-white/80 border-none"
                                aria-label="Next slide"
                                on:click=move |_| step(true)
                            >
                                <ChevronRight attr:class="h-4 w-4" />
                            </button>
                            <div class="absolute bottom-4 right-4 flex gap-2">
                                {move || {
                                    (0..carousel.with(|c| c.count()))
                                        .map(|index| {
                                            view! {
                                                <button
                                                    aria-label=format!("Go to slide {}", index + 1)
                                                    class=move || {
                                                        if carousel.with(|c| c.active()) == index {
                                                            "h-2.5 w-6 rounded-full bg-white"
                                                        } else {
                                                            "h-2.5 w-2.5 rounded-full bg-white/50"
                                                        }
                                                    }
                                                    on:click=move |_| jump(index)
                                                ></button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </section>
    }
}
