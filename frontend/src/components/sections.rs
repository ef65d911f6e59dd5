//! 首页静态区块

use leptos::prelude::*;

use crate::components::icons::{Mail, MapPin, WhatsApp};
use crate::config::AppConfig;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 md:py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6 grid gap-10 md:grid-cols-2 items-center">
                <img src="/about.jpg" alt="About Sarhad Corporation" class="rounded-2xl shadow-lg w-full object-cover" />
                <div class="space-y-4 text-slate-600 leading-relaxed">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900">"About Sarhad Corporation"</h2>
                    <p>
                        "Sarhad Corporation was established in 1998 as a trading company, initially focusing on the export of various commodities. "
                        "In 2005, the company secured a lease for a Rock Phosphate mine, marking its first significant step into the mining industry. "
                        "This venture proved successful, leading to the acquisition of a second Rock Phosphate mine lease in 2010."
                    </p>
                    <p>
                        "In 2012, Sarhad Corporation made a strategic transition from trading to becoming a dedicated mining and export company. "
                        "Direct control over quality and supply ensures consistent delivery of premium-grade products to international markets."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// 能力卡片 (标题, 描述, 标签)
const CAPABILITIES: [(&str, &str, &[&str]); 3] = [
    (
        "Core Mineral Lines",
        "Rock Phosphate, Talc/Soap Stone, Calcium Fluoride, Calcium Carbonate, Quartz, Dolomite, Barite, Mica and more.",
        &["High purity", "Consistent sizing"],
    ),
    (
        "Industries We Serve",
        "Tailored grades for fertilizer producers, ceramics and glass plants, paper and pulp mills, paint and coating formulators, plastics and rubber manufacturers.",
        &["Fertilizers", "Ceramics & Glass", "Paints & Coatings", "Plastics & Rubber"],
    ),
    (
        "From Mine to Port",
        "Long-term leases, in-house processing, and export-focused logistics ensure reliable supply for your annual contracts and spot shipments.",
        &["Long-term leases", "QA/QC lab", "Export ready"],
    ),
];

#[component]
pub fn Capabilities() -> impl IntoView {
    view! {
        <section id="capabilities" class="py-16 md:py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6">
                <p class="text-xs font-semibold tracking-[0.2em] text-slate-500">"WHAT WE DELIVER"</p>
                <h2 class="mt-2 text-3xl md:text-4xl font-bold text-slate-900">
                    "Industrial minerals tailored to your process."
                </h2>
                <p class="mt-4 max-w-2xl text-slate-500 leading-relaxed">
                    "From mine development to export logistics, Sarhad Corporation controls the full value chain. "
                    "We size, grade, and blend minerals to tight specifications."
                </p>
                <div class="mt-10 grid gap-6 md:grid-cols-3">
                    {CAPABILITIES
                        .iter()
                        .map(|&(title, body, tags)| {
                            view! {
                                <div class="card bg-base-100 border border-slate-200 shadow-sm">
                                    <div class="card-body">
                                        <h3 class="card-title text-slate-900">{title}</h3>
                                        <p class="text-sm text-slate-500">{body}</p>
                                        <div class="flex flex-wrap gap-2 mt-2">
                                            {tags
                                                .iter()
                                                .map(|&tag| view! { <span class="badge badge-ghost">{tag}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// 联系表单：生成 mailto 链接交给用户的邮件客户端发送
#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let email = config.contact_email.clone();
    let whatsapp = config.whatsapp_link();

    let (name, set_name) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let recipient = email.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = format!("{}\n\n{}", message.get_untracked(), name.get_untracked());
        let href = format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject.get_untracked()),
            urlencoding::encode(&body),
        );
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&href);
        }
    };

    view! {
        <section id="contact" class="py-16 md:py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6 grid gap-10 md:grid-cols-2">
                <div class="space-y-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900">"Contact us"</h2>
                    <p class="text-slate-500 leading-relaxed">
                        "Whether you have inquiries about our minerals, need specification sheets, or want to discuss business opportunities, our team is here to assist you."
                    </p>
                    <p class="flex items-center gap-2 text-slate-700">
                        <Mail attr:class="h-5 w-5" />
                        <a class="link" href=format!("mailto:{}", email)>{email.clone()}</a>
                    </p>
                    <p class="flex items-center gap-2 text-slate-700">
                        <WhatsApp attr:class="h-5 w-5" />
                        <a class="link" href=whatsapp target="_blank" rel="noopener noreferrer">"Chat on WhatsApp"</a>
                    </p>
                    <p class="flex items-center gap-2 text-slate-700">
                        <MapPin attr:class="h-5 w-5" /> "Hayatabad, Peshawar, Pakistan"
                    </p>
                </div>

                <form class="card bg-base-100 border border-slate-200 shadow-sm" on:submit=on_submit>
                    <div class="card-body space-y-3">
                        <input
                            type="text"
                            placeholder="Name"
                            required
                            class="input input-bordered w-full"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Subject"
                            required
                            class="input input-bordered w-full"
                            prop:value=subject
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Message"
                            required
                            rows="5"
                            class="textarea textarea-bordered w-full"
                            prop:value=message
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                        <button type="submit" class="btn bg-[#1e3a5f] hover:bg-[#15233f] text-white">
                            "Send Message"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
