use leptos::prelude::*;

use crate::components::icons::ArrowLeft;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-[70vh] bg-slate-50">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <p class="text-sm font-semibold tracking-[0.2em] text-slate-500">"ERROR 404"</p>
                    <h1 class="text-4xl font-bold text-slate-900">"This page couldn't be found."</h1>
                    <p class="text-slate-500">
                        "The page you are looking for may have been moved or no longer exists."
                    </p>
                    <Link to=AppRoute::Home class="btn rounded-full bg-[#1e3a5f] hover:bg-[#15233f] text-white">
                        <ArrowLeft attr:class="h-4 w-4" /> "Back to homepage"
                    </Link>
                </div>
            </div>
        </div>
    }
}
