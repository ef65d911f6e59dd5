use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::products::Products;
use crate::components::sections::{About, Capabilities, Contact};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <About />
            <Capabilities />
            <Products />
            <Contact />
        </main>
    }
}
