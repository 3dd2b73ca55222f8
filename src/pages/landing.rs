use leptos::prelude::*;

use crate::components::{CtaSection, Features, Hero, LandingFooter, Navbar, Testimonials};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Navbar/>
            <Hero/>
            <Features/>
            <Testimonials/>
            <CtaSection/>
            <LandingFooter/>
        </div>
    }
}
