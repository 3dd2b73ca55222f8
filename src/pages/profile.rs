use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{
    NotesOverview, ProfileFooter, ProfileHero, ProfileNav, QuickActions, StatCards,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let username = Signal::derive(move || params.read().get("username").unwrap_or_default());

    view! {
        <div class="min-h-screen bg-gradient-to-b from-base-200 to-base-100">
            <ProfileNav/>
            <ProfileHero username/>
            <StatCards/>
            <NotesOverview/>
            <QuickActions/>
            <ProfileFooter/>
        </div>
    }
}
