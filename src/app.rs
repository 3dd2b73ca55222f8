use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{Landing, LoginPage, NotFound, ProfilePage, RegisterPage};
use crate::theme::{Theme, apply_theme, load_theme_from_storage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Theme is decided once at startup and shared with the switcher via context.
    let theme = RwSignal::new(load_theme_from_storage());
    apply_theme(theme.get_untracked());
    provide_context::<RwSignal<Theme>>(theme);

    view! {
        <Title text="Notedown - Modern Note Taking & Todo App"/>
        <Meta
            name="description"
            content="Smart note-taking app with rich text, music integration, and slide sharing capabilities"
        />
        <Router>
            <main class="min-h-screen bg-base-100">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Landing/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <Route path=path!("/auth/register") view=RegisterPage/>
                    <Route path=path!("/profile/:username") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
