use leptos::prelude::*;

use crate::theme::{Theme, apply_theme};

#[component]
pub fn ThemeSwitcher(
    /// Current theme signal
    theme: RwSignal<Theme>,
) -> impl IntoView {
    let toggle_theme = move |_| {
        let new_theme = theme.get().toggled();
        theme.set(new_theme);
        apply_theme(new_theme);
    };

    let is_light = move || theme.get().is_light();

    view! {
        <button
            class="btn btn-ghost btn-circle"
            on:click=toggle_theme
            title=move || {
                if is_light() { "Switch to dark mode" } else { "Switch to light mode" }
            }
        >
            <span class="text-lg">{move || if is_light() { "🌙" } else { "☀️" }}</span>
        </button>
    }
}
