use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="max-w-2xl p-8 text-center">
                <div class="flex justify-center mb-8 text-8xl">"🗂️"</div>

                <h1 class="mb-4 text-5xl font-bold">"404"</h1>
                <h2 class="mb-6 text-2xl font-semibold">"Page Not Found"</h2>
                <p class="mb-8 text-base-content/70">
                    "Oops! Looks like this note got lost in space. Don't worry, we've got plenty of other pages for you to explore."
                </p>

                <div class="flex flex-col justify-center gap-4 sm:flex-row">
                    <a href="/" class="gap-2 btn btn-primary">
                        "Back to Home"
                    </a>
                    <button class="gap-2 btn btn-outline">"Search Notes"</button>
                </div>

                <button class="gap-2 mt-8 btn btn-ghost btn-sm" on:click=go_back>
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
