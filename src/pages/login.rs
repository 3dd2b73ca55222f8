use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ErrorToast, SuccessToast};
use crate::config;
use crate::models::{LoginDraft, SubmitState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let state = RwSignal::new(SubmitState::Idle);

    let navigate = use_navigate();

    // Post-login redirect is scoped to this page: if the user navigates away
    // before the delay elapses, the pending redirect is cleared.
    let redirect_timer = StoredValue::new_local(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = redirect_timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // At most one outstanding submission per form.
        if state.get().is_submitting() {
            return;
        }
        state.set(SubmitState::Submitting);

        let draft = LoginDraft {
            username: username.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = api::auth::login(&draft).await;
            web_sys::console::log_1(
                &format!("login submitted for '{}': {:?}", draft.username, result).into(),
            );

            let next = api::submission_state(result);
            if next == SubmitState::Succeeded {
                let target = config::profile_path(&draft.username);
                if let Ok(handle) = set_timeout_with_handle(
                    move || navigate(&target, Default::default()),
                    Duration::from_millis(config::REDIRECT_DELAY_MS),
                ) {
                    redirect_timer.set_value(Some(handle));
                }
            }
            state.set(next);
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen p-4 bg-base-200">
            {move || match state.get() {
                SubmitState::Succeeded => {
                    let message = "Access granted! Redirecting to your profile...".to_string();
                    Some(view! { <SuccessToast message=message/> }.into_any())
                }
                SubmitState::Rejected => {
                    let message = "Failed to grant access".to_string();
                    Some(view! { <ErrorToast message=message/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorToast message=message/> }.into_any())
                }
                _ => None,
            }}

            <div class="w-full max-w-md shadow-xl card bg-base-100">
                <div class="card-body">
                    <h2 class="justify-center mb-2 text-2xl font-bold text-center card-title">
                        "Access your account"
                    </h2>
                    <p class="mb-6 text-center text-base-content/70">
                        "Login to your Notedown to share your musings"
                    </p>

                    <form class="space-y-6" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                type="text"
                                id="username"
                                name="username"
                                placeholder="johndoe"
                                class="w-full input input-bordered"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                type="password"
                                id="password"
                                name="password"
                                placeholder="••••••••"
                                class="w-full input input-bordered"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <label class="label">
                                <span class="label-text-alt text-base-content/70">
                                    "Must be at least 8 characters"
                                </span>
                            </label>
                        </div>

                        <div class="mt-6 form-control">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                prop:disabled=move || state.get().is_submitting()
                            >
                                {move || {
                                    if state.get().is_submitting() {
                                        "Logging in..."
                                    } else {
                                        "Login to gain access"
                                    }
                                }}
                            </button>
                        </div>
                    </form>

                    <div class="divider">"or"</div>

                    <p class="text-center gap-x-2 text-base-content/70">
                        <span>"Don't have an account? "</span>
                        <a href="/auth/register" class="link link-primary">
                            "Register"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
