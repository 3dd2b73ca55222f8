use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorToast, SuccessToast};
use crate::models::{RegisterDraft, SubmitState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // At most one outstanding submission per form.
        if state.get().is_submitting() {
            return;
        }
        state.set(SubmitState::Submitting);

        let draft = RegisterDraft {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            let result = api::auth::register(&draft).await;
            web_sys::console::log_1(
                &format!("registration submitted for '{}': {:?}", draft.username, result).into(),
            );
            state.set(api::submission_state(result));
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen p-4 bg-base-200">
            {move || match state.get() {
                SubmitState::Succeeded => {
                    let message = "Your registration was a success!".to_string();
                    Some(view! { <SuccessToast message=message/> }.into_any())
                }
                SubmitState::Rejected => {
                    let message = "Your registration was unsuccessful".to_string();
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
                        "Create your account"
                    </h2>
                    <p class="mb-6 text-center text-base-content/70">
                        "Join Notedown to start organizing your thoughts"
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
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="john@example.com"
                                class="w-full input input-bordered"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
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
                                        "Creating account..."
                                    } else {
                                        "Create Account"
                                    }
                                }}
                            </button>
                        </div>
                    </form>

                    <div class="divider">"or"</div>

                    <p class="text-center text-base-content/70">
                        "Already have an account? "
                        <a href="/auth/login" class="link link-primary">
                            "Login"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
