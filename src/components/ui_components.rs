use leptos::prelude::*;

#[component]
pub fn SuccessToast(message: String) -> impl IntoView {
    view! {
        <div class="toast toast-top toast-center">
            <div class="alert alert-success">
                <span>{message}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorToast(message: String) -> impl IntoView {
    view! {
        <div class="toast toast-top toast-center">
            <div class="alert alert-error">
                <span>{message}</span>
            </div>
        </div>
    }
}
