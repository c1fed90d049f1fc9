//! Non-interactive progress indicator shared by the listing and detail pages.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar" aria-label="Loading">
            <span class="loading__bars"></span>
        </div>
    }
}
