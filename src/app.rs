//! Root application component with routing and context providers.

use catalog::InteractionStore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::toast_stack::ToastStack;
use crate::config::AppConfig;
use crate::pages::{book_detail::BookDetailPage, home::HomePage};
use crate::state::selection::SelectedBook;
use crate::state::toast::ToastState;
use crate::util::local_storage::LocalStorage;

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let store = InteractionStore::new(LocalStorage, config.storage_keys.clone());
    let selection = RwSignal::new(SelectedBook::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(store);
    provide_context(selection);
    provide_context(toasts);

    view! {
        <Title text="The Book Alley"/>

        <Router>
            <header class="site-header">
                <a href="/" class="site-header__brand">"The Book Alley"</a>
            </header>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("book"), ParamSegment("id")) view=BookDetailPage/>
                </Routes>
            </main>
            <ToastStack/>
            <Footer/>
        </Router>
    }
}
