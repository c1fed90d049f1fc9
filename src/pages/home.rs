//! Listing page: every catalog record as a card grid.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::book_card::BookCard;
use crate::components::loading::Loading;
use crate::config::AppConfig;
use crate::state::listing::ListingState;
#[cfg(feature = "csr")]
use catalog::CatalogSource as _;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let listing = RwSignal::new(ListingState::Loading);

    #[cfg(feature = "csr")]
    {
        let source = crate::net::catalog_http::HttpCatalogSource::new(config.catalog_url.clone());
        leptos::task::spawn_local(async move {
            let state = ListingState::from_load(source.load().await);
            listing.try_set(state);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! {
        <section class="home-page">
            <h2 class="home-page__title">"Books"</h2>
            {move || match listing.get() {
                ListingState::Loading => view! { <Loading/> }.into_any(),
                ListingState::Failed => {
                    view! { <p class="home-page__message">"Could not load books."</p> }.into_any()
                }
                ListingState::Loaded(books) => {
                    view! {
                        <div class="home-page__grid">
                            {books
                                .into_iter()
                                .map(|book| view! { <BookCard book=book/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
