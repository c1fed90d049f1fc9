//! Detail page for one book, with Read and Wishlist actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route carries only the book id. A record handed over by the listing
//! page is shown immediately; otherwise the catalog is fetched and searched.
//! Fetch failures render exactly like an unknown id.
//!
//! The actions run a synchronous read-modify-write on the shared
//! [`InteractionStore`] and surface the outcome as a toast.

#[cfg(test)]
#[path = "book_detail_test.rs"]
mod book_detail_test;

use catalog::{BookId, BookRecord, DetailState, InteractionStore};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::loading::Loading;
use crate::components::toast_stack::show_notice;
use crate::config::AppConfig;
use crate::state::selection::SelectedBook;
use crate::state::toast::ToastState;
use crate::util::history::go_back;
use crate::util::local_storage::LocalStorage;

/// Label/value pairs for the facts table, in display order.
pub fn fact_rows(book: &BookRecord) -> [(&'static str, String); 4] {
    [
        ("Number of Pages :", book.total_pages.clone()),
        ("Publisher :", book.publisher.clone()),
        ("Year of Publishing :", book.year_of_publishing.clone()),
        ("Rating :", book.rating.clone()),
    ]
}

/// Browser tab title: the book name once loaded, the app name otherwise.
pub fn page_title(state: &DetailState) -> String {
    match state.book() {
        Some(book) if !book.name.is_empty() => format!("{} | The Book Alley", book.name),
        _ => "The Book Alley".to_owned(),
    }
}

pub fn tag_label(tag: &str) -> String {
    format!("#{tag}")
}

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let params = use_params_map();
    let config = expect_context::<AppConfig>();
    let selection = expect_context::<RwSignal<SelectedBook>>();
    let detail = RwSignal::new(DetailState::Loading);
    let route_id = Memo::new(move |_| params.read().get("id").map(BookId::from));

    Effect::new(move || {
        let id = route_id.get();
        let preloaded = id.as_ref().and_then(|id| selection.with_untracked(|s| s.matching(id)));
        let initial = DetailState::initial(id.as_ref(), preloaded);
        let needs_load = initial.is_loading();
        detail.set(initial);
        if !needs_load {
            return;
        }

        #[cfg(feature = "csr")]
        if let Some(id) = id {
            let source = crate::net::catalog_http::HttpCatalogSource::new(config.catalog_url.clone());
            leptos::task::spawn_local(async move {
                let state = catalog::resolve_detail(&source, &id, None).await;
                let current = route_id.try_get_untracked().flatten();
                if let Some(state) = catalog::accept_for_route(current.as_ref(), &id, state) {
                    detail.try_set(state);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    });

    view! {
        <Title text=move || detail.with(page_title)/>
        {move || match detail.get() {
            DetailState::Loading => view! { <Loading/> }.into_any(),
            DetailState::NotFound => view! { <div class="book-detail__missing">"Book not found."</div> }.into_any(),
            DetailState::Loaded(book) => view! { <BookDetail book=book/> }.into_any(),
        }}
    }
}

/// Full record view plus the two interaction buttons.
#[component]
fn BookDetail(book: BookRecord) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let store = expect_context::<InteractionStore<LocalStorage>>();
    let timeout_ms = config.toast_timeout_ms;

    let on_read = {
        let store = store.clone();
        let id = book.id.clone();
        move |_| {
            show_notice(toasts, store.mark_read(&id), timeout_ms);
        }
    };
    let on_wishlist = {
        let id = book.id.clone();
        move |_| {
            show_notice(toasts, store.add_to_wishlist(&id), timeout_ms);
        }
    };

    let facts = fact_rows(&book);
    let alt = book.name.clone();

    view! {
        <div class="book-detail">
            <button class="btn btn--success" on:click=move |_| go_back()>
                "Go Back"
            </button>

            <div class="book-detail__body">
                <div class="book-detail__cover">
                    <img src=book.image alt=alt/>
                </div>
                <div class="book-detail__info">
                    <h1 class="book-detail__name">{book.name}</h1>
                    <h4 class="book-detail__author">"By: " {book.author}</h4>
                    <h4 class="book-detail__category">{book.category}</h4>
                    <p class="book-detail__review">
                        <span class="book-detail__label">"Review : "</span>
                        {book.review}
                    </p>
                    <div class="book-detail__tags">
                        <span class="book-detail__label">"Tag"</span>
                        {book
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="tag">{tag_label(tag)}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                    <dl class="book-detail__facts">
                        {facts
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                    <div class="book-detail__actions">
                        <button class="btn btn--outline" on:click=on_read>
                            "Read"
                        </button>
                        <button class="btn btn--info" on:click=on_wishlist>
                            "Wishlist"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
