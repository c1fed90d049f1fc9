//! Summary card for one book on the listing grid.
//!
//! DESIGN
//! ======
//! The card is a plain link to `/book/{id}`. Before the router handles the
//! click, the card hands its record to [`SelectedBook`] so the detail page
//! can render without refetching the catalog.

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use catalog::{BookId, BookRecord};
use leptos::prelude::*;

use crate::state::selection::SelectedBook;

/// Route for a book's detail page.
pub fn detail_href(id: &BookId) -> String {
    format!("/book/{id}")
}

#[component]
pub fn BookCard(book: BookRecord) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectedBook>>();
    let href = detail_href(&book.id);
    let alt = book.name.clone();
    let tags = book.tags.clone();
    let on_click = {
        let book = book.clone();
        move |_| selection.update(|s| s.select(book.clone()))
    };

    view! {
        <a class="book-card" href=href on:click=on_click>
            <figure class="book-card__cover">
                <img src=book.image alt=alt class="book-card__image"/>
            </figure>
            <div class="book-card__tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
            </div>
            <h2 class="book-card__name">{book.name}</h2>
            <h4 class="book-card__author">"By : " {book.author}</h4>
            <div class="book-card__footer">
                <span class="book-card__category">{book.category}</span>
                <span class="book-card__rating">
                    <span>{book.rating}</span>
                    <span class="book-card__star" aria-hidden="true">"☆"</span>
                </span>
            </div>
        </a>
    }
}
