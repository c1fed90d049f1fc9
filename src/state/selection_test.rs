use super::*;

fn book(id: &str) -> BookRecord {
    BookRecord {
        id: BookId::from(id),
        name: format!("Book {id}"),
        author: "Author".to_owned(),
        category: "Fiction".to_owned(),
        ..BookRecord::default()
    }
}

#[test]
fn selected_book_default_is_empty() {
    assert!(SelectedBook::default().book.is_none());
}

#[test]
fn matching_returns_record_for_same_id() {
    let mut sel = SelectedBook::default();
    sel.select(book("4"));
    assert_eq!(sel.matching(&BookId::from("4")).map(|b| b.name), Some("Book 4".to_owned()));
}

#[test]
fn matching_ignores_other_id() {
    let mut sel = SelectedBook::default();
    sel.select(book("4"));
    assert!(sel.matching(&BookId::from("5")).is_none());
}

#[test]
fn select_replaces_previous() {
    let mut sel = SelectedBook::default();
    sel.select(book("1"));
    sel.select(book("2"));
    assert!(sel.matching(&BookId::from("1")).is_none());
    assert!(sel.matching(&BookId::from("2")).is_some());
}
