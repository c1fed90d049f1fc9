use super::*;

#[test]
fn copyright_line_with_year() {
    assert_eq!(copyright_line(Some(2024)), "Copyright © 2024 - All right reserved by THE BOOK ALLEY");
}

#[test]
fn copyright_line_without_year() {
    assert_eq!(copyright_line(None), "Copyright © All right reserved by THE BOOK ALLEY");
}

#[cfg(not(feature = "csr"))]
#[test]
fn current_year_is_unknown_outside_browser() {
    assert!(current_year().is_none());
}
