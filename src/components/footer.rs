//! Site footer with copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

pub const OWNER: &str = "THE BOOK ALLEY";

/// Copyright text; the year is omitted when the clock is unavailable.
pub fn copyright_line(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("Copyright © {year} - All right reserved by {OWNER}"),
        None => format!("Copyright © All right reserved by {OWNER}"),
    }
}

fn current_year() -> Option<i32> {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <aside>
                <p>{copyright_line(current_year())}</p>
            </aside>
        </footer>
    }
}
