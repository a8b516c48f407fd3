//! PageFrame: standard root wrapper for every page of the shell.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element so pages can be located from the DOM inspector.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper with the BEM modifier matching the category.
#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
