//! Anchor that keeps in-page `#section` links from scrolling the page.

use leptos::prelude::*;

use crate::util::anchor;

/// `<a>` whose default navigation is prevented for in-page hashes. When
/// `section` is set the link also carries `data-id`, so the main content's
/// delegated click handler switches to that section.
#[component]
pub fn HashLink(
    href: &'static str,
    #[prop(optional)] kind: &'static str,
    #[prop(optional)] section: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if anchor::intercepts(href) {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=kind attr:data-id=section on:click=on_click>
            {children()}
        </a>
    }
}
