//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::controls::Controls;
use crate::components::sections::Sections;
use crate::config::SiteConfig;
use crate::content;
use crate::state::feedback::FeedbackState;
use crate::state::filter::FilterState;
use crate::state::form::FormState;
use crate::state::nav::NavState;
use crate::state::theme::ThemeStore;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Builds every piece of page state once, provides it as context, and
/// renders the main content container. Clicks anywhere inside the container
/// on an element carrying `data-id` select that section.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();

    let nav = RwSignal::new(NavState::starting_at(content::section_ids(), &config.initial_section));
    let theme = RwSignal::new(ThemeStore::load(LocalStorage));
    let form = RwSignal::new(FormState::default());
    let feedback = RwSignal::new(FeedbackState::default());
    let filter = RwSignal::new(FilterState::new(content::portfolio_categories()));

    provide_context(nav);
    provide_context(theme);
    provide_context(form);
    provide_context(feedback);
    provide_context(filter);
    provide_context(config.clone());

    let on_content_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(id) = clicked_section_id(&ev) {
            nav.update(|n| {
                n.select(&id);
            });
        }
    };

    view! {
        <main
            class="main-content"
            class:bright-mode=move || theme.with(|t| t.theme().is_bright())
            on:click=on_content_click
        >
            <Sections/>
            <Controls theme_toggle=config.theme_toggle/>
        </main>
    }
}

/// `data-id` of the element the click originated on.
fn clicked_section_id(ev: &leptos::ev::MouseEvent) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let target = ev.target()?.dyn_into::<web_sys::HtmlElement>().ok()?;
        target.dataset().get("id").filter(|id| !id.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
