//! Section control buttons and the theme toggle.
//!
//! DESIGN
//! ======
//! A control never touches classes directly: clicking selects its section in
//! `NavState`, and `active-btn` follows from the selection.

use leptos::prelude::*;

use crate::content::SECTIONS;
use crate::state::nav::NavState;
use crate::state::theme::ThemeStore;
use crate::util::storage::LocalStorage;

#[component]
pub fn Controls(theme_toggle: bool) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let theme = expect_context::<RwSignal<ThemeStore<LocalStorage>>>();

    let buttons = SECTIONS
        .iter()
        .map(|def| {
            let id = def.id;
            let is_active = move || nav.with(|n| n.is_control_active(id));
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                nav.update(|n| {
                    n.select(id);
                });
            };

            view! {
                <div class="control" class:active-btn=is_active attr:data-id=id title=def.title on:click=on_click>
                    <i class=def.icon></i>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let on_theme_click = move |_ev: leptos::ev::MouseEvent| {
        theme.update(|t| {
            let next = t.toggle();
            leptos::logging::log!("theme switched to {}", next.as_str());
        });
    };

    view! {
        <div class="controls">{buttons}</div>
        {theme_toggle
            .then(|| {
                view! {
                    <div class="theme-btn" title="Toggle theme" on:click=on_theme_click>
                        <i class="fas fa-adjust"></i>
                    </div>
                }
            })}
    }
}
