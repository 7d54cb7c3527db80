//! Portfolio gallery with category filter buttons.
//!
//! DESIGN
//! ======
//! Item visibility comes from `FilterState`. In the browser one timer per
//! transition direction settles the current pass: reveals after
//! `REVEAL_DELAY_MS`, hides after `HIDE_DELAY_MS`. A new click re-arms both
//! timers, which cancels the previous pass's pending callbacks.

use leptos::prelude::*;

use crate::content::{FILTERS, PORTFOLIO_ITEMS, has_portfolio_filter};
use crate::state::filter::{FilterState, ItemPhase};

#[component]
pub fn Portfolio() -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::state::filter::{HIDE_DELAY_MS, REVEAL_DELAY_MS};
        use crate::util::timer::PhaseTimer;

        let reveal_timer = Rc::new(RefCell::new(PhaseTimer::new()));
        let hide_timer = Rc::new(RefCell::new(PhaseTimer::new()));
        let pass = Memo::new(move |_| filter.with(FilterState::pass));
        Effect::new(move || {
            let current = pass.get();
            let (reveal, hide) = filter.with_untracked(|f| (f.has_pending_reveal(), f.has_pending_hide()));

            let mut reveal_timer = reveal_timer.borrow_mut();
            if reveal {
                reveal_timer.schedule(REVEAL_DELAY_MS, move || {
                    filter.update(|f| {
                        f.settle_reveal(current);
                    });
                });
            } else {
                reveal_timer.cancel();
            }

            let mut hide_timer = hide_timer.borrow_mut();
            if hide {
                hide_timer.schedule(HIDE_DELAY_MS, move || {
                    filter.update(|f| {
                        f.settle_hide(current);
                    });
                });
            } else {
                hide_timer.cancel();
            }
        });
    }

    let buttons = FILTERS
        .iter()
        .map(|def| {
            let value = def.value;
            let is_active = move || filter.with(|f| f.is_button_active(value));
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                filter.update(|f| {
                    f.apply(value);
                });
            };
            view! {
                <button class="filter-btn" class:active=is_active attr:data-filter=value on:click=on_click>
                    {def.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let items = PORTFOLIO_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = move || filter.with(|f| f.phase(index).map_or("", ItemPhase::style));
            view! {
                <div class="portfolio-item" attr:data-category=item.category style=style>
                    <div class="image">
                        <img src=item.image alt=item.title/>
                    </div>
                    <div class="hover-items">
                        <h3>{item.title}</h3>
                        <div class="icons">
                            <a href=item.link class="icon">
                                <i class="fab fa-github"></i>
                            </a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        {has_portfolio_filter().then(|| view! { <div class="filter-buttons">{buttons}</div> })}
        <div class="portfolios">{items}</div>
    }
}
