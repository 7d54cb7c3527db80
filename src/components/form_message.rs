//! Auto-dismissing status message rendered right after the contact form.
//!
//! ARCHITECTURE
//! ============
//! `FeedbackState` owns the phase machine; this component renders the live
//! message and, in the browser, arms one `PhaseTimer` per phase. Re-arming
//! replaces the previous timer, so a message evicted mid-animation leaves no
//! pending callback behind.

use leptos::prelude::*;

use crate::state::feedback::FeedbackState;

#[component]
pub fn FormMessage() -> impl IntoView {
    let feedback = expect_context::<RwSignal<FeedbackState>>();

    let live = Memo::new(move |_| feedback.with(|s| s.current().map(|m| (m.id, m.phase))));

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::state::feedback::FeedbackMessage;
        use crate::util::timer::PhaseTimer;

        let timer = Rc::new(RefCell::new(PhaseTimer::new()));
        Effect::new(move || {
            let Some((id, _)) = live.get() else {
                timer.borrow_mut().cancel();
                return;
            };
            let Some(delay) = feedback.with_untracked(|s| s.current().map(FeedbackMessage::phase_delay_ms)) else {
                return;
            };
            timer.borrow_mut().schedule(delay, move || {
                feedback.update(|s| {
                    s.advance(id);
                });
            });
        });
    }

    let current_id = Memo::new(move |_| live.get().map(|(id, _)| id));

    move || {
        current_id.get().map(|id| {
            let message = move || feedback.with(|s| s.current().filter(|m| m.id == id).cloned());
            let class = move || message().map_or_else(String::new, |m| format!("form-message {}", m.kind.class()));
            let style = move || message().map_or("", |m| m.style());
            let icon = move || message().map_or("", |m| m.kind.icon_class());
            let text = move || message().map(|m| m.text).unwrap_or_default();

            view! {
                <div class=class style=style>
                    <i class=icon></i>
                    {text}
                </div>
            }
        })
    }
}
