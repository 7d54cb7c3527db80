//! Contact form with validation, delivery and loading state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values live in `FormState`; the submit handler validates them,
//! hands a passing submission to `net::email::deliver` on a local task and
//! reports both validation and delivery outcomes through `FeedbackState`.

use leptos::prelude::*;

use crate::components::form_message::FormMessage;
use crate::config::SiteConfig;
use crate::net::email;
use crate::state::feedback::{FeedbackKind, FeedbackState};
use crate::state::form::{FormState, SubmitStep};

fn show(feedback: RwSignal<FeedbackState>, text: impl Into<String>, kind: FeedbackKind) {
    feedback.update(|s| {
        s.show(text, kind);
    });
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let feedback = expect_context::<RwSignal<FeedbackState>>();
    let config = expect_context::<SiteConfig>();
    let delivery = StoredValue::new(config.delivery);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(step) = form.try_update(FormState::submit) else {
            return;
        };
        match step {
            SubmitStep::Busy => {}
            SubmitStep::Rejected(e) => show(feedback, e.to_string(), FeedbackKind::Error),
            SubmitStep::Send(submission) => {
                let delivery = delivery.get_value();
                leptos::task::spawn_local(async move {
                    let outcome = email::deliver(&delivery, &submission).await;
                    if let Some((kind, text)) = form.try_update(|f| f.finish(&outcome)) {
                        show(feedback, text, kind);
                    }
                });
            }
        }
    };

    let sending = move || form.with(FormState::is_sending);

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class="input-control i-c-2">
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="YOUR NAME"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="YOUR EMAIL"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="input-control">
                <input
                    type="text"
                    id="subject"
                    name="subject"
                    placeholder="ENTER SUBJECT"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
            </div>
            <div class="input-control">
                <textarea
                    id="message"
                    name="message"
                    cols="15"
                    rows="8"
                    placeholder="Message Here..."
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="submit-btn">
                <button type="submit" class="main-btn" class:loading=sending disabled=sending>
                    <span class="btn-text">{move || form.with(FormState::button_label)}</span>
                    <span class="btn-icon">
                        <i class="fas fa-paper-plane"></i>
                    </span>
                </button>
            </div>
        </form>
        <FormMessage/>
    }
}
