//! Page sections. Exactly the section selected in `NavState` carries
//! `active`; the rest stay in the document, hidden by CSS.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hash_link::HashLink;
use crate::components::portfolio::Portfolio;
use crate::content::{SECTIONS, SectionDef};
use crate::state::nav::NavState;

#[component]
pub fn Sections() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    SECTIONS
        .iter()
        .map(|def| {
            let id = def.id;
            let is_active = move || nav.with(|n| n.is_section_active(id));
            view! {
                <section class="section" class:active=is_active id=id>
                    {section_body(*def)}
                </section>
            }
        })
        .collect::<Vec<_>>()
}

fn section_body(def: SectionDef) -> AnyView {
    match def.id {
        "home" => view! {
            <header class="container header">
                <div class="header-content">
                    <h1>"Hi, I'm " <span>"a developer."</span></h1>
                    <p>"I build small, fast things for the web and care about the details."</p>
                    <div class="btn-con">
                        <HashLink href="#about" kind="main-btn" section="about">
                            "More about me"
                        </HashLink>
                    </div>
                </div>
            </header>
        }
        .into_any(),
        "about" => view! {
            <div class="container about-container">
                <div class="main-title"><h2>{def.title}</h2></div>
                <p>"Front-end developer with a soft spot for tidy interfaces and typed code."</p>
            </div>
        }
        .into_any(),
        "portfolio" => view! {
            <div class="container">
                <div class="main-title"><h2>{def.title}</h2></div>
                <Portfolio/>
            </div>
        }
        .into_any(),
        "contact" => view! {
            <div class="container contact-container">
                <div class="main-title"><h2>{def.title}</h2></div>
                <div class="right-contact">
                    <ContactForm/>
                </div>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="container">
                <div class="main-title"><h2>{def.title}</h2></div>
            </div>
        }
        .into_any(),
    }
}
