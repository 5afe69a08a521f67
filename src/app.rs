//! Portfolio App
//!
//! Page shell: navbar, hero/about/portfolio/contact sections, back-to-top
//! control and the toast host. All controllers are constructed here once and
//! shared via context; there are no ambient globals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BackToTop, ContactForm, FilterBar, Navbar, PortfolioGrid, ProjectModal, ToastHost,
};
use crate::context::{AppContext, Toast};
use crate::dom;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let toast = signal(None::<Toast>);
    let toast_seq = signal(0u32);
    provide_context(AppContext::new(toast, toast_seq));

    // Sections reveal once on first viewport entry
    Effect::new(move |_| {
        dom::observe_reveal("section", "animate-fade-in");
    });

    web_sys::console::log_1(&"[APP] portfolio ready".into());

    view! {
        <Navbar />

        <main>
            <section id="home" class="hero">
                <h1>"Hi, I'm Angger Bayu Sentiko"</h1>
                <p class="hero-subtitle">"Informatics student building things for the web."</p>
                <a href="#portfolio" class="btn btn-primary" on:click=move |ev| {
                    ev.prevent_default();
                    dom::scroll_to_anchor("#portfolio");
                }>
                    "See my work"
                </a>
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <p>
                    "Informatics engineering student focused on front-end development "
                    "and interface design. The projects below are a mix of coursework "
                    "and side projects."
                </p>
            </section>

            <section id="portfolio" class="portfolio">
                <h2>"Portfolio"</h2>
                <FilterBar />
                <PortfolioGrid />
            </section>

            <section id="contact" class="contact">
                <h2>"Get In Touch"</h2>
                <ContactForm />
            </section>
        </main>

        <BackToTop />
        <ProjectModal />
        <ToastHost />
    }
}
