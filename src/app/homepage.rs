use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::footer::Footer;
use super::header::Header;
use super::loader::Loader;
use super::projects::Projects;
use super::skills::Skills;
use super::timer::schedule_scoped;
use crate::loading::{LoadingGate, LOADING_DURATION};

#[component]
pub fn HomePage() -> impl IntoView {
    let gate = RwSignal::new(LoadingGate::new(Utc::now(), LOADING_DURATION));

    // Re-runs on every gate update. A wakeup before the deadline leaves the
    // gate closed, and the update re-arms the timer for what is left.
    Effect::new(move |_| {
        let remaining = gate.with(|g| g.is_loading().then(|| g.remaining(Utc::now())));
        let Some(remaining) = remaining else {
            return;
        };
        schedule_scoped(remaining, move || {
            gate.update(|g| {
                if g.poll(Utc::now()) {
                    log::debug!("loading gate opened");
                }
            });
        });
    });

    let loading = Memo::new(move |_| gate.with(LoadingGate::is_loading));

    view! {
        <Title text="Portfolio" />
        <Show when=move || !loading.get() fallback=|| view! { <Loader /> }>
            <div class="bg-primary text-white min-h-screen">
                <Header />
                <About />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
            </div>
        </Show>
    }
}
