use leptos::prelude::*;

use super::icon::GlyphIcon;
use super::timer::schedule_scoped;
use crate::content::{HEADER_LINKS, OWNER, TAGLINE};
use crate::typing::{TypedText, TYPE_DELAY};

#[component]
pub fn Header() -> impl IntoView {
    let typed = RwSignal::new(TypedText::new(TAGLINE, TYPE_DELAY));

    // one tick at a time: the next timeout is only armed after the previous
    // character has been committed and this effect re-runs
    Effect::new(move |_| {
        if typed.with(TypedText::is_complete) {
            return;
        }
        let delay = typed.with_untracked(TypedText::delay);
        schedule_scoped(delay, move || {
            typed.update(|t| {
                t.advance();
            });
        });
    });

    view! {
        <header class="bg-primary py-8 relative animate-fade-down">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="text-center md:text-left mb-4 md:mb-0">
                        <h1 class="text-2xl md:text-3xl font-bold text-white mb-2 transition-all duration-300 hover:text-blue-400">
                            {OWNER}
                        </h1>
                        <p class="text-secondary text-base md:text-lg transition-colors duration-300">
                            {move || typed.with(|t| t.current().to_string())}
                            <span class="inline-block ml-1 bg-secondary w-1 h-4 animate-caret"></span>
                        </p>
                    </div>
                    <div class="flex items-center space-x-4">
                        <div class="flex space-x-4 mr-4">
                            {HEADER_LINKS
                                .iter()
                                .enumerate()
                                .map(|(i, link)| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class=format!(
                                                "text-white text-xl {} transition-all duration-300 hover:scale-125 animate-pop",
                                                link.hover_class,
                                            )
                                            style=format!("animation-delay: {}ms", i * 100)
                                        >
                                            <GlyphIcon glyph=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href="#contact"
                            class="bg-secondary text-white px-4 py-2 rounded-lg text-sm hover:bg-blue-500 hover:scale-105 transition-all duration-300"
                        >
                            "Contact"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
