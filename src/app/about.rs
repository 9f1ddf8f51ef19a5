use leptos::prelude::*;

use super::icon::GlyphIcon;
use super::reveal::{Motion, Reveal};
use crate::content::{ABOUT_SUMMARY, HIGHLIGHTS, OWNER, PROFILE_IMAGE, RESUME_LINK};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="container mx-auto px-4 py-16">
            <Reveal motion=Motion::Fade>
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-white">
                    "About Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal motion=Motion::Grow class="relative flex justify-center items-center">
                        <div class="w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden shadow-lg">
                            <img
                                src=PROFILE_IMAGE
                                alt=format!("{OWNER} Profile")
                                class="w-full h-full object-cover object-center"
                            />
                        </div>
                    </Reveal>
                    <Reveal motion=Motion::FromRight class="text-center md:text-left">
                        <p class="text-lg text-gray-300 leading-relaxed mb-6">{ABOUT_SUMMARY}</p>
                        <div class="flex justify-center md:justify-start space-x-4 mb-8">
                            {HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(i, highlight)| {
                                    view! {
                                        <Reveal delay_ms=(i as u32) * 200 class="flex flex-col items-center">
                                            <GlyphIcon glyph=highlight.icon class="text-secondary text-2xl mb-2" />
                                            <span class="text-xs text-gray-400">{highlight.name}</span>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex justify-center md:justify-start space-x-4">
                            <a
                                href=RESUME_LINK
                                download=""
                                class="bg-secondary text-white px-6 py-3 rounded-lg hover:bg-opacity-90 transition-colors"
                            >
                                "Download Resume"
                            </a>
                            <a
                                href="#contact"
                                class="border border-secondary text-secondary px-6 py-3 rounded-lg hover:bg-secondary hover:text-white transition-colors"
                            >
                                "Contact Me"
                            </a>
                        </div>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}
