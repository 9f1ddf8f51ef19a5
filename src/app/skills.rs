use leptos::prelude::*;

use super::icon::GlyphIcon;
use super::reveal::Reveal;
use crate::content::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="container mx-auto px-4 py-16">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-white">
                "Technical Skills"
            </h2>
            <div class="grid md:grid-cols-3 gap-8">
                {SKILL_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <Reveal
                                delay_ms=(i as u32) * 200
                                class="bg-gray-800 p-6 rounded-lg text-center"
                            >
                                <GlyphIcon glyph=category.icon class="block mx-auto text-4xl text-secondary mb-4" />
                                <h3 class="text-xl font-semibold mb-4 text-white">{category.name}</h3>
                                <div class="space-y-2">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="bg-gray-700 text-gray-300 px-3 py-1 rounded-full inline-block mr-2">
                                                    {*skill}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
