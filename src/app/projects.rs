use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{tech_icon, Project, Testimonial, PROJECTS, TESTIMONIALS};
use crate::filter::{categories, ProjectFilter};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::new());

    view! {
        <section id="projects" class="container mx-auto px-4 py-16">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-white">
                "My Projects"
            </h2>
            <div class="flex justify-center mb-12 space-x-4">
                {categories(PROJECTS)
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                on:click=move |_| filter.update(|f| f.set_category(category))
                                class=move || {
                                    if filter.with(|f| f.is_active(category)) {
                                        "px-4 py-2 rounded-full transition-all duration-300 hover:scale-105 active:scale-95 bg-secondary text-white"
                                    } else {
                                        "px-4 py-2 rounded-full transition-all duration-300 hover:scale-105 active:scale-95 bg-gray-800 text-gray-400 hover:bg-gray-700"
                                    }
                                }
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || filter.with(|f| f.visible_projects(PROJECTS))
                    key=|project| project.id
                    let:project
                >
                    <ProjectCard project />
                </For>
            </div>
            <Testimonials />
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Reveal class="bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transform hover:scale-110 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-black bg-opacity-50 flex items-center justify-center opacity-0 hover:opacity-100 transition-opacity duration-300">
                    <div class="flex space-x-4">
                        <a
                            href=project.github_link
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Source code"
                            class="text-white hover:text-secondary"
                        >
                            <i class="devicon-github-plain text-2xl"></i>
                        </a>
                        <a
                            href=project.live_link
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Live demo"
                            class="text-white hover:text-secondary text-2xl"
                        >
                            "↗"
                        </a>
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3 text-white">{project.title}</h3>
                <p class="text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-4 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="flex items-center space-x-2 bg-gray-700 text-gray-300 px-3 py-2 rounded-full hover:scale-110 transition-transform">
                                    {tech_icon(tech)
                                        .map(|icon| {
                                            view! {
                                                <i class=format!("{} {} text-2xl", icon.icon, icon.color)></i>
                                            }
                                        })}
                                    <span class="text-sm">{*tech}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <div class="mt-24">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-white">
                "What People Say"
            </h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <Reveal class="bg-gray-800 rounded-lg p-6 shadow-lg hover:shadow-xl transition-shadow duration-300">
            <div class="flex items-center space-x-4 mb-4">
                <img src=testimonial.image alt=testimonial.name class="w-12 h-12 rounded-full" />
                <div>
                    <h4 class="text-white font-semibold">{testimonial.name}</h4>
                    <p class="text-gray-400 text-sm">{testimonial.role}</p>
                </div>
            </div>
            <div class="text-gray-300">
                <span class="text-gray-500 mr-1">"“"</span>
                <p class="inline">{testimonial.quote}</p>
                <span class="text-gray-500 ml-1">"”"</span>
            </div>
        </Reveal>
    }
}
