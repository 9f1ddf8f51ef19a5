use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::icon::GlyphIcon;
use crate::content::{BUILT_WITH, FOOTER_LINKS, OWNER};

// Taken from the build so server and client render the same year.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center">
                    <div class="flex space-x-6 mb-6">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class=format!(
                                            "text-gray-400 {} transition-colors duration-300",
                                            link.hover_class,
                                        )
                                    >
                                        <GlyphIcon glyph=link.icon class="text-2xl" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="text-center mb-4">
                        <p class="text-gray-400 text-sm">
                            {format!("© {} {OWNER}. All Rights Reserved.", copyright_year())}
                        </p>
                    </div>
                    <div class="text-center">
                        <p class="text-xs text-gray-500">
                            "Built with"
                            {BUILT_WITH
                                .iter()
                                .enumerate()
                                .map(|(i, tech)| {
                                    view! {
                                        {(i > 0).then_some("|")}
                                        <span class="mx-1 text-secondary font-semibold">{*tech}</span>
                                    }
                                })
                                .collect_view()}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
