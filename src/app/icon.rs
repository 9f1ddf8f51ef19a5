use leptos::{either::Either, prelude::*};

use crate::content::Glyph;

#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(into, optional)] class: String) -> impl IntoView {
    match glyph {
        Glyph::Class(icon) => Either::Left(view! { <i class=format!("{icon} {class}")></i> }),
        Glyph::Text(text) => {
            Either::Right(view! { <span class=class aria-hidden="true">{text}</span> })
        }
    }
}
