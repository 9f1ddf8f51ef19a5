use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::IntersectionObserverEntry;

use crate::visibility::{Intersection, Visibility, VisibilityOptions};

pub fn use_in_view(target: NodeRef<html::Div>, options: VisibilityOptions) -> Signal<bool> {
    let state = RwSignal::new(Visibility::new(options));
    let threshold = state.with_untracked(Visibility::threshold);

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            state.update(|vis| {
                for entry in entries {
                    vis.observe(Intersection::new(
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    ));
                }
            });
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // no IntersectionObserver: show the content rather than leave it hidden
    if !is_supported.get_untracked() {
        state.set(Visibility::unsupported(options));
    }

    Effect::watch(
        move || state.with(Visibility::is_latched),
        move |latched, _, _| {
            if *latched {
                stop();
            }
        },
        false,
    );

    Signal::derive(move || state.with(Visibility::in_view))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    FadeUp,
    Fade,
    FromLeft,
    FromRight,
    Grow,
}

impl Motion {
    fn hidden_class(self) -> &'static str {
        match self {
            Motion::FadeUp => "opacity-0 translate-y-12",
            Motion::Fade => "opacity-0",
            Motion::FromLeft => "opacity-0 -translate-x-12",
            Motion::FromRight => "opacity-0 translate-x-12",
            Motion::Grow => "opacity-0 scale-90",
        }
    }
}

#[component]
pub fn Reveal(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] motion: Motion,
    // stagger offset for items in a list
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional)] threshold: Option<f64>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let options = threshold.map(VisibilityOptions::new).unwrap_or_default();
    let in_view = use_in_view(node_ref, options);

    let class = move || {
        let state = if in_view.get() {
            "opacity-100 translate-x-0 translate-y-0 scale-100"
        } else {
            motion.hidden_class()
        };
        format!("transform transition-all duration-700 ease-out {state} {class}")
    };

    view! {
        <div node_ref=node_ref class=class style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
