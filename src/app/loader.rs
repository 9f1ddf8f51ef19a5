use leptos::prelude::*;

const GRID_CELLS: usize = 100;

// Spread cell timings without a random source so server and client agree.
fn cell_style(index: usize) -> String {
    let duration = 1.0 + (index * 37 % 20) as f64 / 10.0;
    let delay = (index * 53 % 10) as f64 / 10.0;
    format!("animation-duration: {duration:.1}s; animation-delay: {delay:.1}s")
}

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-primary overflow-hidden">
            <div class="absolute inset-0 grid grid-cols-10 grid-rows-10 gap-1 opacity-10">
                {(0..GRID_CELLS)
                    .map(|i| view! { <div class="bg-secondary/10 loader-cell" style=cell_style(i)></div> })
                    .collect_view()}
            </div>
            <div class="absolute inset-0 flex items-center justify-center">
                <div class="text-3xl text-secondary font-bold">"Loading Portfolio"</div>
            </div>
        </div>
    }
}
