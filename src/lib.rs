#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod filter;
pub mod loading;
pub mod mail;
mod timing;
pub mod typing;
pub mod visibility;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger should only be set once");

    match mail::MailConfig::from_build_env() {
        Some(config) => {
            if let Err(e) = mail::init(config) {
                log::warn!("{e}");
            }
        }
        None => log::warn!("PORTFOLIO_EMAIL_* not set at build time, contact form will not deliver"),
    }

    leptos::mount::hydrate_body(App);
}
