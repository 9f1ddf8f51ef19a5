use std::time::Duration;

use leptos::prelude::*;

// Cleared when the current owner is cleaned up, so `cb` never outlives it.
pub fn schedule_scoped(delay: Duration, cb: impl FnOnce() + 'static) {
    match set_timeout_with_handle(cb, delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("failed to schedule timer: {e:?}"),
    }
}
