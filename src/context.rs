//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_modal::ModalController;

use crate::config::SUCCESS_BANNER_MS;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page-wide modal stack
    pub modals: ModalController,
    /// Success banner text, `None` when hidden - read
    pub banner: ReadSignal<Option<String>>,
    /// Success banner text - write
    set_banner: WriteSignal<Option<String>>,
    /// Bumped per message so an older timeout does not hide a newer one
    banner_seq: StoredValue<u32>,
    /// CSRF token from the page config, used when the hidden input is missing
    csrf_fallback: StoredValue<Option<String>>,
}

impl AppContext {
    pub fn new(csrf_fallback: Option<String>) -> Self {
        let (banner, set_banner) = signal(None);
        Self {
            modals: ModalController::new(),
            banner,
            set_banner,
            banner_seq: StoredValue::new(0),
            csrf_fallback: StoredValue::new(csrf_fallback),
        }
    }

    /// Show the success banner for a few seconds
    pub fn notify(&self, message: impl Into<String>) {
        let Some(seq) = self.banner_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        self.set_banner.set(Some(message.into()));

        let set_banner = self.set_banner;
        let banner_seq = self.banner_seq;
        Timeout::new(SUCCESS_BANNER_MS, move || {
            if banner_seq.try_get_value() == Some(seq) {
                set_banner.try_set(None);
            }
        })
        .forget();
    }

    pub fn csrf_fallback(&self) -> Option<String> {
        self.csrf_fallback.try_get_value().flatten()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
