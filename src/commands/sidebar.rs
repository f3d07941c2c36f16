//! Page Sidebar
//!
//! Wires the navigation chrome the server renders around the mount root:
//! `.menu-toggle`, `.sidebar`, `.overlay` and the `.user-profile` link.
//! Listeners live as long as the page.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::commands::navigate;

const ACTIVE_CLASS: &str = "active";
const BODY_CLASS: &str = "sidebar-active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Menu button
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Overlay click
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Profile link target; blank attributes are ignored
pub fn profile_url(attr: Option<String>) -> Option<String> {
    attr.map(|url| url.trim().to_string()).filter(|url| !url.is_empty())
}

/// Attach the sidebar listeners. Missing pieces are skipped.
pub fn init_sidebar() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let find = |selector: &str| document.query_selector(selector).ok().flatten();
    let sidebar = find(".sidebar");
    let overlay = find(".overlay");
    let state = Rc::new(Cell::new(SidebarState::default()));

    if let Some(toggle) = find(".menu-toggle") {
        let (document, sidebar, overlay, state) = (document.clone(), sidebar.clone(), overlay.clone(), state.clone());
        listen(&toggle, move |_| {
            state.set(state.get().toggled());
            apply(&document, sidebar.as_ref(), overlay.as_ref(), state.get());
        });
    }

    if let Some(overlay_el) = overlay.clone() {
        let (document, sidebar, state) = (document.clone(), sidebar.clone(), state.clone());
        listen(&overlay_el, move |_| {
            state.set(state.get().closed());
            apply(&document, sidebar.as_ref(), overlay.as_ref(), state.get());
        });
    }

    if let Some(profile) = find(".user-profile") {
        let link = profile.clone();
        listen(&profile, move |_| {
            if let Some(url) = profile_url(link.get_attribute("data-profile-url")) {
                navigate(&url);
            }
        });
    }
}

fn listen(target: &Element, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

fn apply(document: &Document, sidebar: Option<&Element>, overlay: Option<&Element>, state: SidebarState) {
    let open = state.is_open();
    for el in [sidebar, overlay].into_iter().flatten() {
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force(BODY_CLASS, open);
    }
    web_sys::console::log_1(&format!("[APP] Sidebar {}", if open { "opened" } else { "closed" }).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_overlay_closes() {
        let state = SidebarState::default();
        assert!(!state.is_open());
        assert!(state.toggled().is_open());
        assert!(!state.toggled().toggled().is_open());
        assert!(!state.toggled().closed().is_open());
        assert!(!state.closed().is_open());
    }

    #[test]
    fn profile_url_skips_blank() {
        assert_eq!(profile_url(Some("/accounts/profile/".into())).as_deref(), Some("/accounts/profile/"));
        assert_eq!(profile_url(Some("  ".into())), None);
        assert_eq!(profile_url(None), None);
    }
}
