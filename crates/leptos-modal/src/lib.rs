//! Leptos Modal Utilities
//!
//! Imperative modal control for Leptos apps: one shared backdrop, a keyboard
//! focus trap and focus restore on close.
//! Listeners are attached when a modal opens and detached when it closes.

pub mod focus;

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, KeyboardEvent};

pub use focus::{tab_target, TabMove, FOCUSABLE_SELECTOR};

const BACKDROP_CLASS: &str = "modal-backdrop";
const BODY_OPEN_CLASS: &str = "modal-open";

/// Identifies one opening of a modal, from `open` until `close`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModalSession(u64);

/// A DOM listener that stays attached until `detach` is called
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    fn detach(self) {
        let Self { target, event, callback } = self;
        let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        // The handler being removed may be the one currently running
        wasm_bindgen_futures::spawn_local(async move {
            drop(callback);
        });
    }
}

struct OpenModal {
    session: ModalSession,
    element: HtmlElement,
    restore_focus: Option<HtmlElement>,
    on_dismiss: Rc<dyn Fn()>,
    listeners: Vec<Listener>,
}

#[derive(Default)]
struct ModalStack {
    /// Open modals, the last one is active
    open: Vec<OpenModal>,
    backdrop: Option<(Element, Option<Listener>)>,
    next_session: u64,
}

/// Handle to the page-wide modal state
///
/// Copy it freely; all copies share one stack of open modals. Only the top
/// of the stack reacts to keyboard and click dismissal.
#[derive(Clone, Copy)]
pub struct ModalController {
    stack: StoredValue<ModalStack, LocalStorage>,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            stack: StoredValue::new_local(ModalStack::default()),
        }
    }

    /// Show `modal`, trap focus inside it and make it the active modal.
    ///
    /// `on_dismiss` runs when the user asks to leave the modal with Escape,
    /// a backdrop click or a click outside the content. It should end up
    /// calling [`close`](Self::close).
    pub fn open(
        &self,
        modal: Option<&HtmlElement>,
        on_dismiss: impl Fn() + 'static,
    ) -> Option<ModalSession> {
        let modal = modal?;
        let document = document()?;

        if let Some(session) = self.session_of(modal) {
            return Some(session);
        }

        let restore_focus = document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        show(modal);
        lock_scroll(&document);
        self.replace_backdrop(&document);

        let session = self.stack.try_update_value(|stack| {
            stack.next_session += 1;
            ModalSession(stack.next_session)
        })?;
        let on_dismiss: Rc<dyn Fn()> = Rc::new(on_dismiss);
        let listeners = self.install_listeners(&document, modal, session, on_dismiss.clone());

        self.stack.update_value(|stack| {
            stack.open.push(OpenModal {
                session,
                element: modal.clone(),
                restore_focus,
                on_dismiss,
                listeners,
            });
        });

        if let Some(first) = focusable_elements(modal).first() {
            let _ = first.focus();
        }
        Some(session)
    }

    /// Hide `modal`, drop its listeners and give focus back to whatever had
    /// it before the modal opened. Does nothing if the modal is not open.
    pub fn close(&self, modal: Option<&HtmlElement>) {
        let Some(modal) = modal else { return };
        let entry = self
            .stack
            .try_update_value(|stack| {
                let index = stack.open.iter().position(|m| m.element == *modal)?;
                Some(stack.open.remove(index))
            })
            .flatten();
        let Some(entry) = entry else { return };

        hide(&entry.element);
        for listener in entry.listeners {
            listener.detach();
        }

        if !self.has_open() {
            self.remove_backdrop();
            if let Some(document) = document() {
                unlock_scroll(&document);
            }
        }

        if let Some(el) = entry.restore_focus {
            let _ = el.focus();
        }
    }

    /// Whether the opening identified by `session` has not been closed yet
    pub fn is_live(&self, session: ModalSession) -> bool {
        self.stack
            .try_with_value(|stack| stack.open.iter().any(|m| m.session == session))
            .unwrap_or(false)
    }

    pub fn has_open(&self) -> bool {
        self.stack
            .try_with_value(|stack| !stack.open.is_empty())
            .unwrap_or(false)
    }

    fn session_of(&self, modal: &HtmlElement) -> Option<ModalSession> {
        self.stack
            .try_with_value(|stack| {
                stack
                    .open
                    .iter()
                    .find(|m| m.element == *modal)
                    .map(|m| m.session)
            })
            .flatten()
    }

    fn is_top(&self, session: ModalSession) -> bool {
        self.stack
            .try_with_value(|stack| stack.open.last().is_some_and(|m| m.session == session))
            .unwrap_or(false)
    }

    fn dismiss_top(&self) {
        let dismiss = self
            .stack
            .try_with_value(|stack| stack.open.last().map(|m| m.on_dismiss.clone()))
            .flatten();
        if let Some(dismiss) = dismiss {
            dismiss();
        }
    }

    fn install_listeners(
        &self,
        document: &Document,
        modal: &HtmlElement,
        session: ModalSession,
        on_dismiss: Rc<dyn Fn()>,
    ) -> Vec<Listener> {
        let controller = *self;
        let mut listeners = Vec::with_capacity(2);

        let key_modal = modal.clone();
        let key_dismiss = on_dismiss.clone();
        listeners.extend(Listener::attach(document, "keydown", move |ev: Event| {
            if !controller.is_top(session) {
                return;
            }
            let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else { return };
            match ev.key().as_str() {
                "Tab" => trap_tab(&key_modal, ev),
                "Escape" => {
                    reset_form(&key_modal);
                    key_dismiss();
                }
                _ => {}
            }
        }));

        let root: JsValue = modal.clone().into();
        listeners.extend(Listener::attach(modal, "click", move |ev: Event| {
            if !controller.is_top(session) {
                return;
            }
            // Clicks on the root land outside the content region
            let on_root = ev.target().is_some_and(|t| JsValue::from(t) == root);
            if on_root {
                on_dismiss();
            }
        }));

        listeners
    }

    fn replace_backdrop(&self, document: &Document) {
        self.remove_backdrop();
        // Stray backdrops left by server markup or other scripts
        if let Ok(stale) = document.query_selector_all(&format!(".{BACKDROP_CLASS}")) {
            for i in 0..stale.length() {
                if let Some(el) = stale.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    el.remove();
                }
            }
        }

        let Some(body) = document.body() else { return };
        let Ok(backdrop) = document.create_element("div") else { return };
        backdrop.set_class_name(&format!("{BACKDROP_CLASS} fade show"));
        let _ = backdrop.set_attribute("data-dismiss", "modal");
        if body.append_child(&backdrop).is_err() {
            return;
        }

        let controller = *self;
        let listener = Listener::attach(&backdrop, "click", move |_| controller.dismiss_top());
        self.stack
            .update_value(|stack| stack.backdrop = Some((backdrop, listener)));
    }

    fn remove_backdrop(&self) {
        let backdrop = self
            .stack
            .try_update_value(|stack| stack.backdrop.take())
            .flatten();
        if let Some((element, listener)) = backdrop {
            if let Some(listener) = listener {
                listener.detach();
            }
            element.remove();
        }
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn show(modal: &HtmlElement) {
    let _ = modal.style().set_property("display", "block");
    let _ = modal.class_list().add_2("show", "active");
    let _ = modal.remove_attribute("aria-hidden");
    let _ = modal.set_attribute("role", "dialog");
    let _ = modal.set_attribute("aria-modal", "true");
}

fn hide(modal: &HtmlElement) {
    let _ = modal.style().set_property("display", "none");
    let _ = modal.class_list().remove_2("show", "active");
    let _ = modal.set_attribute("aria-hidden", "true");
}

fn lock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
        let _ = body.class_list().add_1(BODY_OPEN_CLASS);
    }
}

fn unlock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().remove_property("overflow");
        let _ = body.class_list().remove_1(BODY_OPEN_CLASS);
    }
}

fn focusable_elements(modal: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(nodes) = modal.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn trap_tab(modal: &HtmlElement, ev: &KeyboardEvent) {
    let focusables = focusable_elements(modal);
    let active = modal.owner_document().and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        focusables.iter().position(|el| {
            let el: &Element = el.as_ref();
            *el == active
        })
    });

    match tab_target(current, focusables.len(), ev.shift_key()) {
        TabMove::Native => {}
        TabMove::Stay => ev.prevent_default(),
        TabMove::FocusAt(index) => {
            ev.prevent_default();
            if let Some(el) = focusables.get(index) {
                let _ = el.focus();
            }
        }
    }
}

fn reset_form(modal: &HtmlElement) {
    let form = modal
        .query_selector("form")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        form.reset();
    }
}
