use gloo_events::EventListener;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlAnchorElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    Storage,
};

use crate::scroll::{ScrollMetrics, SectionId};
use crate::theme::{MemoryStore, PreferenceStore, Theme};

const VISIBILITY_EPSILON: f64 = 1e-3;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage` when the browser allows it, otherwise a store that lives for the page.
#[derive(Clone)]
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn detect() -> Self {
        local_storage()
            .map(Self::Local)
            .unwrap_or_else(|| Self::Memory(MemoryStore::default()))
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(store) => store.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                let _ = storage.set_item(key, value);
            }
            Self::Memory(store) => store.save(key, value),
        }
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

pub fn scroll_metrics() -> ScrollMetrics {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return ScrollMetrics::default();
    };

    ScrollMetrics {
        scroll_top: f64::from(root.scroll_top()),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    }
}

fn section_element(section: SectionId) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(section.as_str())?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn section_offset(section: SectionId) -> Option<f64> {
    section_element(section).map(|element| f64::from(element.offset_top()))
}

pub fn scroll_to_section(section: SectionId) {
    if let Some(element) = section_element(section) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Clicks a temporary hidden `<a download>` and removes it after `cleanup_ms`.
pub fn download_file(href: &str, file_name: &str, cleanup_ms: u32) -> Option<()> {
    let window = window()?;
    let document = window.document()?;
    let body = document.body()?;

    let anchor = document
        .create_element("a")
        .ok()?
        .dyn_into::<HtmlAnchorElement>()
        .ok()?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor).ok()?;
    anchor.click();

    let cleanup = Closure::once_into_js(move || anchor.remove());
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cleanup.unchecked_ref(),
            cleanup_ms as i32,
        )
        .ok()?;

    Some(())
}

/// Window listener that is removed when the returned handle drops.
pub fn on_window(
    kind: &'static str,
    callback: impl FnMut(&Event) + 'static,
) -> Option<EventListener> {
    let window = window()?;
    Some(EventListener::new(&window, kind, callback))
}

/// Fires `on_visible` whenever at least `threshold` of the element is on screen.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_visible: impl FnMut() + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| {
                            entry.is_intersecting()
                                && entry.intersection_ratio() + VISIBILITY_EPSILON >= threshold
                        })
                        .unwrap_or(false)
                });

                if visible {
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
