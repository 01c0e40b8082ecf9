use std::rc::Rc;

use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::active::{active_section, Subscription};
use super::reconciler::{HashReconciler, Resolution, Viewport};
use super::registry::{RegionId, RegionRegistry};
use super::tracker::{VisibilityEntry, VisibilityTracker};

#[derive(Debug, Error)]
pub enum NavError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
    #[error("could not register {0} listener")]
    Listener(String),
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Window-backed viewport. Regions are addressed by their elements.
#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, NavError> {
        web_sys::window()
            .map(|window| BrowserViewport { window })
            .ok_or(NavError::NoWindow)
    }
}

impl Viewport for BrowserViewport {
    type Handle = Element;

    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn push_fragment(&mut self, href: &str) {
        if let Ok(history) = self.window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_to_region(&mut self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Watches elements with an `IntersectionObserver`. Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl SectionObserver {
    pub fn observe<'a>(
        elements: impl IntoIterator<Item = &'a Element>,
        threshold: f64,
        mut on_entries: impl FnMut(Vec<VisibilityEntry>) + 'static,
    ) -> Result<Self, NavError> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityEntry {
                    id: entry.target().id(),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_entries(entries);
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| NavError::Observer(js_error(e)))?;

        for element in elements {
            observer.observe(element);
        }

        Ok(SectionObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(
        window: &Window,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Result<Self, NavError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| NavError::Listener(event.to_string()))?;
        Ok(WindowListener {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything the page holds while it is on screen: section tracking,
/// fragment sync and the pending initial scroll. Dropping it releases all of
/// them once.
pub struct NavigationSession {
    reconciler: Rc<HashReconciler<Element>>,
    viewport: BrowserViewport,
    _subscription: Subscription,
    _observer: Option<SectionObserver>,
    _hash_listener: Option<WindowListener>,
    _initial_scroll: Option<Timeout>,
}

impl NavigationSession {
    /// Looks up the sections by id and starts tracking them. `on_active` is
    /// called whenever the active section changes.
    pub fn start(
        section_ids: &[&str],
        threshold: f64,
        on_active: impl Fn(Option<RegionId>) + 'static,
    ) -> Result<Self, NavError> {
        let viewport = BrowserViewport::new()?;
        let document = viewport.window.document().ok_or(NavError::NoDocument)?;

        let registry = Rc::new(RegionRegistry::new(section_ids.iter().filter_map(|id| {
            let element = document.get_element_by_id(id);
            if element.is_none() {
                log::debug!("Section #{} not rendered, skipping", id);
            }
            element.map(|element| (RegionId::new(*id), element))
        })));

        let (writer, _) = active_section();
        let tracker = VisibilityTracker::new(registry.clone(), threshold, writer);
        let subscription = tracker.reader().subscribe(move |id| on_active(id.cloned()));

        let elements: Vec<Element> = registry.iter().map(|r| r.handle.clone()).collect();
        let observer = match SectionObserver::observe(&elements, threshold, move |entries| {
            tracker.on_visibility(&entries);
        }) {
            Ok(observer) => Some(observer),
            Err(e) => {
                log::warn!("Section highlighting disabled: {}", e);
                None
            }
        };

        let tracked: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        log::info!("Tracking sections {:?}", tracked);

        let reconciler = Rc::new(HashReconciler::new(registry));

        let hash_listener = {
            let reconciler = reconciler.clone();
            let window = viewport.window.clone();
            let mut viewport = viewport.clone();
            match WindowListener::new(&window, "hashchange", move || {
                reconciler.handle_address_fragment_change(&mut viewport);
            }) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    log::warn!("Back/forward sync disabled: {}", e);
                    None
                }
            }
        };

        let initial_scroll = reconciler.handle_initial_fragment(&viewport).map(|deferred| {
            let reconciler = reconciler.clone();
            let mut viewport = viewport.clone();
            Timeout::new(0, move || {
                log::debug!("Scrolling to initial fragment {}", deferred.href());
                deferred.run(&reconciler, &mut viewport);
            })
        });

        Ok(NavigationSession {
            reconciler,
            viewport,
            _subscription: subscription,
            _observer: observer,
            _hash_listener: hash_listener,
            _initial_scroll: initial_scroll,
        })
    }

    /// Handles a click on an internal link.
    pub fn activate(&self, href: &str) -> Resolution {
        let mut viewport = self.viewport.clone();
        self.reconciler.handle_internal_link_activation(&mut viewport, href)
    }
}

// Browser-only: run with `wasm-pack test --headless --firefox`.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn window() -> Window {
        web_sys::window().expect("window")
    }

    fn fire(window: &Window, event: &str) {
        let event = Event::new(event).expect("event");
        window.dispatch_event(&event).expect("dispatch");
    }

    fn section(id: &str) -> Element {
        let document = window().document().expect("document");
        let element = document.create_element("section").expect("section");
        element.set_id(id);
        element.set_attribute("style", "height: 200px;").expect("style");
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn()) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[wasm_bindgen_test]
    fn window_listener_is_removed_on_drop() {
        let window = window();
        let (calls, bump) = counter();
        let listener = WindowListener::new(&window, "soapp-ping", bump).expect("listener");

        fire(&window, "soapp-ping");
        drop(listener);
        fire(&window, "soapp-ping");

        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn section_observer_goes_quiet_once_dropped() {
        let kept_section = section("observer-kept");
        let dropped_section = section("observer-dropped");
        let (kept_calls, kept_bump) = counter();
        let (dropped_calls, dropped_bump) = counter();

        let kept = SectionObserver::observe([&kept_section], 0.0, move |_| kept_bump())
            .expect("observer");
        let dropped = SectionObserver::observe([&dropped_section], 0.0, move |_| dropped_bump())
            .expect("observer");
        drop(dropped);

        TimeoutFuture::new(100).await;

        assert!(kept_calls.get() > 0);
        assert_eq!(dropped_calls.get(), 0);
        drop(kept);
    }
}
