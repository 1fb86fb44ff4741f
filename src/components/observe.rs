use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Watches one element and fires the callback the first time it crosses the
/// visibility threshold. The element is unobserved right away, so the
/// callback runs at most once; dropping the handle disconnects the observer.
pub struct ObserveOnce {
    observer: IntersectionObserver,
    _on_visible: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserveOnce {
    pub fn new(
        target: &Element,
        threshold: f64,
        mut on_visible: impl FnMut() + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        on_visible();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _on_visible: callback,
        })
    }
}

impl Drop for ObserveOnce {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
