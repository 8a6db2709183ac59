//! One-shot entrance animations.
//!
//! A section starts hidden and flips to visible the first time it scrolls
//! into view. It never flips back, and the observer is disconnected as soon
//! as it fires.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Triggered,
}

impl RevealLatch {
    /// Feeds one intersection report. Returns true only on the transition
    /// into `Triggered`.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self {
            RevealLatch::Pending if is_intersecting => {
                *self = RevealLatch::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self == RevealLatch::Triggered
    }
}

/// `"<shown>"` once revealed, `"<hidden>"` before.
pub fn reveal_class(visible: bool, shown: &'static str, hidden: &'static str) -> &'static str {
    if visible { shown } else { hidden }
}

/// Inline transition delay for staggered children.
pub fn stagger_style(base_ms: u32, step_ms: u32, index: usize) -> String {
    format!("transition-delay: {}ms;", base_ms as usize + step_ms as usize * index)
}

#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold): &(NodeRef, f64)| {
                let latch = Rc::new(RefCell::new(RevealLatch::Pending));

                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|e| e.is_intersecting())
                            .unwrap_or(false)
                    });
                    if latch.borrow_mut().observe(intersecting) {
                        debug!("Section revealed");
                        visible.set(true);
                        observer.disconnect();
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(*threshold));

                let observer = match (
                    node.cast::<Element>(),
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options),
                ) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    _ => None,
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (node, threshold),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_triggered());

        assert!(latch.observe(true));
        assert!(latch.is_triggered());

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(200, 150, 0), "transition-delay: 200ms;");
        assert_eq!(stagger_style(200, 150, 2), "transition-delay: 500ms;");
    }
}
