//! `IntersectionObserver` and throttled window listeners (web only).
//!
//! Every handle here releases its browser resource on drop, so owning it in a
//! component hook ties the observer/listener lifetime to the component.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::FrameThrottle;
use crate::visibility::{IntersectionSample, ObserverOptions};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe the elements with the given ids. Ids with no element are skipped;
/// `None` when nothing could be observed.
pub fn observe_ids<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    options: &ObserverOptions,
    mut on_batch: impl FnMut(Vec<IntersectionSample>) + 'static,
) -> Option<ObserverHandle> {
    let document = web_sys::window()?.document()?;

    let callback: EntriesCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
        let samples = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| IntersectionSample {
                target_id: entry.target().id(),
                ratio: entry.intersection_ratio(),
                is_intersecting: entry.is_intersecting(),
            })
            .collect::<Vec<_>>();
        on_batch(samples);
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    let mut attached = 0usize;
    for id in ids {
        match document.get_element_by_id(id) {
            Some(element) => {
                observer.observe(&element);
                attached += 1;
            }
            None => tracing::debug!("[observer] no element #{id}; skipped"),
        }
    }
    if attached == 0 {
        observer.disconnect();
        return None;
    }

    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

pub struct ThrottledListener {
    _listener: EventListener,
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

/// Listen to `event_type` on `window`, sampling every event but applying at
/// most once per animation frame (latest sample wins).
pub fn throttled_window_listener<T: 'static>(
    event_type: &'static str,
    mut sample: impl FnMut(&web_sys::Event) -> Option<T> + 'static,
    apply: impl FnMut(T) + 'static,
) -> Option<ThrottledListener> {
    let window = web_sys::window()?;
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
    let latest: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));
    let apply = Rc::new(RefCell::new(apply));

    let frame_slot = frame.clone();
    let listener = EventListener::new(&window, event_type, move |event| {
        let Some(value) = sample(event) else {
            return;
        };
        *latest.borrow_mut() = Some(value);
        if !throttle.borrow_mut().request() {
            return;
        }

        let latest = latest.clone();
        let throttle = throttle.clone();
        let apply = apply.clone();
        let handle = request_animation_frame(move |_| {
            throttle.borrow_mut().complete();
            let value = latest.borrow_mut().take();
            if let Some(value) = value {
                (apply.borrow_mut())(value);
            }
        });
        // Replacing a fired frame is harmless; dropping the listener cancels a pending one.
        *frame_slot.borrow_mut() = Some(handle);
    });

    Some(ThrottledListener {
        _listener: listener,
        _frame: frame,
    })
}
