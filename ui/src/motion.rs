//! Parallax math and the hooks that feed it.
//!
//! Pointer and scroll positions are turned into layer offsets by pure
//! functions; the DOM only sees the result through reactive `style`
//! attributes. Window listeners are sampled at most once per animation frame.

use dioxus::prelude::*;

/// Hero layers, back to front (px of travel at the viewport edge).
pub const POINTER_LAYER_FACTORS: [f64; 3] = [8.0, -12.0, 4.0];

/// Background blobs (px of travel per px scrolled).
pub const SCROLL_LAYER_FACTORS: [f64; 2] = [0.1, 0.05];

/// Header switches to its opaque style past this scroll offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerOffset {
    pub x: f64,
    pub y: f64,
}

impl LayerOffset {
    pub fn css(&self) -> String {
        format!("translateX({:.2}px) translateY({:.2}px)", self.x, self.y)
    }
}

/// Pointer position mapped to `[-1, 1]` on both axes, centre at zero.
pub fn normalized_pointer(pointer: Pointer, viewport: Viewport) -> (f64, f64) {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (pointer.x / viewport.width - 0.5) * 2.0;
    let y = (pointer.y / viewport.height - 0.5) * 2.0;
    (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

pub fn pointer_offsets(pointer: Pointer, viewport: Viewport) -> [LayerOffset; 3] {
    let (x, y) = normalized_pointer(pointer, viewport);
    POINTER_LAYER_FACTORS.map(|factor| LayerOffset {
        x: x * factor,
        y: y * factor,
    })
}

pub fn scroll_offsets(scroll_y: f64) -> [f64; 2] {
    SCROLL_LAYER_FACTORS.map(|factor| scroll_y.max(0.0) * factor)
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px:.2}px)")
}

/// At most one pending animation-frame callback.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// `true` when the caller should schedule a frame; `false` when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Vertical scroll offset of the window (always 0 on native).
pub fn use_scroll_y() -> ReadOnlySignal<f64> {
    let scroll_y = use_signal(|| 0.0_f64);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::core::observer::{throttled_window_listener, ThrottledListener};

        let slot = use_hook(|| Rc::new(RefCell::new(None::<ThrottledListener>)));
        let effect_slot = slot.clone();
        use_effect(move || {
            if effect_slot.borrow().is_some() {
                return;
            }
            let mut scroll_y = scroll_y;
            let read = || web_sys::window().and_then(|window| window.scroll_y().ok());
            if let Some(initial) = read() {
                scroll_y.set(initial);
            }
            let listener =
                throttled_window_listener("scroll", move |_| read(), move |y| scroll_y.set(y));
            *effect_slot.borrow_mut() = listener;
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    scroll_y.into()
}

/// Hero layer offsets following the pointer (static on native).
pub fn use_pointer_offsets() -> ReadOnlySignal<[LayerOffset; 3]> {
    let offsets = use_signal(<[LayerOffset; 3]>::default);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;

        use crate::core::observer::{throttled_window_listener, ThrottledListener};

        let slot = use_hook(|| Rc::new(RefCell::new(None::<ThrottledListener>)));
        let effect_slot = slot.clone();
        use_effect(move || {
            if effect_slot.borrow().is_some() {
                return;
            }
            let mut offsets = offsets;
            let listener = throttled_window_listener(
                "mousemove",
                |event| {
                    let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
                    let window = web_sys::window()?;
                    let viewport = Viewport {
                        width: window.inner_width().ok()?.as_f64()?,
                        height: window.inner_height().ok()?.as_f64()?,
                    };
                    let pointer = Pointer {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                    };
                    Some(pointer_offsets(pointer, viewport))
                },
                move |next| offsets.set(next),
            );
            *effect_slot.borrow_mut() = listener;
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    offsets.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn centre_pointer_has_no_offset() {
        let offsets = pointer_offsets(Pointer { x: 600.0, y: 400.0 }, VIEWPORT);
        assert!(offsets.iter().all(|o| o.x == 0.0 && o.y == 0.0));
    }

    #[test]
    fn corners_reach_layer_factors() {
        let top_left = pointer_offsets(Pointer { x: 0.0, y: 0.0 }, VIEWPORT);
        assert_eq!(top_left[0], LayerOffset { x: -8.0, y: -8.0 });
        assert_eq!(top_left[1], LayerOffset { x: 12.0, y: 12.0 });
        assert_eq!(top_left[2], LayerOffset { x: -4.0, y: -4.0 });

        let bottom_right = pointer_offsets(Pointer { x: 1200.0, y: 800.0 }, VIEWPORT);
        assert_eq!(bottom_right[1], LayerOffset { x: -12.0, y: -12.0 });
    }

    #[test]
    fn offsets_are_bounded_outside_viewport() {
        let far = pointer_offsets(Pointer { x: 5000.0, y: -300.0 }, VIEWPORT);
        assert_eq!(far[0], LayerOffset { x: 8.0, y: -8.0 });
    }

    #[test]
    fn degenerate_viewport_is_still() {
        let offsets = pointer_offsets(Pointer { x: 10.0, y: 10.0 }, Viewport::default());
        assert_eq!(offsets, [LayerOffset::default(); 3]);
    }

    #[test]
    fn scroll_layers_scale_and_ignore_overscroll() {
        assert_eq!(scroll_offsets(1000.0), [100.0, 50.0]);
        assert_eq!(scroll_offsets(-40.0), [0.0, 0.0]);
        assert_eq!(translate_y(12.5), "translateY(12.50px)");
    }

    #[test]
    fn css_transform_format() {
        let offset = LayerOffset { x: 1.5, y: -2.0 };
        assert_eq!(offset.css(), "translateX(1.50px) translateY(-2.00px)");
    }

    #[test]
    fn throttle_coalesces_until_frame_completes() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
        throttle.complete();
        assert!(throttle.request());
    }
}
