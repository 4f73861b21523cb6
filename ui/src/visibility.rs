//! Viewport visibility: entrance animations and nav highlighting.
//!
//! The decision logic lives in [`VisibilityTracker`] and
//! [`ActiveSectionTracker`], which consume plain [`IntersectionSample`]s. The
//! hooks feed them from a browser `IntersectionObserver` on the web. Where the
//! observer is unavailable (old browsers, native builds) every tracked element
//! is reported visible, so content is never left hidden.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::intersection_observer_supported;

/// Section ids in document order. Also the nav link targets.
pub const SECTION_IDS: [&str; 7] = [
    "purpose",
    "functions",
    "tech",
    "feelink",
    "vision",
    "faq",
    "contact",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be inside the root band.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px".to_string(),
        }
    }

    /// A zero-height band across the vertical middle of the viewport.
    pub fn midline() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "-50% 0px -50% 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub target_id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(target_id: &str, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            target_id: target_id.to_string(),
            ratio,
            is_intersecting,
        }
    }
}

/// Re-triggerable visibility flag for one element.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    visible: bool,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible iff intersecting with at least `threshold` of the element shown.
    pub fn observe(&mut self, sample: &IntersectionSample) -> bool {
        // Observers report crossings as slightly below the threshold.
        const EPSILON: f64 = 1e-6;
        self.visible = sample.is_intersecting && sample.ratio + EPSILON >= self.threshold;
        self.visible
    }
}

/// Which section is crossing the viewport midline.
///
/// When several sections intersect in the same batch the topmost one (first
/// in document order) wins. When none intersects the last active section is
/// kept so the highlight does not blink between sections.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    order: Vec<String>,
    intersecting: Vec<bool>,
    active: Option<usize>,
}

impl ActiveSectionTracker {
    pub fn new<S: Into<String>>(order: impl IntoIterator<Item = S>) -> Self {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();
        let intersecting = vec![false; order.len()];
        Self {
            order,
            intersecting,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|index| self.order[index].as_str())
    }

    pub fn apply(&mut self, samples: &[IntersectionSample]) -> Option<&str> {
        for sample in samples {
            if let Some(index) = self.order.iter().position(|id| *id == sample.target_id) {
                self.intersecting[index] = sample.is_intersecting;
            }
        }
        if let Some(topmost) = self.intersecting.iter().position(|hit| *hit) {
            self.active = Some(topmost);
        }
        self.active()
    }
}

/// Track whether `#target_id` is on screen.
///
/// One observer per mounted component: it is attached after the first render
/// and released when the component unmounts.
pub fn use_on_screen(target_id: &str, options: ObserverOptions) -> ReadOnlySignal<bool> {
    let supported = use_hook(intersection_observer_supported);
    let visible = use_signal(move || !supported);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::core::observer::{observe_ids, ObserverHandle};

        let target_id = target_id.to_string();
        let slot = use_hook(|| Rc::new(RefCell::new(None::<ObserverHandle>)));
        let effect_slot = slot.clone();
        use_effect(move || {
            if !supported || effect_slot.borrow().is_some() {
                return;
            }
            let mut visible = visible;
            let mut tracker = VisibilityTracker::new(options.threshold);
            let handle = observe_ids([target_id.as_str()], &options, move |samples| {
                for sample in &samples {
                    tracker.observe(sample);
                }
                if *visible.peek() != tracker.is_visible() {
                    visible.set(tracker.is_visible());
                }
            });
            *effect_slot.borrow_mut() = handle;
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (target_id, options);

    visible.into()
}

/// Id of the section currently crossing the viewport midline.
pub fn use_active_section(section_ids: &'static [&'static str]) -> ReadOnlySignal<Option<String>> {
    let active = use_signal(|| Option::<String>::None);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::core::observer::{observe_ids, ObserverHandle};

        let slot = use_hook(|| Rc::new(RefCell::new(None::<ObserverHandle>)));
        let effect_slot = slot.clone();
        use_effect(move || {
            if !intersection_observer_supported() || effect_slot.borrow().is_some() {
                return;
            }
            let mut active = active;
            let mut tracker = ActiveSectionTracker::new(section_ids.iter().copied());
            let handle = observe_ids(
                section_ids.iter().copied(),
                &ObserverOptions::midline(),
                move |samples| {
                    let current = tracker.apply(&samples).map(str::to_string);
                    if *active.peek() != current {
                        active.set(current);
                    }
                },
            );
            *effect_slot.borrow_mut() = handle;
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = section_ids;

    active.into()
}

/// Visibility of the enclosing `Section`, shared with its content block.
#[derive(Clone, Copy)]
pub struct SectionVisibility(pub ReadOnlySignal<bool>);

/// Visibility of the nearest enclosing section (visible when there is none).
pub fn use_section_visible() -> bool {
    try_use_context::<SectionVisibility>()
        .map(|SectionVisibility(visible)| visible())
        .unwrap_or(true)
}

/// Class list for an element that fades in when its section becomes visible.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "animate-fade-in visible"
    } else {
        "animate-fade-in"
    }
}

pub fn delay_style(ms: u32) -> String {
    format!("animation-delay: {ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn HeroReveal() -> Element {
        let visible = use_on_screen("hero", ObserverOptions::threshold(0.2));
        let class = reveal_class(visible());
        rsx! {
            h1 { id: "hero", class: "{class}", "DPA" }
        }
    }

    #[component]
    fn LooseBlock() -> Element {
        let class = reveal_class(use_section_visible());
        rsx! {
            p { class: "{class}", "outside any section" }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn without_an_observer_content_renders_visible() {
        assert!(!intersection_observer_supported());
        let html = render(HeroReveal);
        assert!(html.contains("animate-fade-in visible"), "{html}");
    }

    #[test]
    fn blocks_outside_a_section_render_visible() {
        let html = render(LooseBlock);
        assert!(html.contains("animate-fade-in visible"), "{html}");
    }

    #[test]
    fn tracker_flips_on_threshold_and_back() {
        let mut tracker = VisibilityTracker::new(0.2);
        assert!(!tracker.is_visible());
        assert!(!tracker.observe(&IntersectionSample::new("purpose-content", 0.05, true)));
        assert!(tracker.observe(&IntersectionSample::new("purpose-content", 0.2, true)));
        assert!(tracker.observe(&IntersectionSample::new("purpose-content", 0.9, true)));
        // Leaving the band re-arms the animation.
        assert!(!tracker.observe(&IntersectionSample::new("purpose-content", 0.0, false)));
        assert!(tracker.observe(&IntersectionSample::new("purpose-content", 0.5, true)));
    }

    #[test]
    fn zero_threshold_means_any_intersection() {
        let mut tracker = VisibilityTracker::new(0.0);
        assert!(tracker.observe(&IntersectionSample::new("hero", 0.0, true)));
        assert!(!tracker.observe(&IntersectionSample::new("hero", 0.0, false)));
    }

    #[test]
    fn topmost_intersecting_section_wins() {
        let mut tracker = ActiveSectionTracker::new(SECTION_IDS);
        let batch = [
            IntersectionSample::new("faq", 0.0, true),
            IntersectionSample::new("tech", 0.0, true),
        ];
        assert_eq!(tracker.apply(&batch), Some("tech"));

        // Arrival order within a batch does not matter.
        let mut reversed = ActiveSectionTracker::new(SECTION_IDS);
        let batch = [
            IntersectionSample::new("tech", 0.0, true),
            IntersectionSample::new("faq", 0.0, true),
        ];
        assert_eq!(reversed.apply(&batch), Some("tech"));
    }

    #[test]
    fn active_section_follows_scroll_and_sticks_when_none() {
        let mut tracker = ActiveSectionTracker::new(SECTION_IDS);
        assert_eq!(tracker.active(), None);
        tracker.apply(&[IntersectionSample::new("purpose", 0.0, true)]);
        assert_eq!(tracker.active(), Some("purpose"));

        tracker.apply(&[
            IntersectionSample::new("purpose", 0.0, false),
            IntersectionSample::new("functions", 0.0, true),
        ]);
        assert_eq!(tracker.active(), Some("functions"));

        tracker.apply(&[IntersectionSample::new("functions", 0.0, false)]);
        assert_eq!(tracker.active(), Some("functions"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = ActiveSectionTracker::new(SECTION_IDS);
        assert_eq!(tracker.apply(&[IntersectionSample::new("hero", 0.0, true)]), None);
    }

    #[test]
    fn reveal_classes() {
        assert_eq!(reveal_class(false), "animate-fade-in");
        assert_eq!(reveal_class(true), "animate-fade-in visible");
        assert_eq!(delay_style(150), "animation-delay: 150ms;");
    }
}
