//! Decorative SVG artwork. Purely presentational; every element is `aria-hidden`.

use dioxus::prelude::*;

use crate::motion::LayerOffset;

/// Shield mark used by the header, preloader and footer.
#[component]
pub fn Logo(#[props(default = 32)] size: u32) -> Element {
    rsx! {
        svg {
            class: "logo",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 48 48",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M24 3 L42 10 V23 C42 34 34 42 24 45 C14 42 6 34 6 23 V10 Z",
                stroke: "currentColor",
                stroke_width: "2.5",
                stroke_linejoin: "round",
            }
            path {
                d: "M16 24 L22 30 L33 18",
                stroke: "currentColor",
                stroke_width: "2.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Hero artwork: three rings drifting with the pointer (back to front).
#[component]
pub fn DigitalCore(layers: [LayerOffset; 3]) -> Element {
    let [back, middle, front] = layers;
    let back = back.css();
    let middle = middle.css();
    let front = front.css();

    rsx! {
        div { class: "digital-core", aria_hidden: "true",
            svg {
                class: "digital-core__layer digital-core__layer--back",
                style: "transform: {back};",
                view_box: "0 0 400 400",
                fill: "none",
                circle { cx: "200", cy: "200", r: "180", stroke: "currentColor", stroke_opacity: "0.15", stroke_dasharray: "4 10" }
                circle { cx: "200", cy: "200", r: "150", stroke: "currentColor", stroke_opacity: "0.25" }
                for angle in (0..12).map(|i| i * 30) {
                    line {
                        key: "{angle}",
                        x1: "200",
                        y1: "20",
                        x2: "200",
                        y2: "50",
                        stroke: "currentColor",
                        stroke_opacity: "0.3",
                        transform: "rotate({angle} 200 200)",
                    }
                }
            }
            svg {
                class: "digital-core__layer digital-core__layer--middle",
                style: "transform: {middle};",
                view_box: "0 0 400 400",
                fill: "none",
                polygon {
                    points: "200,90 295,145 295,255 200,310 105,255 105,145",
                    stroke: "currentColor",
                    stroke_opacity: "0.5",
                    stroke_width: "1.5",
                }
                polygon {
                    points: "200,130 260,165 260,235 200,270 140,235 140,165",
                    stroke: "currentColor",
                    stroke_opacity: "0.35",
                }
            }
            svg {
                class: "digital-core__layer digital-core__layer--front",
                style: "transform: {front};",
                view_box: "0 0 400 400",
                fill: "none",
                circle { class: "digital-core__pulse", cx: "200", cy: "200", r: "36", fill: "currentColor", fill_opacity: "0.15" }
                circle { cx: "200", cy: "200", r: "14", fill: "currentColor" }
                for (x, y) in [(200, 90), (295, 255), (105, 255)] {
                    g { key: "{x}-{y}",
                        line { x1: "200", y1: "200", x2: "{x}", y2: "{y}", stroke: "currentColor", stroke_opacity: "0.4" }
                        circle { cx: "{x}", cy: "{y}", r: "6", fill: "currentColor" }
                    }
                }
            }
        }
    }
}

/// Two overlapping shields: humans and AI under one charter.
#[component]
pub fn AllianceVisual() -> Element {
    rsx! {
        svg { class: "section-visual", view_box: "0 0 240 200", fill: "none", "aria-hidden": "true",
            path {
                d: "M90 20 L150 40 V95 C150 140 120 170 90 180 C60 170 30 140 30 95 V40 Z",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_opacity: "0.6",
            }
            path {
                d: "M150 20 L210 40 V95 C210 140 180 170 150 180 C120 170 90 140 90 95 V40 Z",
                stroke: "currentColor",
                stroke_width: "2",
            }
            circle { cx: "120", cy: "100", r: "10", fill: "currentColor" }
        }
    }
}

/// Chain of linked blocks.
#[component]
pub fn LedgerVisual() -> Element {
    rsx! {
        svg { class: "section-visual", view_box: "0 0 240 120", fill: "none", "aria-hidden": "true",
            for (i, x, link_start, link_end) in (0..4).map(|i| (i, 10 + i * 58, 50 + i * 58, 68 + i * 58)) {
                g { key: "{i}",
                    rect {
                        x: "{x}",
                        y: "40",
                        width: "40",
                        height: "40",
                        rx: "6",
                        stroke: "currentColor",
                        stroke_width: "2",
                    }
                    if i < 3 {
                        line {
                            x1: "{link_start}",
                            y1: "60",
                            x2: "{link_end}",
                            y2: "60",
                            stroke: "currentColor",
                            stroke_dasharray: "3 3",
                        }
                    }
                }
            }
        }
    }
}

/// Two nodes joined by a heartbeat line.
#[component]
pub fn LinkVisual() -> Element {
    rsx! {
        svg { class: "section-visual", view_box: "0 0 240 120", fill: "none", "aria-hidden": "true",
            circle { cx: "30", cy: "60", r: "18", stroke: "currentColor", stroke_width: "2" }
            circle { cx: "210", cy: "60", r: "18", stroke: "currentColor", stroke_width: "2" }
            path {
                class: "section-visual__pulse",
                d: "M48 60 H95 L105 35 L120 85 L135 45 L145 60 H192",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Sun rising over a horizon grid.
#[component]
pub fn HorizonVisual() -> Element {
    rsx! {
        svg { class: "section-visual", view_box: "0 0 240 140", fill: "none", "aria-hidden": "true",
            circle { cx: "120", cy: "90", r: "40", stroke: "currentColor", stroke_width: "2" }
            line { x1: "10", y1: "90", x2: "230", y2: "90", stroke: "currentColor", stroke_width: "2" }
            for (i, left, right, y, opacity) in HORIZON_GRID {
                line {
                    key: "{i}",
                    x1: "{left}",
                    y1: "{y}",
                    x2: "{right}",
                    y2: "{y}",
                    stroke: "currentColor",
                    stroke_opacity: "{opacity}",
                }
            }
        }
    }
}

/// (key, x1, x2, y, opacity) of the grid lines below the horizon.
const HORIZON_GRID: [(u32, u32, u32, u32, f32); 3] = [
    (1, 20, 220, 102, 0.75),
    (2, 30, 210, 114, 0.5),
    (3, 40, 200, 126, 0.25),
];
