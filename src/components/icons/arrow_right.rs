use dioxus::prelude::*;

/// Right-pointing chevron, shown next to collapsed sections.
#[component]
pub fn ArrowRight(class: String) -> Element {
    rsx! {
        svg {
            class,
            width: "6",
            height: "10",
            view_box: "0 0 6 10",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M1 1L5 5L1 9",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
