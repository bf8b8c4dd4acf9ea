use dioxus::prelude::*;

/// Down-pointing chevron, shown next to expanded sections.
#[component]
pub fn ArrowDown(class: String) -> Element {
    rsx! {
        svg {
            class,
            width: "10",
            height: "6",
            view_box: "0 0 10 6",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M1 1L5 5L9 1",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
