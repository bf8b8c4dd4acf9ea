use dioxus::prelude::*;

/// Placeholder article body; the deployed site fills this in per route.
#[component]
pub fn DocsPage(segments: Vec<String>) -> Element {
    let path = if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    };

    rsx! {
        article { class: "docs-page",
            h1 { "Documentation" }
            p { class: "docs-path", "{path}" }
        }
    }
}
