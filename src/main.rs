use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use docsite_nav::components::sidebar::Sidebar;
use docsite_nav::nav;
use docsite_nav::pages::DocsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DocsLayout)]
    #[route("/:..segments")]
    DocsPage { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static NAV_JSON: &str = include_str!("../assets/nav.json");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn DocsLayout() -> Element {
    let entries = use_hook(|| match nav::from_json(NAV_JSON) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("navigation manifest rejected: {err}");
            Vec::new()
        }
    });

    rsx! {
        div { class: "docs-shell",
            Sidebar { entries }
            main { class: "docs-content",
                Outlet::<Route> {}
            }
        }
    }
}
