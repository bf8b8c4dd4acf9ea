use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    /// Navigation target; `None` renders the children as plain text.
    #[props(!optional)]
    pub to: Option<String>,
    pub children: Element,
}

/// Router link that highlights itself when the current location matches,
/// or a non-navigating label when there is nothing to link to.
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    match props.to {
        Some(path) => rsx! {
            Link {
                to: path,
                active_class: "active-item",
                {props.children}
            }
        },
        None => rsx! {
            span { class: "nav-label",
                {props.children}
            }
        },
    }
}
