use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub active: bool,
    /// Fired after the navigation, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_click: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Link to another page of the site. Navigates in place when a router is
/// mounted and falls back to a plain page load otherwise.
#[function_component(NavLink)]
pub fn nav_link(p: &Props) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let to = p.to;
        let on_click = p.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(nav) = navigator.as_ref() {
                e.prevent_default();
                nav.push(&to);
            }
            on_click.emit(());
        })
    };
    let class = classes!(p.class.clone(), p.active.then_some("active"));
    html! {
        <a href={p.to.href()} {class} {onclick} aria-current={p.active.then_some("page")}>
            { p.children.clone() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_plain_href_and_active_marker() {
        let props = Props {
            to: Route::Service,
            class: classes!("nav-link"),
            active: true,
            on_click: Callback::noop(),
            children: html! { "Werkstatt" },
        };
        let html = block_on(LocalServerRenderer::<NavLink>::with_props(props).render());
        assert!(html.contains(r#"href="/werkstatt.html""#), "{html}");
        assert!(html.contains("nav-link active"), "{html}");
        assert!(html.contains(r#"aria-current="page""#), "{html}");
    }

    #[test]
    fn home_links_to_root() {
        let props = Props {
            to: Route::Index,
            class: Classes::new(),
            active: false,
            on_click: Callback::noop(),
            children: html! { "Start" },
        };
        let html = block_on(LocalServerRenderer::<NavLink>::with_props(props).render());
        assert!(html.contains(r#"href="/""#), "{html}");
        assert!(!html.contains("aria-current"), "{html}");
    }
}
