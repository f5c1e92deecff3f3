use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::{NAV_ROUTES, Route};
use yew::prelude::*;
use ziller_core::navigation::is_active_link;
use ziller_core::{NavMenu, TextSize};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Path of the page being shown, used to mark the active link.
    pub current_path: AttrValue,
    pub menu: NavMenu,
    pub text_size: TextSize,
    pub on_toggle_menu: Callback<()>,
    pub on_link_click: Callback<()>,
    pub on_text_size: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let text_size = {
        let cb = p.on_text_size.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let open = p.menu.is_open();

    let links = NAV_ROUTES.iter().map(|route| {
        let active = is_active_link(route.page_file(), &p.current_path);
        html! {
            <li key={route.page_file()}>
                <NavLink to={*route} class={classes!("nav-link")} {active} on_click={p.on_link_click.clone()}>
                    { t(route.label_key()) }
                </NavLink>
            </li>
        }
    });

    html! {
        <header class={classes!("header", open.then_some("menu-open"))} role="banner">
            <div class="header-content">
                <NavLink to={Route::Home} class={classes!("logo")} on_click={p.on_link_click.clone()}>
                    <span class="logo-text">{ t("site.name") }</span>
                </NavLink>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-controls="main-nav"
                    aria-expanded={p.menu.aria_expanded()}
                    aria-label={t("nav.toggle")}
                    onclick={toggle}
                >
                    { p.menu.icon() }
                </button>
                <nav id="main-nav" class={classes!("nav", open.then_some("active"))} aria-label={t("nav.label")}>
                    <ul class="nav-list">
                        { for links }
                    </ul>
                </nav>
                <button
                    id="textSizeBtn"
                    class="text-size-btn"
                    type="button"
                    title={p.text_size.title()}
                    aria-label={t("a11y.text_size")}
                    onclick={text_size}
                >
                    { "A" }<span class="text-size-plus">{ "+" }</span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(path: &'static str, menu: NavMenu) -> Props {
        Props {
            current_path: AttrValue::from(path),
            menu,
            text_size: TextSize::Normal,
            on_toggle_menu: Callback::noop(),
            on_link_click: Callback::noop(),
            on_text_size: Callback::noop(),
        }
    }

    #[test]
    fn closed_menu_shows_burger_icon() {
        let html = block_on(LocalServerRenderer::<Header>::with_props(props("/", NavMenu::new(768))).render());
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(html.contains("☰"), "{html}");
        assert!(!html.contains("menu-open"), "{html}");
    }

    #[test]
    fn open_menu_marks_header_and_nav() {
        let menu = NavMenu::new(768).toggled();
        let html = block_on(LocalServerRenderer::<Header>::with_props(props("/", menu)).render());
        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
        assert!(html.contains("✕"), "{html}");
        assert!(html.contains("header menu-open"), "{html}");
        assert!(html.contains("nav active"), "{html}");
    }

    #[test]
    fn marks_only_the_current_page_active() {
        let html = block_on(
            LocalServerRenderer::<Header>::with_props(props("/werkstatt.html", NavMenu::new(768))).render(),
        );
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
        assert_eq!(html.matches("nav-link active").count(), 1, "{html}");
        let active_at = html.find("nav-link active").unwrap();
        let service_at = html.find(r#"href="/werkstatt.html""#).unwrap();
        assert!(service_at < active_at, "{html}");
    }

    #[test]
    fn text_size_button_carries_title() {
        let mut p = props("/", NavMenu::new(768));
        p.text_size = TextSize::Large;
        let html = block_on(LocalServerRenderer::<Header>::with_props(p).render());
        assert!(html.contains(r#"id="textSizeBtn""#), "{html}");
        assert!(html.contains(TextSize::Large.title()), "{html}");
    }
}
