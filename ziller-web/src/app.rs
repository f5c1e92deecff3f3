//! Page shell shared by every route: skip link, header, seasonal greeting,
//! the routed page and the footer.

use crate::a11y::{self, MAIN_CONTENT_ID, STATUS_REGION_ID};
use crate::components::footer::Footer;
use crate::components::greeting_banner::GreetingBanner;
use crate::components::header::Header;
use crate::components::skip_link::SkipLink;
use crate::dom;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{LegalKind, LegalPage};
use crate::pages::not_found::NotFound;
use crate::pages::service::ServicePage;
use crate::router::Route;
use crate::shop::{BundledConfig, Shop};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use ziller_core::{CalendarDate, NavMenu, TextSize};

/// Assumed viewport width when the browser cannot tell us.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 1024;

/// Client-side state that outlives page changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState {
    pub menu: NavMenu,
    pub viewport_width: u32,
    pub text_size: TextSize,
}

impl SiteState {
    #[must_use]
    pub const fn new(breakpoint_px: u32, viewport_width: u32, text_size: TextSize) -> Self {
        Self {
            menu: NavMenu::new(breakpoint_px),
            viewport_width,
            text_size,
        }
    }
}

pub enum SiteAction {
    ToggleMenu,
    LinkClicked,
    Resized(u32),
    SetTextSize(TextSize),
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SiteAction::ToggleMenu => next.menu = next.menu.toggled(),
            SiteAction::LinkClicked => next.menu = next.menu.after_link_click(next.viewport_width),
            SiteAction::Resized(width) => {
                next.viewport_width = width;
                next.menu = next.menu.after_resize(width);
            }
            SiteAction::SetTextSize(size) => next.text_size = size,
        }
        Rc::new(next)
    }
}

fn render_page(route: Route, shop: &Shop, today: CalendarDate, viewport_width: u32) -> Html {
    match route {
        Route::Home | Route::Index => html! {
            <HomePage
                {viewport_width}
                breakpoint_px={shop.config.mobile_breakpoint_px}
                header_offset_px={shop.config.scroll_header_offset_px}
            />
        },
        Route::Service => html! { <ServicePage shop={shop.clone()} {today} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Imprint => html! { <LegalPage kind={LegalKind::Imprint} {today} /> },
        Route::Privacy => html! { <LegalPage kind={LegalKind::Privacy} {today} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub route: Route,
    pub today: CalendarDate,
    #[prop_or_default]
    pub shop: Shop,
}

#[function_component(SiteShell)]
pub fn site_shell(p: &ShellProps) -> Html {
    let state = {
        let breakpoint = p.shop.config.mobile_breakpoint_px;
        use_reducer(move || {
            let width = dom::viewport_width().unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            SiteState::new(breakpoint, width, a11y::saved_text_size())
        })
    };

    #[cfg(target_arch = "wasm32")]
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |()| {
            let listener = dom::on_window_resize(move |width| dispatcher.dispatch(SiteAction::Resized(width)));
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(SiteAction::ToggleMenu))
    };
    let on_link_click = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(SiteAction::LinkClicked))
    };
    let on_text_size = {
        let state = state.clone();
        Callback::from(move |()| {
            let next = state.text_size.next();
            a11y::set_text_size(next);
            state.dispatch(SiteAction::SetTextSize(next));
        })
    };

    html! {
        <>
            <style>{ a11y::critical_css() }</style>
            <SkipLink />
            <Header
                current_path={AttrValue::from(p.route.to_path())}
                menu={state.menu}
                text_size={state.text_size}
                {on_toggle_menu}
                {on_link_click}
                {on_text_size}
            />
            <GreetingBanner today={p.today} />
            <main id={MAIN_CONTENT_ID} tabindex="-1">
                { render_page(p.route, &p.shop, p.today, state.viewport_width) }
            </main>
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
            <Footer today={p.today} />
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct RoutedProps {
    shop: Shop,
    today: CalendarDate,
}

#[function_component(RoutedShell)]
fn routed_shell(p: &RoutedProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    html! { <SiteShell {route} today={p.today} shop={p.shop.clone()} /> }
}

/// Browser entry component.
#[function_component(App)]
pub fn app() -> Html {
    let shop = use_memo((), |()| Shop::load(&BundledConfig));
    let today = use_state(dom::today);
    html! {
        <BrowserRouter>
            <RoutedShell shop={(*shop).clone()} today={*today} />
        </BrowserRouter>
    }
}
