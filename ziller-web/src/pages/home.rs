use crate::components::anchor_link::AnchorLink;
use crate::components::nav_link::NavLink;
use crate::components::partner_logos::PartnerLogos;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;

const SERVICE_KEYS: [&str; 4] = [
    "home.service_inspection",
    "home.service_ebike",
    "home.service_fitting",
    "home.service_rental",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub viewport_width: u32,
    pub breakpoint_px: u32,
    pub header_offset_px: u32,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    html! {
        <>
            <section class="hero">
                <h1>{ t("home.title") }</h1>
                <p class="tagline">{ t("site.tagline") }</p>
                <p>{ t("home.intro") }</p>
                <AnchorLink href="#leistungen" header_offset_px={p.header_offset_px} class={classes!("btn", "btn-secondary")}>
                    { t("home.services_link") }
                </AnchorLink>
            </section>
            <section id="leistungen" class="services">
                <h2>{ t("home.services_title") }</h2>
                <ul class="service-list">
                    { for SERVICE_KEYS.iter().map(|key| html! { <li key={*key}>{ t(key) }</li> }) }
                </ul>
                <NavLink to={Route::Service} class={classes!("btn", "btn-primary")}>{ t("home.cta") }</NavLink>
            </section>
            <PartnerLogos viewport_width={p.viewport_width} breakpoint_px={p.breakpoint_px} />
        </>
    }
}
