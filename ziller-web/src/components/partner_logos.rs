use crate::i18n::t;
use yew::prelude::*;
use ziller_core::navigation::partner_link_target;

/// Brands the shop sells and services.
pub const PARTNERS: [(&str, &str); 4] = [
    ("Cube", "https://www.cube.eu"),
    ("Kalkhoff", "https://www.kalkhoff-bikes.com"),
    ("Bosch eBike Systems", "https://www.bosch-ebike.com"),
    ("Abus", "https://www.abus.com"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub viewport_width: u32,
    pub breakpoint_px: u32,
}

#[function_component(PartnerLogos)]
pub fn partner_logos(p: &Props) -> Html {
    let target = partner_link_target(p.viewport_width, p.breakpoint_px);
    html! {
        <section class="partners" aria-labelledby="partners-title">
            <h2 id="partners-title">{ t("home.partners_title") }</h2>
            <ul class="partner-logos">
                { for PARTNERS.iter().map(|(name, url)| html! {
                    <li key={*name}>
                        <a class="partner-logo" href={*url} target={target.target()} rel={target.rel()}>
                            { *name }
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}
