use crate::components::nav_link::NavLink;
use crate::dom;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use ziller_core::AppointmentConfirmation;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub confirmation: AppointmentConfirmation,
}

/// Shown in place of the form once the request passed validation.
#[function_component(SuccessPanel)]
pub fn success_panel(p: &Props) -> Html {
    use_effect_with((), |()| dom::scroll_into_view("booking-success"));
    let c = &p.confirmation;
    html! {
        <div id="booking-success" class="booking-success" role="status" tabindex="-1">
            <h2>{ "✓ " }{ t("success.title") }</h2>
            <p class="success-date">
                <strong>{ t("success.your_date") }{ ":" }</strong><br />
                { c.formatted_date() }<br />
                { c.formatted_time() }
            </p>
            <div class="success-notice">
                <p><strong>{ t("success.notice_title") }</strong></p>
                <p>{ t("success.notice") }</p>
            </div>
            <h3>{ t("success.next_title") }</h3>
            <p>{ t("success.next_body") }</p>
            <p>{ t("success.alternative") }</p>
            <p><strong>{ t("success.binding") }</strong></p>
            <p>{ t("success.followup") }<br />{ t("success.followup_hint") }</p>
            <NavLink to={Route::Contact} class={classes!("btn", "btn-secondary")}>
                { t("success.contact_link") }
            </NavLink>
        </div>
    }
}
