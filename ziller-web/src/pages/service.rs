use crate::components::appointment_form::AppointmentForm;
use crate::i18n::t;
use crate::shop::Shop;
use yew::prelude::*;
use ziller_core::CalendarDate;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub shop: Shop,
    pub today: CalendarDate,
}

#[function_component(ServicePage)]
pub fn service_page(p: &Props) -> Html {
    html! {
        <section class="service-booking">
            <h1>{ t("service.title") }</h1>
            <p>{ t("service.intro") }</p>
            <p class="service-hours">{ t("service.hours") }</p>
            <AppointmentForm
                engine={p.shop.engine.clone()}
                today={p.today}
                lead_days={p.shop.config.booking_lead_days}
            />
        </section>
    }
}
