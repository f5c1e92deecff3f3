use yew::prelude::*;
use ziller_core::{CalendarDate, seasonal_greeting};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub today: CalendarDate,
}

#[function_component(GreetingBanner)]
pub fn greeting_banner(p: &Props) -> Html {
    seasonal_greeting(p.today).map_or_else(Html::default, |greeting| {
        html! {
            <div id="holidayGreeting" class="holiday-greeting" role="status">
                { greeting.message() }
            </div>
        }
    })
}
