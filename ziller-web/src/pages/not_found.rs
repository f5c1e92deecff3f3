use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;

/// Shown for any path that is not one of the shop's pages.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <NavLink to={Route::Home} class={classes!("btn", "btn-primary")}>{ t("not_found.back") }</NavLink>
        </section>
    }
}
