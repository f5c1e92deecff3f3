use crate::a11y::MAIN_CONTENT_ID;
use crate::i18n::t;
use yew::prelude::*;

/// First focusable element on every page; jumps past the header.
#[function_component(SkipLink)]
pub fn skip_link() -> Html {
    html! {
        <a href={format!("#{MAIN_CONTENT_ID}")} class="skip-link">{ t("a11y.skip") }</a>
    }
}
