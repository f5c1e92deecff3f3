use crate::i18n::{t, tr1};
use yew::prelude::*;
use ziller_core::CalendarDate;

/// Which legal text to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalKind {
    Imprint,
    Privacy,
}

impl LegalKind {
    const fn keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Imprint => ("legal.imprint_title", "legal.imprint_body"),
            Self::Privacy => ("legal.privacy_title", "legal.privacy_body"),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: LegalKind,
    pub today: CalendarDate,
}

#[function_component(LegalPage)]
pub fn legal_page(p: &Props) -> Html {
    let (title, body) = p.kind.keys();
    html! {
        <article class="legal">
            <h1>{ t(title) }</h1>
            <p>{ t(body) }</p>
            <p class="last-updated" id="lastUpdated">{ tr1("legal.updated", "date", &p.today.month_year_de()) }</p>
        </article>
    }
}
