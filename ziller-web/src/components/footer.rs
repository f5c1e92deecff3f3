use crate::components::nav_link::NavLink;
use crate::i18n::{t, tr1};
use crate::router::Route;
use yew::prelude::*;
use ziller_core::CalendarDate;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub today: CalendarDate,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let year = p.today.year().to_string();
    html! {
        <footer class="footer" role="contentinfo">
            <p class="copyright">
                { tr1("footer.copyright", "year", &year) }
            </p>
            <ul class="footer-links">
                <li><NavLink to={Route::Imprint}>{ t("nav.imprint") }</NavLink></li>
                <li><NavLink to={Route::Privacy}>{ t("nav.privacy") }</NavLink></li>
            </ul>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn copyright_uses_current_year() {
        let props = Props {
            today: CalendarDate::from_ymd(2027, 1, 2).unwrap(),
        };
        let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
        assert!(html.contains("© 2027 Radsport Ziller"), "{html}");
        assert_eq!(html.matches("2027").count(), 1, "{html}");
        assert!(html.contains("/impressum.html"), "{html}");
        assert!(html.contains("/datenschutz.html"), "{html}");
    }
}
