use futures::executor::block_on;
use yew::LocalServerRenderer;
use ziller_core::{CalendarDate, ShopConfig};
use ziller_web::app::{ShellProps, SiteShell};
use ziller_web::components::skip_link::SkipLink;
use ziller_web::pages::home::{self, HomePage};
use ziller_web::pages::legal::{self, LegalKind, LegalPage};
use ziller_web::pages::not_found::NotFound;
use ziller_web::pages::service::{self, ServicePage};
use ziller_web::router::Route;
use ziller_web::shop::Shop;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn shell(route: Route, today: CalendarDate) -> String {
    let props = ShellProps {
        route,
        today,
        shop: Shop::default(),
    };
    block_on(LocalServerRenderer::<SiteShell>::with_props(props).render())
}

#[test]
fn skip_link_targets_main_content() {
    let html = block_on(LocalServerRenderer::<SkipLink>::new().render());
    assert!(html.contains(r##"href="#main-content""##), "{html}");
    assert!(html.contains("Zum Hauptinhalt springen"), "{html}");
}

#[test]
fn home_page_lists_services_and_partners() {
    let props = home::Props {
        viewport_width: 1280,
        breakpoint_px: 768,
        header_offset_px: 80,
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains(r#"id="leistungen""#), "{html}");
    assert!(html.contains(r##"href="#leistungen""##), "{html}");
    assert!(html.contains("/werkstatt.html"), "{html}");
    assert!(html.contains("partner-logo"), "{html}");
}

#[test]
fn service_page_hosts_booking_form() {
    let props = service::Props {
        shop: Shop::default(),
        today: date(2026, 10, 15),
    };
    let html = block_on(LocalServerRenderer::<ServicePage>::with_props(props).render());
    assert!(html.contains("appointment-form"), "{html}");
    assert!(html.contains("Oktober 2026"), "{html}");
}

#[test]
fn longer_lead_time_moves_earliest_day() {
    let config = ShopConfig {
        booking_lead_days: 3,
        ..ShopConfig::default()
    };
    let props = service::Props {
        shop: Shop::new(config),
        today: date(2026, 10, 15),
    };
    let html = block_on(LocalServerRenderer::<ServicePage>::with_props(props).render());
    let at = html.find(r#"data-date="2026-10-16""#).unwrap();
    let start = html[..at].rfind("<button").unwrap();
    let end = at + html[at..].find('>').unwrap();
    assert!(html[start..end].contains("disabled"), "{html}");
}

#[test]
fn legal_pages_stamp_month_and_year() {
    for (kind, title) in [(LegalKind::Imprint, "Impressum"), (LegalKind::Privacy, "Datenschutzerklärung")] {
        let props = legal::Props {
            kind,
            today: date(2026, 3, 9),
        };
        let html = block_on(LocalServerRenderer::<LegalPage>::with_props(props).render());
        assert!(html.contains(title), "{html}");
        assert!(html.contains("Stand: März 2026"), "{html}");
    }
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Seite nicht gefunden"), "{html}");
    assert!(html.contains(r#"href="/""#), "{html}");
}

#[test]
fn shell_shows_greeting_only_in_season() {
    assert!(shell(Route::Home, date(2026, 12, 28)).contains("holidayGreeting"));
    assert!(!shell(Route::Home, date(2026, 10, 15)).contains("holidayGreeting"));
}

#[test]
fn shell_marks_active_navigation_entry() {
    let html = shell(Route::Service, date(2026, 10, 15));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
    let html = shell(Route::Index, date(2026, 10, 15));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
}

#[test]
fn shell_starts_with_closed_menu_and_normal_text() {
    let html = shell(Route::Contact, date(2026, 10, 15));
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
    assert!(html.contains("Textgröße: Normal"), "{html}");
    assert!(html.contains(r#"id="form-status""#), "{html}");
}
