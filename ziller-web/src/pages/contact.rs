use crate::components::contact_form::ContactForm;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <>
            <h1>{ t("contact.title") }</h1>
            <div class="contact-grid">
                <section class="contact-info">
                    <h2>{ t("contact.address_title") }</h2>
                    <address>
                        { t("site.name") }<br />
                        { t("contact.street") }<br />
                        { t("contact.city") }<br />
                        { t("contact.phone") }<br />
                        { t("contact.email") }
                    </address>
                    <h2>{ t("contact.hours_title") }</h2>
                    <p>{ t("contact.hours_weekdays") }<br />{ t("contact.hours_saturday") }</p>
                </section>
                <section class="contact-form-section">
                    <h2>{ t("contact.form_title") }</h2>
                    <ContactForm />
                </section>
            </div>
        </>
    }
}
