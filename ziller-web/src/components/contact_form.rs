use crate::a11y;
use crate::components::field_error::FieldError;
use crate::dom;
use crate::i18n::t;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use ziller_core::{
    CONTACT_SUCCESS, CONTACT_SUCCESS_VISIBLE_MS, ContactMessage, Field, FormError, error_for,
    without_field,
};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub initial: ContactMessage,
}

/// Apply an edit of `field` and drop the errors shown for it.
fn edited(
    message: &ContactMessage,
    errors: &[FormError],
    field: Field,
    value: String,
) -> (ContactMessage, Vec<FormError>) {
    let mut next = message.clone();
    match field {
        Field::Name => next.name = value,
        Field::Email => next.email = value,
        Field::Message => next.message = value,
        _ => return (next, errors.to_vec()),
    }
    (next, without_field(errors, field))
}

/// Accepted submissions so far. A hide timer only acts on the notice it was
/// started for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Submissions(u32);

impl Submissions {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    const fn is_latest(self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

/// Contact form. A valid message resets the form and shows a thank-you note
/// for a few seconds.
#[function_component(ContactForm)]
pub fn contact_form(p: &Props) -> Html {
    let message = {
        let initial = p.initial.clone();
        use_state(move || initial)
    };
    let errors = use_state(Vec::<FormError>::new);
    let sent = use_state(|| false);
    let submissions = use_mut_ref(Submissions::default);

    let field_input = |field: Field| {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let Some(target) = e.target() else {
                return;
            };
            let value = target
                .dyn_ref::<web_sys::HtmlInputElement>()
                .map(web_sys::HtmlInputElement::value)
                .or_else(|| target.dyn_ref::<web_sys::HtmlTextAreaElement>().map(web_sys::HtmlTextAreaElement::value));
            if let Some(value) = value {
                let (next, remaining) = edited(&message, &errors, field, value);
                message.set(next);
                errors.set(remaining);
            }
        })
    };
    let on_name = field_input(Field::Name);
    let on_email = field_input(Field::Email);
    let on_message = field_input(Field::Message);

    let on_submit = {
        let message = message.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        let submissions = submissions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match message.validate() {
                Ok(()) => {
                    log::info!("contact message accepted");
                    a11y::set_status(CONTACT_SUCCESS);
                    errors.set(Vec::new());
                    message.set(ContactMessage::default());
                    sent.set(true);
                    let ticket = submissions.borrow_mut().next();
                    let sent = sent.clone();
                    let submissions = submissions.clone();
                    dom::set_timeout(CONTACT_SUCCESS_VISIBLE_MS, move || {
                        if submissions.borrow().is_latest(ticket) {
                            sent.set(false);
                        }
                    });
                }
                Err(found) => {
                    if let Some(first) = found.first() {
                        a11y::set_status(&first.to_string());
                    }
                    errors.set(found);
                }
            }
        })
    };

    let err = |field: Field| error_for(&errors, field);
    html! {
        <form id="contact-form" class="contact-form" novalidate=true onsubmit={on_submit}>
            <div class={classes!("form-group", err(Field::Name).map(|_| "has-error"))}>
                <label for="contact-name">{ t("form.name") }{ " *" }</label>
                <input id="contact-name" type="text" autocomplete="name" value={message.name.clone()} oninput={on_name} aria-describedby="contact-name-error" />
                <FieldError id="contact-name-error" error={err(Field::Name)} />
            </div>
            <div class={classes!("form-group", err(Field::Email).map(|_| "has-error"))}>
                <label for="contact-email">{ t("form.email") }{ " *" }</label>
                <input id="contact-email" type="email" autocomplete="email" value={message.email.clone()} oninput={on_email} aria-describedby="contact-email-error" />
                <FieldError id="contact-email-error" error={err(Field::Email)} />
            </div>
            <div class={classes!("form-group", err(Field::Message).map(|_| "has-error"))}>
                <label for="contact-message">{ t("form.message") }{ " *" }</label>
                <textarea id="contact-message" rows="6" value={message.message.clone()} oninput={on_message} aria-describedby="contact-message-error" />
                <FieldError id="contact-message-error" error={err(Field::Message)} />
            </div>
            <button type="submit" class="btn btn-primary">{ t("form.submit_contact") }</button>
            if *sent {
                <div class="success-message" role="status">{ CONTACT_SUCCESS }</div>
            }
        </form>
    }
}
