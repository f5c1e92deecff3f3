use yew::prelude::*;
use ziller_core::FormError;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Element id, referenced by the field's `aria-describedby`.
    pub id: AttrValue,
    #[prop_or_default]
    pub error: Option<FormError>,
    /// Softer guidance shown while there is no error.
    #[prop_or_default]
    pub hint: Option<&'static str>,
}

/// Inline message under a form field.
#[function_component(FieldError)]
pub fn field_error(p: &Props) -> Html {
    match (p.error, p.hint) {
        (Some(err), _) => html! {
            <div id={p.id.clone()} class="error-message" role="alert">{ err.to_string() }</div>
        },
        (None, Some(hint)) => html! {
            <div id={p.id.clone()} class="field-hint">{ hint }</div>
        },
        (None, None) => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(error: Option<FormError>, hint: Option<&'static str>) -> String {
        let props = Props {
            id: AttrValue::from("email-error"),
            error,
            hint,
        };
        block_on(LocalServerRenderer::<FieldError>::with_props(props).render())
    }

    #[test]
    fn error_wins_over_hint() {
        let html = render(Some(FormError::InvalidEmail), Some("Hinweis"));
        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(html.contains("gültige E-Mail-Adresse"), "{html}");
        assert!(!html.contains("Hinweis"), "{html}");
    }

    #[test]
    fn hint_without_error() {
        let html = render(None, Some("Hinweis"));
        assert!(html.contains("field-hint"), "{html}");
    }

    #[test]
    fn nothing_when_clean() {
        assert!(!render(None, None).contains("email-error"));
    }
}
