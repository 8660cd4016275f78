use crate::domain::validation::FieldStatus;
use maud::{html, Markup};

pub fn status_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Unset => "",
        FieldStatus::Valid => "valid",
        FieldStatus::Invalid => "invalid",
    }
}

/// Rule reminder under an input; colored by the field's current status.
pub fn hint(text: &str) -> Markup {
    html! {
        p class="hint" { "✔ " (text) }
    }
}

/// Wraps a labelled control in a div carrying the validation class, so the
/// stylesheet colors the border and hint together.
pub fn field_wrap(label: &str, status: FieldStatus, control: Markup, hint_text: &str) -> Markup {
    html! {
        div class=(status_class(status)) {
            label { (label) " *" }
            (control)
            (hint(hint_text))
        }
    }
}
