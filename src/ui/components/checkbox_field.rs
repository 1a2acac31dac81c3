use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

/// Labelled checkbox with an optional hint line. The whole row toggles, so
/// the handler works from the known `checked` prop rather than event state.
#[component]
pub fn CheckboxField(
    label: String,
    checked: bool,
    description: Option<String>,
    onchange: EventHandler<bool>,
    theme: Theme,
) -> Element {
    rsx! {
        div {
            class: "flex cursor-pointer items-start gap-2",
            onclick: move |_| onchange.call(!checked),
            input {
                r#type: "checkbox",
                class: "mt-0.5 accent-emerald-500",
                checked,
            }
            div { class: "flex flex-col gap-0.5",
                span { class: "text-sm font-medium {theme::text_secondary(theme)}", "{label}" }
                if let Some(desc) = description {
                    span { class: "text-xs {theme::text_muted(theme)}", "{desc}" }
                }
            }
        }
    }
}
