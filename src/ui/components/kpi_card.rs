use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, theme: Theme) -> Element {
    rsx! {
        div {
            class: "{theme::panel(theme)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(theme)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_secondary(theme)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(theme)}", "{desc}" }
            }
        }
    }
}
