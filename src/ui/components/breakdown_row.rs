use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

/// One label/amount line of the earnings breakdown. Deductions render in
/// the negative accent, bonuses in the positive one.
#[component]
pub fn BreakdownRow(
    label: String,
    value: String,
    #[props(default)] bold: bool,
    #[props(default)] muted: bool,
    #[props(default)] positive: bool,
    #[props(default)] negative: bool,
    theme: Theme,
) -> Element {
    let label_style = if muted {
        theme::text_muted(theme)
    } else if bold {
        "font-medium"
    } else {
        ""
    };

    let value_style = if positive {
        theme::text_positive(theme)
    } else if negative {
        theme::text_negative(theme)
    } else if muted {
        theme::text_muted(theme)
    } else if bold {
        "font-medium"
    } else {
        ""
    };

    rsx! {
        div { class: "flex items-center justify-between gap-4 text-sm",
            span { class: "{label_style}", "{label}" }
            span { class: "tabular-nums {value_style}", "{value}" }
        }
    }
}
