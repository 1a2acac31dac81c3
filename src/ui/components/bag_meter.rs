use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

/// Horizontal fill bar showing how much of the crew's bag capacity the
/// optimal collection uses.
#[component]
pub fn BagMeter(bags_used: f64, bags_total: u8, fill_percent: f64, theme: Theme) -> Element {
    let width = fill_percent.min(100.0);
    let warning = fill_percent > 60.0 && fill_percent <= 99.0;
    let usage = format!("{bags_used:.2} / {bags_total}.00 bags");

    rsx! {
        div { class: "space-y-1.5",
            div { class: "flex items-center justify-between text-xs",
                span { class: "{theme::text_muted(theme)}", "Bag fill (optimal)" }
                span { class: "tabular-nums {theme::text_muted(theme)}", "{usage}" }
            }
            div { class: "{theme::meter_track(theme)}",
                div {
                    class: "{theme::meter_fill(warning)}",
                    style: "width: {width}%",
                }
            }
        }
    }
}
