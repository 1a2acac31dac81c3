use dioxus::prelude::*;

use crate::{
    domain::{calculate_heist, primary_target, AppState},
    ui::{components::breakdown_row::BreakdownRow, theme},
    util::format::format_money,
};

#[component]
pub fn BreakdownPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let active_theme = state.with(|st| st.theme);
    let heist = state.with(|st| st.heist.clone());
    let calc = calculate_heist(&heist);

    let selected_target = primary_target(&heist.primary_target_id);
    let target_name = selected_target.map(|target| target.name).unwrap_or("Primary Target");
    let primary_label = if heist.hard_mode {
        format!("{target_name} (Hard Mode)")
    } else {
        target_name.to_string()
    };

    let split_total = heist.split_total();
    let splits_over = split_total > 100;
    let has_any_loot = heist.has_any_loot();
    let boosted = heist.within_cooldown && calc.secondary_multiplier > 1.0;

    rsx! {
        div { class: "space-y-6",
            section { class: "{theme::panel(active_theme)} space-y-3",
                h2 { class: "{theme::panel_title(active_theme)}", "Optimal Loot Guide" }
                p { class: "text-xs {theme::text_muted(active_theme)}",
                    "Enter piles found on the planner page. Collect in this order to maximise "
                    "earnings — ranked by value per bag unit."
                    if boosted {
                        span { class: "ml-1 font-medium {theme::text_secondary(active_theme)}",
                            "(×{calc.secondary_multiplier:.2} cooldown bonus applied)"
                        }
                    }
                }
                if has_any_loot && !calc.optimal_collection.is_empty() {
                    div { class: "space-y-1.5",
                        for (index, entry) in calc.optimal_collection.iter().enumerate() {
                            div { class: "{theme::row_card(active_theme)} flex items-center gap-3",
                                span { class: "w-4 shrink-0 text-xs tabular-nums {theme::text_muted(active_theme)}",
                                    "{index + 1}."
                                }
                                span { class: "flex-1 text-xs font-medium {theme::text_secondary(active_theme)}",
                                    "{entry.name}"
                                }
                                span { class: "text-xs tabular-nums {theme::text_muted(active_theme)}",
                                    {format!("{:.2} bag{}", entry.bags, if entry.bags != 1.0 { "s" } else { "" })}
                                }
                                span { class: "w-16 text-right text-xs {theme::text_muted(active_theme)}",
                                    {format!("{} grab{}", entry.grabs, if entry.grabs != 1 { "s" } else { "" })}
                                }
                                span { class: "w-20 text-right text-xs font-medium tabular-nums",
                                    {format_money(entry.value)}
                                }
                            }
                        }
                    }
                    div { class: "flex items-center justify-between pt-1 text-xs {theme::text_muted(active_theme)}",
                        span {
                            "Bags total: "
                            span { class: "font-medium tabular-nums {theme::text_secondary(active_theme)}",
                                {format!("{:.2} / {}.00", calc.bags_used, calc.bags_total)}
                            }
                        }
                        span {
                            "Secondary value: "
                            span { class: "font-medium {theme::text_secondary(active_theme)}",
                                {format_money(calc.secondary_value)}
                            }
                        }
                    }
                } else {
                    p { class: "text-sm {theme::text_muted(active_theme)}",
                        "No secondary loot entered yet."
                    }
                }
            }

            section { class: "{theme::panel(active_theme)} space-y-2",
                h2 { class: "{theme::panel_title(active_theme)}", "Earnings Breakdown" }

                BreakdownRow {
                    label: primary_label,
                    value: format_money(calc.primary_value),
                    theme: active_theme,
                }
                if heist.hard_mode && calc.hard_mode_bonus > 0.0 {
                    BreakdownRow {
                        label: format!(
                            "Hard mode ({} → {})",
                            format_money(selected_target.map(|t| t.standard_value).unwrap_or(0.0)),
                            format_money(selected_target.map(|t| t.hard_value).unwrap_or(0.0)),
                        ),
                        value: format!("+{}", format_money(calc.hard_mode_bonus)),
                        muted: true,
                        theme: active_theme,
                    }
                }
                BreakdownRow {
                    label: "Secondary loot".to_string(),
                    value: format_money(calc.secondary_value),
                    theme: active_theme,
                }
                BreakdownRow {
                    label: "Gross total".to_string(),
                    value: format_money(calc.gross_total),
                    bold: true,
                    theme: active_theme,
                }

                hr { class: "{theme::separator(active_theme)}" }

                BreakdownRow {
                    label: "Fence fee (−10%)".to_string(),
                    value: format!("−{}", format_money(calc.fence_fee)),
                    negative: true,
                    theme: active_theme,
                }
                BreakdownRow {
                    label: "Pavel's cut (−2%)".to_string(),
                    value: format!("−{}", format_money(calc.pavel_cut)),
                    negative: true,
                    theme: active_theme,
                }
                if heist.first_time {
                    BreakdownRow {
                        label: "Setup cost (first time)".to_string(),
                        value: format!("−{}", format_money(calc.setup_cost)),
                        negative: true,
                        theme: active_theme,
                    }
                }

                hr { class: "{theme::separator(active_theme)}" }

                BreakdownRow {
                    label: "After fees".to_string(),
                    value: format_money(calc.after_pavel - calc.setup_cost),
                    bold: true,
                    theme: active_theme,
                }

                if heist.elite_challenge {
                    BreakdownRow {
                        label: if heist.hard_mode {
                            "Elite challenge bonus (Hard Mode)".to_string()
                        } else {
                            "Elite challenge bonus".to_string()
                        },
                        value: format!("+{}", format_money(calc.elite_bonus)),
                        positive: true,
                        theme: active_theme,
                    }
                }
                if calc.office_safe_amount > 0.0 {
                    BreakdownRow {
                        label: "Office safe".to_string(),
                        value: format!("+{}", format_money(calc.office_safe_amount)),
                        positive: true,
                        theme: active_theme,
                    }
                }

                hr { class: "{theme::separator(active_theme)}" }

                div { class: "flex items-center justify-between gap-4 pt-1",
                    span { class: "text-base font-semibold", "Net Total" }
                    span { class: "text-base font-semibold tabular-nums {theme::text_positive(active_theme)}",
                        {format_money(calc.net_total)}
                    }
                }

                if heist.player_count > 1 {
                    div { class: "space-y-1 pt-1",
                        if splits_over {
                            p { class: "text-xs {theme::text_negative(active_theme)}",
                                "Fix player cuts on the planner page to see per-player earnings."
                            }
                        } else {
                            for (index, share) in calc.per_player_breakdown.iter().enumerate() {
                                div { class: "flex items-center justify-between gap-4",
                                    span { class: "text-xs {theme::text_muted(active_theme)}",
                                        if index == 0 { "Player 1 (Host)" } else { "Player {index + 1}" }
                                        span { class: "ml-1 opacity-60", "({share.split}%)" }
                                    }
                                    span { class: "text-xs font-medium tabular-nums {theme::text_positive(active_theme)}",
                                        {format_money(share.amount)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
