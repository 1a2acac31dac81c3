use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        calculate_heist, primary_target, AppState, OFFICE_SAFE_MAX, PRIMARY_TARGETS,
        SECONDARY_LOOT, SPLIT_MIN, SPLIT_STEP,
    },
    ui::{
        components::{bag_meter::BagMeter, checkbox_field::CheckboxField, kpi_card::KpiCard},
        theme,
    },
    util::format::format_money,
};

#[component]
pub fn PlannerPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let active_theme = state.with(|st| st.theme);
    let heist = state.with(|st| st.heist.clone());
    let calc = calculate_heist(&heist);

    let selected_target = primary_target(&heist.primary_target_id);
    let hard_delta = selected_target
        .map(|target| target.hard_value - target.standard_value)
        .unwrap_or(0.0);
    let cooldown_multiplier = selected_target
        .map(|target| target.bonus_multiplier)
        .unwrap_or(1.0);

    let visible_targets: Vec<_> = PRIMARY_TARGETS
        .iter()
        .filter(|target| !target.first_time_only || heist.first_time)
        .collect();

    let splits: Vec<u32> = heist.active_splits().to_vec();
    let split_total = heist.split_total();
    let splits_over = split_total > 100;
    let splits_under = split_total < 100;

    let on_target_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let id = evt.value();
            state.with_mut(|st| st.heist.primary_target_id = id);
            persist_user_state(&state);
        }
    };

    let on_player_count_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Ok(count) = evt.value().trim().parse::<u8>() {
                state.with_mut(|st| st.heist.set_player_count(count));
                persist_user_state(&state);
            }
        }
    };

    let on_office_safe_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let amount = evt.value().trim().parse::<u32>().unwrap_or(0);
            state.with_mut(|st| st.heist.set_office_safe(amount));
            persist_user_state(&state);
        }
    };

    let elite_bonus_hint = if heist.hard_mode { 100_000.0 } else { 50_000.0 };

    rsx! {
        div { class: "space-y-6",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Gross Take".to_string(),
                    value: format_money(calc.gross_total),
                    description: Some("Primary plus secondary loot".to_string()),
                    theme: active_theme,
                }
                KpiCard {
                    title: "Net Take".to_string(),
                    value: format_money(calc.net_total),
                    description: Some("After fees, costs and bonuses".to_string()),
                    theme: active_theme,
                }
                KpiCard {
                    title: "Secondary Loot".to_string(),
                    value: format_money(calc.secondary_value),
                    description: Some(format!("{:.2} of {} bags packed", calc.bags_used, calc.bags_total)),
                    theme: active_theme,
                }
            }

            section {
                class: "grid gap-6 lg:grid-cols-2",

                // Heist setup card
                div { class: "{theme::panel(active_theme)} space-y-4",
                    h2 { class: "{theme::panel_title(active_theme)}", "Heist Setup" }

                    div { class: "space-y-1.5",
                        label { class: "{theme::label_class(active_theme)}", "Primary Target" }
                        select {
                            class: "{theme::select_class(active_theme)}",
                            onchange: on_target_change,
                            for target in visible_targets {
                                option {
                                    value: "{target.id}",
                                    selected: target.id == heist.primary_target_id,
                                    {format!(
                                        "{} — {}",
                                        target.name,
                                        format_money(if heist.hard_mode { target.hard_value } else { target.standard_value })
                                    )}
                                }
                            }
                        }
                        if selected_target.map(|target| target.rare).unwrap_or(false) {
                            p { class: "text-xs {theme::text_muted(active_theme)}",
                                "The Panther Statue is only available during special event weeks."
                            }
                        }
                    }

                    div { class: "space-y-1.5",
                        label { class: "{theme::label_class(active_theme)}", "Player Count" }
                        select {
                            class: "{theme::select_class(active_theme)}",
                            onchange: on_player_count_change,
                            for count in 1..=4u8 {
                                option {
                                    value: "{count}",
                                    selected: count == heist.player_count,
                                    if count == 1 { "1 Player (Solo)" } else { "{count} Players" }
                                }
                            }
                        }
                    }

                    if heist.player_count > 1 {
                        div { class: "space-y-2",
                            label { class: "{theme::label_class(active_theme)}", "Player Cuts" }
                            for (index, split) in splits.iter().copied().enumerate() {
                                div { class: "flex items-center justify-between gap-3",
                                    span { class: "w-28 shrink-0 text-xs {theme::text_secondary(active_theme)}",
                                        if index == 0 { "Player 1 (Host)" } else { "Player {index + 1}" }
                                    }
                                    div { class: "flex items-center gap-1.5",
                                        button {
                                            class: "{theme::btn_step(active_theme, split > SPLIT_MIN)}",
                                            disabled: split <= SPLIT_MIN,
                                            onclick: {
                                                let mut state = state.clone();
                                                move |_| {
                                                    state.with_mut(|st| st.heist.lower_split(index));
                                                    persist_user_state(&state);
                                                }
                                            },
                                            "−"
                                        }
                                        span { class: "w-10 text-center text-xs font-medium tabular-nums", "{split}%" }
                                        button {
                                            class: "{theme::btn_step(active_theme, split < 100)}",
                                            disabled: split >= 100,
                                            onclick: {
                                                let mut state = state.clone();
                                                move |_| {
                                                    state.with_mut(|st| st.heist.raise_split(index));
                                                    persist_user_state(&state);
                                                }
                                            },
                                            "+"
                                        }
                                    }
                                }
                            }
                            div { class: "flex items-center justify-between pt-0.5",
                                p { class: "text-xs {theme::text_muted(active_theme)}",
                                    "Min {SPLIT_MIN}% · {SPLIT_STEP}% steps"
                                }
                                span {
                                    class: if splits_over {
                                        "text-xs font-medium tabular-nums {theme::text_negative(active_theme)}"
                                    } else if splits_under {
                                        "text-xs font-medium tabular-nums {theme::text_warning(active_theme)}"
                                    } else {
                                        "text-xs font-medium tabular-nums {theme::text_muted(active_theme)}"
                                    },
                                    "Total: {split_total}%"
                                }
                            }
                            if splits_over {
                                p { class: "text-xs {theme::text_negative(active_theme)}",
                                    "Splits exceed 100% — reduce cuts before trusting the payout."
                                }
                            }
                            if splits_under && !splits_over {
                                p { class: "text-xs {theme::text_warning(active_theme)}",
                                    "{100 - split_total}% unallocated."
                                }
                            }
                        }
                    }

                    hr { class: "{theme::separator(active_theme)}" }

                    div { class: "space-y-3",
                        CheckboxField {
                            label: "Hard Mode".to_string(),
                            checked: heist.hard_mode,
                            description: Some(format!(
                                "+{} on primary. Start within 48 min of last run.",
                                format_money(hard_delta)
                            )),
                            onchange: {
                                let mut state = state.clone();
                                move |value| {
                                    state.with_mut(|st| st.heist.hard_mode = value);
                                    persist_user_state(&state);
                                }
                            },
                            theme: active_theme,
                        }
                        CheckboxField {
                            label: "Within 72h Cooldown".to_string(),
                            checked: heist.within_cooldown,
                            description: Some(format!(
                                "Secondary loot ×{cooldown_multiplier:.2} bonus based on primary target."
                            )),
                            onchange: {
                                let mut state = state.clone();
                                move |value| {
                                    state.with_mut(|st| st.heist.within_cooldown = value);
                                    persist_user_state(&state);
                                }
                            },
                            theme: active_theme,
                        }
                        CheckboxField {
                            label: "First Time Run".to_string(),
                            checked: heist.first_time,
                            description: Some(
                                "Unlocks the Madrazo Files as primary target. Adds $25,000 setup cost."
                                    .to_string(),
                            ),
                            onchange: {
                                let mut state = state.clone();
                                move |value| {
                                    state.with_mut(|st| st.heist.set_first_time(value));
                                    persist_user_state(&state);
                                }
                            },
                            theme: active_theme,
                        }
                        CheckboxField {
                            label: "Elite Challenge Completed".to_string(),
                            checked: heist.elite_challenge,
                            description: Some(format!(
                                "+{} bonus. Requires no restarts, full bag, undetected, under 15 min.",
                                format_money(elite_bonus_hint)
                            )),
                            onchange: {
                                let mut state = state.clone();
                                move |value| {
                                    state.with_mut(|st| st.heist.elite_challenge = value);
                                    persist_user_state(&state);
                                }
                            },
                            theme: active_theme,
                        }
                    }

                    hr { class: "{theme::separator(active_theme)}" }

                    div { class: "space-y-1.5",
                        label { class: "{theme::label_class(active_theme)}", "Office Safe Amount" }
                        div { class: "flex items-center gap-2",
                            span { class: "text-xs {theme::text_muted(active_theme)}", "$" }
                            input {
                                class: "w-32 {theme::input_class(active_theme)}",
                                r#type: "number",
                                min: "0",
                                max: "{OFFICE_SAFE_MAX}",
                                inputmode: "numeric",
                                value: if heist.office_safe == 0 { String::new() } else { heist.office_safe.to_string() },
                                placeholder: "0",
                                oninput: on_office_safe_input,
                            }
                        }
                        p { class: "text-xs {theme::text_muted(active_theme)}",
                            "Random amount found in the office safe ($0–$99,000)."
                        }
                    }
                }

                // Secondary loot card
                div { class: "{theme::panel(active_theme)} space-y-4",
                    h2 { class: "{theme::panel_title(active_theme)}", "Available Secondary Loot" }

                    BagMeter {
                        bags_used: calc.bags_used,
                        bags_total: calc.bags_total,
                        fill_percent: calc.bag_used_percent,
                        theme: active_theme,
                    }

                    div { class: "space-y-2",
                        for loot in SECONDARY_LOOT.iter() {
                            {
                                let stacks = heist.stacks(loot.id);
                                let is_disabled = loot.team_only && heist.player_count == 1;
                                let available_value = stacks as f64 * loot.value_per_pile;
                                let bag_pct = trim_decimal(loot.pile_bag_percent());
                                let row_class = if is_disabled {
                                    format!("{} flex items-center justify-between gap-3 opacity-40", theme::row_card(active_theme))
                                } else {
                                    format!("{} flex items-center justify-between gap-3", theme::row_card(active_theme))
                                };
                                rsx! {
                                    div { class: "{row_class}",
                                        div { class: "min-w-0 flex-1",
                                            div { class: "flex flex-wrap items-center gap-1.5",
                                                span { class: "text-xs font-medium {theme::text_secondary(active_theme)}", "{loot.name}" }
                                                if loot.team_only {
                                                    span { class: "{theme::badge(active_theme)}", "Team only" }
                                                }
                                                if loot.no_overfill {
                                                    span { class: "{theme::badge(active_theme)}", "Whole piles" }
                                                }
                                            }
                                            div { class: "mt-0.5 text-[11px] {theme::text_muted(active_theme)}",
                                                {format!(
                                                    "{}/pile · {bag_pct}% bag/pile · {} grabs/pile",
                                                    format_money(loot.value_per_pile),
                                                    loot.grabs_per_pile
                                                )}
                                            }
                                        }
                                        div { class: "flex shrink-0 items-center gap-2",
                                            if stacks > 0 {
                                                span { class: "whitespace-nowrap text-xs {theme::text_muted(active_theme)}",
                                                    {format_money(available_value)}
                                                }
                                            }
                                            input {
                                                class: "w-16 text-center {theme::input_class(active_theme)}",
                                                r#type: "number",
                                                min: "0",
                                                value: if stacks == 0 { String::new() } else { stacks.to_string() },
                                                placeholder: "0",
                                                disabled: is_disabled,
                                                aria_label: "{loot.name} piles found",
                                                oninput: {
                                                    let mut state = state.clone();
                                                    let loot_id = loot.id;
                                                    move |evt: FormEvent| {
                                                        let piles = evt.value().trim().parse::<u32>().unwrap_or(0);
                                                        state.with_mut(|st| st.heist.set_stacks(loot_id, piles));
                                                        persist_user_state(&state);
                                                    }
                                                },
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
    }
}

/// Formats a percentage with up to two decimals, trimming trailing zeros
/// ("50", "66.67", "37.5").
fn trim_decimal(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros_but_keeps_precision() {
        assert_eq!(trim_decimal(50.0), "50");
        assert_eq!(trim_decimal(37.5), "37.5");
        assert_eq!(trim_decimal(66.666_666), "66.67");
    }
}
