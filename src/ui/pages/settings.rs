use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, HeistState, Theme},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        persistence::clear_persisted_state,
        version::{check_for_update, version_label, APP_REPO_URL},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let active_theme = state.with(|st| st.theme);

    let on_reset_calculator = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.heist = HeistState::default());
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Reset the calculator to a fresh solo run.",
            );
        }
    };

    let on_clear_saved = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| *st = AppState::default());
            match clear_persisted_state() {
                Ok(()) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    "Removed the saved state file.",
                ),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to remove saved state: {err}"),
                ),
            }
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        move |_| {
            let toasts = toasts.clone();
            spawn(async move {
                match check_for_update().await {
                    Ok(info) => {
                        let kind = if info.update_available() {
                            ToastKind::Warning
                        } else {
                            ToastKind::Success
                        };
                        push_toast(toasts.clone(), kind, info.to_string());
                    }
                    Err(err) => push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Update check failed: {err}"),
                    ),
                }
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel(active_theme)}",
                h2 { class: "{theme::panel_title(active_theme)}", "Appearance" }
                p { class: "mt-2 text-sm {theme::text_muted(active_theme)}",
                    "Pick a color scheme. The choice is saved between sessions."
                }
                div { class: "mt-3 flex gap-3",
                    ThemeButton { target: Theme::Dark, active: active_theme == Theme::Dark, state }
                    ThemeButton { target: Theme::Light, active: active_theme == Theme::Light, state }
                }
            }

            section {
                class: "{theme::panel(active_theme)}",
                h2 { class: "{theme::panel_title(active_theme)}", "Data Controls" }
                p { class: "mt-2 text-sm {theme::text_muted(active_theme)}",
                    "The planner keeps your last setup in a local state file; nothing leaves this machine."
                }
                div { class: "mt-3 flex gap-3",
                    button {
                        class: "{theme::btn_ghost(active_theme)}",
                        onclick: on_reset_calculator,
                        "Reset Calculator"
                    }
                    button {
                        class: "{theme::btn_ghost(active_theme)}",
                        onclick: on_clear_saved,
                        "Clear Saved State"
                    }
                }
            }

            section {
                class: "{theme::panel(active_theme)} text-center",
                h2 { class: "{theme::panel_title(active_theme)}", "About" }
                p { class: "mt-2 text-sm {theme::text_secondary(active_theme)}",
                    "Heist Take Planner {version_label()}"
                }
                p { class: "mt-1 text-xs {theme::text_muted(active_theme)}",
                    "Payout values reflect the current game patch; open an issue if a number drifts."
                }
                div { class: "mt-3 flex justify-center gap-3",
                    button {
                        class: "{theme::btn_primary(active_theme)}",
                        onclick: on_check_update,
                        "Check for Updates"
                    }
                    a {
                        class: "{theme::btn_ghost(active_theme)}",
                        href: "{APP_REPO_URL}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Source"
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeButton(target: Theme, active: bool, state: Signal<AppState>) -> Element {
    let mut state = state;
    let class = if active {
        theme::btn_primary(target)
    } else {
        theme::btn_ghost(target)
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                state.with_mut(|st| st.theme = target);
                persist_user_state(&state);
            },
            "{target.name()}"
        }
    }
}
