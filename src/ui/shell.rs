use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Theme};
use crate::ui::theme;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let active_theme = state.with(|s| s.theme);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;
    let toggle_label = match active_theme {
        Theme::Dark => "☀️ Light",
        Theme::Light => "🌙 Dark",
    };

    rsx! {
        div { class: "{theme::page_class(active_theme)}",
            header {
                class: "{theme::header_class(active_theme)}",
                div { class: "mx-auto grid max-w-5xl grid-cols-[1fr_auto] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "💼" }
                        div {
                            h1 { class: "{theme::title_class(active_theme)}", "{APP_NAME}" }
                            p { class: "text-xs italic {theme::text_muted(active_theme)}",
                                "one last job, properly costed"
                            }
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton {
                            active: matches!(current_route, Route::Planner {}),
                            onclick: move |_| { nav.push(Route::Planner {}); },
                            label: "🧰 Planner",
                            theme: active_theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Breakdown {}),
                            onclick: move |_| { nav.push(Route::Breakdown {}); },
                            label: "💰 Breakdown",
                            theme: active_theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                            theme: active_theme,
                        }
                        button {
                            class: "{theme::nav_button(active_theme, false)}",
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.theme = s.theme.toggled());
                                persist_user_state(&state_mut);
                            },
                            "{toggle_label}"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, theme: Theme) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
