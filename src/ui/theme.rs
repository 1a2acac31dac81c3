//! Theme-specific class helpers for consistent styling across pages.

use crate::domain::Theme;

// ============================================
// PAGE / SHELL STYLES
// ============================================

pub fn page_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-h-screen bg-slate-950 text-slate-100 font-sans",
        Theme::Light => "min-h-screen bg-slate-100 text-slate-900 font-sans",
    }
}

pub fn header_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
        Theme::Light => "border-b border-slate-300 bg-white/90 backdrop-blur px-6 py-4",
    }
}

pub fn title_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-xl font-semibold tracking-tight text-emerald-300",
        Theme::Light => "text-xl font-semibold tracking-tight text-emerald-700",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
        Theme::Light => "rounded-xl border border-slate-300 bg-white p-6 shadow-sm",
    }
}

pub fn panel_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-sm font-semibold uppercase tracking-wide text-slate-500",
        Theme::Light => "text-sm font-semibold uppercase tracking-wide text-slate-600",
    }
}

/// Compact card used for loot rows and collection-plan entries.
pub fn row_card(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
        Theme::Light => "rounded-lg border border-slate-300 bg-slate-50 px-3 py-2",
    }
}

pub fn separator(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "my-2 border-t border-slate-800",
        Theme::Light => "my-2 border-t border-slate-300",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
        Theme::Light => "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-500",
    }
}

pub fn btn_ghost(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800",
        Theme::Light => "rounded-lg border border-slate-400 px-4 py-2 text-sm font-semibold text-slate-700 hover:bg-slate-200",
    }
}

/// Small square button for the split +/- steppers.
pub fn btn_step(theme: Theme, enabled: bool) -> &'static str {
    match (theme, enabled) {
        (Theme::Dark, true) => "h-7 w-7 rounded border border-slate-600 text-sm text-slate-200 hover:bg-slate-800",
        (Theme::Dark, false) => "h-7 w-7 rounded border border-slate-800 text-sm text-slate-600 cursor-not-allowed",
        (Theme::Light, true) => "h-7 w-7 rounded border border-slate-400 text-sm text-slate-700 hover:bg-slate-200",
        (Theme::Light, false) => "h-7 w-7 rounded border border-slate-300 text-sm text-slate-400 cursor-not-allowed",
    }
}

pub fn nav_button(theme: Theme, active: bool) -> &'static str {
    match (theme, active) {
        (Theme::Dark, true) => {
            "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300"
        }
        (Theme::Dark, false) => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
        }
        (Theme::Light, true) => {
            "min-w-[5.5rem] rounded-lg border border-emerald-600/60 bg-emerald-600/10 px-4 py-2 font-semibold text-emerald-700"
        }
        (Theme::Light, false) => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-500 transition hover:border-slate-300 hover:bg-slate-200 hover:text-slate-800"
        }
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Theme::Light => "rounded-lg border border-slate-400 bg-white px-3 py-2 text-sm text-slate-900 focus:border-emerald-600 focus:outline-none",
    }
}

pub fn select_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Theme::Light => "w-full rounded-lg border border-slate-400 bg-white px-3 py-2 text-sm text-slate-900 focus:border-emerald-600 focus:outline-none",
    }
}

pub fn label_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "block text-xs font-semibold uppercase text-slate-500",
        Theme::Light => "block text-xs font-semibold uppercase text-slate-600",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_secondary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-300",
        Theme::Light => "text-slate-700",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-500",
        Theme::Light => "text-slate-500",
    }
}

pub fn text_positive(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-emerald-400",
        Theme::Light => "text-emerald-600",
    }
}

pub fn text_negative(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-rose-400",
        Theme::Light => "text-rose-600",
    }
}

pub fn text_warning(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-amber-400",
        Theme::Light => "text-amber-600",
    }
}

pub fn badge(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded bg-slate-800 px-1.5 py-0.5 text-[10px] font-semibold uppercase text-slate-400",
        Theme::Light => "rounded bg-slate-200 px-1.5 py-0.5 text-[10px] font-semibold uppercase text-slate-600",
    }
}

// ============================================
// METER STYLES
// ============================================

pub fn meter_track(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "h-2 w-full overflow-hidden rounded-full bg-slate-800",
        Theme::Light => "h-2 w-full overflow-hidden rounded-full bg-slate-300",
    }
}

pub fn meter_fill(nearly_full: bool) -> &'static str {
    if nearly_full {
        "h-full rounded-full bg-amber-400 transition-all"
    } else {
        "h-full rounded-full bg-emerald-500 transition-all"
    }
}
