//! Shared class strings for consistent styling across pages.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "inline-flex items-center gap-2 rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:cursor-not-allowed disabled:opacity-50";
pub const BTN_SECONDARY: &str = "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800 disabled:cursor-not-allowed disabled:opacity-50";
pub const BTN_DANGER: &str = "rounded-lg border border-rose-500/40 px-4 py-2 text-sm font-semibold text-rose-200 hover:bg-rose-500/10";

pub fn btn_toggle(active: bool) -> &'static str {
    if active {
        "rounded-lg px-4 py-2 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40"
    } else {
        "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "mt-1 w-full rounded-lg border border-rose-500/60 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-rose-400 focus:outline-none"
    } else {
        "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
    }
}

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const FIELD_ERROR: &str = "mt-1 text-xs text-rose-300";

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";
pub const PANEL_HEADING: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const TABLE_CONTAINER: &str = "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";
pub const TABLE_HEADER: &str = "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500 text-left tracking-wide";
pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

// ============================================
// TEXT STYLES
// ============================================

pub const TEXT_SECONDARY: &str = "text-slate-300";
pub const TEXT_MUTED: &str = "text-slate-500";
pub const ACCENT_TEXT: &str = "text-emerald-400";
pub const LINK: &str = "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100";
