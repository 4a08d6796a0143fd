//! Default value functions for configuration.
//!
//! Each sub-module groups the `default_*` style free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on the section
//! structs, so a persisted document missing a field picks up the same value
//! the constructors produce.

mod appearance;
mod editor;
mod repo;

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Appearance ─────────────────────────────────────────────────────────────
pub use appearance::{
    code_block_theme_dark, code_block_theme_light, icon, lang, theme_dark, theme_light,
};

// ── Editor ─────────────────────────────────────────────────────────────────
pub use editor::{
    backlink_expand_count, backmention_expand_count, block_ref_dynamic_anchor_text_max_len,
    dynamic_load_blocks, font_size, generate_history_interval, history_retention_days,
    katex_macros, plantuml_serve_path,
};

// ── Repo ───────────────────────────────────────────────────────────────────
pub use repo::{index_retention_days, retention_indexes_daily, sync_index_timing};
