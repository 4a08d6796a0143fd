//! Default values for editor settings.

pub fn font_size() -> i32 {
    16
}

pub fn generate_history_interval() -> i32 {
    10 // minutes
}

pub fn history_retention_days() -> i32 {
    30
}

pub fn block_ref_dynamic_anchor_text_max_len() -> i32 {
    96
}

pub fn plantuml_serve_path() -> String {
    "https://www.plantuml.com/plantuml/svg/~1".to_string()
}

pub fn katex_macros() -> String {
    "{}".to_string()
}

pub fn dynamic_load_blocks() -> i32 {
    crate::editor::DEFAULT_DYNAMIC_LOAD_BLOCKS
}

pub fn backlink_expand_count() -> i32 {
    8
}

pub fn backmention_expand_count() -> i32 {
    crate::editor::EXPAND_ALL
}
