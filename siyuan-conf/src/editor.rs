//! Editor section: rendering, history, references, layout and integrations.
//!
//! Two numeric contracts are shared with the front-end renderer:
//!
//! - `dynamicLoadBlocks` stays within
//!   [`MIN_DYNAMIC_LOAD_BLOCKS`]..=[`MAX_DYNAMIC_LOAD_BLOCKS`]; the renderer
//!   relies on the floor.
//! - `backlinkExpandCount` and `backmentionExpandCount` are plain counts
//!   where [`EXPAND_ALL`] (`-1`) means "expand everything". Consumers branch
//!   on the literal value, so it stays an integer.
//!
//! Setters reject out-of-range input. Deserialization clamps
//! `dynamicLoadBlocks` and [`Editor::normalize`] repairs the remaining values
//! found in a persisted document.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::markdown::SharedMarkdown;
use crate::types::FloatWindowMode;

/// Fewest blocks loaded per dynamic-loading pass.
pub const MIN_DYNAMIC_LOAD_BLOCKS: i32 = 48;

/// Most blocks loaded per dynamic-loading pass.
pub const MAX_DYNAMIC_LOAD_BLOCKS: i32 = 1024;

pub const DEFAULT_DYNAMIC_LOAD_BLOCKS: i32 = 192;

/// Expand-count sentinel: expand every entry.
pub const EXPAND_ALL: i32 = -1;

const MAX_ANCHOR_TEXT_LEN: i32 = 5120;
const MAX_CODE_TAB_SPACES: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    /// Run scripts inside HTML blocks
    #[serde(rename = "allowHTMLBLockScript", default)]
    pub allow_html_block_script: bool,

    #[serde(default = "crate::defaults::font_size")]
    pub font_size: i32,

    /// Ctrl + mouse wheel changes the font size
    #[serde(default)]
    pub font_size_scroll_zoom: bool,

    #[serde(default)]
    pub font_family: String,

    #[serde(default)]
    pub code_syntax_highlight_line_num: bool,

    /// Spaces a tab expands to in code blocks, 0 keeps tabs
    #[serde(default)]
    pub code_tab_spaces: i32,

    #[serde(default)]
    pub code_line_wrap: bool,

    #[serde(default)]
    pub code_ligatures: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub display_bookmark_icon: bool,

    /// Badge images that load from the network
    #[serde(default = "crate::defaults::bool_true")]
    pub display_net_img_mark: bool,

    /// Minutes between history snapshots
    #[serde(default = "crate::defaults::generate_history_interval")]
    pub generate_history_interval: i32,

    #[serde(default = "crate::defaults::history_retention_days")]
    pub history_retention_days: i32,

    /// Frequently used emoji
    #[serde(default, deserialize_with = "null_as_empty")]
    pub emoji: Vec<String>,

    #[serde(default)]
    pub virtual_block_ref: bool,

    /// Keyword exclusion list for virtual references
    #[serde(default)]
    pub virtual_block_ref_exclude: String,

    /// Keyword inclusion list for virtual references
    #[serde(default)]
    pub virtual_block_ref_include: String,

    #[serde(default = "crate::defaults::block_ref_dynamic_anchor_text_max_len")]
    pub block_ref_dynamic_anchor_text_max_len: i32,

    #[serde(
        rename = "plantUMLServePath",
        default = "crate::defaults::plantuml_serve_path"
    )]
    pub plantuml_serve_path: String,

    #[serde(default = "crate::defaults::bool_true")]
    pub full_width: bool,

    /// KaTeX macro definitions, a JSON object in text form
    #[serde(default = "crate::defaults::katex_macros")]
    pub katex_macros: String,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default)]
    pub embed_block_breadcrumb: bool,

    #[serde(default)]
    pub list_logical_outdent: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub list_item_dot_number_click_focus: bool,

    #[serde(default)]
    pub float_window_mode: FloatWindowMode,

    #[serde(
        default = "crate::defaults::dynamic_load_blocks",
        deserialize_with = "clamped_dynamic_load_blocks"
    )]
    pub dynamic_load_blocks: i32,

    #[serde(default)]
    pub justify: bool,

    #[serde(default)]
    pub rtl: bool,

    #[serde(default)]
    pub spellcheck: bool,

    /// `[[` searches document blocks only
    #[serde(default)]
    pub only_search_for_doc: bool,

    #[serde(default = "crate::defaults::backlink_expand_count")]
    pub backlink_expand_count: i32,

    #[serde(default = "crate::defaults::backmention_expand_count")]
    pub backmention_expand_count: i32,

    /// Count child blocks when computing backlinks
    #[serde(default = "crate::defaults::bool_true")]
    pub backlink_contain_children: bool,

    #[serde(default)]
    pub markdown: SharedMarkdown,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn clamp_dynamic_load_blocks(value: i32) -> i32 {
    let clamped = value.clamp(MIN_DYNAMIC_LOAD_BLOCKS, MAX_DYNAMIC_LOAD_BLOCKS);
    if clamped != value {
        log::warn!("dynamicLoadBlocks {value} out of range, clamped to {clamped}");
    }
    clamped
}

fn clamped_dynamic_load_blocks<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    i32::deserialize(deserializer).map(clamp_dynamic_load_blocks)
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            allow_html_block_script: false,
            font_size: crate::defaults::font_size(),
            font_size_scroll_zoom: false,
            font_family: String::new(),
            code_syntax_highlight_line_num: false,
            code_tab_spaces: 0,
            code_line_wrap: false,
            code_ligatures: false,
            display_bookmark_icon: true,
            display_net_img_mark: true,
            generate_history_interval: crate::defaults::generate_history_interval(),
            history_retention_days: crate::defaults::history_retention_days(),
            emoji: Vec::new(),
            virtual_block_ref: false,
            virtual_block_ref_exclude: String::new(),
            virtual_block_ref_include: String::new(),
            block_ref_dynamic_anchor_text_max_len:
                crate::defaults::block_ref_dynamic_anchor_text_max_len(),
            plantuml_serve_path: crate::defaults::plantuml_serve_path(),
            full_width: true,
            katex_macros: crate::defaults::katex_macros(),
            read_only: false,
            embed_block_breadcrumb: false,
            list_logical_outdent: false,
            list_item_dot_number_click_focus: true,
            float_window_mode: FloatWindowMode::Hover,
            dynamic_load_blocks: DEFAULT_DYNAMIC_LOAD_BLOCKS,
            justify: false,
            rtl: false,
            spellcheck: false,
            only_search_for_doc: false,
            backlink_expand_count: crate::defaults::backlink_expand_count(),
            backmention_expand_count: EXPAND_ALL,
            backlink_contain_children: true,
            markdown: crate::markdown::default_settings(),
        }
    }
}

/// Translate an expand count into a display limit; `None` means no limit.
pub fn expand_limit(count: i32) -> Option<usize> {
    usize::try_from(count).ok()
}

fn check_expand_count(field: &'static str, value: i32) -> Result<()> {
    if value < EXPAND_ALL {
        return Err(ConfigError::InvalidSentinel { field, value });
    }
    Ok(())
}

impl Editor {
    /// Factory defaults. The markdown settings are the process-wide instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dynamic_load_blocks(&mut self, value: i32) -> Result<()> {
        if !(MIN_DYNAMIC_LOAD_BLOCKS..=MAX_DYNAMIC_LOAD_BLOCKS).contains(&value) {
            return Err(ConfigError::OutOfRange {
                field: "dynamicLoadBlocks",
                value: value.into(),
                min: MIN_DYNAMIC_LOAD_BLOCKS.into(),
                max: MAX_DYNAMIC_LOAD_BLOCKS.into(),
            });
        }
        self.dynamic_load_blocks = value;
        Ok(())
    }

    /// Accepts [`EXPAND_ALL`] or any non-negative count.
    pub fn set_backlink_expand_count(&mut self, value: i32) -> Result<()> {
        check_expand_count("backlinkExpandCount", value)?;
        self.backlink_expand_count = value;
        Ok(())
    }

    /// Accepts [`EXPAND_ALL`] or any non-negative count.
    pub fn set_backmention_expand_count(&mut self, value: i32) -> Result<()> {
        check_expand_count("backmentionExpandCount", value)?;
        self.backmention_expand_count = value;
        Ok(())
    }

    pub fn backlink_expand_limit(&self) -> Option<usize> {
        expand_limit(self.backlink_expand_count)
    }

    pub fn backmention_expand_limit(&self) -> Option<usize> {
        expand_limit(self.backmention_expand_count)
    }

    /// Replace the shared markdown handle with a private copy.
    pub fn detach_markdown(&mut self) {
        self.markdown = self.markdown.detach();
    }

    /// Repair values a persisted document may carry out of range.
    pub fn normalize(&mut self) {
        self.dynamic_load_blocks = clamp_dynamic_load_blocks(self.dynamic_load_blocks);

        if self.font_size < 1 {
            log::warn!("fontSize {} invalid, reset to default", self.font_size);
            self.font_size = crate::defaults::font_size();
        }

        if self.generate_history_interval < 0 {
            log::warn!(
                "generateHistoryInterval {} invalid, reset to default",
                self.generate_history_interval
            );
            self.generate_history_interval = crate::defaults::generate_history_interval();
        }

        if self.history_retention_days < 1 {
            log::warn!(
                "historyRetentionDays {} invalid, reset to default",
                self.history_retention_days
            );
            self.history_retention_days = crate::defaults::history_retention_days();
        }

        let clamped = self
            .block_ref_dynamic_anchor_text_max_len
            .clamp(1, MAX_ANCHOR_TEXT_LEN);
        if clamped != self.block_ref_dynamic_anchor_text_max_len {
            log::warn!(
                "blockRefDynamicAnchorTextMaxLen {} out of range, clamped to {}",
                self.block_ref_dynamic_anchor_text_max_len,
                clamped
            );
            self.block_ref_dynamic_anchor_text_max_len = clamped;
        }

        let clamped = self.code_tab_spaces.clamp(0, MAX_CODE_TAB_SPACES);
        if clamped != self.code_tab_spaces {
            log::warn!(
                "codeTabSpaces {} out of range, clamped to {}",
                self.code_tab_spaces,
                clamped
            );
            self.code_tab_spaces = clamped;
        }

        if self.backlink_expand_count < EXPAND_ALL {
            log::warn!(
                "backlinkExpandCount {} invalid, expanding all",
                self.backlink_expand_count
            );
            self.backlink_expand_count = EXPAND_ALL;
        }
        if self.backmention_expand_count < EXPAND_ALL {
            log::warn!(
                "backmentionExpandCount {} invalid, expanding all",
                self.backmention_expand_count
            );
            self.backmention_expand_count = EXPAND_ALL;
        }

        if self.plantuml_serve_path.trim().is_empty() {
            self.plantuml_serve_path = crate::defaults::plantuml_serve_path();
        }
        if self.katex_macros.trim().is_empty() {
            self.katex_macros = crate::defaults::katex_macros();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_editor() {
        let editor = Editor::new();
        assert_eq!(editor.font_size, 16);
        assert!(!editor.font_size_scroll_zoom);
        assert_eq!(editor.code_tab_spaces, 0);
        assert!(editor.display_bookmark_icon);
        assert!(editor.display_net_img_mark);
        assert_eq!(editor.generate_history_interval, 10);
        assert_eq!(editor.history_retention_days, 30);
        assert!(editor.emoji.is_empty());
        assert_eq!(editor.block_ref_dynamic_anchor_text_max_len, 96);
        assert_eq!(
            editor.plantuml_serve_path,
            "https://www.plantuml.com/plantuml/svg/~1"
        );
        assert!(editor.full_width);
        assert_eq!(editor.katex_macros, "{}");
        assert!(editor.list_item_dot_number_click_focus);
        assert_eq!(editor.float_window_mode, FloatWindowMode::Hover);
        assert_eq!(editor.dynamic_load_blocks, 192);
        assert_eq!(editor.backlink_expand_count, 8);
        assert_eq!(editor.backmention_expand_count, -1);
        assert!(editor.backlink_contain_children);
    }

    #[test]
    fn test_dynamic_load_blocks_bounds() {
        let mut editor = Editor::new();

        assert!(editor.set_dynamic_load_blocks(10).is_err());
        assert!(editor.dynamic_load_blocks >= MIN_DYNAMIC_LOAD_BLOCKS);

        assert!(editor.set_dynamic_load_blocks(2000).is_err());
        assert!(editor.dynamic_load_blocks <= MAX_DYNAMIC_LOAD_BLOCKS);

        editor.set_dynamic_load_blocks(192).unwrap();
        assert_eq!(editor.dynamic_load_blocks, 192);

        editor.set_dynamic_load_blocks(48).unwrap();
        editor.set_dynamic_load_blocks(1024).unwrap();
        assert_eq!(editor.dynamic_load_blocks, 1024);
    }

    #[test]
    fn test_expand_count_sentinel() {
        let mut editor = Editor::new();
        assert_eq!(editor.backmention_expand_limit(), None);
        assert_eq!(editor.backlink_expand_limit(), Some(8));

        editor.set_backmention_expand_count(100_000).unwrap();
        assert_eq!(editor.backmention_expand_count, 100_000);
        assert_eq!(editor.backmention_expand_limit(), Some(100_000));

        editor.set_backlink_expand_count(EXPAND_ALL).unwrap();
        assert_eq!(editor.backlink_expand_limit(), None);

        let err = editor.set_backmention_expand_count(-2).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSentinel { value: -2, .. }));
        assert_eq!(editor.backmention_expand_count, 100_000);
    }

    #[test]
    fn test_normalize_repairs_loaded_values() {
        let json = r#"{
            "dynamicLoadBlocks": 10,
            "fontSize": 0,
            "historyRetentionDays": 0,
            "codeTabSpaces": 32,
            "generateHistoryInterval": -5,
            "blockRefDynamicAnchorTextMaxLen": 0,
            "katexMacros": "  ",
            "backlinkExpandCount": -4,
            "backmentionExpandCount": -9,
            "plantUMLServePath": ""
        }"#;
        let mut editor: Editor = serde_json::from_str(json).unwrap();
        editor.normalize();

        assert_eq!(editor.dynamic_load_blocks, MIN_DYNAMIC_LOAD_BLOCKS);
        assert_eq!(editor.font_size, 16);
        assert_eq!(editor.history_retention_days, 30);
        assert_eq!(editor.code_tab_spaces, 8);
        assert_eq!(editor.generate_history_interval, 10);
        assert_eq!(editor.block_ref_dynamic_anchor_text_max_len, 1);
        assert_eq!(editor.katex_macros, "{}");
        assert_eq!(editor.backlink_expand_count, EXPAND_ALL);
        assert_eq!(editor.backmention_expand_count, EXPAND_ALL);
        assert_eq!(
            editor.plantuml_serve_path,
            crate::defaults::plantuml_serve_path()
        );

        editor.dynamic_load_blocks = 4096;
        editor.block_ref_dynamic_anchor_text_max_len = 9999;
        editor.normalize();
        assert_eq!(editor.dynamic_load_blocks, MAX_DYNAMIC_LOAD_BLOCKS);
        assert_eq!(editor.block_ref_dynamic_anchor_text_max_len, 5120);
    }

    #[test]
    fn test_deserialize_clamps_dynamic_load_blocks() {
        let editor: Editor = serde_json::from_str(r#"{"dynamicLoadBlocks": 10}"#).unwrap();
        assert_eq!(editor.dynamic_load_blocks, MIN_DYNAMIC_LOAD_BLOCKS);

        let editor: Editor = serde_json::from_str(r#"{"dynamicLoadBlocks": 5000}"#).unwrap();
        assert_eq!(editor.dynamic_load_blocks, MAX_DYNAMIC_LOAD_BLOCKS);

        let editor: Editor = serde_json::from_str(r#"{"dynamicLoadBlocks": 300}"#).unwrap();
        assert_eq!(editor.dynamic_load_blocks, 300);

        let editor: Editor = serde_json::from_str("{}").unwrap();
        assert_eq!(editor.dynamic_load_blocks, DEFAULT_DYNAMIC_LOAD_BLOCKS);
    }

    #[test]
    fn test_new_editors_share_markdown() {
        let a = Editor::new();
        let mut b = Editor::new();
        assert!(a.markdown.ptr_eq(&b.markdown));

        b.detach_markdown();
        assert!(!a.markdown.ptr_eq(&b.markdown));
        assert_eq!(a.markdown, b.markdown);
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(Editor::new()).unwrap();
        assert_eq!(json["allowHTMLBLockScript"], false);
        assert_eq!(json["plantUMLServePath"], crate::defaults::plantuml_serve_path());
        assert_eq!(json["katexMacros"], "{}");
        assert_eq!(json["rtl"], false);
        assert_eq!(json["floatWindowMode"], 0);
        assert_eq!(json["backmentionExpandCount"], -1);
        assert_eq!(json["blockRefDynamicAnchorTextMaxLen"], 96);
        assert_eq!(json["markdown"]["inlineMark"], true);
        assert_eq!(json.as_object().unwrap().len(), 34);
    }
}
