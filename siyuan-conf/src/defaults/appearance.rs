//! Default values for appearance settings.

pub fn theme_dark() -> String {
    "midnight".to_string()
}

pub fn theme_light() -> String {
    "daylight".to_string()
}

pub fn icon() -> String {
    "material".to_string()
}

pub fn code_block_theme_light() -> String {
    "github".to_string()
}

pub fn code_block_theme_dark() -> String {
    "base16/dracula".to_string()
}

pub fn lang() -> String {
    "en_US".to_string()
}
