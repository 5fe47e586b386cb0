/// Digits shown before the separator (the month group)
pub const GROUP_LEN: usize = 2;

/// Maximum length of a display-form value, separator included
pub const MAX_DISPLAY_LEN: usize = 7;

/// Maximum length of a raw-form value (2-digit group + 4-digit group)
pub const MAX_RAW_LEN: usize = 6;

/// Separator inserted between the digit groups in display form
pub const GROUP_SEPARATOR: &str = " / ";

/// Separator character stripped when recovering the raw form
pub const SEPARATOR_CHAR: char = '/';

/// Locale region qualifier delimiter (`"ru-RU"` → `"ru"` + `"RU"`)
pub const REGION_SEPARATOR: char = '-';
