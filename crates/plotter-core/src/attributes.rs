//! Host attribute parsing with silent fallback to defaults.

use crate::grid::{
    DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_H_MARGIN, DEFAULT_ROWS, DEFAULT_V_MARGIN,
    GridConfig,
};
use std::collections::{BTreeMap, HashMap};

/// Attribute holding the cell size in pixels.
pub const ATTR_CELL_SIZE: &str = "cell-size";
/// Attribute holding the number of columns.
pub const ATTR_COLUMNS: &str = "columns";
/// Attribute holding the number of rows.
pub const ATTR_ROWS: &str = "rows";
/// Attribute holding the horizontal margin in cells.
pub const ATTR_H_SPACE: &str = "h-space";
/// Attribute holding the vertical margin in cells.
pub const ATTR_V_SPACE: &str = "v-space";
/// Boolean attribute enabling snap-to-grid.
pub const ATTR_SNAP: &str = "snap";

/// Largest integer exactly representable as an f64.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Source of string attributes, such as an element's attribute map.
pub trait AttributeSource {
    /// Look up an attribute by name.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

/// Parse the leading decimal integer of an attribute value.
///
/// Leading whitespace is skipped and an optional sign is accepted; parsing
/// stops at the first non-digit, so `"12px"` yields 12. Values with no
/// digits, or outside the safe-integer range, yield `default`.
pub fn to_integer(value: Option<&str>, default: i64) -> i64 {
    value.and_then(parse_leading_integer).unwrap_or(default)
}

fn parse_leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Overflow past i64 is also outside the safe range.
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    if magnitude > MAX_SAFE_INTEGER {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a boolean attribute: present and not `"false"` means enabled.
pub fn to_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.trim().eq_ignore_ascii_case("false"),
        None => false,
    }
}

fn positive_or(name: &str, value: i64, default: i64) -> i64 {
    if value > 0 {
        value
    } else {
        log::debug!("Attribute {} = {} is not positive, using {}", name, value, default);
        default
    }
}

fn non_negative_or(name: &str, value: i64, default: i64) -> i64 {
    if value >= 0 {
        value
    } else {
        log::debug!("Attribute {} = {} is negative, using {}", name, value, default);
        default
    }
}

fn bounded_u32(name: &str, value: i64, default: u32) -> u32 {
    let value = positive_or(name, value, default as i64);
    u32::try_from(value).unwrap_or_else(|_| {
        log::debug!("Attribute {} = {} is too large, using {}", name, value, default);
        default
    })
}

impl GridConfig {
    /// Build a configuration from host attributes.
    ///
    /// Missing or malformed values fall back to the defaults; this never fails.
    pub fn from_attributes<S: AttributeSource + ?Sized>(source: &S) -> Self {
        let cell_default = DEFAULT_CELL_SIZE as i64;
        let h_default = DEFAULT_H_MARGIN as i64;
        let v_default = DEFAULT_V_MARGIN as i64;

        let cell_size = positive_or(
            ATTR_CELL_SIZE,
            to_integer(source.attribute(ATTR_CELL_SIZE), cell_default),
            cell_default,
        );
        let columns = bounded_u32(
            ATTR_COLUMNS,
            to_integer(source.attribute(ATTR_COLUMNS), DEFAULT_COLUMNS as i64),
            DEFAULT_COLUMNS,
        );
        let rows = bounded_u32(
            ATTR_ROWS,
            to_integer(source.attribute(ATTR_ROWS), DEFAULT_ROWS as i64),
            DEFAULT_ROWS,
        );
        let h_margin = non_negative_or(
            ATTR_H_SPACE,
            to_integer(source.attribute(ATTR_H_SPACE), h_default),
            h_default,
        );
        let v_margin = non_negative_or(
            ATTR_V_SPACE,
            to_integer(source.attribute(ATTR_V_SPACE), v_default),
            v_default,
        );

        Self {
            columns,
            rows,
            cell_size: cell_size as f64,
            h_margin: h_margin as f64,
            v_margin: v_margin as f64,
            snap_to_grid: to_flag(source.attribute(ATTR_SNAP)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_to_integer_plain() {
        assert_eq!(to_integer(Some("32"), 0), 32);
        assert_eq!(to_integer(Some("-7"), 0), -7);
        assert_eq!(to_integer(Some("+5"), 0), 5);
    }

    #[test]
    fn test_to_integer_leading_digits() {
        assert_eq!(to_integer(Some("  12px"), 0), 12);
        assert_eq!(to_integer(Some("3.9"), 0), 3);
    }

    #[test]
    fn test_to_integer_fallback() {
        assert_eq!(to_integer(None, 24), 24);
        assert_eq!(to_integer(Some(""), 24), 24);
        assert_eq!(to_integer(Some("abc"), 24), 24);
        assert_eq!(to_integer(Some("-"), 24), 24);
        assert_eq!(to_integer(Some("9007199254740992"), 24), 24);
        assert_eq!(to_integer(Some("99999999999999999999999"), 24), 24);
    }

    #[test]
    fn test_to_integer_safe_limit() {
        assert_eq!(to_integer(Some("9007199254740991"), 0), 9_007_199_254_740_991);
    }

    #[test]
    fn test_to_flag() {
        assert!(!to_flag(None));
        assert!(to_flag(Some("")));
        assert!(to_flag(Some("true")));
        assert!(!to_flag(Some("false")));
        assert!(!to_flag(Some(" FALSE ")));
    }

    #[test]
    fn test_from_attributes_defaults() {
        let config = GridConfig::from_attributes(&HashMap::new());
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_from_attributes_values() {
        let config = GridConfig::from_attributes(&attrs(&[
            ("cell-size", "10"),
            ("columns", "8"),
            ("rows", "6"),
            ("h-space", "1"),
            ("v-space", "0"),
            ("snap", ""),
        ]));
        assert_eq!(config.columns, 8);
        assert_eq!(config.rows, 6);
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.h_margin, 1.0);
        assert_eq!(config.v_margin, 0.0);
        assert!(config.snap_to_grid);
    }

    #[test]
    fn test_margin_defaults_ignore_configured_columns() {
        let config = GridConfig::from_attributes(&attrs(&[("columns", "40"), ("rows", "8")]));
        assert_eq!(config.h_margin, 4.0);
        assert_eq!(config.v_margin, 4.0);
    }

    #[test]
    fn test_from_attributes_invalid_values() {
        let config = GridConfig::from_attributes(&attrs(&[
            ("cell-size", "0"),
            ("columns", "-3"),
            ("rows", "lots"),
            ("h-space", "-1"),
            ("v-space", "4294967296"),
        ]));
        assert_eq!(config.cell_size, 24.0);
        assert_eq!(config.columns, 16);
        assert_eq!(config.rows, 16);
        assert_eq!(config.h_margin, 4.0);
        assert_eq!(config.v_margin, 4_294_967_296.0);
        assert!(config.is_valid());
    }

    #[test]
    fn test_from_attribute_slice() {
        let pairs: &[(&str, &str)] = &[("columns", "20")];
        let config = GridConfig::from_attributes(pairs);
        assert_eq!(config.columns, 20);
        assert_eq!(config.rows, 16);
    }

    #[test]
    fn test_from_btree_map() {
        let mut map = BTreeMap::new();
        map.insert("rows".to_string(), "12".to_string());
        let config = GridConfig::from_attributes(&map);
        assert_eq!(config.rows, 12);
    }
}
