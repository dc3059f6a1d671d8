//! Text helpers shared by the statement builders.

use super::Fragment;

/// One level of indentation.
pub const INDENT: &str = "\t";

/// Items longer than this get a line break after their separator.
const WRAP_WIDTH: usize = 20;

/// Returns the prefix for `indent` levels.
#[must_use]
pub fn indentation(indent: usize) -> String {
    INDENT.repeat(indent)
}

/// Joins fragments with `", "`, breaking the line after any non-final item
/// longer than 20 characters.
#[must_use]
pub fn populate(items: &[Fragment]) -> String {
    let mut out = String::new();
    let last = items.len().saturating_sub(1);
    for (i, item) in items.iter().enumerate() {
        let text = item.to_sql();
        out.push_str(&text);
        if i < last {
            out.push_str(", ");
            if text.chars().count() > WRAP_WIDTH {
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<Fragment> {
        items.iter().map(|s| Fragment::from(*s)).collect()
    }

    #[test]
    fn test_populate_short_items() {
        assert_eq!(populate(&texts(&["id", "name", "email"])), "id, name, email");
    }

    #[test]
    fn test_populate_empty_and_single() {
        assert_eq!(populate(&[]), "");
        assert_eq!(populate(&texts(&["id"])), "id");
    }

    #[test]
    fn test_populate_wraps_long_items() {
        let got = populate(&texts(&["a_really_long_column_name", "id"]));
        assert_eq!(got, "a_really_long_column_name, \nid");
    }

    #[test]
    fn test_populate_never_wraps_last_item() {
        let got = populate(&texts(&["id", "a_really_long_column_name"]));
        assert_eq!(got, "id, a_really_long_column_name");
    }

    #[test]
    fn test_populate_exactly_twenty_does_not_wrap() {
        let twenty = "x".repeat(20);
        let got = populate(&texts(&[&twenty, "id"]));
        assert_eq!(got, format!("{twenty}, id"));
    }

    #[test]
    fn test_indentation() {
        assert_eq!(indentation(0), "");
        assert_eq!(indentation(2), "\t\t");
    }
}
