//! Dash formatting of digit strings.
//!
//! ```text
//! ""            → 000-000-000
//! "1"           → 000-000-001
//! "2JDH08CC8"   → 2JD-H08-CC8
//! "1000000000"  → 001-000-000-000
//! ```

/// Characters per dash-separated group.
pub const GROUP_LEN: usize = 3;

/// Separator between groups.
pub const SEPARATOR: char = '-';

/// Shortest display form, dashes included (`000-000-000`).
pub const MIN_DISPLAY_LEN: usize = 11;

/// Group `digits` in threes, most significant group first.
///
/// The digits are left-padded with `0` to a multiple of three, and whole
/// `000` groups are prepended until the display is at least
/// [`MIN_DISPLAY_LEN`] characters long.
pub fn format_code(digits: &str) -> String {
    let len = digits.chars().count();
    let padding = (GROUP_LEN - len % GROUP_LEN) % GROUP_LEN;
    let chars: Vec<char> = std::iter::repeat_n('0', padding)
        .chain(digits.chars())
        .collect();

    let mut groups: Vec<String> = chars
        .chunks(GROUP_LEN)
        .map(|group| group.iter().collect())
        .collect();
    while display_len(groups.len()) < MIN_DISPLAY_LEN {
        groups.insert(0, "000".to_string());
    }

    groups.join(&*SEPARATOR.to_string())
}

/// Remove every separator from a display string.
pub fn strip_separators(display: &str) -> String {
    display.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Display length of `groups` dash-joined groups.
const fn display_len(groups: usize) -> usize {
    if groups == 0 {
        0
    } else {
        groups * (GROUP_LEN + 1) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_minimum_width() {
        assert_eq!(format_code(""), "000-000-000");
    }

    #[test]
    fn short_inputs_are_padded() {
        assert_eq!(format_code("1"), "000-000-001");
        assert_eq!(format_code("12"), "000-000-012");
        assert_eq!(format_code("1234"), "000-001-234");
        assert_eq!(format_code("12345678"), "012-345-678");
    }

    #[test]
    fn nine_digits_are_not_padded() {
        assert_eq!(format_code("2JDH08CC8"), "2JD-H08-CC8");
    }

    #[test]
    fn long_inputs_grow_by_whole_groups() {
        assert_eq!(format_code("1000000000"), "001-000-000-000");
        assert_eq!(format_code("10H6RM1YTLV3"), "10H-6RM-1YT-LV3");
    }

    #[test]
    fn strip_removes_only_dashes() {
        assert_eq!(strip_separators("2JD-H08-CC8"), "2JDH08CC8");
        assert_eq!(strip_separators("a-b c"), "ab c");
    }
}
