mod consts;
mod locale;
mod options;
mod prelude;

pub use consts::*;
pub use locale::{LocaleTag, normalize};
pub use options::{CatalogError, LabeledOption, OptionCatalog};

/// Formats free-typed input into the masked display form.
///
/// Strips every non-digit character; once more than two digits remain,
/// inserts the literal `" / "` separator after the second digit and
/// truncates the formatted string to `MAX_DISPLAY_LEN` characters. Inputs
/// with two digits or fewer come back as the bare digit string.
///
/// Truncation applies after the separator is inserted, so digits past the
/// fourth never reach the display form. Total over all inputs; idempotent.
pub fn to_display(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= GROUP_LEN {
        return digits;
    }

    let mut display = String::with_capacity(digits.len() + GROUP_SEPARATOR.len());
    display.push_str(&digits[..GROUP_LEN]);
    display.push_str(GROUP_SEPARATOR);
    display.push_str(&digits[GROUP_LEN..]);
    display.truncate(MAX_DISPLAY_LEN);
    display
}

/// Recovers the raw form from a display-form value.
///
/// Removes exactly whitespace characters and `/`; every other character
/// passes through untouched, digit or not. Total over all inputs.
pub fn to_raw(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != SEPARATOR_CHAR)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_inserts_separator() {
        assert_eq!(to_display("1225"), "12 / 25");
    }

    #[test]
    fn test_display_short_input_unchanged() {
        assert_eq!(to_display("1"), "1");
        assert_eq!(to_display("12"), "12");
    }

    #[test]
    fn test_display_third_digit_triggers_separator() {
        assert_eq!(to_display("122"), "12 / 2");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(to_display(""), "");
        assert_eq!(to_raw(""), "");
    }

    #[test]
    fn test_display_strips_non_digits() {
        assert_eq!(to_display("12/25"), "12 / 25");
        assert_eq!(to_display("12 / 25"), "12 / 25");
        assert_eq!(to_display("1a2b2c5"), "12 / 25");
        assert_eq!(to_display("no digits"), "");
    }

    #[test]
    fn test_display_truncates_formatted_string() {
        // The cut lands on the already-formatted string, not the digit count
        assert_eq!(to_display("123456789"), "12 / 34");
        assert_eq!(to_display("12345"), "12 / 34");
    }

    #[test]
    fn test_display_progressive_typing() {
        struct TestCase {
            typed: &'static str,
            shown: &'static str,
        }

        // One keystroke at a time, as a masked field re-renders
        let cases = [
            TestCase {
                typed: "1",
                shown: "1",
            },
            TestCase {
                typed: "12",
                shown: "12",
            },
            TestCase {
                typed: "12 / 2",
                shown: "12 / 2",
            },
            TestCase {
                typed: "12 / 25",
                shown: "12 / 25",
            },
        ];

        for case in &cases {
            assert_eq!(to_display(case.typed), case.shown, "typed {:?}", case.typed);
        }
    }

    #[test]
    fn test_raw_strips_separator_and_whitespace() {
        assert_eq!(to_raw("12 / 25"), "1225");
        assert_eq!(to_raw(" 1 2 / 2 5 "), "1225");
        assert_eq!(to_raw("12\t/\n25"), "1225");
    }

    #[test]
    fn test_raw_keeps_other_characters() {
        // Only whitespace and the separator are removed
        assert_eq!(to_raw("12a/ 25"), "12a25");
        assert_eq!(to_raw("12-25"), "12-25");
    }

    #[test]
    fn test_display_roundtrip_exhaustive() {
        // Every raw digit string up to four digits survives the display form
        assert_eq!(to_raw(&to_display("")), "");
        for len in 1..=4usize {
            for n in 0..10usize.pow(len as u32) {
                let raw = format!("{n:0len$}");
                let display = to_display(&raw);
                assert_eq!(to_raw(&display), raw, "raw {raw:?} display {display:?}");
                assert_eq!(to_display(&display), display, "display {display:?}");
            }
        }
    }

    #[test]
    fn test_display_drops_digits_past_fourth() {
        // Five- and six-digit raws lose their tail to the display cap
        assert_eq!(to_raw(&to_display("12202")), "1220");
        assert_eq!(to_raw(&to_display("122025")), "1220");
    }

    #[test]
    fn test_display_idempotent() {
        for input in [
            "",
            "1",
            "12",
            "1225",
            "12 / 25",
            "123456789",
            "abc",
            "1a2b2c5",
            " 12/25 ",
        ] {
            let once = to_display(input);
            assert_eq!(to_display(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_display_length_bound() {
        for input in [
            "123456789012",
            "expiry 12/2025!!",
            "12 / 25",
            "٣٤٥٦",
            "   ",
            "no digits here",
        ] {
            assert!(
                to_display(input).len() <= MAX_DISPLAY_LEN,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_DISPLAY_LEN, 7);
        assert_eq!(MAX_RAW_LEN, 6);
        assert!(GROUP_SEPARATOR.contains(SEPARATOR_CHAR));
        // Two digits, the separator, and two more digits fill the display
        assert_eq!(GROUP_LEN + GROUP_SEPARATOR.len() + GROUP_LEN, MAX_DISPLAY_LEN);
    }
}
