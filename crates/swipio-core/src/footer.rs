#![forbid(unsafe_code)]

//! Footer copyright line.

use crate::host::YearSource;

/// `"2026"` in the first year, `"2026–2031"` afterwards.
#[must_use]
pub fn year_range(epoch: i32, current: i32) -> String {
    if current == epoch {
        epoch.to_string()
    } else {
        format!("{epoch}\u{2013}{current}")
    }
}

/// `"© <owner> <range>"`
#[must_use]
pub fn footer_text(owner: &str, epoch: i32, current: i32) -> String {
    format!("\u{00A9} {owner} {}", year_range(epoch, current))
}

/// [`footer_text`] with the year read from `clock`.
#[must_use]
pub fn footer_text_now(owner: &str, epoch: i32, clock: &impl YearSource) -> String {
    footer_text(owner, epoch, clock.current_year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedYear;

    #[test]
    fn epoch_year_renders_alone() {
        assert_eq!(footer_text("Znanixx", 2026, 2026), "© Znanixx 2026");
    }

    #[test]
    fn later_years_render_en_dash_range() {
        assert_eq!(footer_text("Znanixx", 2026, 2027), "© Znanixx 2026–2027");
        assert_eq!(year_range(2026, 2040), "2026\u{2013}2040");
    }

    #[test]
    fn reads_clock() {
        assert_eq!(
            footer_text_now("Znanixx", 2026, &FixedYear(2029)),
            "© Znanixx 2026–2029"
        );
    }
}
