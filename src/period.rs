//! Human labels for internship date ranges.

use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%d/%m/%Y";
const RANGE_SEPARATOR: &str = " - ";
const OPEN_END_MARKER: &str = "Present";

/// Formats `"dd/mm/yyyy - dd/mm/yyyy"` or `"dd/mm/yyyy - Present"` into a short
/// label such as `"Jul - Aug 2023"`. Anything that does not parse is returned
/// unchanged.
pub fn format_period(period: &str) -> String {
    try_format_period(period).unwrap_or_else(|| period.to_string())
}

fn try_format_period(period: &str) -> Option<String> {
    let mut parts = period.split(RANGE_SEPARATOR);
    let start = parse_date(parts.next()?)?;

    if period.contains(OPEN_END_MARKER) {
        return Some(format!("{} - {OPEN_END_MARKER}", month_year(start)));
    }

    let end = parse_date(parts.next()?)?;

    if start.year() == end.year() && start.month() == end.month() {
        return Some(month_year(start));
    }

    if start.year() == end.year() {
        return Some(format!("{} - {}", start.format("%b"), month_year(end)));
    }

    Some(format!("{} - {}", month_year(start), month_year(end)))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_range_ends_with_present() {
        assert_eq!(format_period("02/06/2025 - Present"), "Jun 2025 - Present");
        assert!(format_period("15/01/2019 - Present").ends_with("- Present"));
    }

    #[test]
    fn same_month_and_year_collapses_to_one_label() {
        assert_eq!(format_period("01/09/2022 - 07/09/2022"), "Sep 2022");
        assert_eq!(format_period("20/02/2023 - 24/02/2023"), "Feb 2023");
    }

    #[test]
    fn same_year_shows_year_once() {
        assert_eq!(format_period("20/07/2023 - 20/08/2023"), "Jul - Aug 2023");
        assert_eq!(format_period("15/10/2024 - 20/11/2024"), "Oct - Nov 2024");
    }

    #[test]
    fn different_years_show_both_years() {
        assert_eq!(format_period("02/12/2024 - 01/06/2025"), "Dec 2024 - Jun 2025");
    }

    #[test]
    fn same_month_in_different_years_is_not_collapsed() {
        assert_eq!(format_period("10/03/2021 - 10/03/2022"), "Mar 2021 - Mar 2022");
    }

    #[test]
    fn displayed_years_follow_parsed_years() {
        for (start_year, end_year) in [(2019, 2019), (2019, 2020), (2023, 2025)] {
            let label = format_period(&format!("05/01/{start_year} - 05/11/{end_year}"));

            assert!(label.contains(&start_year.to_string()), "{label}");
            assert!(label.ends_with(&end_year.to_string()), "{label}");
        }
    }

    #[test]
    fn unparseable_input_is_returned_raw() {
        for raw in [
            "Summer 2023",
            "32/01/2023 - 02/02/2023",
            "01/01/2023",
            "01/01/2023 - sometime",
            "someday - Present",
            "",
        ] {
            assert_eq!(format_period(raw), raw);
        }
    }
}
