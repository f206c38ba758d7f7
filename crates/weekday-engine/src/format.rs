//! Human-readable strings for query results.

use chrono::NaiveDate;

use crate::scanner::Occurrence;

/// English ordinal for a positive integer: "1st", "2nd", "3rd", "4th", "11th", "21st".
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Describe an occurrence selector: "2nd occurrence", "last occurrence",
/// "3rd to last occurrence".
pub fn occurrence_description(occurrence: Occurrence) -> String {
    match occurrence {
        Occurrence::FromStart(n) => format!("{} occurrence", ordinal(n)),
        Occurrence::FromEnd(1) => "last occurrence".to_string(),
        Occurrence::FromEnd(n) => format!("{} to last occurrence", ordinal(n)),
    }
}

/// Long English form, e.g. "Monday, December 2, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// ISO 8601 calendar date, e.g. "2024-12-02".
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_basic() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(0), "0th");
    }

    #[test]
    fn test_ordinal_teens_and_beyond() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(101), "101st");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(113), "113th");
    }

    #[test]
    fn test_occurrence_description() {
        assert_eq!(
            occurrence_description(Occurrence::FromStart(2)),
            "2nd occurrence"
        );
        assert_eq!(occurrence_description(Occurrence::FromEnd(1)), "last occurrence");
        assert_eq!(
            occurrence_description(Occurrence::FromEnd(3)),
            "3rd to last occurrence"
        );
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        assert_eq!(long_date(date), "Monday, December 2, 2024");
        assert_eq!(iso_date(date), "2024-12-02");
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(long_date(date), "Monday, January 1, 1900");
    }
}
