// src/extraction/text.rs
//! Parsing of the free-form text fields found on a profile page

use crate::error::ResumeError;

/// Separator used by the profile page between the two ends of a date range
pub const DATE_RANGE_SEPARATOR: char = '–';

/// Separator between study type and area in a degree line
pub const DEGREE_SEPARATOR: &str = ", ";

// The HTML serializer emits `<br>`, hand-written fixtures tend to carry `<br/>`
const LINE_BREAK_TAGS: [&str; 3] = ["<br/>", "<br />", "<br>"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Replace every line-break tag in `markup` by a newline and trim the result
pub fn normalize_line_breaks(markup: &str) -> String {
    LINE_BREAK_TAGS
        .iter()
        .fold(markup.to_string(), |acc, tag| acc.replace(tag, "\n"))
        .trim()
        .to_string()
}

/// Split "Jan 2015 – Mar 2017" into its two trimmed ends.
///
/// Any other number of segments is rejected with the raw text in the error.
pub fn split_date_range(text: &str) -> Result<DateRange, ResumeError> {
    let pieces: Vec<&str> = text.split(DATE_RANGE_SEPARATOR).collect();

    match pieces.as_slice() {
        [start, end] => Ok(DateRange {
            start: start.trim().to_string(),
            end: end.trim().to_string(),
        }),
        _ => Err(ResumeError::MalformedText {
            field: "date range",
            text: text.to_string(),
            segments: pieces.len(),
        }),
    }
}

/// Drop the "(3 yrs)" style duration the page appends to job end dates
pub fn strip_duration(end: &str) -> String {
    end.split('(').next().unwrap_or_default().trim().to_string()
}

/// Split "Bachelor's Degree, Computer Engineering" into (study type, area)
pub fn split_degree(text: &str) -> Result<(String, String), ResumeError> {
    let pieces: Vec<&str> = text.split(DEGREE_SEPARATOR).collect();

    match pieces.as_slice() {
        [study_type, area] => Ok((study_type.trim().to_string(), area.trim().to_string())),
        _ => Err(ResumeError::MalformedText {
            field: "degree",
            text: text.to_string(),
            segments: pieces.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(
            normalize_line_breaks("  Line one<br/>Line two \n"),
            "Line one\nLine two"
        );
        assert_eq!(normalize_line_breaks("a<br>b<br />c"), "a\nb\nc");
        assert_eq!(normalize_line_breaks("plain"), "plain");
    }

    #[test]
    fn test_split_date_range() {
        let range = split_date_range(" Jan 2015 – Mar 2017 (2 yrs 3 mos) ").unwrap();
        assert_eq!(range.start, "Jan 2015");
        assert_eq!(range.end, "Mar 2017 (2 yrs 3 mos)");
    }

    #[test]
    fn test_split_date_range_rejects_wrong_segment_count() {
        match split_date_range("Jan 2015") {
            Err(ResumeError::MalformedText { text, segments, .. }) => {
                assert_eq!(text, "Jan 2015");
                assert_eq!(segments, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(split_date_range("2001 – 2002 – 2003").is_err());
        // An ASCII hyphen is not the range separator
        assert!(split_date_range("2001 - 2002").is_err());
    }

    #[test]
    fn test_strip_duration() {
        assert_eq!(strip_duration("Mar 2017 (2 yrs 3 mos)"), "Mar 2017");
        assert_eq!(strip_duration("Present"), "Present");
        assert_eq!(strip_duration("(1 yr)"), "");
    }

    #[test]
    fn test_split_degree() {
        let (study_type, area) = split_degree("Bachelor's Degree, Computer Engineering").unwrap();
        assert_eq!(study_type, "Bachelor's Degree");
        assert_eq!(area, "Computer Engineering");
    }

    #[test]
    fn test_split_degree_without_area_is_malformed() {
        let err = split_degree("High School Diploma").unwrap_err();
        assert_eq!(
            err,
            ResumeError::MalformedText {
                field: "degree",
                text: "High School Diploma".to_string(),
                segments: 1,
            }
        );
        assert!(split_degree("BSc, Physics, Minor in Maths").is_err());
    }
}
