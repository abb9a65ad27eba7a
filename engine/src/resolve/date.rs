//! Lenient date resolution. A raw cell first goes through a strict parse
//! against common date grammars; anything that survives real-world exports
//! but fails those (day-first strings, dotted separators, quoted cells)
//! falls back to a token-split heuristic. Rows that defeat both stages are
//! dropped, never erred.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// A row's date reduced to what aggregation needs: calendar year and
/// zero-based month (January = 0). Day-of-month is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month_index: usize,
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%d %b %Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

pub fn resolve_date(raw: &str) -> Option<YearMonth> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    strict_parse(trimmed).or_else(|| heuristic_parse(trimmed))
}

fn strict_parse(raw: &str) -> Option<YearMonth> {
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(YearMonth {
                year: d.year(),
                month_index: d.month0() as usize,
            });
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(YearMonth {
                year: dt.year(),
                month_index: dt.month0() as usize,
            });
        }
    }
    None
}

/// Token-split fallback: strip quotes, split on runs of `/ - . space`, take
/// the first 4-character token as the year (or token 2 if none), token 1 as
/// the month. Always month-at-index-1; day-first vs month-first layouts are
/// indistinguishable here and the ambiguity is accepted as-is.
fn heuristic_parse(raw: &str) -> Option<YearMonth> {
    let cleaned: String = raw.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let tokens: Vec<&str> = cleaned
        .split(['/', '-', '.', ' '])
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < 3 {
        return None;
    }

    let year_token = tokens.iter().find(|t| t.len() == 4).copied().unwrap_or(tokens[2]);
    let year: i32 = year_token.parse().ok()?;

    // Unparseable month token defaults to January; an out-of-range month
    // number rolls into the adjacent year, the way a calendar constructor
    // would normalize it.
    let month0 = tokens[1].parse::<i64>().unwrap_or(1) - 1;
    Some(YearMonth {
        year: year + month0.div_euclid(12) as i32,
        month_index: month0.rem_euclid(12) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month_index: usize) -> YearMonth {
        YearMonth { year, month_index }
    }

    #[test]
    fn test_strict_iso_date() {
        assert_eq!(resolve_date("2023-07-04"), Some(ym(2023, 6)));
    }

    #[test]
    fn test_strict_us_date() {
        assert_eq!(resolve_date("12/25/2023"), Some(ym(2023, 11)));
    }

    #[test]
    fn test_strict_datetime() {
        assert_eq!(resolve_date("2022-01-30 14:05:00"), Some(ym(2022, 0)));
    }

    #[test]
    fn test_heuristic_day_first() {
        // "15-03-2023" fails every strict grammar (no month 15), so the
        // fallback reads token 1 as the month and the 4-digit token as year.
        assert_eq!(resolve_date("15-03-2023"), Some(ym(2023, 2)));
    }

    #[test]
    fn test_heuristic_dotted_separators() {
        assert_eq!(resolve_date("31.12.2021"), Some(ym(2021, 11)));
    }

    #[test]
    fn test_heuristic_strips_quotes() {
        assert_eq!(resolve_date("\"15/06/2020\""), Some(ym(2020, 5)));
    }

    #[test]
    fn test_heuristic_two_digit_year_falls_back_to_third_token() {
        // No 4-character token anywhere, so token 2 is taken as the year.
        assert_eq!(resolve_date("15-03-99"), Some(ym(99, 2)));
    }

    #[test]
    fn test_heuristic_unparseable_month_defaults_to_january() {
        assert_eq!(resolve_date("15-xx-2023"), Some(ym(2023, 0)));
    }

    #[test]
    fn test_heuristic_month_overflow_rolls_year() {
        assert_eq!(resolve_date("01-13-2023"), Some(ym(2024, 0)));
    }

    #[test]
    fn test_too_few_tokens_fails() {
        assert_eq!(resolve_date("2023-07"), None);
        assert_eq!(resolve_date("July"), None);
        assert_eq!(resolve_date(""), None);
    }

    #[test]
    fn test_unparseable_year_fails() {
        assert_eq!(resolve_date("aa/bb/cccc"), None);
    }
}
