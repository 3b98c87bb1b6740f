//! HTTP-date grammar (RFC 7231, Section 7.1.1.1).
//!
//! ```text
//! HTTP-date    = IMF-fixdate / obs-date
//! IMF-fixdate  = day-name "," SP date1 SP time-of-day SP GMT     ; RFC 1123
//! rfc850-date  = day-name-l "," SP date2 SP time-of-day SP GMT   ; RFC 850
//! asctime-date = day-name SP date3 SP time-of-day SP year
//!
//! date1 = day SP month SP year         ; e.g., 02 Jun 1982
//! date2 = day "-" month "-" 2DIGIT     ; e.g., 02-Jun-82
//! date3 = month SP ( 2DIGIT / ( SP DIGIT ) )
//! ```
//!
//! Day and month names are case-sensitive. The matched span is kept verbatim, no
//! attempt is made to normalize or validate the calendar date.

use super::capture::Tag;
use super::common::DIGIT;
use super::node::{Grammar, choice, class, lit, seq};

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const DAY_NAMES_LONG: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

pub fn http_date() -> Grammar {
    choice([rfc1123_date(), rfc850_date(), asctime_date()])
}

fn rfc1123_date() -> Grammar {
    seq([
        one_of(DAY_NAMES),
        lit(", "),
        fixed_digits(2),
        lit(" "),
        month(),
        lit(" "),
        fixed_digits(4),
        lit(" "),
        time_of_day(),
        lit(" GMT"),
    ])
    .tag(Tag::Rfc1123Date)
}

fn rfc850_date() -> Grammar {
    seq([
        one_of(DAY_NAMES_LONG),
        lit(", "),
        fixed_digits(2),
        lit("-"),
        month(),
        lit("-"),
        fixed_digits(2),
        lit(" "),
        time_of_day(),
        lit(" GMT"),
    ])
    .tag(Tag::Rfc850Date)
}

fn asctime_date() -> Grammar {
    let zero_padded_day = fixed_digits(2);
    let space_padded_day = seq([lit(" "), fixed_digits(1)]);

    seq([
        one_of(DAY_NAMES),
        lit(" "),
        month(),
        lit(" "),
        choice([zero_padded_day, space_padded_day]),
        lit(" "),
        time_of_day(),
        lit(" "),
        fixed_digits(4),
    ])
    .tag(Tag::AsctimeDate)
}

// `time-of-day = hour ":" minute ":" second`
fn time_of_day() -> Grammar {
    seq([fixed_digits(2), lit(":"), fixed_digits(2), lit(":"), fixed_digits(2)])
}

fn month() -> Grammar {
    one_of(MONTHS)
}

fn fixed_digits(count: usize) -> Grammar {
    class(DIGIT).times(count)
}

fn one_of<const N: usize>(names: [&'static str; N]) -> Grammar {
    choice(names.map(lit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Thu, 04 Dec 2015 16:00:00 GMT", Tag::Rfc1123Date)]
    #[case("Sun, 06 Nov 1994 08:49:37 GMT", Tag::Rfc1123Date)]
    #[case("Thursday, 04-Dec-15 16:00:00 GMT", Tag::Rfc850Date)]
    #[case("Sunday, 06-Nov-94 08:49:37 GMT", Tag::Rfc850Date)]
    #[case("Thu Dec 04 16:00:00 2015", Tag::AsctimeDate)]
    #[case("Thu Dec  4 16:00:00 2015", Tag::AsctimeDate)]
    #[case("Sun Nov 16 08:49:37 1994", Tag::AsctimeDate)]
    fn accepts_each_format(#[case] input: &str, #[case] format: Tag) {
        let matched = http_date().parse(input).unwrap();
        let capture = matched.find(format).unwrap();
        assert_eq!(capture.text(input), input);
        assert_eq!(matched.captures().len(), 1);
    }

    #[rstest]
    #[case("-1")]
    #[case("0")]
    #[case("Thu, 4 Dec 2015 16:00:00 GMT")]
    #[case("Thu, 04 Dec 15 16:00:00 GMT")]
    #[case("Thu, 04 Dec 2015 16:00:00 UTC")]
    #[case("Thu, 04 dec 2015 16:00:00 GMT")]
    #[case("Thursday, 04 Dec 2015 16:00:00 GMT")]
    #[case("Thu, 04-Dec-15 16:00:00 GMT")]
    #[case("Thu Dec 4 16:00:00 2015")]
    #[case("Thu Dec   4 16:00:00 2015")]
    #[case("Thu Dec 04 16:00 2015")]
    #[case("Thu Dec 04 16:00:00 2015 GMT")]
    fn rejects_malformed_dates(#[case] input: &str) {
        assert!(http_date().parse(input).is_err());
    }
}
