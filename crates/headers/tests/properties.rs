use micro_security_headers::header::{HeaderName, HeaderRecord, ParseOutput};
use micro_security_headers::parser::{HeaderParser, MalformedPolicy, ParseError};
use micro_security_headers::parse;
use proptest::prelude::*;

/// Well-formed values for every supported header.
const SAMPLES: &[(&str, HeaderName, &str)] = &[
    ("X-Frame-Options", HeaderName::XFrameOptions, "sameorigin"),
    ("X-Frame-Options", HeaderName::XFrameOptions, "allow-from http://www.example.com"),
    ("Strict-Transport-Security", HeaderName::StrictTransportSecurity, "max-age=31536000; includeSubDomains"),
    ("Content-Security-Policy", HeaderName::ContentSecurityPolicy, "default-src 'self'; img-src 'self' data:"),
    ("Content-Security-Policy-Report-Only", HeaderName::ContentSecurityPolicyReportOnly, "script-src 'none'; report-uri /csp"),
    ("Cache-Control", HeaderName::CacheControl, "private, max-age=0, no-cache"),
    ("Pragma", HeaderName::Pragma, "no-cache"),
    ("Expires", HeaderName::Expires, "Thu, 04 Dec 2015 16:00:00 GMT"),
    ("X-Content-Type-Options", HeaderName::XContentTypeOptions, "nosniff"),
    ("X-Permitted-Cross-Domain-Policies", HeaderName::XPermittedCrossDomainPolicies, "master-only"),
    ("X-XSS-Protection", HeaderName::XXssProtection, "1; mode=block"),
    ("Public-Key-Pins", HeaderName::PublicKeyPins, "pin-sha256=\"d6qzRu9zOECb90Uez27xWltNsj0e1Md7GkYYkVoZWmM=\"; max-age=5184000"),
    ("Public-Key-Pins-Report-Only", HeaderName::PublicKeyPinsReportOnly, "pin-sha256=\"abc=\"; report-uri=\"https://example.net/pkp\""),
    ("Set-Cookie", HeaderName::SetCookie, "id=a3fWa; Path=/; Secure; HttpOnly"),
];

const UNRECOGNIZED: &[&str] = &[
    "Server: gws",
    "Content-Type: text/html; charset=ISO-8859-1",
    "Alternate-Protocol: 80:quic,p=0.01",
    "Transfer-Encoding: chunked",
    "X-Frame-Option: whatever",
];

/// Malformed values for supported headers.
const MALFORMED: &[(&str, HeaderName)] = &[
    ("X-Frame-Options: allow-from example.com", HeaderName::XFrameOptions),
    ("Strict-Transport-Security: max-age=forever", HeaderName::StrictTransportSecurity),
    ("Expires: -1", HeaderName::Expires),
    ("X-XSS-Protection: 2", HeaderName::XXssProtection),
    ("X-Content-Type-Options: sniff", HeaderName::XContentTypeOptions),
];

const FRAME_KEYWORDS: &[&str] = &["deny", "sameorigin", "allowall", "allow-from http://example.com"];

const QUOTES: &[&str] = &["", "\"", "'"];

const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Flips the ASCII case of each letter whose bit is set in `mask`.
fn recase(text: &str, mask: u64) -> String {
    text.chars()
        .enumerate()
        .map(|(index, c)| if mask & (1 << (index % 64)) == 0 { c } else if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
        .collect()
}

fn blanks() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn sample() -> impl Strategy<Value = (&'static str, HeaderName, &'static str)> {
    prop::sample::select(SAMPLES)
}

#[derive(Debug, Clone)]
enum Line {
    Known(&'static str, HeaderName, &'static str),
    Unknown(&'static str),
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        sample().prop_map(|(raw, name, value)| Line::Known(raw, name, value)),
        prop::sample::select(UNRECOGNIZED).prop_map(Line::Unknown),
    ]
}

fn records(output: ParseOutput) -> Vec<(HeaderName, String)> {
    output.into_records().into_iter().map(|record| (record.name(), record.value().to_string())).collect()
}

proptest! {
    #[test]
    fn single_header_value_is_trimmed_and_verbatim(
        (raw, name, value) in sample(),
        mask in any::<u64>(),
        lead in blanks(), before_colon in blanks(), after_colon in blanks(), trail in blanks(),
    ) {
        let line = format!("{lead}{}{before_colon}:{after_colon}{value}{trail}", recase(raw, mask));
        let output = parse(&line).unwrap();

        let ParseOutput::Single(record) = output else {
            panic!("expected a single record for {line:?}");
        };
        prop_assert_eq!(record.name(), name);
        prop_assert_eq!(record.value(), value);
    }

    #[test]
    fn recognized_headers_keep_input_order(lines in prop::collection::vec(line(), 0..8), crlf in any::<bool>()) {
        let separator = if crlf { "\r\n" } else { "\n" };
        let raw = lines
            .iter()
            .map(|line| match line {
                Line::Known(raw, _, value) => format!("{raw}: {value}"),
                Line::Unknown(text) => (*text).to_string(),
            })
            .collect::<Vec<_>>()
            .join(separator);

        let expected: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                Line::Known(_, name, value) => Some((*name, (*value).to_string())),
                Line::Unknown(_) => None,
            })
            .collect();

        let output = parse(&raw).unwrap();
        prop_assert_eq!(output.is_single(), expected.len() == 1);
        prop_assert_eq!(records(output), expected);
    }

    #[test]
    fn keyword_case_never_changes_the_outcome(
        keyword in prop::sample::select(FRAME_KEYWORDS),
        mask in any::<u64>(),
    ) {
        let value = recase(keyword, mask);
        let output = parse(&format!("X-Frame-Options: {value}")).unwrap();
        prop_assert_eq!(output.records()[0].value(), value.as_str());
    }

    #[test]
    fn quoted_max_age_is_kept_verbatim(
        quote in prop::sample::select(QUOTES),
        age in any::<u32>(),
        subdomains_first in any::<bool>(),
    ) {
        let max_age = format!("max-age={quote}{age}{quote}");
        let value = if subdomains_first { format!("includeSubDomains; {max_age}") } else { format!("{max_age}; includeSubDomains") };

        let output = parse(&format!("Strict-Transport-Security: {value}")).unwrap();
        prop_assert_eq!(output.records()[0].value(), value.as_str());
    }

    #[test]
    fn every_date_format_is_kept_verbatim(
        weekday in 0usize..7,
        day in 1u32..=31,
        month in prop::sample::select(MONTHS),
        year in 1970u32..=2099,
        (hour, minute, second) in (0u32..24, 0u32..60, 0u32..60),
        format in 0usize..4,
    ) {
        const SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        const LONG: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

        let time = format!("{hour:02}:{minute:02}:{second:02}");
        let date = match format {
            0 => format!("{}, {day:02} {month} {year} {time} GMT", SHORT[weekday]),
            1 => format!("{}, {day:02}-{month}-{:02} {time} GMT", LONG[weekday], year % 100),
            2 => format!("{} {month} {day:02} {time} {year}", SHORT[weekday]),
            _ => format!("{} {month} {day:>2} {time} {year}", SHORT[weekday]),
        };

        let output = parse(&format!("Expires: {date}")).unwrap();
        prop_assert_eq!(output.records()[0].name(), HeaderName::Expires);
        prop_assert_eq!(output.records()[0].value(), date.as_str());
    }

    #[test]
    fn reparsing_a_value_yields_an_equal_record(lines in prop::collection::vec(sample(), 1..5)) {
        let raw = lines.iter().map(|(raw, _, value)| format!("{raw}: {value}")).collect::<Vec<_>>().join("\r\n");

        for record in parse(&raw).unwrap().into_records() {
            let again = parse(&format!("{}: {}", record.name().as_str(), record.value())).unwrap();
            prop_assert_eq!(again, ParseOutput::Single(record));
        }
    }

    #[test]
    fn strict_mode_fails_on_the_first_malformed_header(
        before in prop::collection::vec(sample(), 0..3),
        (malformed, malformed_name) in prop::sample::select(MALFORMED),
        after in prop::collection::vec(line(), 0..3),
    ) {
        let mut lines: Vec<String> = before.iter().map(|(raw, _, value)| format!("{raw}: {value}")).collect();
        lines.push(malformed.to_string());
        lines.extend(after.iter().map(|line| match line {
            Line::Known(raw, _, value) => format!("{raw}: {value}"),
            Line::Unknown(text) => (*text).to_string(),
        }));

        let err = parse(&lines.join("\r\n")).unwrap_err();
        let ParseError::MalformedValue { name, line: line_number, .. } = err;
        prop_assert_eq!(name, malformed_name);
        prop_assert_eq!(line_number, before.len() + 1);
    }

    #[test]
    fn lenient_mode_keeps_only_well_formed_headers(
        lines in prop::collection::vec(prop_oneof![
            sample().prop_map(|(raw, name, value)| (format!("{raw}: {value}"), Some((name, value.to_string())))),
            prop::sample::select(MALFORMED).prop_map(|(line, _)| (line.to_string(), None)),
        ], 0..8),
    ) {
        let parser = HeaderParser::builder().malformed_policy(MalformedPolicy::Skip).build();
        let raw = lines.iter().map(|(line, _)| line.as_str()).collect::<Vec<_>>().join("\r\n");
        let expected: Vec<_> = lines.into_iter().filter_map(|(_, record)| record).collect();

        prop_assert_eq!(records(parser.parse(&raw).unwrap()), expected);
    }

    #[test]
    fn arbitrary_input_never_panics(raw in "\\PC*") {
        let lenient = HeaderParser::builder().malformed_policy(MalformedPolicy::Skip).build();
        let _ = parse(&raw);
        prop_assert!(lenient.parse(&raw).is_ok());
    }
}

#[test]
fn records_compare_by_name_value_and_captures() {
    let first = parse("X-Frame-Options: deny").unwrap().into_records();
    let second = parse("x-frame-options:deny").unwrap().into_records();
    assert_eq!(first, second);
    assert_eq!(first[0], HeaderRecord::clone(&second[0]));
}
