//! Fixed string-format patterns used by the string field validators.

use regex::Regex;
use std::sync::OnceLock;

/// Non-ASCII letters accepted in URL hosts and paths.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap()
    })
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pchar = r"(?:[a-z\d\-._~{U}]|%[\da-f]{2}|[!$&'()*+,;=]|:|@)";
        let pattern = [
            r"(?i)^(?:(?:https?|ftp):)?//",
            r"(?:(?:[a-z\d\-._~{U}]|%[\da-f]{2}|[!$&'()*+,;=]|:)*@)?",
            r"(?:",
            r"(?:(?:\d|[1-9]\d|1\d\d|2[0-4]\d|25[0-5])\.){3}(?:\d|[1-9]\d|1\d\d|2[0-4]\d|25[0-5])",
            r"|",
            r"(?:(?:[a-z\d{U}]|[a-z\d{U}][a-z\d\-._~{U}]*[a-z\d{U}])\.)+",
            r"(?:[a-z{U}]|[a-z{U}][a-z\d\-._~{U}]*[a-z{U}])\.?",
            r")",
            r"(?::\d*)?",
            &format!(r"(?:/(?:{p}+(?:/{p}*)*)?)?", p = pchar),
            &format!(r"(?:\?(?:{p}|[\x{{E000}}-\x{{F8FF}}]|/|\?)*)?", p = pchar),
            &format!(r"(?:#(?:{p}|/|\?)*)?$", p = pchar),
        ]
        .concat()
        .replace("{U}", UCS);
        Regex::new(&pattern).unwrap()
    })
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000)$",
        )
        .unwrap()
    })
}

const IPV4: &str =
    r"(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})";

fn ipv4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", IPV4)).unwrap())
}

fn ipv6_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let prefix = [
            r"(?:[a-f0-9]{1,4}:){7}",
            r"::(?:[a-f0-9]{1,4}:){0,6}",
            r"(?:[a-f0-9]{1,4}:){1}:(?:[a-f0-9]{1,4}:){0,5}",
            r"(?:[a-f0-9]{1,4}:){2}:(?:[a-f0-9]{1,4}:){0,4}",
            r"(?:[a-f0-9]{1,4}:){3}:(?:[a-f0-9]{1,4}:){0,3}",
            r"(?:[a-f0-9]{1,4}:){4}:(?:[a-f0-9]{1,4}:){0,2}",
            r"(?:[a-f0-9]{1,4}:){5}:(?:[a-f0-9]{1,4}:){0,1}",
        ]
        .join("|");
        Regex::new(&format!("^(?:{})(?:[a-f0-9]{{1,4}}|{})$", prefix, IPV4)).unwrap()
    })
}

pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

pub fn is_url(s: &str) -> bool {
    url_regex().is_match(s)
}

pub fn is_uuid(s: &str) -> bool {
    uuid_regex().is_match(s)
}

pub fn is_ipv4(s: &str) -> bool {
    ipv4_regex().is_match(s)
}

/// Lower-case hex digits only; upper-case addresses do not match.
pub fn is_ipv6(s: &str) -> bool {
    ipv6_regex().is_match(s)
}
