use std::collections::HashSet;

use itertools::Itertools;

/// Nationality codes accepted by the randomuser.me `nat` parameter.
pub const SUPPORTED_NATIONALITIES: &[&str] = &[
    "au", "br", "ca", "ch", "de", "dk", "es", "fi", "fr", "gb", "ie", "in", "ir", "mx", "nl", "no",
    "nz", "rs", "tr", "ua", "us",
];

pub fn parse_nat_csv(value: &str) -> Result<Vec<String>, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("nationality list is empty".to_string());
    }
    let mut out: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for part in raw.split(',') {
        let item = part.trim();
        if item.is_empty() {
            continue;
        }
        let code = item.to_ascii_lowercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("invalid nationality code '{item}'"));
        }
        if !SUPPORTED_NATIONALITIES.contains(&code.as_str()) {
            return Err(format!("unsupported nationality code '{item}'"));
        }
        if seen.insert(code.clone()) {
            out.push(code);
        }
    }
    if out.is_empty() {
        return Err("nationality list is empty".to_string());
    }
    Ok(out)
}

pub fn join_nat_csv(codes: &[String]) -> String {
    codes.iter().join(",")
}

/// Uppercases the first letter of each word, the way the original card
/// styling title-cased names and cities.
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .join(" ")
}

pub fn truncate_ellipsis(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nat_csv_lowercases_and_deduplicates() {
        let codes = parse_nat_csv("US,gb, us ,ie").unwrap();
        assert_eq!(codes, vec!["us", "gb", "ie"]);
    }

    #[test]
    fn nat_csv_rejects_unknown_and_malformed_codes() {
        assert!(parse_nat_csv("usa").is_err());
        assert!(parse_nat_csv("zz").is_err());
        assert!(parse_nat_csv("").is_err());
        assert!(parse_nat_csv(" , ,").is_err());
    }

    #[test]
    fn capitalize_words_handles_multi_word_values() {
        assert_eq!(capitalize_words("new south wales"), "New South Wales");
        assert_eq!(capitalize_words("aalborg"), "Aalborg");
    }

    #[test]
    fn truncate_keeps_short_values_untouched() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("abcdefghij", 5), "abcd…");
    }
}
