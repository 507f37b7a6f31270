//! Presentation helpers shared by the card list and the detail view. All of
//! these are total functions: unknown input falls back to a neutral value
//! instead of failing, so the renderer never has an error path of its own.

use chrono::DateTime;

/// Maps a two-letter nationality code to its emoji flag.
///
/// The map covers the nationalities the random user API currently emits;
/// anything else (including lowercase input) falls back to the globe.
pub fn nationality_flag(code: &str) -> &'static str {
    match code {
        "AU" => "🇦🇺",
        "BR" => "🇧🇷",
        "CA" => "🇨🇦",
        "CH" => "🇨🇭",
        "DE" => "🇩🇪",
        "DK" => "🇩🇰",
        "ES" => "🇪🇸",
        "FI" => "🇫🇮",
        "FR" => "🇫🇷",
        "GB" => "🇬🇧",
        "IE" => "🇮🇪",
        "IN" => "🇮🇳",
        "IR" => "🇮🇷",
        "MX" => "🇲🇽",
        "NL" => "🇳🇱",
        "NO" => "🇳🇴",
        "NZ" => "🇳🇿",
        "RS" => "🇷🇸",
        "TR" => "🇹🇷",
        "UA" => "🇺🇦",
        "US" => "🇺🇸",
        _ => "🌍",
    }
}

/// Maps a gender value to an icon. The source API only emits `male` and
/// `female`; every non-`male` value takes the second icon.
pub fn gender_icon(gender: &str) -> &'static str {
    if gender == "male" { "👨" } else { "👩" }
}

/// Uppercases the first character and preserves the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders an RFC 3339 timestamp as a short human date, e.g. `Feb 27, 1968`.
/// Unparseable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, format_date, gender_icon, nationality_flag};

    #[test]
    fn nationality_flag_maps_known_codes() {
        assert_eq!(nationality_flag("US"), "🇺🇸");
        assert_eq!(nationality_flag("GB"), "🇬🇧");
        assert_eq!(nationality_flag("RS"), "🇷🇸");
    }

    #[test]
    fn nationality_flag_falls_back_to_globe() {
        assert_eq!(nationality_flag("ZZ"), "🌍");
        assert_eq!(nationality_flag(""), "🌍");
        // The source map is uppercase only.
        assert_eq!(nationality_flag("us"), "🌍");
    }

    #[test]
    fn gender_icon_is_binary() {
        assert_eq!(gender_icon("male"), "👨");
        assert_eq!(gender_icon("female"), "👩");
        assert_eq!(gender_icon("other"), "👩");
        assert_eq!(gender_icon(""), "👩");
    }

    #[test]
    fn capitalize_uppercases_first_character_only() {
        assert_eq!(capitalize("male"), "Male");
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize("F"), "F");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn format_date_renders_short_dates() {
        assert_eq!(format_date("1968-02-27T04:40:31.412Z"), "Feb 27, 1968");
        assert_eq!(format_date("1993-07-20T09:44:18.674Z"), "Jul 20, 1993");
    }

    #[test]
    fn format_date_returns_garbage_unchanged() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
    }
}
