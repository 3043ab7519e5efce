//! Private server link validation

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Shape of a shareable private server link.
pub const SERVER_LINK_PATTERN: &str = r"https://www\.roblox\.com/share\?code=[^&]+&type=Server";

static SERVER_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(SERVER_LINK_PATTERN).expect("server link pattern compiles"));

/// Returns true when `link` contains a private server link anywhere in it.
///
/// The match is unanchored: leading or trailing text around a valid link is
/// accepted.
pub fn is_valid_server_link(link: &str) -> bool {
    SERVER_LINK.is_match(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_server_share_link() {
        assert!(is_valid_server_link("https://www.roblox.com/share?code=ABC123XYZ&type=Server"));
    }

    #[test]
    fn rejects_other_share_types() {
        assert!(!is_valid_server_link("https://www.roblox.com/share?code=ABC123XYZ&type=Private"));
    }

    #[test]
    fn rejects_non_links() {
        assert!(!is_valid_server_link("not-a-link"));
        assert!(!is_valid_server_link(""));
    }

    #[test]
    fn rejects_empty_code() {
        assert!(!is_valid_server_link("https://www.roblox.com/share?code=&type=Server"));
    }

    #[test]
    fn rejects_wrong_host_and_scheme() {
        assert!(!is_valid_server_link("http://www.roblox.com/share?code=ABC&type=Server"));
        assert!(!is_valid_server_link("https://roblox.com/share?code=ABC&type=Server"));
        assert!(!is_valid_server_link("https://wwwXroblox.com/share?code=ABC&type=Server"));
    }

    #[test]
    fn code_may_not_contain_ampersand() {
        // `[^&]+` stops at the first `&`, which must then begin `&type=Server`
        assert!(!is_valid_server_link("https://www.roblox.com/share?code=A&B&type=Private"));
    }

    #[test]
    fn match_is_unanchored() {
        assert!(is_valid_server_link(
            "join here: https://www.roblox.com/share?code=ABC&type=Server please"
        ));
        assert!(is_valid_server_link(
            "https://www.roblox.com/share?code=ABC&type=ServerAndMore"
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        for link in [
            "https://www.roblox.com/share?code=ABC123XYZ&type=Server",
            "https://www.roblox.com/share?code=ABC123XYZ&type=Private",
            "not-a-link",
        ] {
            assert_eq!(is_valid_server_link(link), is_valid_server_link(link));
        }
    }
}
