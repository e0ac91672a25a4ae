/// Canonical hyphenated UUID length.
pub const UUID_LEN: usize = 36;
/// Minimum length for hex-shaped ids.
pub const MIN_HEX_LEN: usize = 64;

const PREVIEW_CHARS: usize = 20;
const ABBREVIATE_OVER: usize = 40;

/// Only the length is checked, the character set is not.
pub fn is_accepted(id: &str) -> bool {
    let len = id.chars().count();
    len == UUID_LEN || len >= MIN_HEX_LEN
}

/// First 20 characters, with a trailing ellipsis when something was cut.
pub fn preview(id: &str) -> String {
    let mut out: String = id.chars().take(PREVIEW_CHARS).collect();
    if id.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

/// Head and tail of ids longer than 40 characters, otherwise the id itself.
pub fn abbreviate(id: &str) -> String {
    let len = id.chars().count();
    if len <= ABBREVIATE_OVER {
        return id.to_string();
    }

    let head: String = id.chars().take(PREVIEW_CHARS).collect();
    let tail: String = id.chars().skip(len - PREVIEW_CHARS).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid_and_long_hex_lengths() {
        assert!(is_accepted("123e4567-e89b-12d3-a456-426614174000"));
        assert!(is_accepted(&"a".repeat(64)));
        assert!(is_accepted(&"f".repeat(200)));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_accepted(""));
        assert!(!is_accepted(&"a".repeat(35)));
        assert!(!is_accepted(&"a".repeat(37)));
        assert!(!is_accepted(&"a".repeat(63)));
    }

    #[test]
    fn charset_is_not_checked() {
        assert!(is_accepted(&"z".repeat(36)));
        assert!(is_accepted(&"!".repeat(64)));
    }

    #[test]
    fn length_counts_characters() {
        // 36 characters, 72 bytes
        assert!(is_accepted(&"é".repeat(36)));
    }

    #[test]
    fn preview_truncates_long_ids() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview(&"a".repeat(20)), "a".repeat(20));
        assert_eq!(preview(&"b".repeat(21)), format!("{}...", "b".repeat(20)));
    }

    #[test]
    fn abbreviate_keeps_head_and_tail() {
        let id = format!("{}{}{}", "h".repeat(20), "m".repeat(30), "t".repeat(20));
        assert_eq!(abbreviate(&id), format!("{}...{}", "h".repeat(20), "t".repeat(20)));
        assert_eq!(abbreviate(&"x".repeat(40)), "x".repeat(40));
    }
}
