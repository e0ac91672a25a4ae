//! HTML status page for people watching the relay in a browser.
//!
//! The page reloads itself every two seconds through a meta-refresh tag, so
//! the server never has to push anything.

use crate::relay::id::abbreviate;

pub const WAITING_TEXT: &str = "Waiting for game instance...";
pub const REFRESH_SECONDS: u32 = 2;

const LONG_ID_OVER: usize = 40;

pub fn render(latest: Option<&str>) -> String {
    let display = match latest {
        None => WAITING_TEXT.to_string(),
        Some(id) => {
            let len = id.chars().count();
            if len > LONG_ID_OVER {
                format!(
                    "{}<br><small style='color: #8b949e;'>(Full length: {} chars)</small>",
                    escape(&abbreviate(id)),
                    len
                )
            } else {
                escape(id)
            }
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="{refresh}">
    <title>Game Instance Relay</title>
    <style>
        body {{
            background: #0d1117;
            color: #58a6ff;
            font-family: monospace;
            padding: 40px;
            text-align: center;
        }}
        h1 {{ color: #58a6ff; }}
        #id {{
            font-size: 18px;
            padding: 20px;
            background: #161b22;
            border-radius: 8px;
            margin: 20px auto;
            max-width: 800px;
            word-break: break-all;
            line-height: 1.6;
        }}
        .stats {{
            color: #8b949e;
            font-size: 12px;
            margin-top: 30px;
        }}
    </style>
</head>
<body>
    <h1>🎮 Game Instance Relay</h1>
    <div id="id">{display}</div>
    <p style="color: #8b949e; font-size: 14px;">Auto-refreshes every {refresh} seconds</p>
    <div class="stats">
        Supports: UUID (36 chars) &amp; Hex IDs (64+ chars)
    </div>
</body>
</html>
"#,
        refresh = REFRESH_SECONDS,
        display = display,
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_placeholder_when_unset() {
        let html = render(None);
        assert!(html.contains(WAITING_TEXT));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="2">"#));
    }

    #[test]
    fn shows_short_ids_verbatim() {
        let id = "123e4567-e89b-12d3-a456-426614174000";
        let html = render(Some(id));
        assert!(html.contains(&format!(r#"<div id="id">{id}</div>"#)));
        assert!(!html.contains("Full length"));
    }

    #[test]
    fn abbreviates_long_ids() {
        let id = format!("{}{}{}", "a".repeat(20), "b".repeat(30), "c".repeat(20));
        let html = render(Some(&id));
        assert!(html.contains(&format!("{}...{}", "a".repeat(20), "c".repeat(20))));
        assert!(html.contains("(Full length: 70 chars)"));
        assert!(!html.contains(&"b".repeat(30)));
    }

    #[test]
    fn escapes_markup() {
        let id = format!("<script>{}", "x".repeat(28));
        let html = render(Some(&id));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
