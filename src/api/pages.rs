//! Server-rendered HTML for the sign-up page.
//!
//! One page, rendered for the initial visit and re-rendered after each
//! submission with an inline notice.

use axum::response::Html;

/// Inline status message shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success(&'static str),
    Error(&'static str),
}

/// Render the sign-up page.
///
/// `username` and `email` pre-fill the form so a rejected submission keeps
/// what the user typed; the password field always starts empty.
pub fn signup_page(username: &str, email: &str, notice: Option<Notice>) -> Html<String> {
    let notice_html = match notice {
        Some(Notice::Success(message)) => {
            format!("<p class=\"notice success\">{}</p>", escape(message))
        }
        Some(Notice::Error(message)) => {
            format!("<p class=\"notice error\">{}</p>", escape(message))
        }
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sign-Up Page</title>
<style>
body {{ font-family: sans-serif; max-width: 24rem; margin: 3rem auto; }}
label {{ display: block; margin-bottom: 0.75rem; }}
input {{ display: block; width: 100%; padding: 0.4rem; }}
.notice.success {{ color: #1a7f37; }}
.notice.error {{ color: #b91c1c; }}
</style>
</head>
<body>
<h1>Sign-Up Page</h1>
{notice_html}
<form method="post" action="/signup">
<label>Username <input type="text" name="username" value="{username}"></label>
<label>Email <input type="text" name="email" value="{email}"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Sign Up</button>
</form>
</body>
</html>
"#,
        username = escape(username),
        email = escape(email),
    ))
}

/// Minimal HTML attribute/text escaping for user-supplied values.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
