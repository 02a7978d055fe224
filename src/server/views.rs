//! Views module - generates the HTML pages served by the application.

/// Escape HTML special characters to prevent XSS attacks.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Shared page chrome wrapping a body fragment.
fn page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            background: #0f0f0f;
            color: #fff;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
        }}
        .card {{
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 8px;
            padding: 32px;
            max-width: 360px;
            width: 100%;
        }}
        .card h1 {{
            font-size: 18px;
            font-weight: 600;
            margin-bottom: 16px;
        }}
        .card p {{
            color: rgba(255, 255, 255, 0.7);
            font-size: 14px;
            line-height: 1.5;
            margin-bottom: 16px;
        }}
        label {{
            display: block;
            font-size: 13px;
            color: rgba(255, 255, 255, 0.7);
            margin-bottom: 6px;
        }}
        input[type="text"] {{
            width: 100%;
            padding: 8px 10px;
            border-radius: 6px;
            border: 1px solid rgba(255, 255, 255, 0.2);
            background: rgba(0, 0, 0, 0.4);
            color: #fff;
            font-size: 14px;
            margin-bottom: 16px;
        }}
        button {{
            width: 100%;
            padding: 9px 0;
            border: none;
            border-radius: 6px;
            background: #6366f1;
            color: #fff;
            font-size: 14px;
            font-weight: 500;
            cursor: pointer;
        }}
        .user-badge {{
            display: inline-block;
            background: rgba(99, 102, 241, 0.2);
            color: #818cf8;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 12px;
            font-weight: 500;
        }}
        a {{
            color: #818cf8;
            font-size: 13px;
        }}
    </style>
</head>
<body>
    <div class="card">
{body}
    </div>
</body>
</html>
"##,
        title = title,
        body = body,
    )
}

/// Generate the login form page.
///
/// Served for both `GET /` and `GET /sessions/new`. The form posts a single
/// `user_id` field to `POST /sessions`.
pub fn render_login_page() -> String {
    let body = r#"        <h1>Sign in</h1>
        <p>Enter a user id to start a session. The secret page is only
        visible while you are signed in.</p>
        <form method="post" action="/sessions">
            <label for="user_id">User ID</label>
            <input type="text" id="user_id" name="user_id" autofocus>
            <button type="submit">Sign in</button>
        </form>"#;

    page("Sign in", body)
}

/// Generate the protected page shown to authenticated sessions.
pub fn render_secret_page(user_id: &str) -> String {
    let escaped_user_id = html_escape(user_id);
    let body = format!(
        r#"        <h1>Secret page</h1>
        <p>Signed in as <span class="user-badge">{escaped_user_id}</span></p>
        <p>If you can read this, your session carries a user id. This page
        never changes session state, so reloading it is always safe.</p>"#,
    );

    page("Secret page", &body)
}

// =============================================================================
// Tests
// =============================================================================
