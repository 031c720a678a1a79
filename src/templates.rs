//! HTML pages served by the handlers.
//!
//! Messages are `&'static str` so nothing user-supplied is ever
//! interpolated into markup.

const LAYOUT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
"#;

/// The login form, optionally with an error banner above it.
pub fn login_page(error_msg: Option<&'static str>) -> String {
    let error_block = match error_msg {
        Some(msg) => format!(r#"  <p class="error" role="alert">{}</p>
"#, msg),
        None => String::new(),
    };

    format!(
        r#"{head}  <title>Log in</title>
</head>
<body>
  <h1>Log in</h1>
{error_block}  <form method="post" action="/login">
    <label for="email">Email</label>
    <input type="email" id="email" name="email" required autofocus>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <label><input type="checkbox" name="remember_me" value="1"> Remember me</label>
    <button type="submit">Log in</button>
  </form>
</body>
</html>
"#,
        head = LAYOUT_HEAD,
        error_block = error_block,
    )
}

/// The protected landing page.
pub fn home_page() -> String {
    format!(
        r#"{head}  <title>Home</title>
</head>
<body>
  <h1>Welcome</h1>
  <p>You are logged in.</p>
</body>
</html>
"#,
        head = LAYOUT_HEAD,
    )
}

pub fn server_error_page() -> String {
    format!(
        r#"{head}  <title>Server error</title>
</head>
<body>
  <h1>Internal Server Error</h1>
  <p>Something went wrong. Please try again later.</p>
</body>
</html>
"#,
        head = LAYOUT_HEAD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_without_error_has_no_banner() {
        let page = login_page(None);
        assert!(page.contains(r#"action="/login""#));
        assert!(page.contains(r#"name="remember_me""#));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn login_page_shows_error_banner() {
        let page = login_page(Some("Authentication failed"));
        assert!(page.contains("Authentication failed"));
    }
}
