//! Login page shell: a fixed overlay covering the whole viewport that hosts
//! the ambient provider and whatever the sign-in flow renders inside it.
//!
//! The shell owns layout only. Authentication and data fetching belong to the
//! children.

use crate::login::provider::AmbientProvider;

pub const SHELL_CLASS: &str = "login-shell";
const OVERLAY_STYLE: &str = "position:fixed;inset:0;z-index:50;";

/// External global stylesheet linked by the full page.
pub const GLOBAL_STYLESHEET: &str = "/static/globals.css";

/// Mount point the client-side sign-in form attaches to.
pub const LOGIN_MOUNT: &str = r#"<div id="login-root"></div>"#;

pub fn render_login_shell(provider: &dyn AmbientProvider, children: &str) -> String {
    format!(
        r#"<div class="{SHELL_CLASS}" style="{OVERLAY_STYLE}">{}</div>"#,
        provider.wrap(children)
    )
}

/// Full HTML document around the shell.
pub fn render_login_page(provider: &dyn AmbientProvider, children: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sign in</title>
<link rel="stylesheet" href="{GLOBAL_STYLESHEET}">
</head>
<body>
{}
</body>
</html>
"#,
        render_login_shell(provider, children)
    )
}
