use std::fmt;
use std::str::FromStr;

/// Supplies shared state to the markup it wraps. Handed to the login shell
/// explicitly rather than looked up from anywhere global.
pub trait AmbientProvider: Send + Sync {
    fn name(&self) -> &str;

    fn wrap(&self, children: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme '{other}' (expected light, dark or system)"
            )),
        }
    }
}

/// Theme state for everything rendered inside it.
#[derive(Debug, Clone, Default)]
pub struct ThemeProvider {
    pub theme: Theme,
}

impl ThemeProvider {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl AmbientProvider for ThemeProvider {
    fn name(&self) -> &str {
        "theme"
    }

    fn wrap(&self, children: &str) -> String {
        format!(
            r#"<div data-provider="{}" data-theme="{}">{children}</div>"#,
            self.name(),
            self.theme
        )
    }
}
