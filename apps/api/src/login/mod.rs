pub mod handlers;
pub mod provider;
pub mod shell;

pub use provider::{AmbientProvider, Theme, ThemeProvider};
