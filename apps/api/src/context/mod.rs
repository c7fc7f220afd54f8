// Profile context: derive the reduced context from a profile and render it for prompts.
// Everything here except the handlers is pure and synchronous.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod validation;
