// Prompt rendering for the derived user context.
// The text-generation side reads this block verbatim, so the line labels are fixed.

use crate::context::builder::UserContext;

pub const CONTEXT_HEADER: &str = "User Profile Context:";

/// Rendered when the context carries no academic level.
pub const ACADEMIC_LEVEL_FALLBACK: &str = "Not specified";

pub const TAILORING_INSTRUCTION: &str = "Please tailor your responses to align with the user's \
target role, experience level, and skill set.";

/// Renders the context as a trimmed multi-line block for a text prompt.
/// Empty skill or domain lists leave their line blank after the label.
pub fn format_user_context_for_prompt(context: &UserContext) -> String {
    let academic_level = context
        .academic_level
        .as_deref()
        .unwrap_or(ACADEMIC_LEVEL_FALLBACK);

    let block = format!(
        "
{CONTEXT_HEADER}
- Target Role: {target_role}
- Experience Level: {experience_level}
- Academic Level: {academic_level}
- Skills: {skills}
- Interested Domains: {domains}

{TAILORING_INSTRUCTION}
",
        target_role = context.target_role,
        experience_level = context.experience_level,
        skills = context.skills_learned.join(", "),
        domains = context.interested_domains.join(", "),
    );

    block.trim().to_string()
}
