use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::builder::{build_user_context, UserContext};
use crate::context::prompts::format_user_context_for_prompt;
use crate::context::validation::{validate_profile, ProfileValidationResult};
use crate::errors::AppError;
use crate::models::profile::UserProfile;

#[derive(Debug, Serialize)]
pub struct ContextResponse {
    pub context: UserContext,
    pub validation: ProfileValidationResult,
}

#[derive(Debug, Serialize)]
pub struct ContextPromptResponse {
    pub context: UserContext,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// POST /api/v1/context
pub async fn handle_build_context(
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<ContextResponse>, AppError> {
    let Json(profile) = body?;
    let validation = validate_profile(&profile);
    if !validation.passed {
        warn!(
            "Profile {} has {} validation warning(s)",
            profile.user_id,
            validation.warnings.len()
        );
    }

    let context = build_user_context(&profile);
    debug!(
        "Built context for user {} ({}): academic_level={:?}",
        profile.user_id,
        profile.degree_status.as_str(),
        context.academic_level
    );

    Ok(Json(ContextResponse {
        context,
        validation,
    }))
}

/// POST /api/v1/context/prompt
pub async fn handle_context_prompt(
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<ContextPromptResponse>, AppError> {
    let Json(profile) = body?;
    let context = build_user_context(&profile);
    let prompt = format_user_context_for_prompt(&context);
    debug!("Rendered prompt context for user {}", profile.user_id);
    Ok(Json(ContextPromptResponse { context, prompt }))
}

/// POST /api/v1/context/format
pub async fn handle_format_context(
    body: Result<Json<UserContext>, JsonRejection>,
) -> Result<Json<PromptResponse>, AppError> {
    let Json(context) = body?;
    Ok(Json(PromptResponse {
        prompt: format_user_context_for_prompt(&context),
    }))
}

/// POST /api/v1/context/validate
pub async fn handle_validate_profile(
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<ProfileValidationResult>, AppError> {
    let Json(profile) = body?;
    Ok(Json(validate_profile(&profile)))
}
