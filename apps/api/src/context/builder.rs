//! Context builder: projects a `UserProfile` onto the reduced `UserContext`
//! that prompt construction works from.

use serde::{Deserialize, Serialize};

use crate::models::profile::{DegreeStatus, UserProfile};

/// Derived view of a profile. Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub target_role: String,
    pub skills_learned: Vec<String>,
    pub interested_domains: Vec<String>,
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_level: Option<String>,
}

pub fn build_user_context(profile: &UserProfile) -> UserContext {
    UserContext {
        target_role: profile.target_role.clone(),
        skills_learned: profile.skills_learned.clone(),
        interested_domains: profile.interested_domains.clone(),
        experience_level: profile.experience_level.as_str().to_string(),
        academic_level: Some(academic_level(profile)),
    }
}

/// "B.Tech 3rd Semester" while pursuing with a known semester, otherwise the
/// bare degree. Only a missing or empty semester falls back; anything else is
/// rendered as given.
pub fn academic_level(profile: &UserProfile) -> String {
    let semester = profile
        .current_semester
        .as_deref()
        .filter(|s| !s.is_empty());

    match (profile.degree_status, semester) {
        (DegreeStatus::Pursuing, Some(sem)) => format!(
            "{} {}{} Semester",
            profile.degree,
            sem,
            ordinal_suffix(sem)
        ),
        _ => profile.degree.clone(),
    }
}

/// Ordinal suffix from the last digit only. 11, 12 and 13 come out as
/// "11st", "12nd", "13rd"; keep it that way until product decides otherwise.
pub fn ordinal_suffix(semester: &str) -> &'static str {
    match semester.trim().parse::<u32>() {
        Ok(n) => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
        Err(_) => "th",
    }
}

#[cfg(test)]
pub(crate) fn sample_profile() -> UserProfile {
    use crate::models::profile::ExperienceLevel;

    UserProfile {
        user_id: "u_123".to_string(),
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        college_name: "NIT Trichy".to_string(),
        degree: "B.Tech".to_string(),
        degree_status: DegreeStatus::Pursuing,
        graduation_year: "2027".to_string(),
        current_semester: Some("3".to_string()),
        tenth_percentage: "92.4".to_string(),
        twelfth_percentage: "88".to_string(),
        overall_cgpa: Some("8.7".to_string()),
        target_role: "Backend Engineer".to_string(),
        interested_domains: vec!["Distributed Systems".to_string(), "Databases".to_string()],
        skills_learned: vec!["Rust".to_string(), "SQL".to_string()],
        experience_level: ExperienceLevel::Fresher,
        career_goals: Some("Work on storage engines".to_string()),
        created_at: "2025-01-10T08:00:00Z".to_string(),
        updated_at: "2025-01-10T08:00:00Z".to_string(),
        onboarding_completed: true,
    }
}
