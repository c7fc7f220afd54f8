use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DegreeStatus {
    Pursuing,
    Completed,
}

impl DegreeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeStatus::Pursuing => "pursuing",
            DegreeStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExperienceLevel {
    #[serde(rename = "fresher")]
    Fresher,
    #[serde(rename = "0-1")]
    UpToOneYear,
    #[serde(rename = "1-3")]
    OneToThreeYears,
    #[serde(rename = "3+")]
    ThreePlusYears,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::UpToOneYear => "0-1",
            ExperienceLevel::OneToThreeYears => "1-3",
            ExperienceLevel::ThreePlusYears => "3+",
        }
    }
}

/// A user's academic and career profile, as handed over by the profile service.
///
/// Marks, years and timestamps stay string-encoded on the wire;
/// `validate_profile` checks that they parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,

    pub college_name: String,
    pub degree: String,
    pub degree_status: DegreeStatus,
    pub graduation_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_semester: Option<String>,

    pub tenth_percentage: String,
    pub twelfth_percentage: String,
    #[serde(
        rename = "overallCGPA",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_cgpa: Option<String>,

    pub target_role: String,
    pub interested_domains: Vec<String>,
    pub skills_learned: Vec<String>,
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,

    pub created_at: String,
    pub updated_at: String,
    pub onboarding_completed: bool,
}
