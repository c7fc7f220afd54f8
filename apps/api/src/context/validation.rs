use chrono::DateTime;
use serde::Serialize;

use crate::models::profile::{DegreeStatus, UserProfile};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileWarning {
    pub field: String,
    pub reason: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileValidationResult {
    pub passed: bool,
    pub warnings: Vec<ProfileWarning>,
}

const MAX_PERCENTAGE: f64 = 100.0;
const MAX_CGPA: f64 = 10.0;

/// Advisory checks over a profile. Never blocks context building: every
/// problem found here already has a fallback in the builder.
///
/// WARN conditions:
/// - Pursuing degree with no current semester
/// - Current semester that is not a positive integer
/// - Graduation year that is not a 4-digit year
/// - Percentages outside 0-100, CGPA outside 0-10, or non-numeric marks
/// - Blank target role, email without `@`
/// - Timestamps that are not RFC 3339
pub fn validate_profile(profile: &UserProfile) -> ProfileValidationResult {
    let mut warnings = Vec::new();

    let semester = profile
        .current_semester
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match (profile.degree_status, semester) {
        (DegreeStatus::Pursuing, None) => warnings.push(warning(
            "currentSemester",
            "Degree is being pursued but no current semester is set",
            "Add the current semester so the academic level reads e.g. 'B.Tech 3rd Semester'",
        )),
        (_, Some(sem)) if !matches!(sem.parse::<u32>(), Ok(n) if n > 0) => {
            warnings.push(warning(
                "currentSemester",
                &format!("'{sem}' is not a positive whole number"),
                "Use the semester number only, e.g. '3'",
            ))
        }
        _ => {}
    }

    let year = profile.graduation_year.trim();
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        warnings.push(warning(
            "graduationYear",
            &format!("'{year}' is not a 4-digit year"),
            "Use the full year, e.g. '2026'",
        ));
    }

    check_mark(
        &mut warnings,
        "tenthPercentage",
        &profile.tenth_percentage,
        MAX_PERCENTAGE,
    );
    check_mark(
        &mut warnings,
        "twelfthPercentage",
        &profile.twelfth_percentage,
        MAX_PERCENTAGE,
    );
    if let Some(cgpa) = &profile.overall_cgpa {
        check_mark(&mut warnings, "overallCGPA", cgpa, MAX_CGPA);
    }

    if profile.target_role.trim().is_empty() {
        warnings.push(warning(
            "targetRole",
            "Target role is blank",
            "Set a target role so generated guidance has a goal to aim at",
        ));
    }

    if !profile.email.contains('@') {
        warnings.push(warning(
            "email",
            &format!("'{}' does not look like an email address", profile.email),
            "Use an address of the form name@domain",
        ));
    }

    check_timestamp(&mut warnings, "createdAt", &profile.created_at);
    check_timestamp(&mut warnings, "updatedAt", &profile.updated_at);

    ProfileValidationResult {
        passed: warnings.is_empty(),
        warnings,
    }
}

fn check_mark(warnings: &mut Vec<ProfileWarning>, field: &str, raw: &str, max: f64) {
    match raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()) {
        Some(v) if (0.0..=max).contains(&v) => {}
        Some(v) => warnings.push(warning(
            field,
            &format!("{v} is outside the 0-{max} range"),
            &format!("Enter a value between 0 and {max}"),
        )),
        None => warnings.push(warning(
            field,
            &format!("'{raw}' is not a number"),
            "Enter the mark as a plain number, without '%' or other symbols",
        )),
    }
}

fn check_timestamp(warnings: &mut Vec<ProfileWarning>, field: &str, raw: &str) {
    if DateTime::parse_from_rfc3339(raw.trim()).is_err() {
        warnings.push(warning(
            field,
            &format!("'{raw}' is not an RFC 3339 timestamp"),
            "Send timestamps like '2025-01-10T08:00:00Z'",
        ));
    }
}

fn warning(field: &str, reason: &str, suggestion: &str) -> ProfileWarning {
    ProfileWarning {
        field: field.to_string(),
        reason: reason.to_string(),
        suggestion: suggestion.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::builder::sample_profile;

    fn fields(result: &ProfileValidationResult) -> Vec<&str> {
        result.warnings.iter().map(|w| w.field.as_str()).collect()
    }

    #[test]
    fn test_clean_profile_passes() {
        let r = validate_profile(&sample_profile());
        assert!(r.passed, "unexpected warnings: {:?}", r.warnings);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_pursuing_without_semester_warns() {
        let mut p = sample_profile();
        p.current_semester = None;
        let r = validate_profile(&p);
        assert!(!r.passed);
        assert_eq!(fields(&r), vec!["currentSemester"]);
        assert!(r.warnings[0].reason.contains("no current semester"));
    }

    #[test]
    fn test_completed_without_semester_passes() {
        let mut p = sample_profile();
        p.degree_status = DegreeStatus::Completed;
        p.current_semester = None;
        assert!(validate_profile(&p).passed);
    }

    #[test]
    fn test_non_numeric_semester_warns() {
        let mut p = sample_profile();
        p.current_semester = Some("third".to_string());
        assert_eq!(fields(&validate_profile(&p)), vec!["currentSemester"]);

        p.current_semester = Some("0".to_string());
        assert_eq!(fields(&validate_profile(&p)), vec!["currentSemester"]);
    }

    #[test]
    fn test_bad_graduation_year() {
        let mut p = sample_profile();
        p.graduation_year = "27".to_string();
        assert_eq!(fields(&validate_profile(&p)), vec!["graduationYear"]);
    }

    #[test]
    fn test_percentage_out_of_range() {
        let mut p = sample_profile();
        p.tenth_percentage = "104".to_string();
        let r = validate_profile(&p);
        assert_eq!(fields(&r), vec!["tenthPercentage"]);
        assert!(r.warnings[0].reason.contains("outside"));
    }

    #[test]
    fn test_percentage_with_symbol_is_not_numeric() {
        let mut p = sample_profile();
        p.twelfth_percentage = "88%".to_string();
        let r = validate_profile(&p);
        assert_eq!(fields(&r), vec!["twelfthPercentage"]);
        assert!(r.warnings[0].reason.contains("not a number"));
    }

    #[test]
    fn test_nan_mark_is_not_a_number() {
        let mut p = sample_profile();
        p.overall_cgpa = Some("NaN".to_string());
        let r = validate_profile(&p);
        assert_eq!(fields(&r), vec!["overallCGPA"]);
        assert!(r.warnings[0].reason.contains("not a number"));

        p.overall_cgpa = Some("inf".to_string());
        assert!(validate_profile(&p).warnings[0].reason.contains("not a number"));
    }

    #[test]
    fn test_non_rfc3339_timestamp_warns() {
        let mut p = sample_profile();
        p.created_at = "2025-01-10 08:00:00".to_string();
        p.updated_at = "2025-01-10T08:00:00+05:30".to_string();
        assert_eq!(fields(&validate_profile(&p)), vec!["createdAt"]);
    }

    #[test]
    fn test_cgpa_checked_only_when_present() {
        let mut p = sample_profile();
        p.overall_cgpa = Some("9.8".to_string());
        assert!(validate_profile(&p).passed);

        p.overall_cgpa = Some("11".to_string());
        assert_eq!(fields(&validate_profile(&p)), vec!["overallCGPA"]);

        p.overall_cgpa = None;
        assert!(validate_profile(&p).passed);
    }

    #[test]
    fn test_blank_role_and_bad_email() {
        let mut p = sample_profile();
        p.target_role = "   ".to_string();
        p.email = "asha.example.com".to_string();
        assert_eq!(fields(&validate_profile(&p)), vec!["targetRole", "email"]);
    }
}
