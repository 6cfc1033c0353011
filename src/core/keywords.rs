// src/core/keywords.rs
//! HR relevance by keyword. Plain substring membership over the lower-cased
//! "title department" string; no tokenizing, so "Talented" matches "talent".

pub const HR_KEYWORDS: &[&str] = &[
    "human resources",
    "hr",
    "talent",
    "recruiting",
    "recruitment",
    "people",
    "employee",
    "workforce",
    "compensation",
    "benefits",
    "training",
    "development",
    "learning",
    "organizational",
];

pub fn is_hr_related(job_title: &str, department: Option<&str>) -> bool {
    let text = format!("{} {}", job_title, department.unwrap_or("")).to_lowercase();
    HR_KEYWORDS.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_or_department_can_match() {
        assert!(is_hr_related("HR Manager", Some("People")));
        assert!(is_hr_related("Analyst", Some("Workforce Planning")));
        assert!(is_hr_related("Compensation Analyst", None));
    }

    #[test]
    fn unrelated_roles_do_not_match() {
        assert!(!is_hr_related("Software Engineer", Some("Engineering")));
        assert!(!is_hr_related("Sales Lead", None));
    }

    #[test]
    fn substring_overmatch_is_kept() {
        assert!(is_hr_related("Talented Artist", None));
        // "hr" hides inside "Three"
        assert!(is_hr_related("Three Star Chef", None));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_hr_related("HUMAN RESOURCES GENERALIST", None));
    }
}
