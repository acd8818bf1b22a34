/// Required skills covered by at least one student skill.
///
/// A required skill matches when it contains, or is contained in, a student skill
/// (case-insensitive). Each required skill is reported at most once, in input order.
/// Blank skills on either side never match.
pub fn find_skill_matches(student_skills: &[String], required_skills: &[String]) -> Vec<String> {
    let student: Vec<String> = student_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    required_skills
        .iter()
        .filter(|required| {
            let required = required.trim().to_lowercase();
            !required.is_empty()
                && student
                    .iter()
                    .any(|s| required.contains(s.as_str()) || s.contains(required.as_str()))
        })
        .cloned()
        .collect()
}
