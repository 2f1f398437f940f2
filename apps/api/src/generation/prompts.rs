//! Prompt templates for the Generation module.
//!
//! The resume and cover-letter prompts embed skills positionally. Every
//! positional slot goes through `skill_slot` — the backend may have produced
//! fewer skills than the template references.

/// Prompt for skill extraction. Replace `{job_title}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str =
    "List 8-12 core skills or technologies commonly required for a {job_title} position. \
     Return ONLY a comma-separated list with no other text. \
     Example format: Python, SQL, Data Analysis, Excel, Tableau, Machine Learning";

pub fn skills_prompt(job_title: &str) -> String {
    SKILLS_PROMPT_TEMPLATE.replace("{job_title}", job_title)
}

/// Returns the skill at `idx`, or `fallback` when the list is too short.
pub fn skill_slot<'a>(skills: &'a [String], idx: usize, fallback: &'a str) -> &'a str {
    skills.get(idx).map(String::as_str).unwrap_or(fallback)
}

/// Builds the resume prompt: a one-page Markdown resume built around the
/// first 8 skills, with `##` section headers the backend is instructed to
/// reproduce verbatim.
pub fn resume_prompt(job_title: &str, skills: &[String]) -> String {
    let skills_list = skills
        .iter()
        .take(8)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let lead = skill_slot(skills, 0, "relevant technical skills");
    let second = skill_slot(skills, 1, "related technologies");
    let second_bullet = skill_slot(skills, 1, "Additional skill");
    let third_bullet = skill_slot(skills, 2, "Additional skill");
    let second_experience = skill_slot(skills, 1, "technical skills");

    format!(
        r#"Create a professional one-page resume in clean Markdown format for a {job_title} position.

Focus on these key skills: {skills_list}

Structure (use ## for headers):

## Contact Information
John Doe | john.doe@email.com | (555) 123-4567 | linkedin.com/in/johndoe

## Professional Summary
Write 2-3 sentences highlighting expertise as a {job_title} with experience in {lead}, {second}, and other key skills.

## Key Skills
List 6-8 relevant skills as bullet points, including:
- {lead}
- {second_bullet}
- {third_bullet}
- And 3-5 more relevant skills

## Work Experience

**Senior {job_title}** | ABC Corporation | 2021 - Present
- Achievement demonstrating {lead} expertise with quantifiable results
- Technical accomplishment showcasing problem-solving abilities
- Leadership or collaboration example

**{job_title}** | XYZ Company | 2018 - 2021
- Key accomplishment using {second_experience}
- Process improvement with measurable impact
- Cross-functional collaboration example

## Education
Bachelor of Science in Computer Science
State University | Graduated 2018

Keep it professional and concise. Use proper Markdown formatting with ## for section headers."#
    )
}

/// Builds the cover-letter prompt: 250-300 words around the first 5 skills,
/// three bold-labelled paragraphs, plain text output.
pub fn cover_letter_prompt(job_title: &str, skills: &[String]) -> String {
    let skills_list = skills
        .iter()
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let lead = skill_slot(skills, 0, "relevant professional skills");
    let second = skill_slot(skills, 1, "technical proficiency");
    let third = skill_slot(skills, 2, "additional relevant skills");

    format!(
        r#"Write a professional cover letter for a {job_title} position (250-300 words).

Highlight these skills: {skills_list}

Structure:

**Paragraph 1 (Opening):**
Express genuine enthusiasm for the {job_title} position. Mention 1-2 key qualifications that make you an ideal candidate.

**Paragraph 2 (Body):**
Highlight 2-3 relevant skills and experiences:
- Specific example demonstrating {lead} expertise
- Accomplishment showing {second}
- Brief mention of {third}

**Paragraph 3 (Closing):**
Express enthusiasm for contributing to the team, mention you look forward to discussing your qualifications further, and thank them for their consideration.

Sincerely,
John Doe

Be professional, concise, and personable. Use plain text paragraphs, no special formatting or markdown."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_prompt_embeds_job_title() {
        let prompt = skills_prompt("Data Analyst");
        assert!(prompt.contains("Data Analyst position"));
        assert!(prompt.contains("comma-separated list"));
    }

    #[test]
    fn test_skill_slot_in_bounds() {
        let list = skills(&["Python", "SQL"]);
        assert_eq!(skill_slot(&list, 0, "fallback"), "Python");
        assert_eq!(skill_slot(&list, 1, "fallback"), "SQL");
    }

    #[test]
    fn test_skill_slot_out_of_bounds_uses_fallback() {
        let list = skills(&["Python"]);
        assert_eq!(skill_slot(&list, 1, "related technologies"), "related technologies");
        assert_eq!(skill_slot(&[], 0, "fallback"), "fallback");
    }

    #[test]
    fn test_resume_prompt_contains_section_headers() {
        let prompt = resume_prompt("Data Analyst", &skills(&["Python", "SQL", "Excel"]));
        assert!(prompt.contains("## Contact Information"));
        assert!(prompt.contains("## Professional Summary"));
        assert!(prompt.contains("## Key Skills"));
        assert!(prompt.contains("## Work Experience"));
        assert!(prompt.contains("## Education"));
        assert!(prompt.contains("**Senior Data Analyst**"));
    }

    #[test]
    fn test_resume_prompt_caps_skill_list_at_eight() {
        let many = skills(&[
            "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10",
        ]);
        let prompt = resume_prompt("Engineer", &many);
        assert!(prompt.contains("S1, S2, S3, S4, S5, S6, S7, S8"));
        assert!(!prompt.contains("S9"));
    }

    #[test]
    fn test_resume_prompt_short_skill_list_uses_fallbacks() {
        let prompt = resume_prompt("Nurse", &skills(&["Patient Care"]));
        assert!(prompt.contains("Patient Care"));
        assert!(prompt.contains("related technologies"));
        assert!(prompt.contains("Additional skill"));
        assert!(prompt.contains("technical skills"));
    }

    #[test]
    fn test_resume_prompt_empty_skills_does_not_panic() {
        let prompt = resume_prompt("Chef", &[]);
        assert!(prompt.contains("relevant technical skills"));
    }

    #[test]
    fn test_cover_letter_prompt_caps_skill_list_at_five() {
        let many = skills(&["S1", "S2", "S3", "S4", "S5", "S6"]);
        let prompt = cover_letter_prompt("Engineer", &many);
        assert!(prompt.contains("S1, S2, S3, S4, S5"));
        assert!(!prompt.contains("S6"));
    }

    #[test]
    fn test_cover_letter_prompt_contains_paragraph_labels() {
        let prompt = cover_letter_prompt("Data Analyst", &skills(&["Python", "SQL", "Excel"]));
        assert!(prompt.contains("**Paragraph 1 (Opening):**"));
        assert!(prompt.contains("**Paragraph 2 (Body):**"));
        assert!(prompt.contains("**Paragraph 3 (Closing):**"));
        assert!(prompt.contains("Python"));
    }

    #[test]
    fn test_cover_letter_prompt_short_skill_list_uses_fallbacks() {
        let prompt = cover_letter_prompt("Chef", &skills(&["Cooking"]));
        assert!(prompt.contains("Cooking expertise"));
        assert!(prompt.contains("technical proficiency"));
        assert!(prompt.contains("additional relevant skills"));
    }
}
