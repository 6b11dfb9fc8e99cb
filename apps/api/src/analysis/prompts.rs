// LLM prompt constants and the message builder for skill analysis.

use crate::llm_client::ChatMessage;

/// System prompt — enforces JSON-only output with the four result keys.
pub const SKILL_MATCH_SYSTEM: &str = "You are a JSON-only response bot. \
    You must ONLY return a properly formatted JSON object. \
    DO NOT include any explanations, notes, or other text before or after the JSON. \
    The JSON must contain exactly these keys: \
    matched_skills, missing_skills, additional_skills, and match_percentage.";

const SCHEMA_DESCRIPTION: &str = "\
Return a JSON object with these exact keys:
- matched_skills (array of strings): skills present in both
- missing_skills (array of strings): skills in job description but missing from resume
- additional_skills (array of strings): skills in resume but not required in job description
- match_percentage (number): percentage of job requirements matched

RESPOND WITH ONLY THE JSON OBJECT.";

/// Builds the user instruction. Both documents are embedded verbatim.
pub fn skill_match_prompt(job_description: &str, resume: &str) -> String {
    format!(
        "Extract skills from this job description and resume:\n\n\
         Job Description:\n{job_description}\n\n\
         Resume:\n{resume}\n\n\
         {SCHEMA_DESCRIPTION}"
    )
}

/// Assembles the two-message sequence sent to the completion service.
pub fn build_messages(job_description: &str, resume: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SKILL_MATCH_SYSTEM),
        ChatMessage::user(skill_match_prompt(job_description, resume)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::REQUIRED_KEYS;
    use crate::llm_client::Role;

    #[test]
    fn test_builds_system_then_user() {
        let messages = build_messages("Need Rust", "I know Rust");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[0].content, SKILL_MATCH_SYSTEM);
    }

    #[test]
    fn test_system_and_user_name_every_required_key() {
        let messages = build_messages("jd", "cv");
        for key in REQUIRED_KEYS {
            assert!(messages[0].content.contains(key), "system prompt lacks {key}");
            assert!(messages[1].content.contains(key), "user prompt lacks {key}");
        }
    }

    #[test]
    fn test_documents_embedded_verbatim_in_order() {
        let jd = "Senior Data Engineer\nRequired: Python, SQL, Airflow";
        let resume = "Jane Doe\nSkills: Python, SQL, Go";
        let prompt = skill_match_prompt(jd, resume);

        let jd_at = prompt.find(jd).expect("job description missing");
        let resume_at = prompt.find(resume).expect("resume missing");
        assert!(jd_at < resume_at);
    }

    #[test]
    fn test_template_markers_in_documents_are_not_substituted() {
        let jd = "Use {resume} placeholders and {\"json\": true}";
        let resume = "{job_description}";
        let prompt = skill_match_prompt(jd, resume);
        assert!(prompt.contains(jd));
        assert!(prompt.contains("Resume:\n{job_description}\n"));
    }

    #[test]
    fn test_empty_documents_are_accepted() {
        let messages = build_messages("", "");
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.contains("Job Description:\n\n"));
    }
}
