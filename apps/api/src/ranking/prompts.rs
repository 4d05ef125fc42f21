// LLM prompt constants for role re-ranking.
// The system prompt comes from llm_client::prompts::JSON_ONLY_SYSTEM.

/// Re-rank prompt template. Replace `{roles}` and then `{resume}` before sending.
pub const RERANK_PROMPT_TEMPLATE: &str = r#"You are a career advisor. Given this resume excerpt and list of job roles, re-rank the roles by relevance and provide a brief reason for each.

Resume:
{resume}

Roles:
{roles}

Return ONLY a JSON array with this EXACT shape, one object per role listed above:
[{"role": "Role Name", "score": 0-100, "reason": "Brief reason"}]

Use the role names exactly as given. Ensure the response is valid JSON."#;

/// Fills the template with newline-joined candidate roles and the resume excerpt.
pub fn build_rerank_prompt(resume_excerpt: &str, roles: &[String]) -> String {
    RERANK_PROMPT_TEMPLATE
        .replace("{roles}", &roles.join("\n"))
        .replace("{resume}", resume_excerpt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_roles_one_per_line() {
        let prompt = build_rerank_prompt(
            "10 years of QA",
            &["QA Lead".to_string(), "SDET".to_string()],
        );
        assert!(prompt.contains("Roles:\nQA Lead\nSDET\n"));
        assert!(prompt.contains("Resume:\n10 years of QA\n"));
    }

    #[test]
    fn test_placeholders_in_resume_left_alone() {
        let prompt = build_rerank_prompt("my {roles} section", &["SDET".to_string()]);
        assert!(prompt.contains("my {roles} section"));
    }
}
