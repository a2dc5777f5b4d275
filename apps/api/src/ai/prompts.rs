//! Prompt builders and response shapes for the AI endpoints.

use serde::{Deserialize, Serialize};

/// One generated summary suggestion. The model answers with snake_case
/// fields; camelCase is accepted on input for robustness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySuggestion {
    pub summary: String,
    #[serde(alias = "experienceLevel")]
    pub experience_level: String,
}

/// Asks for one summary per experience level, as strict JSON.
pub fn summary_suggestions_prompt(job_title: &str) -> String {
    format!(
        "Job Title: {job_title}.\n\
         Give me a list of summaries for 3 experience levels (Fresher, Mid, Senior) in 3-4 lines each.\n\
         Return ONLY a JSON array of objects with fields \"summary\" and \"experience_level\", no prose."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_job_title() {
        let prompt = summary_suggestions_prompt("Backend Engineer");
        assert!(prompt.contains("Job Title: Backend Engineer."));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_suggestion_accepts_both_field_spellings() {
        let snake: SummarySuggestion =
            serde_json::from_str(r#"{"summary": "s", "experience_level": "Mid"}"#).unwrap();
        assert_eq!(snake.experience_level, "Mid");

        let camel: SummarySuggestion =
            serde_json::from_str(r#"{"summary": "s", "experienceLevel": "Senior"}"#).unwrap();
        assert_eq!(camel.experience_level, "Senior");
    }
}
