//! Evaluation Prompt Construction
//!
//! Builds the instruction text sent with a practice answer. The model is told
//! to reply with exactly one JSON object carrying the required fields; the
//! recovery chain downstream tolerates the cases where it does not comply.

use crate::evaluation::schema::{EvaluationRecord, REQUIRED_FIELDS};

/// Build the evaluation prompt for one question/answer pair.
pub fn build_evaluation_prompt(question: &str, answer: &str) -> String {
    let example = serde_json::to_string_pretty(&EvaluationRecord::example())
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"You are an experienced AI product management interviewer evaluating a candidate's answer.

## Question

{question}

## Candidate Answer

{answer}

## Evaluation Instructions

Assess the answer the way a hiring panel would: problem framing, user focus, prioritization rationale, measurable outcomes, and communication structure.

Respond with EXACTLY ONE JSON object and nothing else:
- No prose before or after the object
- No markdown code fences
- Every one of these fields is required: {required}

Example of the expected shape:

{example}

Scores are 0-100. Keep `strengths` and `improvements` to short, concrete bullet sentences."#,
        question = question,
        answer = answer,
        required = REQUIRED_FIELDS.join(", "),
        example = example,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question_and_answer() {
        let prompt = build_evaluation_prompt(
            "How would you prioritize the roadmap?",
            "I would start with user impact.",
        );
        assert!(prompt.contains("How would you prioritize the roadmap?"));
        assert!(prompt.contains("I would start with user impact."));
    }

    #[test]
    fn test_prompt_lists_every_required_field() {
        let prompt = build_evaluation_prompt("q", "a");
        for field in REQUIRED_FIELDS {
            assert!(prompt.contains(field), "prompt missing field {}", field);
        }
    }

    #[test]
    fn test_prompt_example_is_valid_json() {
        let prompt = build_evaluation_prompt("q", "a");
        let start = prompt.find('{').unwrap();
        let end = prompt.rfind('}').unwrap();
        let value: serde_json::Value = serde_json::from_str(&prompt[start..=end]).unwrap();
        assert!(value.get("score").is_some());
    }
}
