//! Prompt composition for answer synthesis.
//!
//! Both prompts demand a bare answer with no surrounding prose; the
//! similarity scoring downstream compares raw strings, so any
//! explanation the model adds counts against it.

use trellis_core::models::ReasoningChain;

/// Prompt for the knowledge-grounded path: question plus the
/// verbalized reasoning chain.
pub fn rag_prompt(question: &str, chain: &ReasoningChain) -> String {
    format!(
        "You are a helpful assistant. Use the reasoning below to answer the question directly \
and concisely. \n\nIMPORTANT INSTRUCTIONS:\n- Provide ONLY the direct answer to the question\n\
- Do NOT add explanations, context, or additional information\n- Do NOT say \"The answer is...\" \
or similar phrases\n- Keep your response as brief as possible\n- If the reasoning does not \
contain the answer, just say \"Unknown\"\n\nReasoning:\n{}\n\nQuestion: {}\n\nAnswer:",
        chain.render(),
        question
    )
}

/// Prompt for the knowledge-free baseline: the question alone.
pub fn baseline_prompt(question: &str) -> String {
    format!(
        "You are a helpful assistant. Answer the following question directly and concisely. \
\n\nIMPORTANT INSTRUCTIONS:\n- Provide ONLY the direct answer to the question\n- Do NOT add \
explanations, context, or additional information\n- Do NOT say \"The answer is...\" or similar \
phrases\n- Keep your response as brief as possible\n- If you don't know the answer, just say \
\"Unknown\"\n\nQuestion: {question}\n\nAnswer:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rag_prompt_embeds_chain_and_question() {
        let chain = ReasoningChain::new(vec![
            "Reason 1: framing.".to_string(),
            "Knowledge 1: Belgium is led by Philippe of Belgium.".to_string(),
        ]);
        let p = rag_prompt("Who is the leader of Belgium?", &chain);

        assert!(p.contains("Reasoning:\nReason 1: framing.\nKnowledge 1:"));
        assert!(p.contains("Question: Who is the leader of Belgium?"));
        assert!(p.ends_with("Answer:"));
    }

    #[test]
    fn baseline_prompt_has_no_reasoning_section() {
        let p = baseline_prompt("Who is the leader of Belgium?");
        assert!(!p.contains("Reasoning:"));
        assert!(p.contains("just say \"Unknown\""));
        assert!(p.ends_with("Answer:"));
    }

    #[test]
    fn both_prompts_forbid_explanations() {
        let chain = ReasoningChain::single("Knowledge 1: fact.");
        for p in [
            rag_prompt("q", &chain),
            baseline_prompt("q"),
        ] {
            assert!(p.contains("Provide ONLY the direct answer"));
            assert!(p.contains("Do NOT add explanations"));
        }
    }
}
