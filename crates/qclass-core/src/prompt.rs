//! Instruction prompt sent to the model.

/// Build the classifier prompt for `query`.
///
/// The query is embedded verbatim between double quotes; embedded quote
/// characters are not escaped.
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"
You are a query classifier. Your job is to classify user queries as either "simple" or "complex".

Simple queries are basic questions that can be answered quickly, like:
- "What is the weather?"
- "What time is it?"
- "How old is the president?"

Complex queries require more thought, research, or multiple steps, like:
- "Explain quantum physics and its applications"
- "Write a business plan for a startup"
- "Compare different investment strategies"

User query: "{query}"

Classification (respond with only "simple" or "complex"):
"#
    )
}
