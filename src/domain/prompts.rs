//! Prompt templates for meeting summaries
//!
//! Builds the fixed system instruction and the composite user prompt from
//! reference context, custom instructions and the transcript. Output is a pure
//! function of the inputs.

/// Output sections every summary must contain, in order
pub const SUMMARY_SECTIONS: [&str; 3] = [
    "Key Takeaways & Highlights",
    "Discussion Points",
    "Action Items (with owners and due dates if mentioned)",
];

/// System and user prompt for one completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Default prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Fixed system instruction for the summarizer
    pub fn system() -> &'static str {
        r#"You are an expert meeting summarizer. Your task is to create clear, structured meeting notes.
Focus on key points, action items, and decisions made. Use markdown formatting for structure."#
    }

    /// Opening line of every user prompt
    pub fn preamble() -> &'static str {
        "Please summarize the following meeting transcript into structured notes."
    }

    /// Closing directive listing the required output sections
    pub fn format_directive() -> String {
        let sections = SUMMARY_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{}. {}", i + 1, section))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Please provide the summary in the following format:\n{}", sections)
    }

    /// Assemble the prompt pair
    ///
    /// Context and instructions sections are emitted only when they hold
    /// non-whitespace text; `Some("   ")` is treated the same as `None`.
    /// The transcript section is always present, even when the transcript
    /// itself is empty.
    pub fn build(transcript: &str, context: Option<&str>, instructions: Option<&str>) -> PromptPair {
        let mut sections = vec![Self::preamble().to_string()];

        if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
            sections.push(format!("Additional Context:\n{}", context));
        }

        if let Some(instructions) = instructions.filter(|i| !i.trim().is_empty()) {
            sections.push(format!("Special Instructions:\n{}", instructions));
        }

        sections.push(format!("Meeting Transcript:\n{}", transcript));
        sections.push(Self::format_directive());

        PromptPair {
            system: Self::system().to_string(),
            user: sections.join("\n\n"),
        }
    }
}
