//! Meeting summarization
//!
//! Single pass, no retries: build the prompt pair, call the adapter once,
//! return its text untouched.

use crate::domain::models::CompletionRequest;
use crate::domain::prompts::PromptTemplates;
use crate::error::{AppError, Result};
use crate::ports::llm::CompletionPort;
use std::sync::Arc;

/// Generates structured meeting notes through one completion adapter
pub struct MeetingSummarizer {
    llm: Arc<dyn CompletionPort>,
}

impl MeetingSummarizer {
    pub fn new(llm: Arc<dyn CompletionPort>) -> Self {
        Self { llm }
    }

    /// Summarize `transcript`
    ///
    /// Every failure is returned as `AppError::SummaryGeneration` wrapping the
    /// original error.
    pub async fn summarize(
        &self,
        transcript: &str,
        context: Option<&str>,
        instructions: Option<&str>,
        max_tokens: u32,
    ) -> Result<String> {
        let prompt = PromptTemplates::build(transcript, context, instructions);
        log::debug!(
            "Built summary prompt: {} system chars, {} user chars",
            prompt.system.len(),
            prompt.user.len()
        );

        let request = CompletionRequest::new(Some(prompt.system), prompt.user, max_tokens)
            .map_err(AppError::summary_generation)?;

        let result = self
            .llm
            .complete(&request)
            .await
            .map_err(AppError::summary_generation)?;

        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CompletionResult;
    use crate::domain::prompts::SUMMARY_SECTIONS;
    use crate::ports::llm::MockCompletionPort;
    use crate::ports::mocks::RecordingCompletion;

    const SUMMARY: &str = "## Key Takeaways & Highlights\n- Q4 roadmap agreed\n\n\
        ## Discussion Points\n- Frontend ownership\n\n\
        ## Action Items\n- Alice: frontend (due Dec 15)";

    #[tokio::test]
    async fn test_summary_returned_verbatim() {
        let llm = RecordingCompletion::replying(SUMMARY);
        let summarizer = MeetingSummarizer::new(Arc::new(llm.clone()));

        let summary = summarizer
            .summarize("Alice owns frontend, due Dec 15", None, None, 4000)
            .await
            .unwrap();

        assert_eq!(summary, SUMMARY);
        for header in ["Key Takeaways & Highlights", "Discussion Points", "Action Items"] {
            assert!(summary.contains(header));
        }

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 4000);
        assert_eq!(
            requests[0].system_prompt.as_deref(),
            Some(PromptTemplates::system())
        );
        assert!(requests[0]
            .user_prompt
            .contains("Meeting Transcript:\nAlice owns frontend, due Dec 15"));
        for section in SUMMARY_SECTIONS {
            assert!(requests[0].user_prompt.contains(section));
        }
    }

    #[tokio::test]
    async fn test_zero_candidates_wrapped_as_summary_error() {
        let summarizer = MeetingSummarizer::new(Arc::new(RecordingCompletion::empty()));

        let err = summarizer
            .summarize("transcript", None, None, 4000)
            .await
            .unwrap_err();

        match err {
            AppError::SummaryGeneration(inner) => {
                assert!(matches!(*inner, AppError::ProviderResponse(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_with_context_and_instructions() {
        let mut llm = MockCompletionPort::new();
        llm.expect_complete()
            .times(1)
            .withf(|request| {
                request.user_prompt.contains("Additional Context:\nroadmap.pdf text")
                    && request.user_prompt.contains("Special Instructions:\nFocus on dates")
                    && request.max_tokens == 8192
            })
            .returning(|_| {
                Err(AppError::ProviderResponse(
                    "Chat completion failed (503): upstream unavailable".to_string(),
                ))
            });

        let summarizer = MeetingSummarizer::new(Arc::new(llm));
        let err = summarizer
            .summarize(
                "transcript",
                Some("roadmap.pdf text"),
                Some("Focus on dates"),
                8192,
            )
            .await
            .unwrap_err();

        assert!(err.is_provider_response());
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn test_zero_max_tokens_is_rejected_before_backend() {
        let mut llm = MockCompletionPort::new();
        llm.expect_complete().never();

        let summarizer = MeetingSummarizer::new(Arc::new(llm));
        let err = tokio_test::block_on(summarizer.summarize("transcript", None, None, 0)).unwrap_err();
        assert!(matches!(err, AppError::SummaryGeneration(ref inner) if matches!(**inner, AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_backend_text_not_post_processed() {
        let mut llm = MockCompletionPort::new();
        llm.expect_complete().returning(|_| {
            Ok(CompletionResult {
                text: "  raw **markdown**  ".to_string(),
            })
        });

        let summarizer = MeetingSummarizer::new(Arc::new(llm));
        let summary = summarizer.summarize("", None, None, 10).await.unwrap();
        assert_eq!(summary, "  raw **markdown**  ");
    }
}
