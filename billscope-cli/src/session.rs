//! Session orchestration: input, extraction, validation gate, analysis.
//!
//! A [`Session`] is an owned, per-user value - nothing here is global or
//! shared. It holds the extracted text of the current input and the single
//! retained analysis result, and walks the phases
//! `Idle -> TextLoaded -> Validated | Rejected -> AnalysisPending ->
//! AnalysisDisplayed`.

use billscope_analysis::{build_prompt, is_valid_bill, Provider};
use billscope_common::{Error, Result};
use billscope_extract::{DocumentFetcher, DocumentSource};

/// Message shown when the heuristic gate rejects an input.
pub const REJECTION_MESSAGE: &str = "This does not appear to be a valid government bill.";

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No input provided yet.
    Idle,
    /// Text extracted, not yet validated.
    TextLoaded,
    /// The heuristic gate accepted the current text.
    Validated,
    /// The heuristic gate rejected the current text. Terminal for this
    /// input; new input is required to continue.
    Rejected,
    /// An analysis request is in flight.
    AnalysisPending,
    /// The latest analysis result is on display.
    AnalysisDisplayed,
}

/// One user's interactive state.
pub struct Session {
    phase: Phase,
    text: Option<String>,
    analysis: Option<String>,
}

impl Session {
    /// Create an idle session with no retained analysis.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            text: None,
            analysis: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Extracted text of the current input, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The most recent analysis result.
    ///
    /// Deliberately not invalidated when the input changes - it always
    /// reflects the last successfully completed analysis, which may be of
    /// an earlier input.
    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    /// Load new input: extract its text, then run the validation gate.
    ///
    /// Returns whether the gate accepted the text. On extraction failure
    /// the previous session state is left intact.
    pub async fn load(&mut self, fetcher: &DocumentFetcher, source: DocumentSource) -> Result<bool> {
        let description = source.describe();
        let text = fetcher.extract(source).await?;

        tracing::info!(source = %description, chars = text.chars().count(), "Bill text loaded");
        Ok(self.install_text(text))
    }

    /// Install extracted text and run the gate over it.
    fn install_text(&mut self, text: String) -> bool {
        self.text = Some(text);
        self.phase = Phase::TextLoaded;
        self.validate()
    }

    /// Run the heuristic gate over the loaded text.
    fn validate(&mut self) -> bool {
        let valid = self.text.as_deref().is_some_and(is_valid_bill);
        self.phase = if valid { Phase::Validated } else { Phase::Rejected };

        if !valid {
            tracing::info!("Heuristic gate rejected the input");
        }
        valid
    }

    /// Request an analysis of the validated text.
    ///
    /// Builds the prompt, sends it to the provider, and replaces the
    /// retained analysis on success. On failure the previously displayed
    /// analysis (if any) remains in place and the error propagates; there
    /// is no retry.
    pub async fn request_analysis(&mut self, provider: &dyn Provider) -> Result<&str> {
        match self.phase {
            Phase::Validated | Phase::AnalysisDisplayed => {}
            Phase::Rejected => return Err(Error::Rejected(REJECTION_MESSAGE.into())),
            Phase::Idle | Phase::TextLoaded | Phase::AnalysisPending => {
                return Err(Error::InvalidInput("No validated bill text loaded".into()))
            }
        }

        let Some(text) = self.text.clone() else {
            return Err(Error::InvalidInput("No validated bill text loaded".into()));
        };

        self.phase = Phase::AnalysisPending;
        let prompt = build_prompt(&text);

        match provider.complete(&prompt).await {
            Ok(result) => {
                self.analysis = Some(result);
                self.phase = Phase::AnalysisDisplayed;
                Ok(self.analysis.as_deref().unwrap_or_default())
            }
            Err(e) => {
                // The previously displayed result, if any, stays visible
                self.phase = if self.analysis.is_some() {
                    Phase::AnalysisDisplayed
                } else {
                    Phase::Validated
                };
                Err(e)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Provider returning a canned reply, or failing when `reply` is None.
    struct MockProvider {
        reply: Option<String>,
    }

    #[async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            match &self.reply {
                Some(r) => Ok(r.clone()),
                None => Err(Error::Inference("mock failure".into())),
            }
        }
    }

    fn valid_bill_text() -> String {
        let mut text = String::from(
            "A Bill to amend the tax act, introduced in Parliament by the Finance Minister. ",
        );
        while text.chars().count() <= 500 {
            text.push_str("Whereas it is expedient to provide for the levy of tax. ");
        }
        text
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.text().is_none());
        assert!(session.analysis().is_none());
    }

    #[test]
    fn test_valid_text_reaches_validated() {
        let mut session = Session::new();
        assert!(session.install_text(valid_bill_text()));
        assert_eq!(session.phase(), Phase::Validated);
    }

    #[test]
    fn test_invalid_text_reaches_rejected() {
        let mut session = Session::new();
        assert!(!session.install_text("too short".into()));
        assert_eq!(session.phase(), Phase::Rejected);
    }

    #[tokio::test]
    async fn test_analysis_stores_result() {
        let mut session = Session::new();
        session.install_text(valid_bill_text());

        let provider = MockProvider {
            reply: Some("SECTOR: Finance".into()),
        };
        let result = session.request_analysis(&provider).await.unwrap().to_string();
        assert_eq!(result, "SECTOR: Finance");
        assert_eq!(session.phase(), Phase::AnalysisDisplayed);
        assert_eq!(session.analysis(), Some("SECTOR: Finance"));
    }

    #[tokio::test]
    async fn test_analysis_replaces_previous_result() {
        let mut session = Session::new();
        session.install_text(valid_bill_text());

        let first = MockProvider {
            reply: Some("first".into()),
        };
        session.request_analysis(&first).await.unwrap();

        let second = MockProvider {
            reply: Some("second".into()),
        };
        session.request_analysis(&second).await.unwrap();
        assert_eq!(session.analysis(), Some("second"));
    }

    #[tokio::test]
    async fn test_rejected_input_blocks_analysis() {
        let mut session = Session::new();
        session.install_text("definitely not a bill".into());

        let provider = MockProvider {
            reply: Some("unused".into()),
        };
        let err = session.request_analysis(&provider).await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(session.phase(), Phase::Rejected);
    }

    #[tokio::test]
    async fn test_idle_session_blocks_analysis() {
        let mut session = Session::new();
        let provider = MockProvider { reply: None };
        let err = session.request_analysis(&provider).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_inference_failure_keeps_previous_result() {
        let mut session = Session::new();
        session.install_text(valid_bill_text());

        let working = MockProvider {
            reply: Some("kept analysis".into()),
        };
        session.request_analysis(&working).await.unwrap();

        // New input, then a failing provider
        session.install_text(valid_bill_text());
        let broken = MockProvider { reply: None };
        let err = session.request_analysis(&broken).await.unwrap_err();

        assert!(matches!(err, Error::Inference(_)));
        assert_eq!(session.analysis(), Some("kept analysis"));
        assert_eq!(session.phase(), Phase::AnalysisDisplayed);
    }

    #[tokio::test]
    async fn test_inference_failure_without_previous_result() {
        let mut session = Session::new();
        session.install_text(valid_bill_text());

        let broken = MockProvider { reply: None };
        assert!(session.request_analysis(&broken).await.is_err());
        assert!(session.analysis().is_none());
        assert_eq!(session.phase(), Phase::Validated);
    }

    #[tokio::test]
    async fn test_result_survives_new_input() {
        let mut session = Session::new();
        session.install_text(valid_bill_text());

        let provider = MockProvider {
            reply: Some("stale but displayed".into()),
        };
        session.request_analysis(&provider).await.unwrap();

        // Loading a new document does not clear the displayed analysis
        session.install_text(valid_bill_text());
        assert_eq!(session.analysis(), Some("stale but displayed"));

        // Even a rejected new input leaves it in place
        session.install_text("not a bill".into());
        assert_eq!(session.analysis(), Some("stale but displayed"));
    }
}
