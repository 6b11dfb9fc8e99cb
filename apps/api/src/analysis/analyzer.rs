//! Skill analysis — one prompt, one completion, one normalized result.

use tracing::{debug, info, warn};

use crate::analysis::models::SkillMatchResult;
use crate::analysis::normalizer::{normalize, AnalysisError};
use crate::analysis::prompts::build_messages;
use crate::llm_client::CompletionService;

/// Compares a resume against a job description via the completion service.
///
/// The caller is responsible for rejecting empty inputs and credentials.
/// Exactly one outbound call is made; failures are never retried.
pub async fn analyze(
    llm: &dyn CompletionService,
    job_description: &str,
    resume: &str,
    api_key: &str,
) -> Result<SkillMatchResult, AnalysisError> {
    let messages = build_messages(job_description, resume);

    let raw = llm.complete(&messages, api_key).await?;
    debug!("Raw response from LLM: {raw}");

    match normalize(&raw) {
        Ok(result) => {
            info!(
                "Skill analysis complete: {} matched, {} missing, {} additional, {:.1}%",
                result.matched_skills().len(),
                result.missing_skills().len(),
                result.additional_skills().len(),
                result.match_percentage()
            );
            Ok(result)
        }
        Err(e) => {
            warn!("Could not normalize LLM response: {e}");
            Err(e)
        }
    }
}
