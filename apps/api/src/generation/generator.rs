//! Resume generation — turns a `CandidateProfile` into resume text.
//!
//! `AppState` holds an `Arc<dyn ResumeGenerator>`; the default backend is
//! `LlmResumeGenerator`. All LLM calls go through `llm_client`.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM};
use crate::llm_client::LlmClient;
use crate::profile::CandidateProfile;

#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, profile: &CandidateProfile) -> Result<String, AppError>;
}

/// Claude-backed generator.
pub struct LlmResumeGenerator(pub LlmClient);

#[async_trait]
impl ResumeGenerator for LlmResumeGenerator {
    async fn generate(&self, profile: &CandidateProfile) -> Result<String, AppError> {
        let prompt = build_prompt(profile)?;
        let text = self
            .0
            .call_text(&prompt, RESUME_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;
        info!(chars = text.len(), "Resume text generated");
        Ok(fix_resume_bullets(&text))
    }
}

fn build_prompt(profile: &CandidateProfile) -> Result<String, AppError> {
    let candidate_json = serde_json::to_string_pretty(profile).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize candidate profile: {e}"))
    })?;
    Ok(RESUME_PROMPT_TEMPLATE.replace("{candidate_json}", &candidate_json))
}

/// Replaces a leading "-" on any line with a "• " bullet.
pub fn fix_resume_bullets(text: &str) -> String {
    text.lines()
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => format!("• {rest}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
