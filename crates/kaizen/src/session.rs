//! The analysis-run orchestrator.

use std::sync::Arc;

use kaizen_core::{
    AnalysisReport, GenerateRequest, Input, Language, MediaAsset, MediaSource, Message,
    PayloadPart, Rejection, RequestPayload, Role, RunStatus,
};
use kaizen_error::{KaizenError, KaizenErrorKind, KaizenResult, SessionError, SessionErrorKind};
use kaizen_error::GeminiErrorKind;
use kaizen_interface::KaizenDriver;
use kaizen_media::{FileCandidate, IngestionGate, Transcoder};
use tracing::{info, instrument, warn};

use crate::config::AnalysisSettings;
use crate::{report, templates};

/// One user-facing analysis session.
///
/// Holds the admitted selection list, the report language, the status of
/// the current run, and the last produced report. A session services one
/// run at a time; nothing is persisted beyond the session.
pub struct AnalysisSession {
    gate: IngestionGate,
    transcoder: Transcoder,
    driver: Arc<dyn KaizenDriver>,
    settings: AnalysisSettings,
    context: String,
    assets: Vec<MediaAsset>,
    status: RunStatus,
    report: Option<AnalysisReport>,
}

impl AnalysisSession {
    /// Create a session with default settings over the given driver.
    pub fn new(driver: Arc<dyn KaizenDriver>) -> Self {
        Self::with_settings(driver, AnalysisSettings::default())
    }

    /// Create a session with explicit settings.
    pub fn with_settings(driver: Arc<dyn KaizenDriver>, settings: AnalysisSettings) -> Self {
        Self {
            gate: IngestionGate::default(),
            transcoder: Transcoder::default(),
            driver,
            settings,
            context: String::new(),
            assets: Vec::new(),
            status: RunStatus::Idle,
            report: None,
        }
    }

    /// Replace the transcoder (mainly for alternate frame sources).
    pub fn with_transcoder(mut self, transcoder: Transcoder) -> Self {
        self.transcoder = transcoder;
        self
    }

    /// The report language.
    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Set the report language.
    pub fn set_language(&mut self, language: Language) {
        self.settings.language = language;
    }

    /// Set the free-text analysis context submitted with the footage.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// The current run status.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// The admitted selection, in selection order.
    pub fn assets(&self) -> &[MediaAsset] {
        &self.assets
    }

    /// The last produced report, if any.
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Run candidate files through the ingestion gate and append the
    /// accepted ones to the selection.
    ///
    /// Rejections are returned for user-facing reporting; one rejected
    /// file never blocks its siblings.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn add_files(&mut self, candidates: &[FileCandidate]) -> Vec<Rejection> {
        let batch = self.gate.admit_batch(candidates).await;
        if !batch.rejected.is_empty() {
            warn!(rejected = batch.rejected.len(), "some candidates were refused");
        }
        self.assets.extend(batch.accepted);
        batch.rejected
    }

    /// Adopt assets admitted elsewhere (another gate, a test fixture).
    pub fn adopt_assets(&mut self, assets: Vec<MediaAsset>) {
        self.assets.extend(assets);
    }

    /// Remove one asset by filename, releasing its preview handle.
    ///
    /// Returns false if no asset with that name is selected.
    pub fn remove_asset(&mut self, name: &str) -> bool {
        match self.assets.iter().position(|a| a.name == name) {
            Some(index) => {
                let asset = self.assets.remove(index);
                asset.preview.release();
                true
            }
            None => false,
        }
    }

    /// Drop the whole selection, releasing every preview handle.
    pub fn clear_assets(&mut self) {
        for asset in self.assets.drain(..) {
            asset.preview.release();
        }
    }

    /// Replace the selection wholesale, releasing the superseded previews.
    pub fn replace_assets(&mut self, assets: Vec<MediaAsset>) {
        self.clear_assets();
        self.assets = assets;
    }

    /// Run one analysis over the current selection.
    ///
    /// Transcodes the selection into a request payload, submits it once
    /// (no retry), and stores the resulting report. An empty model
    /// response is a soft failure: the run completes with a per-language
    /// placeholder body. Any other failure leaves the session Failed and
    /// the previous report intact.
    #[instrument(skip(self), fields(assets = self.assets.len(), language = %self.settings.language))]
    pub async fn run(&mut self) -> KaizenResult<&AnalysisReport> {
        if self.status.is_in_flight() {
            return Err(SessionError::new(SessionErrorKind::RunInFlight).into());
        }
        if self.assets.is_empty() {
            return Err(SessionError::new(SessionErrorKind::NoAssets).into());
        }
        if self.context.trim().is_empty() {
            return Err(SessionError::new(SessionErrorKind::MissingContext).into());
        }

        // Admission already validated each asset; the phase is observable
        // so callers see the same progression on every run.
        self.status = RunStatus::Validating;

        self.status = RunStatus::Transcoding;
        let payload = match self
            .transcoder
            .build_payload(&self.assets, &self.context)
            .await
        {
            Ok(payload) => payload,
            Err(e) => {
                self.status = RunStatus::Failed;
                return Err(e.into());
            }
        };

        let request = GenerateRequest {
            messages: vec![
                Message {
                    role: Role::System,
                    content: vec![Input::Text(
                        templates::system_prompt(self.settings.language).to_string(),
                    )],
                },
                Message {
                    role: Role::User,
                    content: payload_inputs(payload),
                },
            ],
            max_tokens: None,
            temperature: Some(self.settings.temperature),
            model: Some(self.settings.model.clone()),
        };

        self.status = RunStatus::Submitted;
        let markdown = match self.driver.generate(&request).await {
            Ok(response) => response.text(),
            Err(e) if is_empty_response(&e) => {
                warn!("model returned no content, substituting placeholder");
                report::placeholder(self.settings.language).to_string()
            }
            Err(e) => {
                self.status = RunStatus::Failed;
                return Err(e);
            }
        };

        self.status = RunStatus::Completed;
        info!(bytes = markdown.len(), "analysis completed");
        Ok(self.report.insert(AnalysisReport::now(markdown)))
    }
}

/// Lower payload parts into request inputs, preserving order.
fn payload_inputs(payload: RequestPayload) -> Vec<Input> {
    payload
        .parts
        .into_iter()
        .map(|part| match part {
            PayloadPart::Text(text) => Input::Text(text),
            PayloadPart::InlineMedia { mime, data } if mime.starts_with("image/") => Input::Image {
                mime: Some(mime),
                source: MediaSource::Binary(data),
            },
            PayloadPart::InlineMedia { mime, data } => Input::Video {
                mime: Some(mime),
                source: MediaSource::Binary(data),
            },
        })
        .collect()
}

fn is_empty_response(err: &KaizenError) -> bool {
    matches!(
        err.kind(),
        KaizenErrorKind::Gemini(g) if g.kind == GeminiErrorKind::EmptyResponse
    )
}
