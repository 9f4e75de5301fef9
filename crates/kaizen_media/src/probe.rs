//! Metadata probing via ffprobe.
//!
//! The probe loads container metadata only; it never decodes frames, so
//! admission stays cheap even for files near the size ceiling.

use std::path::Path;

use kaizen_error::{MediaError, MediaErrorKind};
use serde::Deserialize;

/// Top-level ffprobe JSON output (`-print_format json -show_format -show_streams`).
#[derive(Debug, Deserialize)]
pub struct ProbeOutput {
    /// Per-stream metadata
    pub streams: Vec<ProbeStream>,
    /// Container-level metadata
    pub format: ProbeFormat,
}

/// A single stream from ffprobe output.
#[derive(Debug, Deserialize)]
pub struct ProbeStream {
    /// Codec type, e.g. "video" or "audio"
    pub codec_type: Option<String>,
    /// Frame width in pixels
    pub width: Option<u32>,
    /// Frame height in pixels
    pub height: Option<u32>,
    /// Stream duration in seconds, as a decimal string
    pub duration: Option<String>,
}

/// Format-level metadata from ffprobe.
#[derive(Debug, Deserialize)]
pub struct ProbeFormat {
    /// Container duration in seconds, as a decimal string
    pub duration: Option<String>,
}

/// Run `ffprobe` on a media file and return the parsed JSON output.
pub async fn probe_media(path: &Path, filename: &str) -> Result<ProbeOutput, MediaError> {
    let output = tokio::process::Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .await
        .map_err(|e| MediaError::new(MediaErrorKind::ToolNotFound(format!("ffprobe: {e}"))))?;

    if !output.status.success() {
        return Err(MediaError::new(MediaErrorKind::ProbeFailed {
            filename: filename.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str::<ProbeOutput>(&stdout)
        .map_err(|e| MediaError::new(MediaErrorKind::ProbeParse(format!("{e}"))))
}

/// Find the first video stream in the probe output.
fn first_video_stream(probe: &ProbeOutput) -> Option<&ProbeStream> {
    probe
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
}

/// Playable duration in seconds, if the metadata declares one.
///
/// Tries the format-level duration first, then the first video stream.
/// Returns None for missing, unparseable, or non-positive durations so the
/// caller can treat an undetermined duration as a rejection rather than a
/// silent acceptance.
pub fn parse_duration(probe: &ProbeOutput) -> Option<f64> {
    let parsed = probe
        .format
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .or_else(|| {
            first_video_stream(probe)
                .and_then(|s| s.duration.as_deref())
                .and_then(|d| d.parse::<f64>().ok())
        })?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

/// Resolution of the first video stream, if declared.
pub fn parse_resolution(probe: &ProbeOutput) -> Option<(u32, u32)> {
    let stream = first_video_stream(probe)?;
    match (stream.width, stream.height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
        _ => None,
    }
}
