//! Payload assembly: routing, frame extraction, bracketing, manifest.

use std::fmt::Write as _;
use std::sync::Arc;

use kaizen_core::{AssetMode, FramePacket, MediaAsset, PayloadPart, RequestPayload};
use kaizen_error::{MediaError, MediaErrorKind};
use tracing::{debug, info, instrument, warn};

use crate::extract::{FfmpegFrameSource, FrameSource};
use crate::sample::{format_timestamp, frame_instants, target_dimensions};

/// Byte-size ceiling up to which a file is submitted whole, untranscoded.
pub const INLINE_THRESHOLD_BYTES: u64 = 20 * 1024 * 1024;

/// Folds admitted assets into the outbound multimodal request body.
///
/// Per-asset routing: at or below [`INLINE_THRESHOLD_BYTES`] the file is
/// read whole into a single self-describing inline part (a lossless
/// transcription); above it the asset becomes a bounded, timestamped
/// frame sequence bracketed by textual markers so the downstream model can
/// read a discontinuous image set as one continuous video.
pub struct Transcoder {
    frames: Arc<dyn FrameSource>,
    inline_threshold: u64,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(Arc::new(FfmpegFrameSource))
    }
}

impl Transcoder {
    /// Create a transcoder over the given frame source.
    pub fn new(frames: Arc<dyn FrameSource>) -> Self {
        Self {
            frames,
            inline_threshold: INLINE_THRESHOLD_BYTES,
        }
    }

    /// How an asset will be folded into the payload. The threshold is
    /// inclusive: a file of exactly the threshold size still goes inline.
    pub fn route(&self, asset: &MediaAsset) -> AssetMode {
        if asset.size_bytes <= self.inline_threshold {
            AssetMode::WholeFile
        } else {
            AssetMode::ImageSequence
        }
    }

    /// Assemble the full request payload for a run.
    ///
    /// Each asset contributes its parts in selection order; the final part
    /// is the caller's instruction plus a generated manifest mapping
    /// logical position to filename and processing mode. Every asset here
    /// has already passed the ingestion gate.
    #[instrument(skip_all, fields(assets = assets.len()))]
    pub async fn build_payload(
        &self,
        assets: &[MediaAsset],
        instruction: &str,
    ) -> Result<RequestPayload, MediaError> {
        let mut payload = RequestPayload::default();
        let mut modes = Vec::with_capacity(assets.len());

        for (index, asset) in assets.iter().enumerate() {
            let mode = self.route(asset);
            let parts = self.asset_parts(asset, index + 1, mode).await?;
            payload.parts.extend(parts);
            modes.push(mode);
        }

        payload
            .parts
            .push(PayloadPart::Text(manifest_text(instruction, assets, &modes)));
        info!(parts = payload.len(), "payload assembled");
        Ok(payload)
    }

    /// The ordered parts contributed by one asset.
    async fn asset_parts(
        &self,
        asset: &MediaAsset,
        position: usize,
        mode: AssetMode,
    ) -> Result<Vec<PayloadPart>, MediaError> {
        match mode {
            AssetMode::WholeFile => {
                let data = tokio::fs::read(&asset.path)
                    .await
                    .map_err(|e| MediaError::new(MediaErrorKind::Io(format!("{e}"))))?;
                debug!(name = %asset.name, bytes = data.len(), "inlined whole file");
                Ok(vec![PayloadPart::InlineMedia {
                    mime: asset.mime.clone(),
                    data,
                }])
            }
            AssetMode::ImageSequence => {
                let packets = self.extract_packets(asset).await?;
                Ok(bracket_sequence(position, &asset.name, packets))
            }
        }
    }

    /// Extract the timestamped frame sequence for one large asset.
    ///
    /// The walk is strictly sequential: the playback position is a single
    /// shared cursor per asset, so each seek is awaited and rendered before
    /// the next begins. Any failure aborts this asset and surfaces as a
    /// named `frame-extraction-failed` error; it never silently yields a
    /// truncated sequence.
    #[instrument(skip(self, asset), fields(name = %asset.name, duration = asset.duration_secs))]
    async fn extract_packets(&self, asset: &MediaAsset) -> Result<Vec<FramePacket>, MediaError> {
        let (src_w, src_h) = self
            .frames
            .source_dimensions(&asset.path, &asset.name)
            .await
            .map_err(|e| {
                warn!(error = %e, "dimension probe failed");
                MediaError::frame_extraction(&asset.name)
            })?;
        let (width, height) = target_dimensions(src_w, src_h);

        let instants = frame_instants(asset.duration_secs);
        debug!(frames = instants.len(), width, height, "starting extraction walk");

        let mut packets = Vec::with_capacity(instants.len());
        for instant in instants {
            let jpeg = self
                .frames
                .render_frame(&asset.path, instant, width, height)
                .await
                .map_err(|e| {
                    warn!(error = %e, instant, "frame render failed");
                    MediaError::frame_extraction(&asset.name)
                })?;
            packets.push(FramePacket {
                caption: format_timestamp(instant),
                jpeg,
            });
        }
        Ok(packets)
    }
}

/// Wrap one asset's frame packets in start/end markers, each frame
/// preceded by its own timestamp caption.
fn bracket_sequence(position: usize, filename: &str, packets: Vec<FramePacket>) -> Vec<PayloadPart> {
    let mut parts = Vec::with_capacity(packets.len() * 2 + 2);
    parts.push(PayloadPart::Text(format!(
        "[start of image sequence for asset {position}, filename {filename} - treat as one continuous video]"
    )));
    for packet in packets {
        parts.push(PayloadPart::Text(format!("timestamp {}", packet.caption)));
        parts.push(PayloadPart::InlineMedia {
            mime: "image/jpeg".to_string(),
            data: packet.jpeg,
        });
    }
    parts.push(PayloadPart::Text(format!(
        "[end of image sequence for asset {position}]"
    )));
    parts
}

/// The trailing text part: the user instruction plus the asset manifest.
fn manifest_text(instruction: &str, assets: &[MediaAsset], modes: &[AssetMode]) -> String {
    let mut text = String::from(instruction);
    text.push_str("\n\nAsset manifest:\n");
    for (i, (asset, mode)) in assets.iter().zip(modes).enumerate() {
        let _ = writeln!(text, "- Asset {}: \"{}\" ({})", i + 1, asset.name, mode);
    }
    text.push_str("Refer to assets by filename in the report.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaizen_core::PreviewHandle;

    fn asset(name: &str, size_bytes: u64, duration_secs: f64) -> MediaAsset {
        MediaAsset {
            name: name.to_string(),
            mime: "video/mp4".to_string(),
            size_bytes,
            duration_secs,
            path: format!("/tmp/{name}").into(),
            preview: PreviewHandle::new(0),
        }
    }

    #[test]
    fn routing_splits_on_the_inline_threshold() {
        let transcoder = Transcoder::default();
        assert_eq!(
            transcoder.route(&asset("small.mp4", INLINE_THRESHOLD_BYTES - 1, 30.0)),
            AssetMode::WholeFile
        );
        // The boundary itself is inclusive.
        assert_eq!(
            transcoder.route(&asset("exact.mp4", INLINE_THRESHOLD_BYTES, 30.0)),
            AssetMode::WholeFile
        );
        assert_eq!(
            transcoder.route(&asset("large.mp4", INLINE_THRESHOLD_BYTES + 1, 30.0)),
            AssetMode::ImageSequence
        );
    }

    #[test]
    fn manifest_names_every_asset_with_its_mode() {
        let assets = vec![
            asset("line_a.mp4", 1024, 30.0),
            asset("line_b.mp4", 64 * 1024 * 1024, 120.0),
        ];
        let text = manifest_text(
            "Classify motion waste.",
            &assets,
            &[AssetMode::WholeFile, AssetMode::ImageSequence],
        );
        assert!(text.starts_with("Classify motion waste."));
        assert!(text.contains("- Asset 1: \"line_a.mp4\" (whole-file)"));
        assert!(text.contains("- Asset 2: \"line_b.mp4\" (image-sequence)"));
        assert!(text.contains("Refer to assets by filename"));
    }

    #[test]
    fn bracketing_orders_markers_captions_and_frames() {
        let packets = vec![
            FramePacket {
                caption: "00:00".into(),
                jpeg: vec![1],
            },
            FramePacket {
                caption: "00:05".into(),
                jpeg: vec![2],
            },
        ];
        let parts = bracket_sequence(2, "clip.mp4", packets);
        assert_eq!(parts.len(), 6);
        match &parts[0] {
            PayloadPart::Text(t) => {
                assert!(t.contains("start of image sequence for asset 2"));
                assert!(t.contains("clip.mp4"));
                assert!(t.contains("one continuous video"));
            }
            _ => panic!("expected start marker"),
        }
        assert_eq!(parts[1], PayloadPart::Text("timestamp 00:00".into()));
        assert!(matches!(&parts[2], PayloadPart::InlineMedia { mime, data } if mime == "image/jpeg" && data == &vec![1]));
        assert_eq!(parts[3], PayloadPart::Text("timestamp 00:05".into()));
        match &parts[5] {
            PayloadPart::Text(t) => assert!(t.contains("end of image sequence for asset 2")),
            _ => panic!("expected end marker"),
        }
    }
}
