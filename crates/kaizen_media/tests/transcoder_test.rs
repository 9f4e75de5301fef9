//! Payload assembly tests over a stubbed frame source.
//!
//! The stub stands in for ffmpeg so routing, bracketing, cap enforcement,
//! and failure surfacing can be verified without real video files.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kaizen_core::{MediaAsset, PayloadPart, PreviewHandle};
use kaizen_error::{MediaError, MediaErrorKind};
use kaizen_media::{FrameSource, Transcoder};

struct StubFrames {
    rendered: AtomicUsize,
    fail_from: Option<usize>,
}

impl StubFrames {
    fn new() -> Self {
        Self {
            rendered: AtomicUsize::new(0),
            fail_from: None,
        }
    }

    fn failing_from(index: usize) -> Self {
        Self {
            rendered: AtomicUsize::new(0),
            fail_from: Some(index),
        }
    }
}

#[async_trait]
impl FrameSource for StubFrames {
    async fn source_dimensions(&self, _path: &Path, _name: &str) -> Result<(u32, u32), MediaError> {
        Ok((1920, 1080))
    }

    async fn render_frame(
        &self,
        _path: &Path,
        _instant_secs: f64,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, MediaError> {
        assert_eq!((width, height), (512, 288), "1080p must scale to 512 on the long edge");
        let n = self.rendered.fetch_add(1, Ordering::SeqCst);
        if self.fail_from.is_some_and(|f| n >= f) {
            return Err(MediaError::new(MediaErrorKind::Io("stub seek failed".into())));
        }
        Ok(vec![0xFF, 0xD8, (n % 251) as u8])
    }
}

fn asset(name: &str, path: &Path, size_bytes: u64, duration_secs: f64) -> MediaAsset {
    MediaAsset {
        name: name.to_string(),
        mime: "video/mp4".to_string(),
        size_bytes,
        duration_secs,
        path: path.to_path_buf(),
        preview: PreviewHandle::new(0),
    }
}

#[tokio::test]
async fn small_file_path_is_a_lossless_transcription() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("short.mp4");
    let original: Vec<u8> = (0u32..4096).map(|i| (i % 256) as u8).collect();
    std::fs::write(&path, &original)?;

    let transcoder = Transcoder::new(Arc::new(StubFrames::new()));
    let assets = vec![asset("short.mp4", &path, original.len() as u64, 12.0)];
    let payload = transcoder.build_payload(&assets, "analyze").await?;

    // Exactly one inline part plus the trailing instruction text.
    assert_eq!(payload.len(), 2);
    match &payload.parts[0] {
        PayloadPart::InlineMedia { mime, data } => {
            assert_eq!(mime, "video/mp4");
            assert_eq!(data, &original, "inline path must not alter a single byte");
        }
        other => panic!("expected inline blob, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn end_to_end_ordering_for_a_mixed_two_asset_run() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let small_path = dir.path().join("station1.mp4");
    let small_bytes = vec![7u8; 1024];
    std::fs::write(&small_path, &small_bytes)?;

    // 50 MiB / 120 s: 120 * 2 = 240 > 200, so the rate drops to 200/120
    // and exactly 200 frames are captured.
    let large_path = dir.path().join("station2.mp4");
    let assets = vec![
        asset("station1.mp4", &small_path, 10 * 1024 * 1024, 30.0),
        asset("station2.mp4", &large_path, 50 * 1024 * 1024, 120.0),
    ];

    let transcoder = Transcoder::new(Arc::new(StubFrames::new()));
    let payload = transcoder.build_payload(&assets, "compare stations").await?;

    // inline blob + (start + 200 * (caption, frame) + end) + manifest
    assert_eq!(payload.len(), 1 + 1 + 400 + 1 + 1);

    assert!(matches!(&payload.parts[0], PayloadPart::InlineMedia { mime, .. } if mime == "video/mp4"));
    match &payload.parts[1] {
        PayloadPart::Text(t) => assert!(t.contains("start of image sequence for asset 2")),
        other => panic!("expected start marker, got {other:?}"),
    }
    // First captured instant is t=0.
    assert_eq!(payload.parts[2], PayloadPart::Text("timestamp 00:00".into()));
    match &payload.parts[payload.len() - 2] {
        PayloadPart::Text(t) => assert!(t.contains("end of image sequence for asset 2")),
        other => panic!("expected end marker, got {other:?}"),
    }
    match payload.parts.last() {
        Some(PayloadPart::Text(t)) => {
            assert!(t.starts_with("compare stations"));
            assert!(t.contains("station1.mp4"));
            assert!(t.contains("station2.mp4"));
            assert!(t.contains("whole-file"));
            assert!(t.contains("image-sequence"));
        }
        other => panic!("expected manifest text, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn frame_cap_is_enforced_for_absurd_durations() -> anyhow::Result<()> {
    let counter = Arc::new(StubFrames::new());
    let transcoder = Transcoder::new(counter.clone());

    // 2000s would want 400 frames at the floored 0.2/s rate; the cap
    // governs as a hard stop.
    let assets = vec![asset(
        "marathon.mp4",
        Path::new("/tmp/marathon.mp4"),
        80 * 1024 * 1024,
        2000.0,
    )];
    let payload = transcoder.build_payload(&assets, "x").await?;

    assert_eq!(counter.rendered.load(Ordering::SeqCst), 200);
    // start + 200 * 2 + end + manifest
    assert_eq!(payload.len(), 403);
    Ok(())
}

#[tokio::test]
async fn extraction_failure_names_the_asset_and_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let small_path = dir.path().join("good.mp4");
    std::fs::write(&small_path, vec![1u8; 64]).unwrap();

    let transcoder = Transcoder::new(Arc::new(StubFrames::failing_from(3)));
    let assets = vec![
        asset("good.mp4", &small_path, 1024, 10.0),
        asset(
            "broken.mp4",
            Path::new("/tmp/broken.mp4"),
            30 * 1024 * 1024,
            60.0,
        ),
    ];

    let err = transcoder
        .build_payload(&assets, "x")
        .await
        .expect_err("a failed seek must abort payload assembly");
    let rendered = format!("{err}");
    assert!(rendered.contains("frame-extraction-failed: broken.mp4"), "{rendered}");
}
