//! Frame rendering: seek, decode, rescale, re-encode.

use std::io::Cursor;
use std::path::Path;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use kaizen_error::{MediaError, MediaErrorKind};
use tracing::debug;

use crate::probe::{parse_resolution, probe_media};
use crate::sample::JPEG_QUALITY;

/// Seam over the underlying decoder.
///
/// The production implementation shells out to ffmpeg; tests substitute a
/// stub so payload assembly can be exercised without real video files.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Source frame dimensions for the asset at `path`.
    async fn source_dimensions(&self, path: &Path, filename: &str)
    -> Result<(u32, u32), MediaError>;

    /// Seek to `instant_secs`, render one frame at `width`×`height`, and
    /// return it re-encoded as JPEG.
    ///
    /// Calls for one asset are strictly sequential: the playback position
    /// is a single shared cursor per asset, so each seek must complete and
    /// be rendered before the next begins.
    async fn render_frame(
        &self,
        path: &Path,
        instant_secs: f64,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, MediaError>;
}

/// Frame source backed by the ffmpeg binary.
///
/// Each seek is a separate invocation with an input-side `-ss`, which lets
/// ffmpeg use keyframe-accurate seeking without decoding the whole clip.
/// The rendered frame comes back as PNG on stdout and is re-encoded to
/// JPEG at [`JPEG_QUALITY`] by the `image` crate.
#[derive(Debug, Clone, Default)]
pub struct FfmpegFrameSource;

#[async_trait]
impl FrameSource for FfmpegFrameSource {
    async fn source_dimensions(
        &self,
        path: &Path,
        filename: &str,
    ) -> Result<(u32, u32), MediaError> {
        let probe = probe_media(path, filename).await?;
        parse_resolution(&probe).ok_or_else(|| {
            MediaError::new(MediaErrorKind::ProbeParse(format!(
                "no video stream resolution in {filename}"
            )))
        })
    }

    async fn render_frame(
        &self,
        path: &Path,
        instant_secs: f64,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, MediaError> {
        let output = tokio::process::Command::new("ffmpeg")
            .args(["-v", "error", "-ss", &format!("{instant_secs:.3}"), "-i"])
            .arg(path)
            .args([
                "-frames:v",
                "1",
                "-vf",
                &format!("scale={width}:{height}"),
                "-f",
                "image2pipe",
                "-c:v",
                "png",
                "pipe:1",
            ])
            .output()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::ToolNotFound(format!("ffmpeg: {e}"))))?;

        if !output.status.success() || output.stdout.is_empty() {
            return Err(MediaError::new(MediaErrorKind::Io(format!(
                "ffmpeg seek to {instant_secs:.3}s failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ))));
        }

        debug!(
            instant_secs,
            bytes = output.stdout.len(),
            "rendered frame, re-encoding"
        );
        reencode_jpeg(&output.stdout)
    }
}

/// Re-encode a decoded frame as JPEG at the configured quality factor.
fn reencode_jpeg(png_bytes: &[u8]) -> Result<Vec<u8>, MediaError> {
    let frame = image::load_from_memory(png_bytes)
        .map_err(|e| MediaError::new(MediaErrorKind::FrameEncode(format!("decode: {e}"))))?;

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), JPEG_QUALITY);
    frame
        .write_with_encoder(encoder)
        .map_err(|e| MediaError::new(MediaErrorKind::FrameEncode(format!("encode: {e}"))))?;
    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reencode_produces_jpeg_magic_bytes() {
        // 2x2 gray PNG produced by the image crate itself
        let mut png = Vec::new();
        image::DynamicImage::new_rgb8(2, 2)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let jpeg = reencode_jpeg(&png).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn reencode_rejects_garbage() {
        assert!(reencode_jpeg(&[0x00, 0x01, 0x02]).is_err());
    }
}
