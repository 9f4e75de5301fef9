//! Trait definitions for generation backends and their capabilities.

use async_trait::async_trait;
use kaizen_core::{GenerateRequest, GenerateResponse};
use kaizen_error::KaizenResult;

/// Core trait that all generation backends must implement.
///
/// This provides the minimal interface for one-shot generation.
/// Additional capabilities are exposed through optional traits.
#[async_trait]
pub trait KaizenDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> KaizenResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str;
}

/// Trait for models that support image inputs (multimodal vision).
pub trait Vision: KaizenDriver {
    /// Maximum number of images per request.
    fn max_images_per_request(&self) -> usize {
        1
    }

    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp"]
    }

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        5 * 1024 * 1024
    }
}

/// Trait for models that support video inputs.
pub trait Video: KaizenDriver {
    /// Maximum video duration in seconds for input.
    fn max_video_duration_seconds(&self) -> usize {
        60
    }

    /// Supported video input formats (MIME types).
    fn supported_video_input_formats(&self) -> &[&'static str] {
        &["video/mp4", "video/webm", "video/avi", "video/mov"]
    }

    /// Maximum inline video size in bytes.
    fn max_video_size_bytes(&self) -> usize {
        20 * 1024 * 1024
    }
}
