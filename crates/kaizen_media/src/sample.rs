//! Sampling-rate, scaling, and timestamp math for frame extraction.
//!
//! All functions here are pure; the extraction loop in
//! [`crate::Transcoder`] drives them against real decoders.

/// Target capture rate for short clips, in samples per second.
pub const TARGET_RATE_HZ: f64 = 2.0;

/// Hard cap on frames per asset. Enforced as an absolute stop in the
/// extraction loop, independent of the computed rate.
pub const FRAME_CAP: usize = 200;

/// Floor on the capture rate: never sample slower than once every 5 seconds.
pub const MIN_RATE_HZ: f64 = 0.2;

/// Longest output edge in pixels. Frames are never upscaled.
pub const MAX_EDGE_PX: u32 = 512;

/// JPEG quality factor for re-encoded frames (lossy, bounds payload size).
pub const JPEG_QUALITY: u8 = 60;

/// Capture rate for a clip of the given duration.
///
/// Starts from [`TARGET_RATE_HZ`]; if that would exceed [`FRAME_CAP`] the
/// rate is scaled down to `FRAME_CAP / duration`, floored at
/// [`MIN_RATE_HZ`]. The floor can mathematically exceed the cap for very
/// long clips, which is why the cap is enforced separately as a hard stop.
pub fn sampling_rate(duration_secs: f64) -> f64 {
    if duration_secs * TARGET_RATE_HZ > FRAME_CAP as f64 {
        (FRAME_CAP as f64 / duration_secs).max(MIN_RATE_HZ)
    } else {
        TARGET_RATE_HZ
    }
}

/// The instants (in seconds) to sample, walking t=0 forward in `1/rate`
/// steps until the timeline is exhausted or [`FRAME_CAP`] is reached.
///
/// Instants are computed by index rather than by accumulation so floating
/// point error cannot drift the step width over long clips.
pub fn frame_instants(duration_secs: f64) -> Vec<f64> {
    let rate = sampling_rate(duration_secs);
    let step = 1.0 / rate;
    (0..FRAME_CAP)
        .map(|i| i as f64 * step)
        .take_while(|t| *t < duration_secs)
        .collect()
}

/// Output dimensions for a source frame: aspect ratio preserved, longer
/// side scaled down to [`MAX_EDGE_PX`] if it exceeds that, never upscaled.
pub fn target_dimensions(source_width: u32, source_height: u32) -> (u32, u32) {
    let longer = source_width.max(source_height);
    if longer <= MAX_EDGE_PX || longer == 0 {
        return (source_width, source_height);
    }
    let scale = MAX_EDGE_PX as f64 / longer as f64;
    let w = ((source_width as f64 * scale).round() as u32).max(1);
    let h = ((source_height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Format a position as zero-padded `MM:SS`.
///
/// No hour component; positions beyond 99:59 are not representable, which
/// is acceptable under the 600-second admission ceiling.
pub fn format_timestamp(instant_secs: f64) -> String {
    let total = instant_secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
