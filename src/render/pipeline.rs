use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    eval::evaluator::Evaluator,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{SunsetError, SunsetResult},
    render::raster::{FrameRGBA, rasterize_svg},
    render::svg::render_frame_svg,
    scene::model::Scene,
};

/// Longest frame sequence [`range_for_secs`] will plan.
pub const MAX_FRAMES: u64 = 100_000;

/// Evaluate + snapshot + rasterize a single instant of `scene`.
///
/// Pipeline:
/// 1. [`Evaluator::eval_at`](crate::Evaluator::eval_at)
/// 2. [`render_frame_svg`](crate::render_frame_svg)
/// 3. [`rasterize_svg`](crate::rasterize_svg)
pub fn render_frame(scene: &Scene, t_secs: f64) -> SunsetResult<FrameRGBA> {
    let graph = Evaluator::eval_at(scene, t_secs)?;
    rasterize_svg(&render_frame_svg(&graph))
}

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame rendering.
pub struct RenderThreading {
    /// Render frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Render every frame of `range`, sampling the scene at `fps`.
///
/// Frames are returned in timeline order regardless of threading.
#[tracing::instrument(skip(scene, threading), fields(frames = range.len_frames()))]
pub fn render_frames(
    scene: &Scene,
    fps: Fps,
    range: FrameRange,
    threading: &RenderThreading,
) -> SunsetResult<Vec<FrameRGBA>> {
    if range.is_empty() {
        tracing::debug!("empty frame range, nothing to render");
        return Ok(Vec::new());
    }
    if range.len_frames() > MAX_FRAMES {
        return Err(SunsetError::validation(format!(
            "frame range holds {} frames (max {MAX_FRAMES})",
            range.len_frames()
        )));
    }

    let times = (range.start.0..range.end.0)
        .map(|f| fps.frames_to_secs(f))
        .collect::<Vec<_>>();

    let frames = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        tracing::debug!(threads = pool.current_num_threads(), "parallel render");
        let rendered = pool.install(|| {
            times
                .par_iter()
                .map(|&t| render_frame(scene, t))
                .collect::<Vec<_>>()
        });
        rendered.into_iter().collect::<SunsetResult<Vec<_>>>()?
    } else {
        times
            .iter()
            .map(|&t| render_frame(scene, t))
            .collect::<SunsetResult<Vec<_>>>()?
    };

    tracing::info!(frames = frames.len(), "rendered frame range");
    Ok(frames)
}

/// Frame range covering `seconds` of animation at `fps`, capped at [`MAX_FRAMES`].
pub fn range_for_secs(fps: Fps, seconds: f64) -> SunsetResult<FrameRange> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(SunsetError::validation("duration must be finite and >= 0"));
    }
    let frames = fps.secs_to_frames_floor(seconds);
    if frames > MAX_FRAMES {
        return Err(SunsetError::validation(format!(
            "{seconds}s at {} fps is {frames} frames (max {MAX_FRAMES})",
            fps.as_f64()
        )));
    }
    FrameRange::new(FrameIndex(0), FrameIndex(frames))
}

/// Write a frame as PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> SunsetResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write `frames` as `frame_00000.png`, `frame_00001.png`, ... under `dir`.
pub fn write_png_sequence(frames: &[FrameRGBA], dir: &Path) -> SunsetResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    let mut paths = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let path = dir.join(format!("frame_{i:05}.png"));
        write_png(frame, &path)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> SunsetResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> SunsetResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SunsetError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SunsetError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
