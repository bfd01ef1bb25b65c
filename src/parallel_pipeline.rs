// THEORY:
// The kernels are pure and write only their own output pixel, so a frame can
// be filtered in any order or fully concurrently. This module exploits that:
// the output grid is split into horizontal row bands and each band is handed
// to a worker task. A dispatcher distributes band tasks round-robin over a
// fixed pool of workers (sized from the machine's CPU count), and each task
// carries a oneshot channel for its result. Bands may complete in any order;
// reassembly concatenates them in row order, so the output is bit-identical
// to the sequential `pipeline` passes.
//
// The input image is shared across workers behind an `Arc` — the Sobel kernel
// reads neighborhoods that cross band boundaries, so every worker needs the
// whole (immutable) source.

use crate::core_modules::grayscale::grayscale::grayscale;
use crate::core_modules::image::image::{ImageBuffer, PixelSource};
use crate::core_modules::pixel::pixel::{Bytes, Pixel};
use crate::core_modules::sobel::sobel::sobel;
use crate::pipeline::PipelineConfig;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// The per-pixel kernels the parallel pass can dispatch. The Gaussian blur is
/// a two-pass whole-image transform and stays on the sequential path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Grayscale,
    Sobel,
}

/// One row band of one frame, plus the channel to report its pixels back on.
pub struct BandTask {
    pub source: Arc<ImageBuffer>,
    pub kind: FilterKind,
    pub y_start: u32,
    pub y_end: u32,
    pub result_sender: oneshot::Sender<Vec<Pixel>>,
}

pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<BandTask>,
    pool_size: usize,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(pool_size: usize) -> Self {
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<BandTask>();
        let mut workers = Vec::new();

        // One dispatcher distributes tasks to the workers round-robin.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..pool_size)
            .map(|_| mpsc::unbounded_channel::<BandTask>())
            .unzip();

        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = worker_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % pool_size;
            }
        });

        for mut worker_receiver in worker_receivers {
            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let band = Self::render_band(&task);
                    let _ = task.result_sender.send(band);
                }
            });
            workers.push(worker);
        }

        Self {
            task_sender,
            pool_size,
            workers,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    fn render_band(task: &BandTask) -> Vec<Pixel> {
        let source = &task.source;
        let width = source.width();
        let mut band = Vec::with_capacity(((task.y_end - task.y_start) * width) as usize);

        for y in task.y_start..task.y_end {
            for x in 0..width {
                let pixel = match task.kind {
                    FilterKind::Grayscale => grayscale(source.pixel(x, y)),
                    FilterKind::Sobel => sobel(source.as_ref(), x, y),
                };
                band.push(pixel);
            }
        }

        band
    }

    fn submit(&self, task: BandTask) -> Result<(), &'static str> {
        self.task_sender
            .send(task)
            .map_err(|_| "Failed to send task to worker pool")
    }
}

/// Parallel whole-image filter passes over flat RGBA8 frame buffers.
pub struct ParallelFilterPipeline {
    config: PipelineConfig,
    worker_pool: WorkerPool,
}

impl ParallelFilterPipeline {
    /// Sizes the worker pool from the machine's CPU count.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_pool_size(config, num_cpus::get().max(1))
    }

    pub fn with_pool_size(config: PipelineConfig, pool_size: usize) -> Self {
        Self {
            config,
            worker_pool: WorkerPool::new(pool_size.max(1)),
        }
    }

    pub async fn grayscale(&self, frame_buffer: &[u8]) -> Result<Bytes, &'static str> {
        self.run(FilterKind::Grayscale, frame_buffer).await
    }

    pub async fn sobel(&self, frame_buffer: &[u8]) -> Result<Bytes, &'static str> {
        self.run(FilterKind::Sobel, frame_buffer).await
    }

    async fn run(&self, kind: FilterKind, frame_buffer: &[u8]) -> Result<Bytes, &'static str> {
        let width = self.config.image_width;
        let height = self.config.image_height;
        let source = Arc::new(ImageBuffer::from_rgba_buffer(width, height, frame_buffer));

        // Split the output into one band per worker (the last band absorbs
        // the remainder rows). Receivers are kept in row order so the bands
        // can be concatenated directly, whatever order they complete in.
        let band_count = (self.worker_pool.pool_size() as u32).min(height);
        let band_height = height.div_ceil(band_count);

        let mut receivers = Vec::new();
        let mut y_start = 0;
        while y_start < height {
            let y_end = (y_start + band_height).min(height);
            let (result_sender, result_receiver) = oneshot::channel();

            self.worker_pool.submit(BandTask {
                source: Arc::clone(&source),
                kind,
                y_start,
                y_end,
                result_sender,
            })?;

            receivers.push(result_receiver);
            y_start = y_end;
        }

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for band in futures::future::join_all(receivers).await {
            let band = band.map_err(|_| "Failed to receive result from worker")?;
            pixels.extend(band);
        }

        Ok(ImageBuffer::from_pixels(width, height, pixels).to_rgba_buffer())
    }
}
