//! Progress reporting while the input directory is read.
//!
//! Bars are attached to a tracing span through `tracing-indicatif`, so log lines and the bar
//! share stderr without tearing. Without the indicatif layer installed the span calls do nothing.

use std::io::Read;
use std::time::Instant;

use indicatif::{HumanBytes, HumanDuration, ProgressStyle};
use tracing::{info, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Wraps a reader and advances the progress bar of `span` by every byte read through it.
pub struct ProgressMonitor<'s, R: Read> {
    reader: R,
    span: &'s Span,
}

impl<'s, R: Read> ProgressMonitor<'s, R> {
    pub fn new(reader: R, span: &'s Span) -> Self {
        Self { reader, span }
    }
}

impl<R: Read> Read for ProgressMonitor<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let out = self.reader.read(buf)?;
        self.span.pb_inc(out as u64);
        Ok(out)
    }
}

/// Tracks the bytes of all input files together and logs a summary when dropped. The bar shows
/// up once its span is entered.
pub struct InputProgress {
    span: Span,
    total: u64,
    started: Instant,
}

impl InputProgress {
    pub fn start(total: u64, files: usize) -> Self {
        let span = tracing::info_span!("reading", files);
        // https://docs.rs/indicatif/latest/indicatif/index.html#templates
        if let Ok(style) = ProgressStyle::with_template(
            "{wide_bar} {binary_bytes}/{binary_total_bytes}  \n[est. {eta} remaining]",
        ) {
            span.pb_set_style(&style);
        }
        span.pb_set_length(total);
        Self {
            span,
            total,
            started: Instant::now(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for InputProgress {
    fn drop(&mut self) {
        info!(
            "read {} of input in {}",
            HumanBytes(self.total),
            HumanDuration(self.started.elapsed())
        );
    }
}
