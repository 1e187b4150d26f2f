//! src/normalizer.rs — the per-pass contract every member of the
//! normalizer battery implements.
//!
//! Each pass mutates a buffer in place through its tracked-substitution
//! API and can fail only with a recoverable [`NormalizeError`].

use crate::buffer::TrackedBuffer;
use crate::diagnostics::Diagnostics;
use crate::error::NormalizeError;
use crate::pipeline::PipelineContext;

/// One normalizer in the battery.
///
/// 1. `needs_apply` — a fast, cheap, almost-always-accurate pre-check.
///    False positives are tolerated; false negatives are not. When it
///    returns `false` the pass is skipped entirely.
/// 2. `apply` — only called when `needs_apply` returned `true`. Mutates
///    `buffer` through its tracked-substitution API; never panics, never
///    loses a substitution silently except via the diagnostics channel
///    the buffer itself maintains.
pub trait Normalizer {
    /// Human-readable name, used in tracing spans and error messages.
    fn name(&self) -> &'static str;

    fn needs_apply(&self, text: &str, ctx: &PipelineContext) -> bool;

    fn apply(
        &self,
        buffer: &mut TrackedBuffer,
        ctx: &PipelineContext,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), NormalizeError>;
}

/// Run a normalizer, short-circuiting on its own quick check, and tracing
/// its invocation the way every pass in this battery is observed.
pub(crate) fn run_normalizer(
    normalizer: &dyn Normalizer,
    buffer: &mut TrackedBuffer,
    ctx: &PipelineContext,
    diagnostics: &mut Diagnostics,
) -> Result<(), NormalizeError> {
    let text = buffer.current_text();
    if !normalizer.needs_apply(&text, ctx) {
        tracing::trace!(normalizer = normalizer.name(), "skipped (needs_apply=false)");
        return Ok(());
    }
    tracing::debug!(normalizer = normalizer.name(), "applying");
    normalizer.apply(buffer, ctx, diagnostics)
}
