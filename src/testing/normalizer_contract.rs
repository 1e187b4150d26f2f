//! Universal checks every member of the normalizer battery must satisfy:
//! idempotence, `needs_apply` accuracy, and panic-safety on pathological
//! input, run over a normalizer that mutates a
//! [`crate::buffer::TrackedBuffer`] in place.
//!
//! Samples are supplied by the caller — there is only one "language"
//! (Russian prose with Latin-script noise), so there is nothing to
//! parameterize over.

use crate::buffer::TrackedBuffer;
use crate::diagnostics::Diagnostics;
use crate::normalizer::Normalizer;
use crate::pipeline::PipelineContext;

/// Sample strings a normalizer is exercised against. Implemented per
/// normalizer in its own test module; kept here only as the shape the
/// macro below expects.
pub trait NormalizerTestConfig: Normalizer {
    fn samples() -> &'static [&'static str];
}

/// Three checks every normalizer in the battery must pass:
///
/// 1. `needs_apply` never false-negatives: if `apply` would change the
///    text, `needs_apply` must have said `true` first.
/// 2. `apply` never panics on any sample, including the empty string.
/// 3. Convergence: running the normalizer a second time over its own
///    output is a no-op.
pub fn assert_normalizer_contract(normalizer: &dyn Normalizer, ctx: &PipelineContext, samples: &[&str]) {
    for &sample in samples {
        let mut buffer = TrackedBuffer::new(sample);
        let mut diagnostics = Diagnostics::new(false);
        let before = buffer.current_text();
        let predicted = normalizer.needs_apply(&before, ctx);

        normalizer
            .apply(&mut buffer, ctx, &mut diagnostics)
            .unwrap_or_else(|e| panic!("normalizer {} panicked on {sample:?}: {e}", normalizer.name()));
        let after = buffer.current_text();

        if after != before {
            assert!(
                predicted,
                "{}: needs_apply()==false but apply() changed {sample:?} -> {after:?}",
                normalizer.name()
            );
        }

        let mut second_pass = TrackedBuffer::new(&after);
        let mut diagnostics2 = Diagnostics::new(false);
        normalizer.apply(&mut second_pass, ctx, &mut diagnostics2).unwrap();
        assert_eq!(
            second_pass.current_text(),
            after,
            "{}: not convergent on its own output for input {sample:?}",
            normalizer.name()
        );

        let (final_text, map) = buffer.build_mapping();
        assert_eq!(map.len(), final_text.chars().count(), "{}: map/text length mismatch", normalizer.name());
        for i in 0..map.len() {
            let (a, b) = map.get(i).unwrap();
            assert!(a <= b && b <= sample.chars().count(), "{}: map entry {i} out of bounds", normalizer.name());
        }
    }
}

#[macro_export]
macro_rules! assert_normalizer_contract {
    ($normalizer:expr, $ctx:expr, $samples:expr) => {
        $crate::testing::normalizer_contract::assert_normalizer_contract(&$normalizer, &$ctx, $samples)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::normalizers::preprocessor::Preprocessor;

    #[test]
    fn preprocessor_satisfies_the_contract() {
        let ctx = PipelineContext::new(Config::default());
        assert_normalizer_contract!(
            Preprocessor,
            ctx,
            &["", "привет мир", "\u{FEFF}«test»  —  end", "plain"]
        );
    }
}
