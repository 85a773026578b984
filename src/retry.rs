//! Retry coordination: re-running a block until an attempt is fully healthy.
//!
//! Each attempt records into its own fresh log, handed to the block as an
//! explicit [`Attempt`] parameter. The outer log is untouched until the
//! final merge, so every exit path — including the block panicking — leaves
//! it intact.

use crate::context::Context;
use crate::error::VerdictError;
use crate::log::Log;
use crate::record::Record;

/// The scoped recorder for one retry attempt.
///
/// Shares the outer log's retention policy and the test's attribution
/// context; its assertions accumulate separately until the attempt is
/// judged.
pub struct Attempt<'c> {
    log: Log,
    context: &'c Context,
}

impl<'c> Attempt<'c> {
    fn new(only_failures: bool, context: &'c Context) -> Self {
        Self {
            log: Log::new(only_failures),
            context,
        }
    }
}

impl Record for Attempt<'_> {
    fn active_log(&mut self) -> &mut Log {
        &mut self.log
    }

    fn context(&self) -> &Context {
        self.context
    }
}

/// Run `action` up to `attempts` times, stopping at the first fully healthy
/// attempt, then replay the last executed attempt's retained entries into
/// `outer`.
///
/// Intermediate failing attempts are discarded entirely; only the final
/// judgment reaches the outer log. When even the final attempt fails, its
/// failing entries surface there and the test fails as usual.
///
/// Fewer than two attempts is an invalid-usage error, returned before the
/// block ever runs.
pub(crate) fn run<F>(
    outer: &mut Log,
    context: &Context,
    attempts: usize,
    mut action: F,
) -> Result<(), VerdictError>
where
    F: FnMut(&mut Attempt),
{
    if attempts < 2 {
        return Err(VerdictError::InvalidAttempts(attempts));
    }

    let mut last = None;
    for _ in 0..attempts {
        let mut attempt = Attempt::new(outer.only_failures(), context);
        action(&mut attempt);

        let healthy = attempt.log.is_healthy();
        last = Some(attempt.log);
        if healthy {
            break;
        }
    }

    if let Some(log) = last {
        for assertion in log.into_entries() {
            outer.add(assertion);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context::new("no::such::module").unwrap()
    }

    #[test]
    fn test_fewer_than_two_attempts_is_rejected_before_running() {
        let ctx = context();

        for attempts in [0, 1] {
            let mut outer = Log::new(false);
            let mut executions = 0;
            let result = run(&mut outer, &ctx, attempts, |_| executions += 1);

            assert!(matches!(result, Err(VerdictError::InvalidAttempts(n)) if n == attempts));
            assert_eq!(executions, 0);
            assert_eq!(outer.count(), 0);
        }
    }

    #[test]
    fn test_success_on_later_attempt_leaves_outer_healthy() {
        let ctx = context();
        let mut outer = Log::new(false);
        let mut actual = 0;

        run(&mut outer, &ctx, 3, |attempt| {
            actual += 1;
            attempt.are_equal(&3, &actual);
        })
        .unwrap();

        assert_eq!(actual, 3);
        assert!(outer.is_healthy());
        assert_eq!(outer.failures(), 0);
        // Only the healthy final attempt's record merged.
        assert_eq!(outer.count(), 1);
    }

    #[test]
    fn test_first_attempt_success_stops_early() {
        let ctx = context();
        let mut outer = Log::new(false);
        let mut executions = 0;

        run(&mut outer, &ctx, 5, |attempt| {
            executions += 1;
            attempt.is_true(true);
        })
        .unwrap();

        assert_eq!(executions, 1);
        assert!(outer.is_healthy());
    }

    #[test]
    fn test_exhaustion_merges_only_the_final_attempt() {
        let ctx = context();
        let mut outer = Log::new(false);

        run(&mut outer, &ctx, 3, |attempt| {
            attempt.are_equal(&1, &2);
            attempt.is_true(true);
        })
        .unwrap();

        // Three attempts ran, but the outer log gains exactly one attempt's
        // worth of entries.
        assert_eq!(outer.count(), 2);
        assert_eq!(outer.failures(), 1);
        assert!(!outer.is_healthy());
    }

    #[test]
    fn test_attempts_inherit_the_outer_retention_policy() {
        let ctx = context();
        let mut outer = Log::new(true);

        run(&mut outer, &ctx, 2, |attempt| {
            attempt.is_true(true);
            attempt.are_equal(&1, &2);
        })
        .unwrap();

        // The attempt dropped its passed entry, so only the failure replays.
        assert_eq!(outer.count(), 1);
        assert_eq!(outer.failures(), 1);
        assert_eq!(outer.retained(), 1);
    }

    #[test]
    fn test_outer_entries_survive_a_retry() {
        let ctx = context();
        let mut outer = Log::new(false);
        outer.add(crate::assertion::Assertion::are_equal(&1, &1, &ctx));

        run(&mut outer, &ctx, 2, |attempt| {
            attempt.is_true(true);
        })
        .unwrap();

        assert_eq!(outer.count(), 2);
        assert!(outer.is_healthy());
    }
}
