//! Progress observation
//!
//! The optimizer reports how many candidates it has evaluated. Observers are
//! passive: they cannot influence the search.

/// Number of evaluations batched into one progress notification
pub const PROGRESS_STRIDE: u64 = 1 << 12;

/// Receives progress notifications from a search
///
/// `Sync` so a single observer can be shared by parallel workers.
pub trait ProgressObserver: Sync {
    /// Called with the number of candidates evaluated since the last call
    fn on_progress(&self, evaluated: u64);
}

impl<F> ProgressObserver for F
where
    F: Fn(u64) + Sync,
{
    fn on_progress(&self, evaluated: u64) {
        self(evaluated);
    }
}

/// Batches per-candidate ticks into stride-sized notifications
pub(crate) struct ProgressTicker<'o> {
    observer: Option<&'o dyn ProgressObserver>,
    pending: u64,
}

impl<'o> ProgressTicker<'o> {
    pub(crate) const fn new(observer: Option<&'o dyn ProgressObserver>) -> Self {
        Self {
            observer,
            pending: 0,
        }
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        if let Some(observer) = self.observer {
            self.pending += 1;
            if self.pending == PROGRESS_STRIDE {
                observer.on_progress(self.pending);
                self.pending = 0;
            }
        }
    }

    /// Report whatever is still pending
    pub(crate) fn flush(&mut self) {
        if self.pending == 0 {
            return;
        }
        if let Some(observer) = self.observer {
            observer.on_progress(self.pending);
            self.pending = 0;
        }
    }
}

impl Drop for ProgressTicker<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn ticker_batches_and_flushes() {
        let total = AtomicU64::new(0);
        let calls = AtomicU64::new(0);
        let observer = |n: u64| {
            total.fetch_add(n, Ordering::Relaxed);
            calls.fetch_add(1, Ordering::Relaxed);
        };

        {
            let mut ticker = ProgressTicker::new(Some(&observer));
            for _ in 0..(PROGRESS_STRIDE * 2 + 5) {
                ticker.tick();
            }
        }

        assert_eq!(total.load(Ordering::Relaxed), PROGRESS_STRIDE * 2 + 5);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn ticker_without_observer_is_silent() {
        let mut ticker = ProgressTicker::new(None);
        ticker.tick();
        ticker.flush();
        assert_eq!(ticker.pending, 0);
    }
}
