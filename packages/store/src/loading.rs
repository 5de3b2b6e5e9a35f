//! Reference-counted loading indicator.
//!
//! Every request that wants a spinner calls [`LoadingCounter::show`] when it
//! starts and [`LoadingCounter::hide`] when it settles. The indicator stays on
//! while at least one request is in flight.

/// Which spinner a counter drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadingScope {
    /// Full-page overlay.
    Page,
    /// Users table.
    Users,
    /// Articles list.
    Articles,
}

/// In-flight request counter with a derived busy flag.
///
/// `busy` is true iff `count > 0`; `count` never underflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingCounter {
    count: u32,
    busy: bool,
}

impl LoadingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.count = self.count.saturating_add(1);
        if self.count == 1 {
            self.busy = true;
        }
    }

    /// Tolerates unmatched calls.
    pub fn hide(&mut self) {
        if self.count == 0 {
            self.busy = false;
            return;
        }
        self.count -= 1;
        if self.count == 0 {
            self.busy = false;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.busy = false;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_show_then_hide() {
        let mut loading = LoadingCounter::new();
        assert!(!loading.is_busy());

        loading.show();
        loading.show();
        assert!(loading.is_busy());
        assert_eq!(loading.count(), 2);

        loading.hide();
        assert!(loading.is_busy());

        loading.hide();
        assert!(!loading.is_busy());
        assert_eq!(loading.count(), 0);
    }

    #[test]
    fn test_hide_without_show() {
        let mut loading = LoadingCounter::new();
        loading.hide();
        loading.hide();
        assert_eq!(loading.count(), 0);
        assert!(!loading.is_busy());

        // A later show still works normally
        loading.show();
        assert!(loading.is_busy());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut loading = LoadingCounter::new();
        for _ in 0..5 {
            loading.show();
        }
        loading.reset();
        assert_eq!(loading, LoadingCounter::default());
    }

    proptest! {
        #[test]
        fn busy_tracks_count(ops in proptest::collection::vec(0u8..3, 0..64)) {
            let mut loading = LoadingCounter::new();
            let mut expected: u32 = 0;
            for op in ops {
                match op {
                    0 => {
                        loading.show();
                        expected += 1;
                    }
                    1 => {
                        loading.hide();
                        expected = expected.saturating_sub(1);
                    }
                    _ => {
                        loading.reset();
                        expected = 0;
                    }
                }
                prop_assert_eq!(loading.count(), expected);
                prop_assert_eq!(loading.is_busy(), loading.count() > 0);
            }
        }
    }
}
