use crate::effects::LoadingIndicator;

/// Operations that hold the busy overlay open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Wallet balance read for the open dialog.
    Balance,
    /// Deposit transaction in flight.
    Write,
}

/// Busy-overlay state, passed explicitly instead of living in a global.
///
/// The overlay is shown while any source is busy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingState {
    balance: bool,
    write: bool,
}

impl LoadingState {
    pub fn begin(self, source: LoadSource) -> Self {
        self.set(source, true)
    }

    pub fn end(self, source: LoadSource) -> Self {
        self.set(source, false)
    }

    pub fn is_active(&self) -> bool {
        self.balance || self.write
    }

    pub fn is_busy(&self, source: LoadSource) -> bool {
        match source {
            LoadSource::Balance => self.balance,
            LoadSource::Write => self.write,
        }
    }

    /// Move from `prev` to `next`, telling the indicator only when the
    /// overlay actually opens or closes.
    pub fn sync(prev: LoadingState, next: LoadingState, indicator: &dyn LoadingIndicator) -> Self {
        if prev.is_active() != next.is_active() {
            indicator.set_loading(next.is_active());
        }
        next
    }

    fn set(mut self, source: LoadSource, busy: bool) -> Self {
        match source {
            LoadSource::Balance => self.balance = busy,
            LoadSource::Write => self.write = busy,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<bool>>);

    impl LoadingIndicator for Recorder {
        fn set_loading(&self, active: bool) {
            self.0.lock().unwrap().push(active);
        }
    }

    #[test]
    fn test_overlay_stays_open_until_all_sources_end() {
        let rec = Recorder::default();
        let idle = LoadingState::default();

        let s1 = LoadingState::sync(idle, idle.begin(LoadSource::Balance), &rec);
        let s2 = LoadingState::sync(s1, s1.begin(LoadSource::Write), &rec);
        let s3 = LoadingState::sync(s2, s2.end(LoadSource::Balance), &rec);
        assert!(s3.is_active());
        assert!(s3.is_busy(LoadSource::Write));

        let s4 = LoadingState::sync(s3, s3.end(LoadSource::Write), &rec);
        assert!(!s4.is_active());

        // One open edge, one close edge.
        assert_eq!(*rec.0.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_end_without_begin_is_harmless() {
        let rec = Recorder::default();
        let idle = LoadingState::default();
        let s = LoadingState::sync(idle, idle.end(LoadSource::Write), &rec);
        assert_eq!(s, idle);
        assert!(rec.0.lock().unwrap().is_empty());
    }
}
