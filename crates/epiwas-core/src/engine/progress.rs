//! Callback-based progress reporting.
//!
//! Workflows emit [`Progress`] events through a [`ProgressReporter`]; front ends decide how to
//! render them. A reporter without a callback silently drops every event, and the callback must
//! be `Send + Sync` because positions are evaluated in parallel.

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `work` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// `PhaseFinish` is only reported when `work` succeeds, so a front end keeps showing the
    /// phase that failed.
    pub fn phase<T, E>(
        &self,
        name: &'static str,
        work: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let output = work()?;
        self.report(Progress::PhaseFinish);
        Ok(output)
    }
}
