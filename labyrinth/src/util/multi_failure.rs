use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use std::panic;

/// Guard object which collects failures from several cases of a test, then panics when it
/// is dropped if there were any.
///
/// A maze test typically checks the same properties over many sizes and seeds; this lets a
/// [`#[test]`](macro@test) report every failing case instead of only the first.
///
/// ```should_panic
/// use labyrinth::util::MultiFailure;
///
/// let mut f = MultiFailure::new();
/// for seed in 0..3 {
///     f.catch(|| assert!(seed < 2, "seed {seed} failed"));
/// }
/// // `f` panics here, after all three seeds have been tried.
/// ```
#[derive(Debug, Default)]
pub struct MultiFailure {
    panics: Vec<Box<dyn core::any::Any + Send>>,
    /// Failures recorded by [`MultiFailure::fail()`] rather than by panicking.
    messages: Vec<String>,
}

impl MultiFailure {
    /// Constructs an empty [`MultiFailure`], which does nothing when dropped unless a
    /// failure is later recorded.
    #[inline(never)]
    #[must_use = "this is useless if never invoked to collect failures"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `f`. If it panics, records that as a failure and returns [`None`].
    #[inline(never)]
    pub fn catch<O, F>(&mut self, f: F) -> Option<O>
    where
        F: FnOnce() -> O,
        F: panic::UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(output) => Some(output),
            Err(panic_payload) => {
                // The panic hook has already printed the message.
                self.panics.push(panic_payload);
                None
            }
        }
    }

    /// Records a failure without panicking. The message is printed immediately and again in
    /// the summary when this is dropped.
    #[inline(never)]
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        std::eprintln!("failure: {message}");
        self.messages.push(message);
    }

    /// Returns the number of failures recorded so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.panics.len() + self.messages.len()
    }
}

impl Drop for MultiFailure {
    #[inline(never)]
    fn drop(&mut self) {
        if std::thread::panicking() {
            // Don't double-panic.
            return;
        }

        let count = self.count();
        if count == 0 {
            return;
        }

        let summary_message = format!(
            "{count} failure{s_were} found",
            s_were = if count == 1 { " was" } else { "s were" }
        );
        std::eprintln!("\n{summary_message}");
        for message in &self.messages {
            std::eprintln!("  {message}");
        }
        // `resume_unwind()` skips the panic hook, so no second full report is printed.
        panic::resume_unwind(Box::new(summary_message));
    }
}

#[cfg(test)]
mod tests {
    use super::{panic, *}; // resolve `ambiguous_panic_imports` <https://github.com/rust-lang/rust/issues/147319>

    #[test]
    fn no_failures() {
        let f = MultiFailure::new();
        assert_eq!(f.count(), 0);
    }

    #[test]
    #[should_panic = "3 failures were found"]
    fn panics_are_collected() {
        let mut f = MultiFailure::new();
        for i in 0..3 {
            f.catch(|| {
                panic!("test panic {i}");
            });
        }
        assert_eq!(f.count(), 3);
    }

    #[test]
    #[should_panic = "2 failures were found"]
    fn mixed_failures() {
        let mut f = MultiFailure::new();
        assert_eq!(f.catch(|| 5), Some(5));
        f.catch(|| panic!("boom"));
        f.fail("seed 4 produced a loop");
        assert_eq!(f.count(), 2);
    }
}
