//! Top-level fault barrier for the game loop.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

/// Run `f`, turning a panic into an error so the caller can report it and
/// exit normally. Destructors of everything `f` owned have run by the time
/// this returns, so a terminal renderer inside it is already restored.
pub fn catch_fatal<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!("panic: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_results_through() {
        assert_eq!(catch_fatal(|| Ok(7)).unwrap(), 7);

        let err = catch_fatal::<()>(|| anyhow::bail!("render failed")).unwrap_err();
        assert_eq!(err.to_string(), "render failed");
    }

    #[test]
    fn panic_becomes_error() {
        let err = catch_fatal::<()>(|| panic!("board index out of range")).unwrap_err();
        assert_eq!(err.to_string(), "panic: board index out of range");
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let row = 21;
        let err = catch_fatal::<()>(|| panic!("bad row {}", row)).unwrap_err();
        assert_eq!(err.to_string(), "panic: bad row 21");
    }

    #[test]
    fn drops_run_before_returning() {
        struct Flag<'a>(&'a std::cell::Cell<bool>);
        impl Drop for Flag<'_> {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = std::cell::Cell::new(false);
        let result = catch_fatal::<()>(|| {
            let _guard = Flag(&dropped);
            panic!("loop fault");
        });
        assert!(result.is_err());
        assert!(dropped.get());
    }
}
