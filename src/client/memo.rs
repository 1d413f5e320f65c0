//! Per-instance memoization of expensive accessors
//!
//! A [`Memoized`] slot lives inside the struct that owns the accessor, so
//! every instance caches independently. The first successful computation is
//! stored and every later read returns a reference to that same value.

use std::future::Future;

use tokio::sync::OnceCell;

/// Lazily computed, write-once value owned by a single instance.
///
/// Concurrent first reads are serialized by the cell: only one computation
/// runs and the others wait for its result. A failed computation leaves the
/// slot empty and hands the error back to the caller.
#[derive(Debug)]
pub struct Memoized<T> {
    label: &'static str,
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an empty slot. `label` identifies the accessor in logs.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            cell: OnceCell::new(),
        }
    }

    /// Return the stored value, computing it with `init` on first access.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.cell.get() {
            log::trace!("Memo hit: {}", self.label);
            return Ok(value);
        }

        self.cell
            .get_or_try_init(|| async {
                log::debug!("Computing {}", self.label);
                init().await
            })
            .await
    }

    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }
}
