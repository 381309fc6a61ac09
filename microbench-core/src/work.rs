//! Work Items
//!
//! A work item is a zero-argument unit of work the runner invokes. The
//! [`WorkItem`] trait hands back a future for every invocation, so a single
//! runner loop serves both flavours:
//! - [`BlockingWork`] runs the closure eagerly and returns an already-ready future
//! - [`AsyncWork`] returns the closure's future, which may suspend

use futures::future::BoxFuture;
use std::future::ready;

/// Zero-argument unit of work invoked by the runner.
pub trait WorkItem: Send {
    /// Invoke the work once. The returned future completes when the work does.
    fn invoke(&mut self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Work that completes before returning and never suspends.
pub struct BlockingWork {
    f: Box<dyn FnMut() -> anyhow::Result<()> + Send>,
}

impl BlockingWork {
    /// Wrap a blocking closure
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        Self { f: Box::new(f) }
    }
}

impl WorkItem for BlockingWork {
    #[inline]
    fn invoke(&mut self) -> impl Future<Output = anyhow::Result<()>> + Send {
        ready((self.f)())
    }
}

/// Work that may suspend while waiting on timers, I/O or other tasks.
pub struct AsyncWork {
    f: Box<dyn FnMut() -> BoxFuture<'static, anyhow::Result<()>> + Send>,
}

impl AsyncWork {
    /// Wrap a closure returning a future
    pub fn new<F, Fut>(mut f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            f: Box::new(move || Box::pin(f())),
        }
    }
}

impl WorkItem for AsyncWork {
    #[inline]
    fn invoke(&mut self) -> impl Future<Output = anyhow::Result<()>> + Send {
        (self.f)()
    }
}
