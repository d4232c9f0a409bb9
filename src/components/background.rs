use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use std::future::Future;

/// Mutations started from a view but owned by the root scope.
///
/// A view's own `spawn` is dropped when the view unmounts, which would cut a
/// bulk delete short between two calls. Work started here runs to its final
/// notification no matter where the user navigates. Futures passed to
/// `start` must only write app-level signals.
#[derive(Clone, Copy, PartialEq)]
pub struct BackgroundWork {
    running: Signal<usize>,
}

impl BackgroundWork {
    pub fn new(running: Signal<usize>) -> Self {
        Self { running }
    }

    pub fn is_running(&self) -> bool {
        (self.running)() > 0
    }

    pub fn start<F>(&self, work: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let mut running = self.running;
        *running.write() += 1;
        spawn_forever(async move {
            work.await;
            let mut count = running.write();
            *count = count.saturating_sub(1);
        });
    }
}
