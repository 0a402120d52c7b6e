// src/crawl/cancel.rs
// =============================================================================
// A one-shot "stop crawling" signal.
//
// main.rs keeps the CancelHandle and fires it on Ctrl-C. The crawler holds a
// CancelSignal and races every fetch against it, so an interrupted crawl
// still returns the words it collected so far.
//
// Rust concepts:
// - tokio::sync::watch: A channel that only remembers the latest value,
//   perfect for a flag that flips from false to true once
// =============================================================================

use tokio::sync::watch;

/// Fires the cancellation signal
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Observes the cancellation signal. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

// Creates a connected handle/signal pair
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace never fails, even if every signal was dropped
        self.tx.send_replace(true);
    }
}

impl CancelSignal {
    /// A signal that can never fire
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    // Completes once the signal fires. If the handle is dropped without
    // firing, this never completes.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
