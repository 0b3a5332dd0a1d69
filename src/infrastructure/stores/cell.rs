use tokio::sync::watch;

/// Observable mutable cell backing every UI state store.
///
/// One mutation runs to completion before the next is observed; consumers
/// subscribe for change notifications instead of reaching into ambient
/// globals.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent change
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.tx.send_modify(mutate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let cell = StateCell::new(0u32);
        let mut rx = cell.subscribe();

        cell.set(5);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 5);

        cell.update(|v| *v += 1);
        rx.changed().await.unwrap();
        assert_eq!(cell.get(), 6);
    }
}
