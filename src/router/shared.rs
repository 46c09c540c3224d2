use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::InsertError;

use super::Registry;

/// A registry shared between threads as immutable snapshots.
///
/// Readers take a snapshot with [`SharedRegistry::load`] and dispatch against
/// it without locking. Writers build the next snapshot from a copy of the
/// current one and publish it in a single atomic swap, so readers see either
/// all of an update or none of it.
#[derive(Debug)]
pub struct SharedRegistry<T> {
    current: ArcSwap<Registry<T>>,
    writer: Mutex<()>,
}

impl<T> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl<T> From<Registry<T>> for SharedRegistry<T> {
    fn from(registry: Registry<T>) -> Self {
        Self::new(registry)
    }
}

impl<T> SharedRegistry<T> {
    pub fn new(registry: Registry<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            writer: Mutex::new(()),
        }
    }

    /// The snapshot currently published.
    pub fn load(&self) -> Arc<Registry<T>> {
        self.current.load_full()
    }

    /// Replaces the published snapshot wholesale.
    pub fn store(&self, registry: Registry<T>) {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.current.store(Arc::new(registry));
        debug!("Published replacement route registry");
    }

    /// Applies `update` to a copy of the current snapshot and publishes it.
    ///
    /// When `update` fails the published snapshot is left as it was.
    pub fn update<F>(&self, update: F) -> Result<(), InsertError>
    where
        F: FnOnce(&mut Registry<T>) -> Result<(), InsertError>,
    {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = Registry::clone(&self.current.load());
        update(&mut next)?;
        debug!("Published route registry with {} entries", next.len());
        self.current.store(Arc::new(next));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use http::Method;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_keep_old_snapshot_for_existing_readers() {
        let shared = SharedRegistry::default();
        let before = shared.load();
        shared
            .update(|registry| registry.add_route(Method::GET, "/hello", "hello"))
            .unwrap();
        assert!(before.dispatcher().dispatch(&Method::GET, "/hello").is_none());
        let after = shared.load();
        assert_eq!(
            after.dispatcher().dispatch(&Method::GET, "/hello").unwrap().handler,
            &"hello"
        );
    }

    #[test]
    fn should_not_publish_failed_update() {
        let shared = SharedRegistry::default();
        let result = shared.update(|registry| {
            registry.add_route(Method::GET, "/ok", "ok")?;
            registry.add_route(Method::GET, "/:id/:id", "broken")
        });
        assert!(result.is_err());
        assert!(shared.load().is_empty());
    }
}
