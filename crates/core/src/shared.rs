//! A shared slot for applications that re-parse their options at run time.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::options::OptionMap;

/// A swappable slot holding the current [`OptionMap`].
///
/// For applications that re-parse while other threads are reading. A new
/// map is built outside the lock and swapped in whole, so a reader holding a
/// [`snapshot`](Self::snapshot) never sees a partially built map. Clones share
/// the same slot.
///
/// # Examples
///
/// ```
/// use flagmap_core::{OptionMap, SharedOptions};
///
/// let shared = SharedOptions::new(OptionMap::parse(["-level=1"]));
/// let before = shared.snapshot();
///
/// shared.reparse(["-level=2"]);
///
/// assert_eq!(before.get_int("level", 0), 1);
/// assert_eq!(shared.snapshot().get_int("level", 0), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedOptions {
    inner: Arc<RwLock<Arc<OptionMap>>>,
}

impl SharedOptions {
    pub fn new(options: OptionMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(options))),
        }
    }

    /// The map as of now. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<OptionMap> {
        let current = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Replaces the map, returning the previous one.
    pub fn replace(&self, options: OptionMap) -> Arc<OptionMap> {
        let options = Arc::new(options);
        let mut current = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, options)
    }

    /// Parses `args` and swaps the result in, discarding the previous map.
    pub fn reparse<I, S>(&self, args: I) -> Arc<OptionMap>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = OptionMap::parse(args);
        let snapshot = Arc::new(options);
        let mut current = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::clone(&snapshot);
        debug!("Replaced shared options ({} set)", snapshot.len());
        snapshot
    }
}
