//! Observation of tracked child properties.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nami::Signal;
use nami::watcher::BoxWatcherGuard;
use trellis_layout::ChildProperty;

use crate::ViewNode;

/// A flag raised whenever a watched child property of a container changes.
#[derive(Debug, Clone, Default)]
pub struct LayoutSignal {
    dirty: Arc<AtomicBool>,
}

impl LayoutSignal {
    /// Creates a lowered signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal.
    pub fn raise(&self) {
        self.dirty.store(true, Ordering::Relaxed);
    }

    /// Lowers the signal, returning `true` if it was raised.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }

    /// Watches the `properties` of `node`, raising this signal on change.
    ///
    /// The returned guards keep the watchers alive; dropping them stops the
    /// observation.
    #[must_use]
    pub fn watch(&self, node: &ViewNode, properties: &[ChildProperty]) -> Vec<BoxWatcherGuard> {
        properties
            .iter()
            .map(|property| {
                let signal = self.clone();
                match property {
                    ChildProperty::MarginBefore => node
                        .margin_before_binding()
                        .watch(move |_| signal.raise()),
                    ChildProperty::MarginAfter => node
                        .margin_after_binding()
                        .watch(move |_| signal.raise()),
                    ChildProperty::IsVisible => {
                        node.is_visible_binding().watch(move |_| signal.raise())
                    }
                }
            })
            .collect()
    }
}
