//! Registry shared by hosts that render Tasks on several threads.
//!
//! Upgrades mutate the registry, so every observe-and-render pass holds the
//! lock for the whole Task. Indentation state stays local to each pass.

use std::sync::Arc;

use parking_lot::Mutex;
use roxmltree::Node;

use crate::config::RenderConfig;
use crate::registry::{RecordKind, Registration, Registry, DEFAULT_IGNORED_TAGS};
use crate::render::{record_key, Decoder, LineSink};
use crate::tables::LookupTables;
use crate::xml::is_element_named;

/// Cloneable handle to one run's registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wrap a registry.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Let the registry learn from `record`'s argument shape.
    pub fn observe(&self, record: Node<'_, '_>, kind: RecordKind) -> Registration {
        let key = record_key(record, kind);
        self.inner
            .lock()
            .register_or_upgrade(key, record, DEFAULT_IGNORED_TAGS)
    }

    /// Run `f` against the registry under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Observe and render one Task's action list as a single critical section.
    pub fn render_task<S>(
        &self,
        task: Node<'_, '_>,
        tables: &LookupTables,
        config: &RenderConfig,
        sink: &mut S,
    ) where
        S: LineSink + ?Sized,
    {
        let mut registry = self.inner.lock();
        for action in task
            .children()
            .filter(|child| is_element_named(*child, RecordKind::Task.element_tag()))
        {
            registry.register_or_upgrade(
                record_key(action, RecordKind::Task),
                action,
                DEFAULT_IGNORED_TAGS,
            );
        }
        Decoder::new(&registry, tables, config).render_action_list(task, sink);
    }

    /// Take the registry back once every other handle is gone.
    pub fn into_inner(self) -> Result<Registry, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
