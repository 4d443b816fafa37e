use std::fmt;
use std::sync::Arc;

use sentry_core::Hub;

/// Per-call values passed alongside every [`Record`](crate::Record).
///
/// The only value carried today is an optional Sentry [`Hub`]. Binding a hub
/// here routes reports from a single request or task to that hub instead of
/// the thread's current one.
#[derive(Clone, Default)]
pub struct Context {
    hub: Option<Arc<Hub>>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a hub to this context.
    #[must_use]
    pub fn with_hub(mut self, hub: Arc<Hub>) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Returns the hub bound to this context, if any.
    pub fn hub(&self) -> Option<&Arc<Hub>> {
        self.hub.as_ref()
    }

    /// Resolves the hub that reports for this call should go to.
    ///
    /// A hub bound to the context always wins. Otherwise the current thread's
    /// hub is used, but only if it has an enabled client.
    pub fn resolve_hub(&self) -> Option<Arc<Hub>> {
        select_hub(self.hub.as_ref(), Hub::current())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("hub", &self.hub.as_ref().map(|_| "Hub"))
            .finish()
    }
}

fn select_hub(bound: Option<&Arc<Hub>>, fallback: Arc<Hub>) -> Option<Arc<Hub>> {
    if let Some(hub) = bound {
        return Some(hub.clone());
    }
    let active = fallback
        .client()
        .is_some_and(|client| client.is_enabled());
    active.then_some(fallback)
}
