use leptos::prelude::*;

use crate::registry::{IconMap, IconRegistry, RegisterMode};

/// App-wide icon registry, shared through Leptos context.
///
/// Registering icons through this handle re-renders every `SvgIcon` that
/// resolved against the registry.
#[derive(Clone, Copy)]
pub struct IconRegistryContext {
    registry: RwSignal<IconRegistry>,
}

impl IconRegistryContext {
    pub fn register_icons<I, K, V>(&self, icons: I, mode: RegisterMode)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.registry.update(|r| r.register_icons(icons, mode));
    }

    /// Snapshot of the registered icons. Tracks the registry when read inside a reactive scope.
    pub fn available_icons(&self) -> IconMap {
        self.registry.with(|r| r.available_icons().clone())
    }

    /// Sorted icon names, tracked.
    pub fn names(&self) -> Vec<String> {
        self.registry
            .with(|r| r.names().into_iter().map(str::to_string).collect())
    }

    pub fn with<T>(&self, f: impl FnOnce(&IconRegistry) -> T) -> T {
        self.registry.with(f)
    }
}

/// Provide `registry` to every descendant of the current owner.
pub fn provide_icon_registry(registry: IconRegistry) -> IconRegistryContext {
    let ctx = IconRegistryContext {
        registry: RwSignal::new(registry),
    };
    provide_context(ctx);
    ctx
}

/// The registry provided by an ancestor.
///
/// Panics if no ancestor called [`provide_icon_registry`].
pub fn use_icon_registry() -> IconRegistryContext {
    expect_context::<IconRegistryContext>()
}
