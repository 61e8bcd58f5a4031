//! Static registry of content windows shown as desktop icons.

use std::{collections::HashMap, fmt, rc::Rc};

use leptos::*;
use system_ui::IconName;
use thiserror::Error;

use crate::model::WindowId;

/// Renders a window's content panel.
pub type ContentRenderer = Rc<dyn Fn() -> View>;

#[derive(Clone)]
/// A registered content window: identity, chrome, and the panel it hosts.
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    content: ContentRenderer,
}

impl WindowDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: IconName,
        content: impl Fn() -> View + 'static,
    ) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.into(),
            icon,
            content: Rc::new(content),
        }
    }

    pub fn render_content(&self) -> View {
        (self.content)()
    }
}

impl fmt::Debug for WindowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected registrations.
pub enum RegistryError {
    #[error("window id `{0}` is registered twice")]
    DuplicateId(WindowId),
}

#[derive(Debug, Clone, Default)]
/// Ordered set of [`WindowDescriptor`]s with O(1) lookup by id.
///
/// Icon order on the desktop follows registration order.
pub struct WindowRegistry {
    descriptors: Vec<WindowDescriptor>,
    index: HashMap<WindowId, usize>,
}

impl WindowRegistry {
    /// Builds a registry, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] for the first repeated id.
    pub fn new(
        descriptors: impl IntoIterator<Item = WindowDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Appends one descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] when the id is already registered.
    pub fn register(&mut self, descriptor: WindowDescriptor) -> Result<(), RegistryError> {
        if self.index.contains_key(&descriptor.id) {
            return Err(RegistryError::DuplicateId(descriptor.id));
        }
        self.index
            .insert(descriptor.id.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowDescriptor> {
        self.index.get(id).map(|&slot| &self.descriptors[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Registry with the three group-planner windows and empty content, for tests.
#[cfg(test)]
pub(crate) fn test_registry() -> WindowRegistry {
    WindowRegistry::new([
        WindowDescriptor::new("packing", "Packing List", IconName::Folder, || {
            ().into_view()
        }),
        WindowDescriptor::new("food", "Food List", IconName::Utensils, || ().into_view()),
        WindowDescriptor::new("photos", "Photo Album", IconName::Image, || ().into_view()),
    ])
    .expect("unique ids")
}
