use crate::prelude::*;

/// Human readable label attached to every spawned entity
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}

/// Named subset of the scene graph an entity belongs to.
///
/// Ray casts can be scoped to a group, e.g. only the walkable floors of a model.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelGroup(pub String);

impl ModelGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
