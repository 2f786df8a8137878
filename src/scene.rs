//! Owned scene context.
//!
//! Entities live in a [`Scene`] that is created and torn down with the
//! session that owns it; there is no process-wide registry. Each entity
//! carries one slot per component kind, so component lookup is a field
//! access returning a typed `Result`, not a runtime type scan.

use thiserror::Error;

use crate::camera::Camera;
use crate::light::Light;
use crate::transform::Transform;

/// Handle to an entity within its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

/// Component kinds an entity can carry, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Light,
    Camera,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Camera => write!(f, "camera"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("no entity with id {0}")]
    UnknownEntity(usize),
    #[error("entity has no {0} component")]
    ComponentNotFound(ComponentKind),
}

/// An entity: a transform plus optional component slots.
#[derive(Debug, Default)]
pub struct Entity {
    pub transform: Transform,
    light: Option<Light>,
    camera: Option<Camera>,
}

impl Entity {
    pub fn attach_light(&mut self, light: Light) -> &mut Light {
        self.light.insert(light)
    }

    pub fn attach_camera(&mut self, camera: Camera) -> &mut Camera {
        self.camera.insert(camera)
    }

    pub fn light(&self) -> Result<&Light, SceneError> {
        self.light
            .as_ref()
            .ok_or(SceneError::ComponentNotFound(ComponentKind::Light))
    }

    pub fn light_mut(&mut self) -> Result<&mut Light, SceneError> {
        self.light
            .as_mut()
            .ok_or(SceneError::ComponentNotFound(ComponentKind::Light))
    }

    pub fn camera(&self) -> Result<&Camera, SceneError> {
        self.camera
            .as_ref()
            .ok_or(SceneError::ComponentNotFound(ComponentKind::Camera))
    }

    pub fn camera_mut(&mut self) -> Result<&mut Camera, SceneError> {
        self.camera
            .as_mut()
            .ok_or(SceneError::ComponentNotFound(ComponentKind::Camera))
    }
}

/// The entity container. Owns every entity spawned into it.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty entity and returns its handle.
    pub fn spawn(&mut self) -> EntityId {
        self.entities.push(Entity::default());
        EntityId(self.entities.len() - 1)
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, SceneError> {
        self.entities
            .get(id.0)
            .ok_or(SceneError::UnknownEntity(id.0))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, SceneError> {
        self.entities
            .get_mut(id.0)
            .ok_or(SceneError::UnknownEntity(id.0))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities carrying a light, with their transforms.
    pub fn lights(&self) -> impl Iterator<Item = (&Transform, &Light)> {
        self.entities
            .iter()
            .filter_map(|e| e.light.as_ref().map(|l| (&e.transform, l)))
    }

    /// Entities carrying a camera.
    pub fn cameras(&self) -> impl Iterator<Item = &Camera> {
        self.entities.iter().filter_map(|e| e.camera.as_ref())
    }
}
