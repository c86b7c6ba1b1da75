//! Everything a frame reads: primitives, the light and the background.

use crate::intersect::Primitive;
use dio_core::{Environment, Light};

/// Immutable render context, passed by reference to the frame driver and
/// the shading engine.
///
/// Primitive order matters only for tie-breaking: equal-distance hits go
/// to the earlier primitive, and the shadow test stops at the first
/// occluder in this order.
pub struct SceneContext {
    pub primitives: Vec<Box<dyn Primitive>>,
    pub light: Light,
    pub environment: Box<dyn Environment>,
}

impl SceneContext {
    /// Create an empty scene.
    pub fn new(light: Light, environment: Box<dyn Environment>) -> Self {
        Self {
            primitives: Vec::new(),
            light,
            environment,
        }
    }

    /// Add a primitive after all existing ones.
    pub fn push(&mut self, primitive: impl Primitive + 'static) {
        self.primitives.push(Box::new(primitive));
    }

    /// Add a primitive, builder style.
    pub fn with(mut self, primitive: impl Primitive + 'static) -> Self {
        self.push(primitive);
        self
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
