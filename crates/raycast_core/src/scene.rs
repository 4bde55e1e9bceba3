//! Scene types for raycast.
//!
//! A scene is one camera and an ordered list of objects. Every object
//! property is optional; the parser only guarantees how many were given.

use std::fmt;

use raycast_math::{Color, Vector3};

/// Default cap on the number of objects in one scene.
pub const DEFAULT_MAX_OBJECTS: usize = 128;

/// The viewing camera.
///
/// The eye sits at a fixed position and looks down -Z at an image plane one
/// unit away, `world_width` by `world_height` scene units in size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Image-plane width in scene units
    pub world_width: f64,
    /// Image-plane height in scene units
    pub world_height: f64,
}

impl Camera {
    /// Fixed eye position.
    pub const POSITION: Vector3 = Vector3::ZERO;

    /// Create a camera with the given image-plane extent.
    pub fn new(world_width: f64, world_height: f64) -> Self {
        Self {
            world_width,
            world_height,
        }
    }

    /// Get the eye position.
    #[inline]
    pub fn position(&self) -> Vector3 {
        Self::POSITION
    }
}

/// Object variant selected by the first token of an object line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Sphere,
    Plane,
    Light,
}

impl ObjectKind {
    /// Every object needs at least this many properties.
    pub const MIN_PROPERTIES: usize = 3;

    /// Look up a kind by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "sphere" => Some(Self::Sphere),
            "plane" => Some(Self::Plane),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Keyword used in scene files.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Light => "light",
        }
    }

    /// Upper bound on the number of properties for this kind.
    pub fn max_properties(self) -> usize {
        match self {
            Self::Sphere | Self::Plane => 5,
            Self::Light => 6,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How a property's value tokens are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Literal `"0"` or a value reading as greater than zero
    PositiveOrZero,
    /// Literal `"0"` or a value reading as non-zero
    Numeric,
}

/// A property keyword recognized on object lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Color,
    Position,
    Radius,
    Normal,
    DiffuseColor,
    SpecularColor,
    Theta,
    RadialA0,
    RadialA1,
    RadialA2,
    AngularA0,
    Direction,
}

impl Property {
    /// All properties, in the order the writer emits them.
    pub const ALL: [Property; 12] = [
        Property::Color,
        Property::Position,
        Property::Radius,
        Property::Normal,
        Property::DiffuseColor,
        Property::SpecularColor,
        Property::Theta,
        Property::RadialA0,
        Property::RadialA1,
        Property::RadialA2,
        Property::AngularA0,
        Property::Direction,
    ];

    /// Look up a property by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Keyword used in scene files.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Position => "position",
            Self::Radius => "radius",
            Self::Normal => "normal",
            Self::DiffuseColor => "diffuse_color",
            Self::SpecularColor => "specular_color",
            Self::Theta => "theta",
            Self::RadialA0 => "radial-a0",
            Self::RadialA1 => "radial-a1",
            Self::RadialA2 => "radial-a2",
            Self::AngularA0 => "angular-a0",
            Self::Direction => "direction",
        }
    }

    /// Number of value tokens: 3 for vectors, 1 for scalars.
    pub fn arity(self) -> usize {
        if self.is_vector() {
            3
        } else {
            1
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::Position
                | Self::Normal
                | Self::DiffuseColor
                | Self::SpecularColor
                | Self::Direction
        )
    }

    pub fn value_rule(self) -> ValueRule {
        match self {
            Self::Color | Self::Radius | Self::DiffuseColor | Self::SpecularColor => {
                ValueRule::PositiveOrZero
            }
            _ => ValueRule::Numeric,
        }
    }

    /// Whether this property may appear on an object of `kind`.
    pub fn allowed_for(self, kind: ObjectKind) -> bool {
        match self {
            Self::Color | Self::Position => true,
            Self::Radius => kind == ObjectKind::Sphere,
            Self::Normal => kind == ObjectKind::Plane,
            Self::DiffuseColor | Self::SpecularColor => kind != ObjectKind::Light,
            Self::Theta
            | Self::RadialA0
            | Self::RadialA1
            | Self::RadialA2
            | Self::AngularA0
            | Self::Direction => kind == ObjectKind::Light,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A fully read property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Scalar(f64),
    Vector(Vector3),
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere {
    pub color: Option<Color>,
    pub position: Option<Vector3>,
    pub radius: Option<f64>,
    pub diffuse_color: Option<Color>,
    pub specular_color: Option<Color>,
    /// Keywords on the source line that replaced an earlier value.
    pub overridden: usize,
}

/// An infinite plane through `position` with the given `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    pub color: Option<Color>,
    pub position: Option<Vector3>,
    pub normal: Option<Vector3>,
    pub diffuse_color: Option<Color>,
    pub specular_color: Option<Color>,
    /// Keywords on the source line that replaced an earlier value.
    pub overridden: usize,
}

/// A point or spot light. Parsed and kept, never intersected or shaded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    pub color: Option<Color>,
    pub position: Option<Vector3>,
    pub theta: Option<f64>,
    pub radial_a0: Option<f64>,
    pub radial_a1: Option<f64>,
    pub radial_a2: Option<f64>,
    pub angular_a0: Option<f64>,
    pub direction: Option<Vector3>,
    /// Keywords on the source line that replaced an earlier value.
    pub overridden: usize,
}

/// One object of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
    Light(Light),
}

impl SceneObject {
    /// Create an object of `kind` with no properties set.
    pub fn new(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Sphere => Self::Sphere(Sphere::default()),
            ObjectKind::Plane => Self::Plane(Plane::default()),
            ObjectKind::Light => Self::Light(Light::default()),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Sphere(_) => ObjectKind::Sphere,
            Self::Plane(_) => ObjectKind::Plane,
            Self::Light(_) => ObjectKind::Light,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Self::Light(_))
    }

    /// Flat surface color returned on hit. Lights have none.
    pub fn diffuse_color(&self) -> Option<Color> {
        match self {
            Self::Sphere(s) => s.diffuse_color,
            Self::Plane(p) => p.diffuse_color,
            Self::Light(_) => None,
        }
    }

    /// Store `value` for `property`.
    ///
    /// Returns `false`, leaving the object untouched, when the property does
    /// not belong to this variant or the value has the wrong shape. Replacing
    /// a value already present bumps the override count.
    pub fn set(&mut self, property: Property, value: PropertyValue) -> bool {
        let replaced = match value {
            PropertyValue::Vector(v) => match self.vector_slot(property) {
                Some(slot) => slot.replace(v).is_some(),
                None => return false,
            },
            PropertyValue::Scalar(x) => match self.scalar_slot(property) {
                Some(slot) => slot.replace(x).is_some(),
                None => return false,
            },
        };
        if replaced {
            *self.overridden_mut() += 1;
        }
        true
    }

    /// Number of property entries the object was read from, repeats included.
    pub fn property_count(&self) -> usize {
        let set = Property::ALL
            .iter()
            .filter(|&&property| self.get(property).is_some())
            .count();
        set + self.overridden()
    }

    pub fn overridden(&self) -> usize {
        match self {
            Self::Sphere(s) => s.overridden,
            Self::Plane(p) => p.overridden,
            Self::Light(l) => l.overridden,
        }
    }

    fn overridden_mut(&mut self) -> &mut usize {
        match self {
            Self::Sphere(s) => &mut s.overridden,
            Self::Plane(p) => &mut p.overridden,
            Self::Light(l) => &mut l.overridden,
        }
    }

    /// Read back the value stored for `property`, if any.
    pub fn get(&self, property: Property) -> Option<PropertyValue> {
        // Objects are Copy; a copy lets the lookup reuse the mutable field table
        let mut copy = *self;
        if property.is_vector() {
            copy.vector_slot(property)
                .and_then(|slot| *slot)
                .map(PropertyValue::Vector)
        } else {
            copy.scalar_slot(property)
                .and_then(|slot| *slot)
                .map(PropertyValue::Scalar)
        }
    }

    fn vector_slot(&mut self, property: Property) -> Option<&mut Option<Vector3>> {
        match (self, property) {
            (Self::Sphere(s), Property::Color) => Some(&mut s.color),
            (Self::Sphere(s), Property::Position) => Some(&mut s.position),
            (Self::Sphere(s), Property::DiffuseColor) => Some(&mut s.diffuse_color),
            (Self::Sphere(s), Property::SpecularColor) => Some(&mut s.specular_color),
            (Self::Plane(p), Property::Color) => Some(&mut p.color),
            (Self::Plane(p), Property::Position) => Some(&mut p.position),
            (Self::Plane(p), Property::Normal) => Some(&mut p.normal),
            (Self::Plane(p), Property::DiffuseColor) => Some(&mut p.diffuse_color),
            (Self::Plane(p), Property::SpecularColor) => Some(&mut p.specular_color),
            (Self::Light(l), Property::Color) => Some(&mut l.color),
            (Self::Light(l), Property::Position) => Some(&mut l.position),
            (Self::Light(l), Property::Direction) => Some(&mut l.direction),
            _ => None,
        }
    }

    fn scalar_slot(&mut self, property: Property) -> Option<&mut Option<f64>> {
        match (self, property) {
            (Self::Sphere(s), Property::Radius) => Some(&mut s.radius),
            (Self::Light(l), Property::Theta) => Some(&mut l.theta),
            (Self::Light(l), Property::RadialA0) => Some(&mut l.radial_a0),
            (Self::Light(l), Property::RadialA1) => Some(&mut l.radial_a1),
            (Self::Light(l), Property::RadialA2) => Some(&mut l.radial_a2),
            (Self::Light(l), Property::AngularA0) => Some(&mut l.angular_a0),
            _ => None,
        }
    }
}

/// A parsed scene: the camera plus objects in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
        }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Get the number of objects, lights included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Count of objects of `kind`.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip() {
        for property in Property::ALL {
            assert_eq!(Property::from_keyword(property.keyword()), Some(property));
        }
        for kind in [ObjectKind::Sphere, ObjectKind::Plane, ObjectKind::Light] {
            assert_eq!(ObjectKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(Property::from_keyword("radial_a0"), None);
        assert_eq!(ObjectKind::from_keyword("camera"), None);
    }

    #[test]
    fn test_property_gates() {
        assert!(Property::Radius.allowed_for(ObjectKind::Sphere));
        assert!(!Property::Radius.allowed_for(ObjectKind::Plane));
        assert!(Property::Normal.allowed_for(ObjectKind::Plane));
        assert!(!Property::Normal.allowed_for(ObjectKind::Light));
        assert!(!Property::DiffuseColor.allowed_for(ObjectKind::Light));
        assert!(Property::Color.allowed_for(ObjectKind::Sphere));
        assert!(Property::Direction.allowed_for(ObjectKind::Light));
        assert!(!Property::Theta.allowed_for(ObjectKind::Sphere));
    }

    #[test]
    fn test_every_allowed_property_has_a_slot() {
        for kind in [ObjectKind::Sphere, ObjectKind::Plane, ObjectKind::Light] {
            for property in Property::ALL {
                let mut object = SceneObject::new(kind);
                let value = if property.is_vector() {
                    PropertyValue::Vector(Vector3::ONE)
                } else {
                    PropertyValue::Scalar(1.0)
                };
                assert_eq!(object.set(property, value), property.allowed_for(kind));
                if property.allowed_for(kind) {
                    assert_eq!(object.get(property), Some(value));
                } else {
                    assert_eq!(object.get(property), None);
                }
            }
        }
    }

    #[test]
    fn test_set_rejects_wrong_shape() {
        let mut sphere = SceneObject::new(ObjectKind::Sphere);
        assert!(!sphere.set(Property::Radius, PropertyValue::Vector(Vector3::ONE)));
        assert!(!sphere.set(Property::Position, PropertyValue::Scalar(1.0)));
        assert_eq!(sphere, SceneObject::new(ObjectKind::Sphere));
    }

    #[test]
    fn test_repeated_property_counts_as_override() {
        let mut sphere = SceneObject::new(ObjectKind::Sphere);
        for radius in [1.0, 2.0, 3.0] {
            assert!(sphere.set(Property::Radius, PropertyValue::Scalar(radius)));
        }
        assert_eq!(sphere.get(Property::Radius), Some(PropertyValue::Scalar(3.0)));
        assert_eq!(sphere.overridden(), 2);
        assert_eq!(sphere.property_count(), 3);

        sphere.set(Property::Position, PropertyValue::Vector(Vector3::ZERO));
        assert_eq!(sphere.overridden(), 2);
        assert_eq!(sphere.property_count(), 4);
    }

    #[test]
    fn test_diffuse_color() {
        let mut plane = SceneObject::new(ObjectKind::Plane);
        plane.set(
            Property::DiffuseColor,
            PropertyValue::Vector(Vector3::new(0.0, 1.0, 0.0)),
        );
        assert_eq!(plane.diffuse_color(), Some(Vector3::new(0.0, 1.0, 0.0)));
        assert_eq!(SceneObject::new(ObjectKind::Light).diffuse_color(), None);
    }

    #[test]
    fn test_scene_counts() {
        let mut scene = Scene::new(Camera::new(2.0, 2.0));
        assert!(scene.is_empty());
        scene.add(SceneObject::new(ObjectKind::Sphere));
        scene.add(SceneObject::new(ObjectKind::Light));
        scene.add(SceneObject::new(ObjectKind::Sphere));
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.count(ObjectKind::Sphere), 2);
        assert_eq!(scene.count(ObjectKind::Plane), 0);
        assert_eq!(scene.camera.position(), Vector3::ZERO);
    }
}
