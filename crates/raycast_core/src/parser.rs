//! Scene description parser.
//!
//! The format is line oriented. The first line declares the camera:
//!
//! ```text
//! camera, width: 2.0, height: 2.0
//! ```
//!
//! Every following line declares one object:
//!
//! ```text
//! sphere, color: [1, 0, 0], position: [0, 1, -5], radius: 2, diffuse_color: [1, 0, 0], specular_color: [0, 0, 0]
//! plane, position: [0, -1, 0], normal: [0, 1, 0], diffuse_color: [0, 0, 1], specular_color: [0, 0, 0]
//! light, color: [2, 2, 2], theta: 0, radial-a2: 0.125, radial-a1: 0.125, radial-a0: 0.125, position: [1, 3, -2]
//! ```
//!
//! Camera tokens are separated by any of ` ,:\t`. Object tokens are also
//! separated by `[` and `]`, so brackets are decoration only.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use raycast_math::Vector3;

use crate::error::{SceneError, SceneResult};
use crate::numeric::{accepts_numeric, accepts_positive, atof};
use crate::scene::{
    Camera, ObjectKind, Property, PropertyValue, Scene, SceneObject, ValueRule,
    DEFAULT_MAX_OBJECTS,
};

const CAMERA_DELIMITERS: &[char] = &[' ', ',', ':', '\t'];
const OBJECT_DELIMITERS: &[char] = &[' ', ',', '\t', ':', '[', ']'];

/// Parser settings.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum number of objects accepted after the camera line
    pub max_objects: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_objects: DEFAULT_MAX_OBJECTS,
        }
    }
}

/// Scene file parser.
#[derive(Debug, Clone, Default)]
pub struct SceneParser {
    options: ParseOptions,
}

impl SceneParser {
    /// Create a new parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a whole scene from `reader`.
    ///
    /// Stops at the first malformed line; no partial scene is returned.
    pub fn parse<R: BufRead>(&self, reader: R) -> SceneResult<Scene> {
        let mut lines = reader.lines();

        let first = lines.next().ok_or(SceneError::EmptyInput)??;
        let camera = parse_camera_line(1, &first)?;
        let mut scene = Scene::new(camera);

        for (index, line) in lines.enumerate() {
            let line_num = index + 2;
            let line = line?;
            if scene.len() == self.options.max_objects {
                return Err(SceneError::TooManyObjects {
                    line: line_num,
                    max: self.options.max_objects,
                });
            }

            let object = parse_object_line(line_num, &line)?;
            log::debug!("line {}: parsed {} {:?}", line_num, object.kind(), object);
            scene.add(object);
        }

        log::info!(
            "Parsed scene: camera {}x{}, {} objects ({} spheres, {} planes, {} lights)",
            scene.camera.world_width,
            scene.camera.world_height,
            scene.len(),
            scene.count(ObjectKind::Sphere),
            scene.count(ObjectKind::Plane),
            scene.count(ObjectKind::Light),
        );

        Ok(scene)
    }
}

/// Parse a scene from a buffered reader with default options.
pub fn parse_scene<R: BufRead>(reader: R) -> SceneResult<Scene> {
    SceneParser::default().parse(reader)
}

/// Parse a scene held in a string.
pub fn parse_scene_str(content: &str) -> SceneResult<Scene> {
    parse_scene(content.as_bytes())
}

/// Open and parse a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());
    let file = File::open(path)?;
    parse_scene(BufReader::new(file))
}

fn tokenize<'a>(line: &'a str, delimiters: &'a [char]) -> impl Iterator<Item = &'a str> {
    line.split(delimiters).filter(|t| !t.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CameraField {
    Width,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CameraState {
    ExpectCamera,
    ExpectKeyword,
    ExpectValue(CameraField),
}

fn parse_camera_line(line_num: usize, line: &str) -> SceneResult<Camera> {
    let mut camera = Camera::default();
    let mut state = CameraState::ExpectCamera;

    for token in tokenize(line, CAMERA_DELIMITERS) {
        state = match state {
            CameraState::ExpectCamera if token == "camera" => CameraState::ExpectKeyword,
            CameraState::ExpectCamera => {
                return Err(SceneError::MissingCamera {
                    line: line_num,
                    found: token.to_string(),
                });
            }
            CameraState::ExpectKeyword => match token {
                "width" => CameraState::ExpectValue(CameraField::Width),
                "height" => CameraState::ExpectValue(CameraField::Height),
                _ if accepts_positive(token) => {
                    return Err(SceneError::InvalidCameraValue {
                        line: line_num,
                        value: token.to_string(),
                    });
                }
                _ => {
                    return Err(SceneError::UnknownCameraProperty {
                        line: line_num,
                        token: token.to_string(),
                    });
                }
            },
            CameraState::ExpectValue(field) if accepts_positive(token) => {
                match field {
                    CameraField::Width => camera.world_width = atof(token),
                    CameraField::Height => camera.world_height = atof(token),
                }
                CameraState::ExpectKeyword
            }
            CameraState::ExpectValue(_) => {
                return Err(SceneError::UnknownCameraProperty {
                    line: line_num,
                    token: token.to_string(),
                });
            }
        };
    }

    if state == CameraState::ExpectCamera {
        return Err(SceneError::MissingCamera {
            line: line_num,
            found: String::new(),
        });
    }

    Ok(camera)
}

/// Property currently being filled on an object line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    None,
    Scalar(Property),
    Vector {
        property: Property,
        components: [f64; 3],
        filled: usize,
    },
}

/// Accumulates one object while its line is tokenized.
struct ObjectBuilder {
    line: usize,
    kind: ObjectKind,
    object: SceneObject,
    pending: Pending,
    properties_added: usize,
}

impl ObjectBuilder {
    fn new(line: usize, kind: ObjectKind) -> Self {
        Self {
            line,
            kind,
            object: SceneObject::new(kind),
            pending: Pending::None,
            properties_added: 0,
        }
    }

    fn feed(&mut self, token: &str) -> SceneResult<()> {
        match self.pending {
            Pending::None => self.begin_property(token),
            Pending::Scalar(property) => {
                let value = self.read_value(property, token)?;
                self.store(property, PropertyValue::Scalar(value));
                Ok(())
            }
            Pending::Vector {
                property,
                mut components,
                filled,
            } => {
                components[filled] = self.read_value(property, token)?;
                if filled + 1 == property.arity() {
                    self.store(property, PropertyValue::Vector(Vector3::from_array(components)));
                } else {
                    self.pending = Pending::Vector {
                        property,
                        components,
                        filled: filled + 1,
                    };
                }
                Ok(())
            }
        }
    }

    fn begin_property(&mut self, token: &str) -> SceneResult<()> {
        let property = match Property::from_keyword(token) {
            Some(property) if property.allowed_for(self.kind) => property,
            Some(property) => {
                return Err(SceneError::PropertyNotAllowedForType {
                    line: self.line,
                    property: property.keyword(),
                    kind: self.kind,
                });
            }
            None => {
                return Err(SceneError::UnknownProperty {
                    line: self.line,
                    token: token.to_string(),
                });
            }
        };

        self.properties_added += 1;
        self.pending = if property.is_vector() {
            Pending::Vector {
                property,
                components: [0.0; 3],
                filled: 0,
            }
        } else {
            Pending::Scalar(property)
        };
        Ok(())
    }

    fn read_value(&self, property: Property, token: &str) -> SceneResult<f64> {
        match property.value_rule() {
            ValueRule::PositiveOrZero if !accepts_positive(token) => {
                Err(SceneError::PropertyValueOutOfRange {
                    line: self.line,
                    property: property.keyword(),
                    value: token.to_string(),
                })
            }
            ValueRule::Numeric if !accepts_numeric(token) => {
                Err(SceneError::PropertyValueNotNumeric {
                    line: self.line,
                    property: property.keyword(),
                    value: token.to_string(),
                })
            }
            _ => Ok(atof(token)),
        }
    }

    fn store(&mut self, property: Property, value: PropertyValue) {
        // Gated by `allowed_for` in `begin_property`, so the slot exists
        let stored = self.object.set(property, value);
        debug_assert!(stored, "{} has no slot for {}", self.kind, property);
        self.pending = Pending::None;
    }

    fn finish(self) -> SceneResult<SceneObject> {
        match self.pending {
            Pending::None => {}
            Pending::Scalar(property) => {
                return Err(SceneError::MissingPropertyValue {
                    line: self.line,
                    property: property.keyword(),
                });
            }
            Pending::Vector {
                property, filled, ..
            } => {
                return Err(SceneError::VectorPropertyMalformed {
                    line: self.line,
                    property: property.keyword(),
                    found: filled,
                });
            }
        }

        let max = self.kind.max_properties();
        if self.properties_added < ObjectKind::MIN_PROPERTIES || self.properties_added > max {
            return Err(SceneError::PropertyCountOutOfRange {
                line: self.line,
                kind: Some(self.kind),
                count: self.properties_added,
                min: ObjectKind::MIN_PROPERTIES,
                max,
            });
        }

        Ok(self.object)
    }
}

fn parse_object_line(line_num: usize, line: &str) -> SceneResult<SceneObject> {
    let mut tokens = tokenize(line, OBJECT_DELIMITERS);

    // A line with no tokens has read zero properties
    let Some(first) = tokens.next() else {
        return Err(SceneError::PropertyCountOutOfRange {
            line: line_num,
            kind: None,
            count: 0,
            min: ObjectKind::MIN_PROPERTIES,
            max: ObjectKind::Light.max_properties(),
        });
    };
    let kind = ObjectKind::from_keyword(first).ok_or_else(|| SceneError::UnknownObjectType {
        line: line_num,
        found: first.to_string(),
    })?;

    let mut builder = ObjectBuilder::new(line_num, kind);
    for token in tokens {
        builder.feed(token)?;
    }
    builder.finish()
}
