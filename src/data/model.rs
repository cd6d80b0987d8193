use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decimal places used by float attributes unless told otherwise.
pub const DEFAULT_FLOAT_PRECISION: usize = 5;

fn default_precision() -> usize {
    DEFAULT_FLOAT_PRECISION
}

// ---------------------------------------------------------------------------
// AttributeKind – what sort of column an attribute describes
// ---------------------------------------------------------------------------

/// The kind of column an [`Attribute`] describes.
///
/// Serialized internally tagged, e.g. `{"type": "float", "precision": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeKind {
    /// Numeric column. `precision` only affects rendering of values.
    Float {
        #[serde(default = "default_precision")]
        precision: usize,
    },
    /// Nominal column with an ordered list of category labels.
    Categorical { values: Vec<String> },
    /// Two-valued column.
    Binary,
}

// ---------------------------------------------------------------------------
// Attribute – a shared handle to a column descriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct AttributeDef {
    name: String,
    kind: AttributeKind,
}

/// A column descriptor.
///
/// `Attribute` is a cheap handle: cloning it shares the same underlying
/// definition. Two notions of sameness exist and are kept apart:
///
/// * **value equality** ([`Attribute::equals`], also `==`): same kind and
///   name, and for categorical attributes the same category list;
/// * **instance identity** ([`Attribute::same_instance`]): both handles were
///   cloned from one constructed attribute.
///
/// Deserializing always yields a fresh instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(Arc<AttributeDef>);

impl Attribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Attribute(Arc::new(AttributeDef {
            name: name.into(),
            kind,
        }))
    }

    /// Float attribute with [`DEFAULT_FLOAT_PRECISION`].
    pub fn float(name: impl Into<String>) -> Self {
        Self::float_with_precision(name, DEFAULT_FLOAT_PRECISION)
    }

    pub fn float_with_precision(name: impl Into<String>, precision: usize) -> Self {
        Self::new(name, AttributeKind::Float { precision })
    }

    pub fn categorical<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(name, AttributeKind::Categorical { values })
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Binary)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.0.kind
    }

    /// Whether this is a numeric (float) attribute.
    pub fn is_float(&self) -> bool {
        matches!(self.0.kind, AttributeKind::Float { .. })
    }

    /// Value equality. Float precision is presentation-only and ignored.
    pub fn equals(&self, other: &Attribute) -> bool {
        if self.name() != other.name() {
            return false;
        }
        match (self.kind(), other.kind()) {
            (AttributeKind::Float { .. }, AttributeKind::Float { .. }) => true,
            (AttributeKind::Binary, AttributeKind::Binary) => true,
            (
                AttributeKind::Categorical { values: a },
                AttributeKind::Categorical { values: b },
            ) => a == b,
            _ => false,
        }
    }

    /// Whether both handles refer to the same constructed attribute.
    pub fn same_instance(&self, other: &Attribute) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared definition, usable as an identity key.
    pub(crate) fn instance_ptr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast()
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Attribute {}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            AttributeKind::Float { .. } => write!(f, "FloatAttribute({})", self.name()),
            AttributeKind::Categorical { values } => {
                write!(f, "CategoricalAttribute(\"{}\", {:?})", self.name(), values)
            }
            AttributeKind::Binary => write!(f, "BinaryAttribute({})", self.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeSpec – where a grid keeps an attribute
// ---------------------------------------------------------------------------

/// An attribute resolved against a particular grid: the storage pool it
/// lives in and its position inside that pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pool: usize,
    position: usize,
    attribute: Attribute,
}

impl AttributeSpec {
    pub fn new(pool: usize, position: usize, attribute: Attribute) -> Self {
        AttributeSpec {
            pool,
            position,
            attribute,
        }
    }

    pub fn pool(&self) -> usize {
        self.pool
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The grid's own instance of the attribute.
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }
}

impl fmt::Display for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttributeSpec(Attribute: '{}', Pool: {}, Position: {})",
            self.attribute.name(),
            self.pool,
            self.position
        )
    }
}
