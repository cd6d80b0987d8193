use serde::{Deserialize, Serialize};

use super::error::{GridError, Result};
use super::model::{Attribute, AttributeKind, AttributeSpec};

// ---------------------------------------------------------------------------
// DataGrid – the capability the attribute helpers consume
// ---------------------------------------------------------------------------

/// Read access to the attribute metadata of a tabular data grid.
pub trait DataGrid {
    /// Every attribute, in grid order.
    fn all_attributes(&self) -> Vec<Attribute>;

    /// The attributes designated as class (label/target) attributes.
    fn all_class_attributes(&self) -> Vec<Attribute>;

    /// Resolve an attribute to where this grid stores it.
    ///
    /// Fails with [`GridError::UnresolvedAttribute`] when the attribute is
    /// not part of the grid.
    fn get_attribute(&self, attr: &Attribute) -> Result<AttributeSpec>;
}

// ---------------------------------------------------------------------------
// AttributeGrid – in-memory attribute layout
// ---------------------------------------------------------------------------

/// Storage pools group attributes of the same kind family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolKind {
    Float,
    Categorical,
    Binary,
}

impl PoolKind {
    fn of(kind: &AttributeKind) -> Self {
        match kind {
            AttributeKind::Float { .. } => PoolKind::Float,
            AttributeKind::Categorical { .. } => PoolKind::Categorical,
            AttributeKind::Binary => PoolKind::Binary,
        }
    }
}

#[derive(Debug, Clone)]
struct Pool {
    kind: PoolKind,
    len: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    spec: AttributeSpec,
    is_class: bool,
}

/// An in-memory [`DataGrid`] holding only attribute metadata.
///
/// Pools are opened per kind family in order of first appearance and an
/// attribute's position is its index inside its pool. The handles returned
/// by [`DataGrid::all_attributes`] and [`DataGrid::all_class_attributes`]
/// share instances, so identity-based helpers work across both listings.
#[derive(Debug, Clone, Default)]
pub struct AttributeGrid {
    entries: Vec<Entry>,
    pools: Vec<Pool>,
}

impl AttributeGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from a declarative schema.
    pub fn from_schema(schema: GridSchema) -> Result<Self> {
        let mut grid = AttributeGrid::new();
        for attr in schema.attributes {
            grid.add_attribute(attr)?;
        }
        for &idx in &schema.class_attributes {
            let attr = grid
                .entries
                .get(idx)
                .map(|e| e.spec.attribute().clone())
                .ok_or_else(|| {
                    GridError::Schema(format!("class attribute index {idx} is out of range"))
                })?;
            grid.add_class_attribute(&attr)?;
        }
        Ok(grid)
    }

    /// Describe this grid as a schema.
    pub fn schema(&self) -> GridSchema {
        GridSchema {
            attributes: self.all_attributes(),
            class_attributes: self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.is_class)
                .map(|(idx, _)| idx)
                .collect(),
        }
    }

    /// Append an attribute and return where it was placed.
    pub fn add_attribute(&mut self, attr: Attribute) -> Result<AttributeSpec> {
        if self.position_of(&attr).is_some() {
            return Err(GridError::duplicate(&attr));
        }

        let kind = PoolKind::of(attr.kind());
        let pool = match self.pools.iter().position(|p| p.kind == kind) {
            Some(idx) => idx,
            None => {
                self.pools.push(Pool { kind, len: 0 });
                self.pools.len() - 1
            }
        };
        let position = self.pools[pool].len;
        self.pools[pool].len += 1;

        log::debug!("Adding {attr} at pool {pool}, position {position}");
        let spec = AttributeSpec::new(pool, position, attr);
        self.entries.push(Entry {
            spec: spec.clone(),
            is_class: false,
        });
        Ok(spec)
    }

    /// Designate a present attribute as a class attribute.
    pub fn add_class_attribute(&mut self, attr: &Attribute) -> Result<()> {
        let idx = self
            .position_of(attr)
            .ok_or_else(|| GridError::unknown(attr))?;
        log::debug!("Designating {attr} as a class attribute");
        self.entries[idx].is_class = true;
        Ok(())
    }

    /// Clear a class designation. Returns whether one was removed.
    pub fn remove_class_attribute(&mut self, attr: &Attribute) -> bool {
        match self.position_of(attr) {
            Some(idx) if self.entries[idx].is_class => {
                log::debug!("Removing class designation from {attr}");
                self.entries[idx].is_class = false;
                true
            }
            _ => false,
        }
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position_of(&self, attr: &Attribute) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.spec.attribute().equals(attr))
    }
}

impl DataGrid for AttributeGrid {
    fn all_attributes(&self) -> Vec<Attribute> {
        self.entries
            .iter()
            .map(|e| e.spec.attribute().clone())
            .collect()
    }

    fn all_class_attributes(&self) -> Vec<Attribute> {
        self.entries
            .iter()
            .filter(|e| e.is_class)
            .map(|e| e.spec.attribute().clone())
            .collect()
    }

    fn get_attribute(&self, attr: &Attribute) -> Result<AttributeSpec> {
        self.position_of(attr)
            .map(|idx| self.entries[idx].spec.clone())
            .ok_or_else(|| GridError::unresolved(attr))
    }
}

// ---------------------------------------------------------------------------
// GridSchema – serde description of a grid
// ---------------------------------------------------------------------------

/// Declarative description of a grid's attributes.
///
/// Class designations are indices into `attributes`, so attributes sharing
/// a name across kinds stay distinguishable.
///
/// ```json
/// {
///   "attributes": [
///     { "name": "sepal_length", "kind": { "type": "float" } },
///     { "name": "species", "kind": { "type": "categorical", "values": ["setosa"] } }
///   ],
///   "class_attributes": [1]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSchema {
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub class_attributes: Vec<usize>,
}

impl GridSchema {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| GridError::Schema(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GridError::Schema(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_grouped_by_kind() {
        let mut grid = AttributeGrid::new();
        let a = grid.add_attribute(Attribute::float("a")).unwrap();
        let c = grid
            .add_attribute(Attribute::categorical("c", ["x", "y"]))
            .unwrap();
        let b = grid.add_attribute(Attribute::float("b")).unwrap();
        let d = grid.add_attribute(Attribute::binary("d")).unwrap();

        assert_eq!((a.pool(), a.position()), (0, 0));
        assert_eq!((c.pool(), c.position()), (1, 0));
        assert_eq!((b.pool(), b.position()), (0, 1));
        assert_eq!((d.pool(), d.position()), (2, 0));
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut grid = AttributeGrid::new();
        grid.add_attribute(Attribute::float("a")).unwrap();
        let err = grid.add_attribute(Attribute::float("a")).unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicateAttribute {
                attribute: "FloatAttribute(a)".to_string()
            }
        );
        // Same name, different kind is a different attribute.
        assert!(grid.add_attribute(Attribute::binary("a")).is_ok());
    }

    #[test]
    fn test_class_designation() {
        let mut grid = AttributeGrid::new();
        let a = Attribute::float("a");
        let c = Attribute::binary("c");
        grid.add_attribute(a.clone()).unwrap();
        grid.add_attribute(c.clone()).unwrap();

        grid.add_class_attribute(&c).unwrap();
        grid.add_class_attribute(&c).unwrap();
        let classes = grid.all_class_attributes();
        assert_eq!(classes.len(), 1);
        assert!(classes[0].same_instance(&c));

        assert!(grid.remove_class_attribute(&c));
        assert!(!grid.remove_class_attribute(&c));
        assert!(grid.all_class_attributes().is_empty());

        let missing = Attribute::float("zzz");
        assert_eq!(
            grid.add_class_attribute(&missing),
            Err(GridError::UnknownAttribute {
                attribute: "FloatAttribute(zzz)".to_string()
            })
        );
    }

    #[test]
    fn test_get_attribute_by_value() {
        let mut grid = AttributeGrid::new();
        let a = Attribute::float("a");
        grid.add_attribute(a.clone()).unwrap();

        let lookalike = Attribute::float("a");
        let spec = grid.get_attribute(&lookalike).unwrap();
        assert!(spec.attribute().same_instance(&a));

        assert!(matches!(
            grid.get_attribute(&Attribute::float("b")),
            Err(GridError::UnresolvedAttribute { .. })
        ));
    }

    #[test]
    fn test_schema_round_trip() {
        let text = r#"{
            "attributes": [
                {"name": "sepal_length", "kind": {"type": "float", "precision": 2}},
                {"name": "species", "kind": {"type": "categorical", "values": ["setosa", "virginica"]}}
            ],
            "class_attributes": [1]
        }"#;
        let grid = AttributeGrid::from_schema(GridSchema::from_json(text).unwrap()).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.all_class_attributes()[0].name(), "species");

        let again = GridSchema::from_json(&grid.schema().to_json().unwrap()).unwrap();
        assert_eq!(again, grid.schema());
    }

    #[test]
    fn test_schema_round_trip_keeps_class_among_same_named_attributes() {
        let mut grid = AttributeGrid::new();
        let float = Attribute::float("a");
        let binary = Attribute::binary("a");
        grid.add_attribute(float).unwrap();
        grid.add_attribute(binary.clone()).unwrap();
        grid.add_class_attribute(&binary).unwrap();

        let schema = grid.schema();
        assert_eq!(schema.class_attributes, [1]);

        let text = schema.to_json().unwrap();
        let restored = AttributeGrid::from_schema(GridSchema::from_json(&text).unwrap()).unwrap();
        let classes = restored.all_class_attributes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].kind(), &AttributeKind::Binary);
        assert_eq!(classes, grid.all_class_attributes());
    }

    #[test]
    fn test_schema_errors() {
        assert!(matches!(
            GridSchema::from_json("{not json"),
            Err(GridError::Schema(_))
        ));

        let schema = GridSchema {
            attributes: vec![Attribute::float("a")],
            class_attributes: vec![3],
        };
        assert_eq!(
            AttributeGrid::from_schema(schema).unwrap_err(),
            GridError::Schema("class attribute index 3 is out of range".to_string())
        );
    }
}
