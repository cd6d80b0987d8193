//! Set algebra over the attribute descriptors of tabular data grids.
//!
//! Two families of helpers live in [`data::algebra`]: value-based ones
//! (`attribute_intersect`, `attribute_difference`) that keep the order of
//! their first argument, and instance-based `*_references` ones that hash
//! attribute handles and return unordered results.
//!
//! ```
//! use gridattrs::{Attribute, AttributeGrid, DataGrid};
//! use gridattrs::data::algebra::non_class_float_attributes;
//!
//! let mut grid = AttributeGrid::new();
//! let label = Attribute::float("label");
//! grid.add_attribute(Attribute::float("width")).unwrap();
//! grid.add_attribute(label.clone()).unwrap();
//! grid.add_class_attribute(&label).unwrap();
//!
//! let features = non_class_float_attributes(&grid);
//! assert_eq!(features.len(), 1);
//! assert_eq!(features[0].name(), "width");
//! assert_eq!(grid.all_class_attributes().len(), 1);
//! ```

pub mod data;

pub use data::algebra::{
    attribute_difference, attribute_difference_references, attribute_intersect,
    attribute_intersect_references, get_all_attribute_specs, get_some_attribute_specs,
    non_class_attributes, non_class_float_attributes, resolve_all_attributes,
};
pub use data::error::GridError;
pub use data::grid::{AttributeGrid, DataGrid, GridSchema};
pub use data::model::{Attribute, AttributeKind, AttributeSpec, DEFAULT_FLOAT_PRECISION};
