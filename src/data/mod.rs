/// Attribute layer: column descriptors, grids, and set algebra over them.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │  model    │  Attribute, AttributeKind, AttributeSpec
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ grid          │  DataGrid trait, AttributeGrid, GridSchema
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  algebra  │  intersect / difference / class filtering / resolution
///   └──────────┘
/// ```

pub mod algebra;
pub mod error;
pub mod grid;
pub mod model;
