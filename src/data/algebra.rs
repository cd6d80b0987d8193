use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::error::Result;
use super::grid::DataGrid;
use super::model::{Attribute, AttributeSpec};

// ---------------------------------------------------------------------------
// Class / non-class filtering
// ---------------------------------------------------------------------------

/// Float attributes of `grid` that are not (by value) class attributes.
///
/// Ordered as in [`DataGrid::all_attributes`].
pub fn non_class_float_attributes<G: DataGrid + ?Sized>(grid: &G) -> Vec<Attribute> {
    let class_attrs = grid.all_class_attributes();
    grid.all_attributes()
        .into_iter()
        .filter(|a| a.is_float())
        .filter(|a| !class_attrs.iter().any(|c| a.equals(c)))
        .collect()
}

/// Attributes of `grid` which aren't designated as class attributes.
///
/// Computed by instance identity; the result is not ordered.
pub fn non_class_attributes<G: DataGrid + ?Sized>(grid: &G) -> Vec<Attribute> {
    let class_attrs = grid.all_class_attributes();
    let all_attrs = grid.all_attributes();
    attribute_difference_references(&all_attrs, &class_attrs)
}

// ---------------------------------------------------------------------------
// Spec resolution
// ---------------------------------------------------------------------------

/// Resolve every attribute in `attrs` against `grid`, index-aligned.
///
/// Stops at the first attribute the grid does not hold and returns its
/// error; no partial result is produced.
pub fn resolve_all_attributes<G: DataGrid + ?Sized>(
    grid: &G,
    attrs: &[Attribute],
) -> Result<Vec<AttributeSpec>> {
    resolve_each(grid, attrs)
}

/// Every attribute specification of `grid`, in grid order.
pub fn get_all_attribute_specs<G: DataGrid + ?Sized>(grid: &G) -> Result<Vec<AttributeSpec>> {
    let attrs = grid.all_attributes();
    get_some_attribute_specs(grid, &attrs)
}

/// Specifications for a subset of `grid`'s attributes.
/// Same contract as [`resolve_all_attributes`].
pub fn get_some_attribute_specs<G: DataGrid + ?Sized>(
    grid: &G,
    attrs: &[Attribute],
) -> Result<Vec<AttributeSpec>> {
    resolve_each(grid, attrs)
}

fn resolve_each<G: DataGrid + ?Sized>(grid: &G, attrs: &[Attribute]) -> Result<Vec<AttributeSpec>> {
    attrs
        .iter()
        .map(|a| {
            grid.get_attribute(a).map_err(|e| {
                log::warn!("Error resolving {a}: {e}");
                e
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Value-equality set algebra
// ---------------------------------------------------------------------------

/// Attributes of `a1` with a value-equal counterpart in `a2`.
///
/// The result keeps the order of `a1` and only contains `a1`'s instances.
pub fn attribute_intersect(a1: &[Attribute], a2: &[Attribute]) -> Vec<Attribute> {
    a1.iter()
        .filter(|a| a2.iter().any(|b| a.equals(b)))
        .cloned()
        .collect()
}

/// Attributes of `a1` with no value-equal counterpart in `a2`.
///
/// The result keeps the order of `a1` and only contains `a1`'s instances.
pub fn attribute_difference(a1: &[Attribute], a2: &[Attribute]) -> Vec<Attribute> {
    a1.iter()
        .filter(|a| !a2.iter().any(|b| a.equals(b)))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Instance-identity set algebra
// ---------------------------------------------------------------------------

/// Hash/Eq wrapper comparing attributes by instance rather than value.
struct ByInstance<'a>(&'a Attribute);

impl PartialEq for ByInstance<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_instance(other.0)
    }
}

impl Eq for ByInstance<'_> {}

impl Hash for ByInstance<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0.instance_ptr(), state);
    }
}

fn instance_set(attrs: &[Attribute]) -> HashSet<ByInstance<'_>> {
    attrs.iter().map(ByInstance).collect()
}

/// Instances present in both `a1` and `a2`.
///
/// The result is not ordered and each instance appears once. Only
/// meaningful when both slices were taken from the same grid: value-equal
/// attributes constructed separately never match here, use
/// [`attribute_intersect`] for those.
pub fn attribute_intersect_references(a1: &[Attribute], a2: &[Attribute]) -> Vec<Attribute> {
    let left = instance_set(a1);
    let right = instance_set(a2);
    left.intersection(&right).map(|k| k.0.clone()).collect()
}

/// Instances of `a1` absent from `a2`.
///
/// Same caveats as [`attribute_intersect_references`]; use
/// [`attribute_difference`] when the attributes come from different grids.
pub fn attribute_difference_references(a1: &[Attribute], a2: &[Attribute]) -> Vec<Attribute> {
    let left = instance_set(a1);
    let right = instance_set(a2);
    left.difference(&right).map(|k| k.0.clone()).collect()
}
