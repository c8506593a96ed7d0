//! Attribute seam detection and splitting.
//!
//! A per-vertex attribute (texture coordinates, normals) can be
//! discontinuous across an edge even though the geometry is not: the two
//! faces reference the same points but different attribute values. Such an
//! edge is an **attribute seam**. This module detects seams from a
//! [`CornerAttribute`] mapping and refines a built [`CornerTable`] by
//! removing the opposite links that cross them.
//!
//! Splitting only ever removes connectivity. Point and face identities are
//! untouched, so consumers indexing by point stay valid, while seam-aware
//! algorithms recognize discontinuities by the absence of an opposite link
//! exactly as they recognize mesh boundaries.

use super::corner::CornerTable;
use super::index::{AttributeValueId, CornerId, MeshIndex};

/// A per-corner attribute-value mapping for one mesh attribute.
///
/// Stores the attribute-value index visited by every corner, flattened
/// through the `3f + i` corner numbering. Several corners may share one
/// value index, and corners visiting the same point may carry different
/// value indices; the latter is what defines a seam.
#[derive(Debug, Clone)]
pub struct CornerAttribute<I: MeshIndex = u32> {
    values: Vec<AttributeValueId<I>>,
}

impl<I: MeshIndex> CornerAttribute<I> {
    /// Create a mapping from per-face value-index triples.
    ///
    /// `faces[f][i]` is the attribute-value index visited by corner
    /// `3f + i`.
    pub fn from_face_values(faces: &[[usize; 3]]) -> Self {
        let values = faces
            .iter()
            .flat_map(|f| f.iter().map(|&v| AttributeValueId::new(v)))
            .collect();
        Self { values }
    }

    /// Create a mapping from a flat per-corner vector.
    pub fn from_corner_values(values: Vec<AttributeValueId<I>>) -> Self {
        Self { values }
    }

    /// Get the attribute-value index visited by a corner.
    #[inline]
    pub fn value(&self, c: CornerId<I>) -> AttributeValueId<I> {
        self.values[c.index()]
    }

    /// Get the number of mapped corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the mapping is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check whether the pairing `c` ↔ `o` crosses a value discontinuity.
///
/// The edge shared by the pairing runs between the points visited by
/// `next(c)`/`previous(o)` and `previous(c)`/`next(o)`; the edge is a seam
/// if the attribute disagrees at either end.
#[inline]
fn is_seam_pairing<I: MeshIndex>(
    table: &CornerTable<I>,
    attr: &CornerAttribute<I>,
    c: CornerId<I>,
    o: CornerId<I>,
) -> bool {
    attr.value(table.next(c)) != attr.value(table.previous(o))
        || attr.value(table.previous(c)) != attr.value(table.next(o))
}

/// Find the corners whose opposite pairing crosses an attribute seam.
///
/// Pure detection; the table is not modified. Both corners of a seam
/// pairing are reported. Corners that already have no opposite (boundaries,
/// earlier cuts) are never seams.
///
/// # Panics
/// Panics if the attribute does not map every corner of the table.
pub fn seam_corners<I: MeshIndex>(
    table: &CornerTable<I>,
    attr: &CornerAttribute<I>,
) -> Vec<CornerId<I>> {
    assert_eq!(
        attr.len(),
        table.num_corners(),
        "attribute must map every corner of the table"
    );

    table
        .corner_ids()
        .filter(|&c| match table.opposite(c) {
            Some(o) => is_seam_pairing(table, attr, c, o),
            None => false,
        })
        .collect()
}

/// Cut a corner table along the seams of one or more attributes.
///
/// Every attribute is tested against the connectivity as it stands on
/// entry: cuts are collected for all attributes first and applied
/// afterwards, so seam detection for one attribute is never influenced by
/// cuts made for another. The final table carries the union of all cuts.
///
/// Returns the number of edges cut. Splitting an attribute with no
/// discontinuities (or re-splitting one whose seams are already cut)
/// leaves the table unchanged and returns 0.
///
/// # Panics
/// Panics if an attribute does not map every corner of the table.
///
/// # Example
/// ```
/// use trestle::table::{build_corner_table, split_attribute_seams, CornerAttribute, CornerId};
/// use trestle::table::CornerTable;
///
/// let faces = vec![[0, 1, 2], [1, 0, 3]];
/// let mut table: CornerTable = build_corner_table(&faces, 4).unwrap();
///
/// // Texture coordinates disagree at point 0 across the shared edge
/// let uv = CornerAttribute::from_face_values(&[[0, 1, 2], [1, 4, 3]]);
/// let cut = split_attribute_seams(&mut table, &[uv]);
///
/// assert_eq!(cut, 1);
/// assert_eq!(table.opposite(CornerId::new(2)), None);
/// assert_eq!(table.opposite(CornerId::new(5)), None);
/// ```
pub fn split_attribute_seams<I: MeshIndex>(
    table: &mut CornerTable<I>,
    attributes: &[CornerAttribute<I>],
) -> usize {
    let mut cut = vec![false; table.num_corners()];

    for attr in attributes {
        assert_eq!(
            attr.len(),
            table.num_corners(),
            "attribute must map every corner of the table"
        );
        for c in table.corner_ids() {
            if cut[c.index()] {
                continue;
            }
            if let Some(o) = table.opposite(c) {
                if is_seam_pairing(table, attr, c, o) {
                    cut[c.index()] = true;
                    cut[o.index()] = true;
                }
            }
        }
    }

    let mut edges_cut = 0;
    for ci in 0..cut.len() {
        if !cut[ci] {
            continue;
        }
        let c = CornerId::new(ci);
        // The partner was flagged too; count the edge once.
        if table.opposite(c).is_some() {
            table.invalidate_opposite(c);
            edges_cut += 1;
        }
    }

    if edges_cut > 0 {
        // Cuts can turn interior points into (attribute) boundary points;
        // re-normalize so circulation starts from a leftmost corner again.
        table.rebuild_point_corners(table.num_points());
    }

    log::debug!(
        "seam split over {} attribute(s): {} edge(s) cut",
        attributes.len(),
        edges_cut
    );

    edges_cut
}
