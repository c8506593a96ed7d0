//! Corner table construction.
//!
//! This module provides functions for building corner tables from triangle
//! face lists, the first stage of the connectivity pipeline. The second
//! stage, attribute-seam splitting, lives in [`crate::table::seam`] and
//! refines a table built here.
//!
//! Construction is all-or-nothing: a structural defect in the input
//! (degenerate face, non-manifold edge) aborts with an error, never a
//! partially connected table.

use std::collections::HashMap;

use nalgebra::Point3;

use super::corner::CornerTable;
use super::index::{CornerId, MeshIndex, PointId};
use crate::error::{ConnectivityError, Result};

/// Build a corner table from a triangle face list.
///
/// Each face is a triple of point indices in `0..num_points`, wound
/// consistently. Two corners become mutual opposites when their edges
/// reference the same point pair with opposite orientation; pairing follows
/// first-encountered order over the input faces, so identical input always
/// produces an identical table.
///
/// # Arguments
/// * `faces` - List of triangle faces, each as [p0, p1, p2] point indices
/// * `num_points` - Number of distinct point identities
///
/// # Errors
/// * [`ConnectivityError::InvalidPointIndex`] - a face references a point
///   outside `0..num_points`
/// * [`ConnectivityError::DegenerateFace`] - a face has fewer than three
///   distinct points
/// * [`ConnectivityError::NonManifoldEdge`] - an edge is referenced by two
///   half-edges of the same orientation, or by more than two half-edges
///
/// # Example
/// ```
/// use trestle::table::{build_corner_table, CornerTable, CornerId};
///
/// // Two triangles sharing the edge (0, 1)
/// let faces = vec![[0, 1, 2], [1, 0, 3]];
/// let table: CornerTable = build_corner_table(&faces, 4).unwrap();
///
/// // The corners facing the shared edge are mutual opposites
/// assert_eq!(table.opposite(CornerId::new(2)), Some(CornerId::new(5)));
/// assert_eq!(table.opposite(CornerId::new(5)), Some(CornerId::new(2)));
/// ```
pub fn build_corner_table<I: MeshIndex>(
    faces: &[[usize; 3]],
    num_points: usize,
) -> Result<CornerTable<I>> {
    // Validate all faces before touching the table
    for (fi, face) in faces.iter().enumerate() {
        for &pi in face {
            if pi >= num_points {
                return Err(ConnectivityError::InvalidPointIndex { face: fi, point: pi });
            }
        }
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(ConnectivityError::DegenerateFace { face: fi });
        }
    }

    let mut table = CornerTable::with_capacity(num_points, faces.len());

    for face in faces {
        for &pi in face {
            table.corner_points.push(PointId::new(pi));
        }
    }
    table
        .opposites
        .resize(table.num_corners(), CornerId::invalid());

    // Pair opposite corners through directed half-edges. The half-edge of a
    // corner is the directed point pair (next, previous) of its opposite
    // edge; the matching corner, if any, owns the reversed pair.
    let mut half_edges: HashMap<(usize, usize), CornerId<I>> =
        HashMap::with_capacity(table.num_corners());

    for ci in 0..table.num_corners() {
        let corner = CornerId::new(ci);
        let a = table.point(table.next(corner)).index();
        let b = table.point(table.previous(corner)).index();

        // A repeated directed edge means two identically wound faces share
        // it. Any configuration of three or more half-edges on one edge
        // contains such a repeat, so this check also rejects those.
        if half_edges.contains_key(&(a, b)) {
            return Err(ConnectivityError::NonManifoldEdge {
                p0: a.min(b),
                p1: a.max(b),
            });
        }

        if let Some(&o) = half_edges.get(&(b, a)) {
            table.set_opposite(corner, o);
        }
        half_edges.insert((a, b), corner);
    }

    table.rebuild_point_corners(num_points);

    log::debug!(
        "built corner table: {} faces, {} points, {} boundary edges",
        table.num_faces(),
        table.num_points(),
        table.corner_ids().filter(|&c| table.opposite(c).is_none()).count(),
    );

    Ok(table)
}

/// Derive point identities from a raw position attribute.
///
/// Positions that agree bit-exactly map to the same [`PointId`]; `-0.0` and
/// `0.0` stay distinct. Returns one id per input position plus the distinct
/// point count. Tolerance-based welding belongs to the mesh-loading layer,
/// before connectivity construction.
pub fn points_from_positions<I: MeshIndex>(
    positions: &[Point3<f64>],
) -> (Vec<PointId<I>>, usize) {
    let mut ids = Vec::with_capacity(positions.len());
    let mut unique: HashMap<[u64; 3], usize> = HashMap::with_capacity(positions.len());

    for pos in positions {
        let key = [pos.x.to_bits(), pos.y.to_bits(), pos.z.to_bits()];
        let next = unique.len();
        let id = *unique.entry(key).or_insert(next);
        ids.push(PointId::new(id));
    }

    let num_points = unique.len();
    (ids, num_points)
}

/// Build a corner table from raw vertex positions and a triangle face list.
///
/// Point identities are derived from the position attribute by exact
/// coordinate deduplication ([`points_from_positions`]), so two vertices at
/// the same coordinates share connectivity. A face that collapses onto
/// fewer than three distinct positions is reported as degenerate.
///
/// # Example
/// ```
/// use nalgebra::Point3;
/// use trestle::table::{build_from_positions, CornerTable};
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let table: CornerTable = build_from_positions(&positions, &faces).unwrap();
/// assert_eq!(table.num_faces(), 1);
/// assert_eq!(table.num_points(), 3);
/// ```
pub fn build_from_positions<I: MeshIndex>(
    positions: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<CornerTable<I>> {
    // Report out-of-range indices against the caller's position array, not
    // the welded point set.
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= positions.len() {
                return Err(ConnectivityError::InvalidPointIndex { face: fi, point: vi });
            }
        }
    }

    let (point_ids, num_points) = points_from_positions::<I>(positions);
    let point_faces: Vec<[usize; 3]> = faces
        .iter()
        .map(|f| {
            [
                point_ids[f[0]].index(),
                point_ids[f[1]].index(),
                point_ids[f[2]].index(),
            ]
        })
        .collect();

    build_corner_table(&point_faces, num_points)
}
