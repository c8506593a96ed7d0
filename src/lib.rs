//! # Trestle
//!
//! A corner-table connectivity library for triangle meshes.
//!
//! Trestle builds the corner table beneath mesh compression, simplification,
//! and seam-aware processing: a pair of contiguous arrays mapping every
//! corner (face-vertex incidence) to the point it references and to the
//! corner across its edge, answering adjacency queries in constant time. A
//! second pass can cut the table along **attribute seams**: edges where
//! per-vertex data such as texture coordinates or normals is discontinuous
//! even though the geometry is not.
//!
//! ## Features
//!
//! - **Corner table**: O(1) `point`/`opposite`/`next`/`previous`/`face`
//!   queries with type-safe indices
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Manifold validation**: degenerate and non-manifold input is rejected
//!   at construction, never silently patched
//! - **Attribute seams**: opposite links are cut along value
//!   discontinuities, leaving point and face identities untouched
//!
//! ## Quick Start
//!
//! ```
//! use trestle::prelude::*;
//!
//! // Two triangles sharing the edge between points 0 and 1
//! let faces = vec![[0, 1, 2], [1, 0, 3]];
//! let table: CornerTable = build_corner_table(&faces, 4).unwrap();
//!
//! // The corners facing the shared edge oppose each other
//! let c = CornerId::new(2);
//! let o = table.opposite(c).unwrap();
//! assert_eq!(table.opposite(o), Some(c));
//!
//! // Next/previous cycle within each face
//! assert_eq!(table.next(table.next(table.next(c))), c);
//! ```
//!
//! ## Attribute Seams
//!
//! ```
//! use trestle::prelude::*;
//!
//! let faces = vec![[0, 1, 2], [1, 0, 3]];
//! let mut table: CornerTable = build_corner_table(&faces, 4).unwrap();
//!
//! // Texture coordinates: point 0 maps to uv 0 on one face, uv 4 on the
//! // other, so the shared edge is a seam.
//! let uv = CornerAttribute::from_face_values(&[[0, 1, 2], [1, 4, 3]]);
//! let cut = split_attribute_seams(&mut table, &[uv]);
//!
//! assert_eq!(cut, 1);
//! assert_eq!(table.opposite(CornerId::new(2)), None);
//! ```
//!
//! ## Traversal
//!
//! ```
//! use trestle::prelude::*;
//!
//! let faces = vec![[0, 1, 2], [1, 0, 3]];
//! let table: CornerTable = build_corner_table(&faces, 4).unwrap();
//!
//! // Circulate over the corners and faces around a point
//! let p = PointId::new(0);
//! for corner in table.point_corners(p) {
//!     assert_eq!(table.point(corner), p);
//! }
//! assert_eq!(table.point_faces(p).count(), 2);
//! assert!(table.is_boundary_point(p));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod table;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use trestle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConnectivityError, Result};
    pub use crate::table::{
        build_corner_table, build_from_positions, seam_corners, split_attribute_seams,
        AttributeValueId, CornerAttribute, CornerId, CornerTable, FaceId, MeshIndex, PointId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_octahedron_pipeline() {
        // Closed octahedron: 6 points, 8 faces, every corner paired
        let faces = vec![
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 1],
            [5, 2, 1],
            [5, 3, 2],
            [5, 4, 3],
            [5, 1, 4],
        ];
        let base: CornerTable = build_corner_table(&faces, 6).unwrap();

        assert_eq!(base.num_faces(), 8);
        assert_eq!(base.num_corners(), 24);
        assert!(base.is_valid());
        for c in base.corner_ids() {
            assert!(base.opposite(c).is_some());
        }
        for p in base.point_ids() {
            assert!(!base.is_boundary_point(p));
            assert_eq!(base.valence(p), 4);
        }

        // Give the equator points (1..=4) different uv values on the upper
        // and lower hemispheres: the four equator edges become seams.
        let uv = CornerAttribute::from_face_values(&[
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 1],
            [5, 12, 11],
            [5, 13, 12],
            [5, 14, 13],
            [5, 11, 14],
        ]);

        let mut seam_aware = base.clone();
        let cut = split_attribute_seams(&mut seam_aware, &[uv]);
        assert_eq!(cut, 4);
        assert!(seam_aware.is_valid());

        // Equator points now sit on the seam; the poles do not
        for p in 1..=4 {
            assert!(seam_aware.is_boundary_point(PointId::new(p)));
        }
        assert!(!seam_aware.is_boundary_point(PointId::new(0)));
        assert!(!seam_aware.is_boundary_point(PointId::new(5)));

        // The base table is independent of the refinement
        for c in base.corner_ids() {
            assert!(base.opposite(c).is_some());
        }
    }
}
