//! Core corner-table data structures.
//!
//! This module provides the corner-table representation for triangle mesh
//! connectivity and the two construction passes that populate it.
//!
//! # Overview
//!
//! The primary type is [`CornerTable`], which stores one corner per
//! face-vertex incidence and answers adjacency queries (`point`,
//! `opposite`, `next`, `previous`, `face`) in constant time.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`PointId`] - Identifies a vertex identity
//! - [`CornerId`] - Identifies a corner
//! - [`FaceId`] - Identifies a face
//! - [`AttributeValueId`] - Identifies an external attribute value
//!
//! These indices are generic over the underlying integer type
//! ([`MeshIndex`] trait), allowing you to choose `u16`, `u32`, or `u64`
//! based on mesh size.
//!
//! # Construction
//!
//! Tables are built in two stages: [`build_corner_table`] derives purely
//! geometric adjacency from a face list, then [`split_attribute_seams`]
//! cuts the opposite links that cross per-vertex attribute
//! discontinuities. The base table stays reusable independently of any
//! seam policy:
//!
//! ```
//! use trestle::table::{build_corner_table, split_attribute_seams, CornerAttribute, CornerTable};
//!
//! let faces = vec![[0, 1, 2], [1, 0, 3]];
//! let base: CornerTable = build_corner_table(&faces, 4).unwrap();
//!
//! let uv = CornerAttribute::from_face_values(&[[0, 1, 2], [1, 4, 3]]);
//! let mut seam_aware = base.clone();
//! split_attribute_seams(&mut seam_aware, &[uv]);
//! ```

mod builder;
mod corner;
mod index;
mod seam;

pub use builder::{build_corner_table, build_from_positions, points_from_positions};
pub use corner::{CornerTable, PointCornerIter};
pub use index::{AttributeValueId, CornerId, FaceId, MeshIndex, PointId};
pub use seam::{seam_corners, split_attribute_seams, CornerAttribute};
