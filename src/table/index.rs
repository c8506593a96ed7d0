//! Index types for corner-table elements.
//!
//! This module provides type-safe index wrappers for points, corners, faces,
//! and attribute values. The indices are generic over the underlying integer
//! type to support meshes of different sizes (u16 for small meshes, u32 for
//! typical meshes, u64 for massive meshes).

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can be used as mesh indices.
///
/// This trait is implemented for `u16`, `u32`, and `u64`, allowing users to
/// choose the appropriate index size for their mesh.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The maximum valid index value.
    const MAX: Self;

    /// A sentinel value representing an invalid/null index.
    const INVALID: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics in debug builds if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;

    /// Check if this is a valid (non-sentinel) index.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl MeshIndex for u16 {
    const MAX: Self = u16::MAX - 1;
    const INVALID: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: Self = u32::MAX - 1;
    const INVALID: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    const MAX: Self = u64::MAX - 1;
    const INVALID: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A type-safe point index.
///
/// A point is an abstract vertex identity; distinct points may coincide in
/// 3-D space but remain distinct identities until welded upstream.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PointId<I: MeshIndex = u32>(I);

/// A type-safe corner index.
///
/// A corner is one of the three face-vertex incidences of a triangular face.
/// Corners are numbered densely: face `f` owns corners `3f`, `3f+1`, `3f+2`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CornerId<I: MeshIndex = u32>(I);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId<I: MeshIndex = u32>(I);

/// A type-safe attribute-value index.
///
/// Identifies an entry in some external attribute value store (texture
/// coordinates, normals). Two corners visiting the same point may carry
/// different attribute-value indices; that difference is what defines an
/// attribute seam.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct AttributeValueId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// Create an invalid/null index.
            #[inline]
            pub fn invalid() -> Self {
                Self(I::INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// Get the raw value of the underlying type.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl<I: MeshIndex> Default for $name<I> {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(PointId, "P");
impl_index_type!(CornerId, "C");
impl_index_type!(FaceId, "F");
impl_index_type!(AttributeValueId, "A");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id() {
        let p: PointId = PointId::new(42);
        assert_eq!(p.index(), 42);
        assert!(p.is_valid());

        let invalid: PointId = PointId::invalid();
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_type_safety() {
        // These are different types and cannot be mixed
        let p: PointId = PointId::new(0);
        let c: CornerId = CornerId::new(0);
        let f: FaceId = FaceId::new(0);

        // All have the same raw value but are distinct types
        assert_eq!(p.index(), c.index());
        assert_eq!(c.index(), f.index());
    }

    #[test]
    fn test_small_indices() {
        let c: CornerId<u16> = CornerId::new(1000);
        assert_eq!(c.index(), 1000);
    }

    #[test]
    fn test_debug_format() {
        let c: CornerId = CornerId::new(42);
        assert_eq!(format!("{:?}", c), "C(42)");

        let invalid: CornerId = CornerId::invalid();
        assert_eq!(format!("{:?}", invalid), "C(INVALID)");
    }
}
