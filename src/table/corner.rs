//! Corner table data structure.
//!
//! This module provides the corner-table representation for triangle meshes.
//! Every face contributes three **corners** (one per face-vertex incidence),
//! numbered densely so that face `f` owns corners `3f`, `3f+1`, `3f+2`. Each
//! corner stores the point it references and the corner across its opposite
//! edge, if any. Next/previous corners within a face are derived
//! arithmetically from the numbering and are not stored.
//!
//! # Structure
//!
//! - `corner -> point`: which vertex identity the corner visits
//! - `corner -> opposite`: the corner facing the same edge from the adjacent
//!   face, or an invalid sentinel on boundaries and attribute seams
//! - `point -> corner`: one incident corner per point (derived), enabling
//!   circulation around a point via edge swings
//!
//! # Boundary Handling
//!
//! A corner with no opposite faces a boundary edge or an attribute seam; the
//! two are indistinguishable at the connectivity level. The stored incident
//! corner of a boundary point is normalized to the leftmost corner of its
//! fan, so a single rightward sweep visits every incident corner.

use super::index::{CornerId, FaceId, MeshIndex, PointId};

/// A corner table for a triangle mesh.
///
/// Stores mesh connectivity in three contiguous arrays and answers adjacency
/// queries in constant time. Query operations have no side effects, so a
/// built table may be shared freely between concurrent readers.
#[derive(Debug, Clone)]
pub struct CornerTable<I: MeshIndex = u32> {
    /// Point referenced by each corner.
    pub(crate) corner_points: Vec<PointId<I>>,

    /// Opposite corner across each corner's edge; invalid when the edge is
    /// a boundary or a seam.
    pub(crate) opposites: Vec<CornerId<I>>,

    /// One incident corner per point; invalid for isolated points.
    pub(crate) point_corners: Vec<CornerId<I>>,
}

impl<I: MeshIndex> Default for CornerTable<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> CornerTable<I> {
    /// Create a new empty corner table.
    pub fn new() -> Self {
        Self {
            corner_points: Vec::new(),
            opposites: Vec::new(),
            point_corners: Vec::new(),
        }
    }

    /// Create a corner table with pre-allocated capacity.
    pub(crate) fn with_capacity(num_points: usize, num_faces: usize) -> Self {
        Self {
            corner_points: Vec::with_capacity(num_faces * 3),
            opposites: Vec::with_capacity(num_faces * 3),
            point_corners: Vec::with_capacity(num_points),
        }
    }

    // ==================== Counts ====================

    /// Get the number of corners (three per face).
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corner_points.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.corner_points.len() / 3
    }

    /// Get the number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.point_corners.len()
    }

    // ==================== Core Queries ====================

    /// Get the point a corner references.
    #[inline]
    pub fn point(&self, c: CornerId<I>) -> PointId<I> {
        self.corner_points[c.index()]
    }

    /// Get the corner across this corner's opposite edge.
    ///
    /// Returns `None` when the edge is a mesh boundary or an attribute seam;
    /// the two are represented identically.
    #[inline]
    pub fn opposite(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        let o = self.opposites[c.index()];
        if o.is_valid() {
            Some(o)
        } else {
            None
        }
    }

    /// Get the cyclic successor of a corner within its face.
    #[inline]
    pub fn next(&self, c: CornerId<I>) -> CornerId<I> {
        let i = c.index();
        if i % 3 == 2 {
            CornerId::new(i - 2)
        } else {
            CornerId::new(i + 1)
        }
    }

    /// Get the cyclic predecessor of a corner within its face.
    #[inline]
    pub fn previous(&self, c: CornerId<I>) -> CornerId<I> {
        let i = c.index();
        if i % 3 == 0 {
            CornerId::new(i + 2)
        } else {
            CornerId::new(i - 1)
        }
    }

    /// Get the face owning a corner.
    #[inline]
    pub fn face(&self, c: CornerId<I>) -> FaceId<I> {
        FaceId::new(c.index() / 3)
    }

    /// Get a corner's position within its face (0, 1, or 2).
    #[inline]
    pub fn local_index(&self, c: CornerId<I>) -> usize {
        c.index() % 3
    }

    /// Get the first corner of a face.
    #[inline]
    pub fn first_corner(&self, f: FaceId<I>) -> CornerId<I> {
        CornerId::new(f.index() * 3)
    }

    /// Get the three corners of a face.
    #[inline]
    pub fn corners_of_face(&self, f: FaceId<I>) -> [CornerId<I>; 3] {
        let base = f.index() * 3;
        [
            CornerId::new(base),
            CornerId::new(base + 1),
            CornerId::new(base + 2),
        ]
    }

    /// Get the three points of a face, in corner order.
    pub fn face_points(&self, f: FaceId<I>) -> [PointId<I>; 3] {
        let [c0, c1, c2] = self.corners_of_face(f);
        [self.point(c0), self.point(c1), self.point(c2)]
    }

    // ==================== Derived Queries ====================

    /// Get the corner to the left of a corner: the opposite of its
    /// predecessor, across the edge entering the corner's point.
    #[inline]
    pub fn left_corner(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        self.opposite(self.previous(c))
    }

    /// Get the corner to the right of a corner: the opposite of its
    /// successor, across the edge leaving the corner's point.
    #[inline]
    pub fn right_corner(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        self.opposite(self.next(c))
    }

    /// Rotate counter-clockwise about a corner's point.
    ///
    /// Returns the corner referencing the same point in the adjacent face on
    /// the left, or `None` when that edge is a boundary or seam.
    #[inline]
    pub fn swing_left(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        self.opposite(self.previous(c)).map(|o| self.previous(o))
    }

    /// Rotate clockwise about a corner's point.
    ///
    /// Returns the corner referencing the same point in the adjacent face on
    /// the right, or `None` when that edge is a boundary or seam.
    #[inline]
    pub fn swing_right(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        self.opposite(self.next(c)).map(|o| self.next(o))
    }

    /// Get the canonical corner incident to a point.
    ///
    /// For boundary points this is the leftmost corner of the fan, so that
    /// [`point_corners`](Self::point_corners) sweeping right covers every
    /// incident corner. Returns `None` for isolated points.
    #[inline]
    pub fn corner_from_point(&self, p: PointId<I>) -> Option<CornerId<I>> {
        let c = self.point_corners[p.index()];
        if c.is_valid() {
            Some(c)
        } else {
            None
        }
    }

    /// Check if a point lies on a boundary (or seam) edge.
    ///
    /// Isolated points are considered boundary.
    pub fn is_boundary_point(&self, p: PointId<I>) -> bool {
        match self.corner_from_point(p) {
            Some(c) => self.swing_left(c).is_none(),
            None => true,
        }
    }

    /// Compute the valence (number of incident corners) of a point.
    pub fn valence(&self, p: PointId<I>) -> usize {
        self.point_corners(p).count()
    }

    // ==================== Iteration ====================

    /// Iterate over all corner IDs.
    pub fn corner_ids(&self) -> impl Iterator<Item = CornerId<I>> + '_ {
        (0..self.num_corners()).map(CornerId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Iterate over all point IDs.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId<I>> + '_ {
        (0..self.num_points()).map(PointId::new)
    }

    /// Iterate over the corners incident to a point.
    pub fn point_corners(&self, p: PointId<I>) -> PointCornerIter<'_, I> {
        PointCornerIter::new(self, p)
    }

    /// Iterate over the faces incident to a point.
    pub fn point_faces(&self, p: PointId<I>) -> impl Iterator<Item = FaceId<I>> + '_ {
        self.point_corners(p).map(|c| self.face(c))
    }

    // ==================== Mutators ====================

    /// Link two corners as mutual opposites.
    ///
    /// Used only during construction; both links are set so the symmetry
    /// invariant holds.
    pub(crate) fn set_opposite(&mut self, a: CornerId<I>, b: CornerId<I>) {
        debug_assert!(a != b, "corner cannot oppose itself");
        self.opposites[a.index()] = b;
        self.opposites[b.index()] = a;
    }

    /// Remove a corner's opposite pairing.
    ///
    /// The former partner's link back to this corner is removed as well, so
    /// the symmetry invariant holds after the cut.
    pub(crate) fn invalidate_opposite(&mut self, c: CornerId<I>) {
        let o = self.opposites[c.index()];
        if o.is_valid() {
            self.opposites[o.index()] = CornerId::invalid();
        }
        self.opposites[c.index()] = CornerId::invalid();
    }

    /// Recompute the point→corner array from the current opposite links.
    ///
    /// Picks the first-encountered corner per point, then rotates boundary
    /// points to the leftmost corner of their fan. Must run after opposite
    /// links change (construction, seam splitting) for circulators and
    /// boundary queries to stay correct.
    pub(crate) fn rebuild_point_corners(&mut self, num_points: usize) {
        self.point_corners.clear();
        self.point_corners
            .resize(num_points, CornerId::invalid());

        for c in 0..self.num_corners() {
            let p = self.corner_points[c].index();
            if !self.point_corners[p].is_valid() {
                self.point_corners[p] = CornerId::new(c);
            }
        }

        // Rotate boundary points to the leftmost corner. Interior fans come
        // back around to the start, which leaves their stored corner as-is.
        for p in 0..num_points {
            let start = self.point_corners[p];
            if !start.is_valid() {
                continue;
            }
            let mut c = start;
            while let Some(l) = self.swing_left(c) {
                if l == start {
                    break;
                }
                c = l;
            }
            self.point_corners[p] = c;
        }
    }

    // ==================== Validation ====================

    /// Check that the table's connectivity is internally consistent.
    ///
    /// Verifies opposite symmetry, that mutual opposites face the same
    /// unordered point pair, and that the point→corner array agrees with
    /// the corner→point array. O(corners); intended for tests and debug
    /// assertions.
    pub fn is_valid(&self) -> bool {
        if self.corner_points.len() != self.opposites.len() {
            return false;
        }
        if self.corner_points.len() % 3 != 0 {
            return false;
        }

        for c in self.corner_ids() {
            let p = self.point(c);
            if !p.is_valid() || p.index() >= self.num_points() {
                return false;
            }

            if let Some(o) = self.opposite(c) {
                if o == c || o.index() >= self.num_corners() {
                    return false;
                }
                // Symmetry
                if self.opposite(o) != Some(c) {
                    return false;
                }
                // Mutual opposites reference the same unordered point pair
                if self.point(self.next(c)) != self.point(self.previous(o))
                    || self.point(self.previous(c)) != self.point(self.next(o))
                {
                    return false;
                }
            }
        }

        for p in self.point_ids() {
            if let Some(c) = self.corner_from_point(p) {
                if c.index() >= self.num_corners() || self.point(c) != p {
                    return false;
                }
            }
        }

        true
    }
}

/// Iterator over the corners incident to a point.
///
/// Starts at the point's canonical corner and sweeps right until the fan
/// closes or a boundary/seam edge stops the sweep.
pub struct PointCornerIter<'a, I: MeshIndex = u32> {
    table: &'a CornerTable<I>,
    start: CornerId<I>,
    current: CornerId<I>,
    done: bool,
}

impl<'a, I: MeshIndex> PointCornerIter<'a, I> {
    fn new(table: &'a CornerTable<I>, p: PointId<I>) -> Self {
        let start = table.point_corners[p.index()];
        Self {
            table,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, I: MeshIndex> Iterator for PointCornerIter<'a, I> {
    type Item = CornerId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;

        match self.table.swing_right(self.current) {
            Some(c) if c != self.start => self.current = c,
            _ => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A table for a single face, with no opposite links.
    fn lone_triangle() -> CornerTable<u32> {
        let mut table = CornerTable::new();
        table.corner_points = vec![PointId::new(0), PointId::new(1), PointId::new(2)];
        table.opposites = vec![CornerId::invalid(); 3];
        table.rebuild_point_corners(3);
        table
    }

    #[test]
    fn test_empty_table() {
        let table = CornerTable::<u32>::new();
        assert_eq!(table.num_corners(), 0);
        assert_eq!(table.num_faces(), 0);
        assert_eq!(table.num_points(), 0);
        assert!(table.is_valid());
    }

    #[test]
    fn test_next_previous_cycle() {
        let table = lone_triangle();
        for c in table.corner_ids() {
            assert_eq!(table.next(table.next(table.next(c))), c);
            assert_eq!(table.previous(table.previous(table.previous(c))), c);
            assert_eq!(table.previous(table.next(c)), c);
        }
    }

    #[test]
    fn test_corner_numbering() {
        let table = lone_triangle();
        let f = FaceId::new(0);
        assert_eq!(table.first_corner(f), CornerId::new(0));
        assert_eq!(
            table.corners_of_face(f),
            [CornerId::new(0), CornerId::new(1), CornerId::new(2)]
        );
        for (i, c) in table.corners_of_face(f).into_iter().enumerate() {
            assert_eq!(table.face(c), f);
            assert_eq!(table.local_index(c), i);
        }
    }

    #[test]
    fn test_lone_triangle_has_no_opposites() {
        let table = lone_triangle();
        for c in table.corner_ids() {
            assert_eq!(table.opposite(c), None);
        }
        for p in table.point_ids() {
            assert!(table.is_boundary_point(p));
            assert_eq!(table.valence(p), 1);
        }
        assert!(table.is_valid());
    }

    #[test]
    fn test_set_and_invalidate_opposite() {
        // Two faces (0,1,2) and (1,0,3) sharing edge (0,1); corners 2 and 5
        // face the shared edge.
        let mut table = CornerTable::<u32>::new();
        table.corner_points = [0usize, 1, 2, 1, 0, 3].iter().map(|&p| PointId::new(p)).collect();
        table.opposites = vec![CornerId::invalid(); 6];
        table.set_opposite(CornerId::new(2), CornerId::new(5));
        table.rebuild_point_corners(4);

        assert!(table.is_valid());
        assert_eq!(table.opposite(CornerId::new(2)), Some(CornerId::new(5)));
        assert_eq!(table.opposite(CornerId::new(5)), Some(CornerId::new(2)));

        // Cutting one side removes both links
        table.invalidate_opposite(CornerId::new(2));
        assert_eq!(table.opposite(CornerId::new(2)), None);
        assert_eq!(table.opposite(CornerId::new(5)), None);
        assert!(table.is_valid());
    }
}
