//! A result item returned by a query
use std::cmp::Ordering;

/// Represents the result of a nearest neighbour query, with `distance` being the distance of the
/// found point from the query point, and `point` and `item` borrowing the stored node that was found.
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<'t, A, T> {
    /// the distance of the found item from the query point according to the tree's distance metric
    pub distance: A,
    /// the stored co-ordinates of the node that was found
    pub point: &'t [A],
    /// the stored item of the node that was found
    pub item: &'t T,
}

impl<A: PartialOrd, T: PartialEq> PartialOrd for NearestNeighbour<'_, A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: PartialEq, T: PartialEq> PartialEq for NearestNeighbour<'_, A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point && self.item == other.item
    }
}

impl<'t, A, T> From<NearestNeighbour<'t, A, T>> for (A, &'t T) {
    fn from(elem: NearestNeighbour<'t, A, T>) -> Self {
        (elem.distance, elem.item)
    }
}
