//! In-place heap sort over weighted items.
//!
//! This is the sort primitive the priority-driven searches (Dijkstra, A*,
//! weighted A*) use to extract their next candidate. Items are ordered by the
//! `f64` returned from [`Weighted::weight`]; `NaN` weights compare as equal to
//! everything and therefore keep no particular position.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `heap_sort` | \(O(n \log n)\) | In place, not stable |

use core::cmp::Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest weight first.
    #[default]
    Ascending,
    /// Largest weight first.
    Descending,
}

/// An item carrying a numeric sort key.
pub trait Weighted {
    /// The key items are ordered by.
    fn weight(&self) -> f64;
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Sorts `items` by weight in the requested order.
pub fn heap_sort<T: Weighted>(items: &mut [T], order: SortOrder) {
    // A max-heap sorted in place yields ascending order; flipping the
    // comparison yields descending order.
    let before = |a: &T, b: &T| -> bool {
        let ord = a.weight().partial_cmp(&b.weight()).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => ord == Ordering::Less,
            SortOrder::Descending => ord == Ordering::Greater,
        }
    };

    let len = items.len();
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(items, node, len, &before);
    }

    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &before);
    }
}

fn sift_down<T, F>(items: &mut [T], mut node: usize, len: usize, before: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let mut greater = left;
        if right < len && before(&items[left], &items[right]) {
            greater = right;
        }

        if before(&items[node], &items[greater]) {
            items.swap(node, greater);
            node = greater;
        } else {
            break;
        }
    }
}
