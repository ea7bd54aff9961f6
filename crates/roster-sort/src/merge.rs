//! # Merge Sort
//!
//! Top-down merge sort over owned vectors. The input is split in half,
//! each half sorted recursively, and the halves merged by repeatedly
//! taking the smaller front element. On equal keys the left element wins,
//! so elements with equal keys keep their input order.
//!
//! O(n log n) comparisons, O(n) auxiliary space per merge level.

/// Sort `items` ascending by `key`. Stable.
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort(items, &key)
}

fn sort<T, K, F>(mut items: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    merge(sort(items, key), sort(right, key), key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // Ties go left.
            (Some(l), Some(r)) => key(l) <= key(r),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// True if `items` is non-decreasing by `key`.
pub fn is_sorted_by_key<T, K, F>(items: &[T], key: F) -> bool
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}
