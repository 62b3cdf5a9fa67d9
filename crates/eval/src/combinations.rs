// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets generation.

/// Returns the binomial coefficient for n choose k.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), iterate on the smaller one.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// An iterator over all the k-subsets of a slice.
///
/// Subsets preserve the order of the items in the slice and are produced in
/// lexicographic index order, so that the subsets starting with the first
/// item come first.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

/// Returns an iterator over all k-subsets of `items`.
///
/// There are no subsets when `k == 0` or `k > items.len()`.
///
/// ```
/// # use pokerlens_eval::combinations;
/// let subsets = combinations(&[1, 2, 3], 2).collect::<Vec<_>>();
/// assert_eq!(subsets, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        done: k == 0 || k > items.len(),
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self.indices.iter().map(|&i| self.items[i]).collect();

        // Find the rightmost index that can still move right, move it and reset
        // all the following indices to consecutive positions.
        let (n, k) = (self.items.len(), self.indices.len());
        match (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(2, 3), 0);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(6, 5), 6);
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(52, 7), 133_784_560);
    }

    #[test]
    fn base_cases() {
        let items = [1, 2, 3, 4, 5];

        let singles = combinations(&items, 1).collect::<Vec<_>>();
        assert_eq!(singles, vec![vec![1], vec![2], vec![3], vec![4], vec![5]]);

        let whole = combinations(&items, 5).collect::<Vec<_>>();
        assert_eq!(whole, vec![items.to_vec()]);

        assert_eq!(combinations(&items, 0).count(), 0);
        assert_eq!(combinations(&items, 6).count(), 0);
        assert_eq!(combinations::<u8>(&[], 1).count(), 0);
    }

    #[test]
    fn lexicographic_order() {
        let subsets = combinations(&['a', 'b', 'c', 'd'], 3).collect::<Vec<_>>();
        assert_eq!(
            subsets,
            vec![
                vec!['a', 'b', 'c'],
                vec!['a', 'b', 'd'],
                vec!['a', 'c', 'd'],
                vec!['b', 'c', 'd'],
            ]
        );
    }

    #[test]
    fn subsets_count() {
        let items = (0..7).collect::<Vec<_>>();
        for k in 1..=7 {
            let subsets = combinations(&items, k).collect::<Vec<_>>();
            assert_eq!(subsets.len(), binomial(7, k));
            assert!(subsets.iter().all(|s| s.len() == k));
            assert!(subsets.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        }
    }
}
