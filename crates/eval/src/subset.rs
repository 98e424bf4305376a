// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets iteration.

/// Calls the given closure for each k-subset of the indices `0..n`.
///
/// Subsets are visited in colexicographic order of their sorted indices
/// (Algorithm L from TAOCP 4a), nothing is visited if `k == 0` or `k > n`.
///
/// ```
/// # use holdem_eval::subset::for_each_ksubset;
/// let mut count = 0;
/// for_each_ksubset(7, 5, |s| {
///     assert_eq!(s.len(), 5);
///     count += 1;
/// });
/// assert_eq!(count, 21);
/// ```
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    // c[1..=k] is the current subset, c[k + 1] and c[k + 2] are sentinels.
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
