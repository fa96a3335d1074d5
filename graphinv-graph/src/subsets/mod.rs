//! Subset enumeration for minimum-set searches.
//!
//! Every brute-force invariant in the workspace walks candidate vertex
//! subsets in strictly increasing cardinality and accepts the first one a
//! feasibility oracle approves, which guarantees minimality by
//! construction. The enumeration is deliberately decoupled from the
//! oracles so both can be tested on their own.

#[cfg(test)]
mod tests;

/// Iterator over the `k`-element subsets of `0..n` in lexicographic order.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: Option<Vec<usize>>,
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.as_mut()?;
        let item = current.clone();

        // Advance to the lexicographic successor, rightmost index first.
        let mut pos = self.k;
        loop {
            if pos == 0 {
                self.current = None;
                break;
            }
            pos -= 1;
            let limit = self.n - (self.k - pos);
            if current[pos] < limit {
                current[pos] += 1;
                for i in (pos + 1)..self.k {
                    current[i] = current[i - 1] + 1;
                }
                break;
            }
        }

        Some(item)
    }
}

/// Enumerates the `k`-element subsets of `0..n` in lexicographic order.
///
/// Yields nothing when `k > n`; yields the single empty subset when
/// `k == 0`.
#[must_use]
pub fn combinations(n: usize, k: usize) -> Combinations {
    let current = (k <= n).then(|| (0..k).collect());
    Combinations { n, k, current }
}

/// Enumerates every subset of `0..n` of cardinality `1..=n`, smaller
/// subsets first, lexicographic within each cardinality.
pub fn increasing_by_size(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=n).flat_map(move |k| combinations(n, k))
}

/// Finds the minimum subset of `0..n` (cardinality then lexicographic
/// order) accepted by `feasible`, or `None` when every subset up to the
/// full set is rejected.
pub fn minimum_feasible<F>(n: usize, mut feasible: F) -> Option<Vec<usize>>
where
    F: FnMut(&[usize]) -> bool,
{
    increasing_by_size(n).find(|subset| feasible(subset))
}
