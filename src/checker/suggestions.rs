/// Upper bound on the number of words returned by [`rank`]
pub const MAX_GUESSES: usize = 10;

/// Candidates at this distance or further are dropped
const DISTANCE_CUTOFF: usize = 4;

/// Square scratch buffer for the Damerau-Levenshtein table.
///
/// The buffer is overwritten on every call to [`DistanceMatrix::distance`] and
/// only ever grows. It is not meant to be shared between callers without
/// external synchronization; every method that touches it takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    dim: usize,
}

impl DistanceMatrix {
    pub fn with_dimension(dim: usize) -> Self {
        Self {
            cells: vec![0; dim * dim],
            dim,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Grow to `dim` x `dim`, discarding the previous contents. Never shrinks.
    pub fn grow(&mut self, dim: usize) {
        if dim > self.dim {
            self.cells = vec![0; dim * dim];
            self.dim = dim;
        }
    }

    /// Damerau-Levenshtein distance (optimal string alignment variant) between
    /// two char sequences.
    pub fn distance(&mut self, a: &[char], b: &[char]) -> usize {
        self.grow(a.len().max(b.len()) + 1);

        let dim = self.dim;
        let d = &mut self.cells;
        let at = |i: usize, j: usize| i * dim + j;

        for i in 0..=a.len() {
            d[at(i, 0)] = i;
        }
        for j in 0..=b.len() {
            d[at(0, j)] = j;
        }

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

                let mut best = std::cmp::min(
                    std::cmp::min(
                        d[at(i - 1, j)] + 1, // deletion
                        d[at(i, j - 1)] + 1, // insertion
                    ),
                    d[at(i - 1, j - 1)] + cost, // substitution
                );

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    best = best.min(d[at(i - 2, j - 2)] + 1); // transposition
                }

                d[at(i, j)] = best;
            }
        }

        d[at(a.len(), b.len())]
    }
}

/// Distance between two strings using a throwaway matrix
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    DistanceMatrix::default().distance(&a, &b)
}

/// Rank `words` by their distance to `token` and return the closest ones.
///
/// Only words whose length differs from the token's by at most one are
/// considered, and only those with a distance below 4 are kept. The sort is
/// stable, so ties keep the iteration order of `words`.
pub fn rank<'a, I>(token: &str, words: I, matrix: &mut DistanceMatrix) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let token: Vec<char> = token.to_lowercase().chars().collect();

    let mut candidates: Vec<(usize, &String)> = words
        .into_iter()
        .filter_map(|word| {
            let chars: Vec<char> = word.chars().collect();
            if chars.len().abs_diff(token.len()) > 1 {
                return None;
            }
            let dist = matrix.distance(&chars, &token);
            (dist < DISTANCE_CUTOFF).then_some((dist, word))
        })
        .collect();

    candidates.sort_by_key(|(dist, _)| *dist);

    candidates
        .into_iter()
        .take(MAX_GUESSES)
        .map(|(_, word)| word.clone())
        .collect()
}
