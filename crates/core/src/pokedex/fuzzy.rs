//! Approximate name matching.
//!
//! Similarity is the matching-blocks ratio `2 * M / T`, where `T` is the
//! combined length of both strings and `M` the number of characters covered
//! by recursively taking the longest common substring and matching the
//! pieces to its left and right.

/// Default minimum similarity for a name to count as a close match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Default number of close matches reported.
pub const DEFAULT_MAX_MATCHES: usize = 3;

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among equally long blocks the one starting
/// earliest in `a` wins, then the one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j + 1] = length of the common suffix ending at a[i], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut run = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            run[j + 1] = if a[i] == b[j] { prev[j] + 1 } else { 0 };
            let k = run[j + 1];
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        std::mem::swap(&mut prev, &mut run);
        run.iter_mut().for_each(|v| *v = 0);
    }

    (best_i, best_j, best_size)
}

/// Total number of characters in all matching blocks.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![((0, a.len()), (0, b.len()))];

    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let (i, j, k) = longest_match(a, b, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            queue.push(((i + k, ahi), (j + k, bhi)));
        }
    }

    total
}

/// Similarity of two strings in `[0.0, 1.0]`. Case-sensitive.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let length = a.len() + b.len();
    if length == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / length as f64
}

/// Up to `limit` entries of `candidates` whose similarity to `word` is at
/// least `cutoff`, best first.
///
/// Equal scores are ordered by descending candidate string so the ranking
/// is stable regardless of the order names come out of the store.
pub fn close_matches<'a, I>(word: &str, candidates: I, limit: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &String)> = candidates
        .into_iter()
        .map(|candidate| (similarity(candidate, word), candidate))
        .filter(|(score, _)| *score >= cutoff)
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| sb.total_cmp(sa).then_with(|| b.cmp(a)));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.clone()).collect()
}
