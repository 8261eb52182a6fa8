//! Sequence similarity ratio
//!
//! Ratcliff/Obershelp matching: find the longest common contiguous block,
//! then recurse on the pieces to its left and right. The ratio is
//! `2 * M / (len(a) + len(b))` where `M` is the total length of all blocks
//! found. Works on `char`s, not bytes.

use std::collections::HashMap;

/// Similarity of two strings in `[0.0, 1.0]`
///
/// Two empty strings are identical (`1.0`).
///
/// # Examples
/// ```
/// use snipster::search::similarity::ratio;
///
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// assert_eq!(ratio("", ""), 1.0);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * matching_characters(&a, &b) as f64 / total as f64;
    ratio
}

/// Total length of the matching blocks between `a` and `b`
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        b2j.entry(*c).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        total += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest block `a[i..i+size] == b[j..j+size]` inside the given ranges
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // j2len[j] = length of the match ending at a[i - 1] and b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let prev = if j > 0 { j2len.get(&(j - 1)).copied().unwrap_or(0) } else { 0 };
                let size = prev + 1;
                next.insert(j, size);

                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }

        j2len = next;
    }

    (best_i, best_j, best_size)
}
