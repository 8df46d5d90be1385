/// Safely convert usize to f64 for ratio calculations
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Ratcliff/Obershelp similarity in `[0, 1]`.
///
/// Twice the number of characters in matching blocks divided by the total
/// number of characters. Matching blocks are found by taking the longest
/// common substring, then recursing on the unmatched text to its left and
/// right. Two empty strings are identical (1.0).
///
/// ```
/// use frigo_match::matching::similarity::similarity_ratio;
///
/// assert!((similarity_ratio("tomate", "tomate") - 1.0).abs() < 1e-9);
/// assert!((similarity_ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
/// ```
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * count_to_f64(matching_characters(&a, &b)) / count_to_f64(total)
}

/// Total length of the matching blocks between `a` and `b`
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(start_in_a, start_in_b, length)`. Among equally long blocks the
/// one starting earliest in `a`, then earliest in `b`, wins.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);

    // run[j + 1] = length of the common suffix ending at (i - 1, blo + j)
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in 0..width {
            current[j + 1] = if a[i] == b[blo + j] {
                previous[j] + 1
            } else {
                0
            };

            let size = current[j + 1];
            if size > best.2 {
                best = (i + 1 - size, blo + j + 1 - size, size);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
