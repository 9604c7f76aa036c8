use std::cmp;

/// Partially sort `items` so that the item at `k` is the one a full sort by `key` would place
/// there, every item in `[..k]` has a key `<=` it and every item in `[k + 1..]` a key `>=` it.
///
/// This is the Floyd-Rivest selection algorithm, running in expected linear time. Items with
/// equal keys end up on either side of `k` in an unspecified, but deterministic, order. NaN keys
/// never compare as smaller or larger than anything, so they may land anywhere.
pub(crate) fn select<I, K, F>(items: &mut [I], k: usize, key: F)
where
    K: PartialOrd,
    F: Fn(&I) -> K,
{
    if items.len() < 2 {
        return;
    }
    debug_assert!(k < items.len());
    select_range(items, k, 0, items.len() - 1, &key);
}

fn select_range<I, K, F>(items: &mut [I], k: usize, mut left: usize, mut right: usize, key: &F)
where
    K: PartialOrd,
    F: Fn(&I) -> K,
{
    while right > left {
        if right - left > 600 {
            // sample a smaller range around k and recurse into it first
            let n = (right - left + 1) as f64;
            let m = (k - left + 1) as f64;
            let z = f64::ln(n);
            let s = 0.5 * f64::exp((2.0 * z) / 3.0);
            let sd = 0.5
                * f64::sqrt((z * s * (n - s)) / n)
                * (if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 });
            let new_left = cmp::max(left, f64::floor(k as f64 - (m * s) / n + sd) as usize);
            let new_right = cmp::min(
                right,
                f64::floor(k as f64 + ((n - m) * s) / n + sd) as usize,
            );
            select_range(items, k, new_left, new_right, key);
        }

        let t = key(&items[k]);
        let mut i = left;
        let mut j = right;

        items.swap(left, k);
        if key(&items[right]) > t {
            items.swap(left, right);
        }

        while i < j {
            items.swap(i, j);
            i += 1;
            j -= 1;
            while key(&items[i]) < t {
                i += 1;
            }
            while key(&items[j]) > t {
                j -= 1;
            }
        }

        if key(&items[left]) == t {
            items.swap(left, j);
        } else {
            j += 1;
            items.swap(j, right);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j.saturating_sub(1);
        }
    }
}
