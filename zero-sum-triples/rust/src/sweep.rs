use std::cmp::Ordering;

use tracing::debug;

use crate::{
    cancel::CancellationToken,
    error::{FindError, Result},
    triple::Triple,
};

/// Finds every distinct triple of values, taken from distinct positions of
/// `values`, that sums to zero.
///
/// Sorts a private copy and runs a two-pointer sweep per anchor. Duplicates are
/// skipped as they are met, so no triple is ever produced twice and no dedup
/// pass runs afterwards. Inputs shorter than three yield an empty result.
pub fn find_zero_sum_triples(values: &[i32]) -> Vec<Triple> {
    sweep(values, || false).unwrap_or_default()
}

/// Same as [`find_zero_sum_triples`], but checks `token` before every anchor.
///
/// Partial output is dropped on cancellation.
pub fn find_zero_sum_triples_until(
    values: &[i32],
    token: &CancellationToken,
) -> Result<Vec<Triple>> {
    sweep(values, || token.is_cancelled()).ok_or(FindError::Cancelled)
}

pub fn to_nested(triples: &[Triple]) -> Vec<Vec<i32>> {
    triples.iter().map(Triple::to_vec).collect()
}

fn sweep<F>(values: &[i32], mut should_stop: F) -> Option<Vec<Triple>>
where
    F: FnMut() -> bool,
{
    let mut results = Vec::new();

    let n = values.len();
    if n < 3 {
        return Some(results);
    }

    let mut nums = values.to_vec();
    nums.sort_unstable();

    for i in 0..n - 2 {
        if should_stop() {
            debug!(len = n, anchor = i, "sweep cancelled");
            return None;
        }

        let ni = nums[i];
        if i > 0 && ni == nums[i - 1] {
            continue;
        }

        let mut left = i + 1;
        let mut right = n - 1;

        while left < right {
            let nl = nums[left];
            let nr = nums[right];

            let curr = ni as i64 + nl as i64 + nr as i64;
            match curr.cmp(&0) {
                Ordering::Less => left += 1,
                Ordering::Equal => {
                    results.push(Triple::from_sorted(ni, nl, nr));

                    while left < right && nums[left] == nums[left + 1] {
                        left += 1;
                    }
                    while left < right && nums[right] == nums[right - 1] {
                        right -= 1;
                    }

                    left += 1;
                    right -= 1;
                }
                Ordering::Greater => right -= 1,
            }
        }
    }

    debug!(len = n, found = results.len(), "sweep finished");
    Some(results)
}
