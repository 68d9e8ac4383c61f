use super::{decode_all, encode_all};
use crate::errors::BenchError;
use crate::timecode::FlightTime;

/// Inputs longer than this run on a dedicated worker thread whose stack is
/// sized for the O(n) recursion depth, up to two frames per element.
const INLINE_LIMIT: usize = 512;

const STACK_BYTES_PER_ELEMENT: usize = 1024;
const STACK_MARGIN_BYTES: usize = 1 << 20;

/// Sorts departure times ascending using the recursive insertion sort.
///
/// Functionally equivalent to [`crate::sort::iterative::sort_times`], but the
/// sorted prefix is built by a divide-by-one recursion over a single mutable
/// buffer instead of a loop.
///
/// # Errors
/// Returns `InvalidTime` if any element is not well-formed `HH:MM`, and
/// `SortWorker` if the worker thread cannot be spawned or dies.
pub fn sort_times(input: &[String]) -> Result<Vec<String>, BenchError> {
    let mut times = decode_all(input)?;
    let len = times.len();
    if len <= INLINE_LIMIT {
        sort_prefix(&mut times, len);
    } else {
        times = sort_on_worker(times)?;
    }
    Ok(encode_all(&times))
}

fn sort_on_worker(mut times: Vec<FlightTime>) -> Result<Vec<FlightTime>, BenchError> {
    let stack = times
        .len()
        .saturating_mul(STACK_BYTES_PER_ELEMENT)
        .saturating_add(STACK_MARGIN_BYTES);
    let handle = std::thread::Builder::new()
        .name("recursive-sort".into())
        .stack_size(stack)
        .spawn(move || {
            let len = times.len();
            sort_prefix(&mut times, len);
            times
        })
        .map_err(|e| BenchError::SortWorker(e.to_string()))?;
    handle
        .join()
        .map_err(|_| BenchError::SortWorker("worker thread panicked".into()))
}

/// Sorts the first `len` elements: recursively sort the prefix of `len - 1`,
/// then sink the element at `len - 1` into its slot.
fn sort_prefix(buf: &mut [FlightTime], len: usize) {
    if len <= 1 {
        return;
    }
    sort_prefix(buf, len - 1);
    let key = buf[len - 1];
    insert_at(buf, len - 2, key, len - 1);
}

/// Walks `search` leftward from the sorted prefix's end, shifting
/// strictly-greater elements into the hole, until the key's slot is found or
/// the front of the buffer is reached.
fn insert_at(buf: &mut [FlightTime], search: usize, key: FlightTime, hole: usize) {
    if buf[search] <= key {
        buf[hole] = key;
        return;
    }
    buf[hole] = buf[search];
    if search == 0 {
        buf[0] = key;
        return;
    }
    insert_at(buf, search - 1, key, search);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn sorts_sample_schedule() {
        let out = sort_times(&strings(&["08:15", "23:59", "00:00", "12:30"])).unwrap();
        assert_eq!(out, strings(&["00:00", "08:15", "12:30", "23:59"]));
    }

    #[test]
    fn empty_and_singleton() {
        assert_eq!(sort_times(&[]).unwrap(), Vec::<String>::new());
        let one = strings(&["06:05"]);
        assert_eq!(sort_times(&one).unwrap(), one);
    }

    #[test]
    fn duplicates_collapse_to_sorted_run() {
        let out = sort_times(&strings(&["10:00", "10:00", "09:00"])).unwrap();
        assert_eq!(out, strings(&["09:00", "10:00", "10:00"]));
    }

    #[test]
    fn reverse_sorted_input_beyond_inline_limit() {
        // Worst case for depth and shifts: strictly decreasing input larger
        // than INLINE_LIMIT, so the worker-thread path is exercised.
        let n = 2 * INLINE_LIMIT;
        let input: Vec<String> = (0..n)
            .rev()
            .map(|i| FlightTime::from_minutes((i % 1440) as u16).unwrap().to_string())
            .collect();
        let out = sort_times(&input).unwrap();
        let decoded = decode_all(&out).unwrap();
        assert!(decoded.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(out.len(), n);
    }
}
