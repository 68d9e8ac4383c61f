use super::{decode_all, encode_all};
use crate::errors::BenchError;
use crate::timecode::FlightTime;

/// Sorts departure times ascending using the loop-based insertion sort.
///
/// Decodes every element once up front, sorts the minute buffer in place and
/// re-encodes. O(n^2) worst and average case, O(n) on already-sorted input,
/// no recursion.
///
/// # Errors
/// Returns `InvalidTime` if any element is not well-formed `HH:MM`.
pub fn sort_times(input: &[String]) -> Result<Vec<String>, BenchError> {
    let mut times = decode_all(input)?;
    insertion_sort(&mut times);
    Ok(encode_all(&times))
}

// Strictly-greater comparison keeps equal keys in their original order.
fn insertion_sort(buf: &mut [FlightTime]) {
    for i in 1..buf.len() {
        let key = buf[i];
        let mut j = i;
        while j > 0 && buf[j - 1] > key {
            buf[j] = buf[j - 1];
            j -= 1;
        }
        buf[j] = key;
    }
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
    fn sorted_input_is_unchanged() {
        let input = strings(&["01:00", "02:00", "03:00"]);
        assert_eq!(sort_times(&input).unwrap(), input);
    }

    #[test]
    fn empty_and_singleton() {
        assert_eq!(sort_times(&[]).unwrap(), Vec::<String>::new());
        let one = strings(&["17:45"]);
        assert_eq!(sort_times(&one).unwrap(), one);
    }

    #[test]
    fn propagates_decode_errors() {
        assert!(sort_times(&strings(&["08:15", "25:00"])).is_err());
    }
}
