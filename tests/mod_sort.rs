use flightbench::sort::{iterative, recursive};

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(ToString::to_string).collect()
}

#[test]
fn test_both_variants_agree_on_sample_schedule() {
    let input = strings(&["08:15", "23:59", "00:00", "12:30"]);
    let expected = strings(&["00:00", "08:15", "12:30", "23:59"]);
    assert_eq!(iterative::sort_times(&input).unwrap(), expected);
    assert_eq!(recursive::sort_times(&input).unwrap(), expected);
}

#[test]
fn test_duplicates_keep_relative_order() {
    let input = strings(&["10:00", "10:00", "09:00"]);
    let expected = strings(&["09:00", "10:00", "10:00"]);
    assert_eq!(iterative::sort_times(&input).unwrap(), expected);
    assert_eq!(recursive::sort_times(&input).unwrap(), expected);
}

#[test]
fn test_sorting_is_idempotent() {
    let sorted = strings(&["00:05", "06:30", "06:30", "21:45"]);
    assert_eq!(iterative::sort_times(&sorted).unwrap(), sorted);
    assert_eq!(recursive::sort_times(&sorted).unwrap(), sorted);
}

#[test]
fn test_empty_and_singleton_inputs() {
    assert_eq!(iterative::sort_times(&[]).unwrap(), Vec::<String>::new());
    assert_eq!(recursive::sort_times(&[]).unwrap(), Vec::<String>::new());
    let one = strings(&["13:37"]);
    assert_eq!(iterative::sort_times(&one).unwrap(), one);
    assert_eq!(recursive::sort_times(&one).unwrap(), one);
}

#[test]
fn test_recursive_depth_beyond_reference_maximum() {
    // Strictly decreasing input twice the largest reference size: maximum
    // recursion depth and maximum shifting work for the recursive variant.
    let n = 4096usize;
    let input: Vec<String> = (0..n)
        .rev()
        .map(|i| format!("{:02}:{:02}", (i % 1440) / 60, (i % 1440) % 60))
        .collect();
    let it = iterative::sort_times(&input).unwrap();
    let rec = recursive::sort_times(&input).unwrap();
    assert_eq!(it, rec);
    assert_eq!(rec.len(), n);
}

#[test]
fn test_malformed_element_fails_both_variants() {
    let input = strings(&["08:15", "24:00"]);
    assert!(iterative::sort_times(&input).is_err());
    assert!(recursive::sort_times(&input).is_err());
}
