//! Two independent insertion sorts over textual departure times.
//!
//! Both variants share the same contract: the input is a sequence of `HH:MM`
//! strings, the output is a new sequence holding the same multiset of values
//! sorted ascending by minute-of-day. Each variant decodes into its own
//! private buffer, so the input is never mutated and timing runs stay
//! independent.

pub mod iterative;
pub mod recursive;

use crate::errors::BenchError;
use crate::timecode::FlightTime;

pub(crate) fn decode_all(input: &[String]) -> Result<Vec<FlightTime>, BenchError> {
    input.iter().map(|s| s.parse()).collect()
}

pub(crate) fn encode_all(times: &[FlightTime]) -> Vec<String> {
    times.iter().map(ToString::to_string).collect()
}
