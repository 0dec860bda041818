// Occurrence counts are stored as their decimal string; the first occurrence
// of a name is 1.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OccurrenceError {
    #[error("stored value {value:?} is not a non-negative integer")]
    NotANumber { value: String },

    #[error("stored value {value} cannot be incremented")]
    Overflow { value: u64 },

    #[error("no value stored after write")]
    Missing,
}

pub fn parse_occurrences(raw: &str) -> Result<u64, OccurrenceError> {
    raw.parse::<u64>().map_err(|_| OccurrenceError::NotANumber {
        value: raw.to_string(),
    })
}

pub fn next_occurrences(previous: Option<&str>) -> Result<u64, OccurrenceError> {
    match previous {
        None => Ok(1),
        Some(raw) => {
            let value = parse_occurrences(raw)?;
            value.checked_add(1).ok_or(OccurrenceError::Overflow { value })
        }
    }
}

pub fn encode_occurrences(count: u64) -> String {
    count.to_string()
}
