use std::fmt;

use crate::core::item::{ItemProcessor, ItemProcessorResult};

/// One generated fixture row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    pub name: String,
    pub weekday: String,
    pub shift: String,
    pub sequence_number: u64,
}

impl fmt::Display for ShiftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name, self.weekday, self.shift, self.sequence_number
        )
    }
}

/// Formats a record as one output line, trailing newline included.
pub fn serialize(record: &ShiftRecord) -> String {
    format!("{record}\n")
}

/// Serializes each record into its output line.
#[derive(Default)]
pub struct RecordLineProcessor;

impl ItemProcessor<ShiftRecord, String> for RecordLineProcessor {
    fn process(&self, item: &ShiftRecord) -> ItemProcessorResult<String> {
        Ok(serialize(item))
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordLineProcessor, ShiftRecord, serialize};
    use crate::core::item::ItemProcessor;

    fn alice(sequence_number: u64) -> ShiftRecord {
        ShiftRecord {
            name: "Alice".to_string(),
            weekday: "mandag".to_string(),
            shift: "nat".to_string(),
            sequence_number,
        }
    }

    #[test]
    fn record_is_serialized_with_comma_space_separators() {
        assert_eq!(serialize(&alice(3)), "Alice, mandag, nat, 3\n");
    }

    #[test]
    fn sequence_number_has_no_leading_zeros() {
        assert_eq!(serialize(&alice(0)), "Alice, mandag, nat, 0\n");
        assert_eq!(serialize(&alice(399)), "Alice, mandag, nat, 399\n");
    }

    #[test]
    fn text_is_kept_as_read() {
        let record = ShiftRecord {
            name: "Søren Ørsted".to_string(),
            weekday: "lørdag".to_string(),
            shift: "aften".to_string(),
            sequence_number: 12,
        };
        assert_eq!(serialize(&record), "Søren Ørsted, lørdag, aften, 12\n");
    }

    #[test]
    fn processor_produces_serialized_line() {
        let line = RecordLineProcessor.process(&alice(7)).unwrap();
        assert_eq!(line, "Alice, mandag, nat, 7\n");
    }
}
