#![allow(dead_code)]

mod mocks;

use std::{fs, path::Path};

pub use mocks::MockDestination;

use shift_fixtures::generator::{SHIFTS, WEEKDAYS};

pub const NAMES: &str = "Mette\r\n  Søren  \r\n\r\nAnne Marie\r\nJens\r\n";

pub fn names() -> Vec<&'static str> {
    vec!["Mette", "Søren", "Anne Marie", "Jens"]
}

pub fn write_names(path: &Path) {
    fs::write(path, NAMES).expect("Unable to write names file");
}

/// Checks that `content` holds `count` records numbered `0..count` in order and
/// that every field comes from its pool.
pub fn assert_well_formed(content: &str, count: usize) {
    let names = names();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), count);
    assert!(content.is_empty() || content.ends_with('\n'));

    for (expected, line) in lines.iter().enumerate() {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 4, "malformed line: {line}");
        assert!(names.contains(&fields[0]), "unknown name: {}", fields[0]);
        assert!(WEEKDAYS.contains(&fields[1]), "unknown weekday: {}", fields[1]);
        assert!(SHIFTS.contains(&fields[2]), "unknown shift: {}", fields[2]);
        assert_eq!(fields[3], expected.to_string());
    }
}
