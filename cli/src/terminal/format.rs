use colored::*;
use showroom_common::snapshot::{Field, Snapshot};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn field_to_colored(field: &Field) -> ColoredString {
    match field {
        Field::Text(text) => text.as_str().color(colors::TEXT_DEFAULT),
        Field::Int(_) | Field::Float(_) => field.to_string().color(colors::FIELD_NUMBER),
        Field::Bool(true) => "yes".color(colors::FIELD_TRUE),
        Field::Bool(false) => "no".color(colors::FIELD_FALSE),
    }
}

/// Turns a snapshot into tree details, skipping the keys already shown in the tree head.
pub fn snapshot_to_details(snapshot: &Snapshot, skip: &[&str]) -> Vec<Detail> {
    snapshot
        .iter()
        .filter(|(key, _)| !skip.contains(key))
        .map(|(key, value)| (key.replace('_', " "), field_to_colored(value)))
        .collect()
}
