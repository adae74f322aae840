//! Sample data for the demonstrations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, age: u32) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }
}

/// The built-in people used when no input file is given.
pub fn sample() -> Vec<Person> {
    vec![
        Person::new("Bob", "Smith", 30),
        Person::new("Bob", "Jones", 20),
        Person::new("Ann", "Brown", 25),
        Person::new("Jack", "Taylor", 28),
        Person::new("Ann", "Adams", 61),
        Person::new("Zoe", "Smith", 17),
    ]
}

/// Loads people from a JSON array, or falls back to [`sample`].
pub fn load(path: Option<&Path>) -> Result<Vec<Person>> {
    let Some(path) = path else {
        return Ok(sample());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let people: Vec<Person> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse people from {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = people.len(), "loaded people");
    Ok(people)
}
