use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::ops::Bound;

pub struct MapDemo;

/// Key that orders ASCII-case-insensitively. Equality follows the ordering.
#[derive(Debug, Clone)]
struct CaseInsensitive(String);

impl Ord for CaseInsensitive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(other.0.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

impl PartialOrd for CaseInsensitive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CaseInsensitive {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CaseInsensitive {}

impl Demo for MapDemo {
    fn name(&self) -> &'static str {
        "map"
    }

    fn title(&self) -> &'static str {
        "Map Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Map Demo ===")?;

        let mut ages: BTreeMap<String, i32> = [("Alice", 30), ("Bob", 25), ("Charlie", 35)]
            .into_iter()
            .map(|(name, age)| (name.to_string(), age))
            .collect();
        let other_ages: BTreeMap<String, i32> = [("Dave", 40), ("Eve", 22)]
            .into_iter()
            .map(|(name, age)| (name.to_string(), age))
            .collect();

        ages.insert("David".to_string(), 28);
        ages.entry("Eve".to_string()).or_insert(27);
        // Range insertion keeps existing values, so Eve stays 27.
        for (name, age) in other_ages {
            ages.entry(name).or_insert(age);
        }

        if let Some(age) = ages.get("Charlie") {
            writeln!(out, "Charlie's age: {}", age)?;
        }
        let frank = *ages.entry("Frank".to_string()).or_default();
        writeln!(out, "Using entry().or_default(): {}", frank)?;

        if let Some(age) = ages.get("Alice") {
            writeln!(out, "Found Alice: {} years old", age)?;
        }

        ages.remove("Frank");
        if let Some((name, age)) = ages.remove_entry("Eve") {
            writeln!(out, "Removed {} ({})", name, age)?;
        }

        let age_hash: HashMap<&str, i32> =
            HashMap::from([("Alice", 30), ("Bob", 25), ("Charlie", 35)]);
        writeln!(
            out,
            "Hash map capacity: {} for {} entries",
            age_hash.capacity(),
            age_hash.len()
        )?;

        let case_insensitive: BTreeMap<CaseInsensitive, i32> =
            [("apple", 1), ("Banana", 2), ("ORANGE", 3)]
                .into_iter()
                .map(|(k, v)| (CaseInsensitive(k.to_string()), v))
                .collect();
        write_listing(
            out,
            "Case-insensitive order",
            case_insensitive.keys().map(|k| k.0.as_str()),
        )?;

        // Inclusive on both ends: "Dave" sorts after "D" and is excluded.
        writeln!(out, "Names between B and D:")?;
        let bounds: (Bound<&str>, Bound<&str>) = (Bound::Included("B"), Bound::Included("D"));
        for name in ages.range::<str, _>(bounds).map(|(name, _)| name) {
            write!(out, "{} ", name)?;
        }
        writeln!(out)?;

        writeln!(out, "Map demo completed.")?;
        Ok(())
    }
}
