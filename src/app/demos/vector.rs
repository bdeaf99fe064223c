use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub struct VectorDemo;

impl Demo for VectorDemo {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn title(&self) -> &'static str {
        "Vector Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Vector Demo ===")?;

        let mut v1 = vec![5, 2, 8, 3, 1];
        let filled = vec![10; 5];
        let copied: Vec<i32> = v1.iter().copied().collect();
        write_listing(out, "Filled with vec![10; 5]", &filled)?;
        write_listing(out, "Collected copy", &copied)?;

        // Slices hand back Options instead of throwing on an empty vector.
        if let (Some(first), Some(last)) = (v1.first(), v1.last()) {
            writeln!(out, "First element: {}", first)?;
            writeln!(out, "Last element: {}", last)?;
        }
        if let Some(third) = v1.get(2) {
            writeln!(out, "Element at index 2: {}", third)?;
        }

        v1.push(4);
        v1.pop();
        v1.insert(2, 10);
        v1.remove(1);

        writeln!(out, "Size: {}, Capacity: {}", v1.len(), v1.capacity())?;
        v1.shrink_to_fit();

        v1.sort();
        if let Some(pos) = v1.iter().position(|&x| x == 10) {
            writeln!(out, "Found 10 at position: {}", pos)?;
        }

        write_listing(out, "Vector elements", &v1)?;

        let mut items: Vec<(String, i32)> = Vec::new();
        items.push(("Apple".to_string(), 5));
        items.extend([("Banana".to_string(), 3)]);
        for (fruit, count) in &items {
            writeln!(out, "{} x{}", fruit, count)?;
        }

        let large: Vec<i32> = Vec::with_capacity(1000);
        writeln!(out, "Reserved capacity: {} (len {})", large.capacity(), large.len())?;

        let source = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        // `source` is moved; the heap buffer is not copied.
        let destination = source;
        write_listing(out, "Moved strings", &destination)?;

        writeln!(out, "Vector demo completed.")?;
        Ok(())
    }
}
