use super::write_listing;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::io::Write;

pub struct RangesDemo;

impl Demo for RangesDemo {
    fn name(&self) -> &'static str {
        "ranges"
    }

    fn title(&self) -> &'static str {
        "Iterator Pipeline Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Iterator Pipeline Demo ===")?;

        let mut nums = vec![8, 5, 3, 2, 7, 9, 1, 4, 6];
        nums.sort_unstable();
        let doubled: Vec<i32> = nums.iter().take(5).map(|n| n * 2).collect();
        write_listing(out, "First 5 elements doubled", &doubled)?;

        writeln!(out, "Iterator pipeline demo completed.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demos::capture;

    #[test]
    fn test_take_and_double() {
        let text = capture(&RangesDemo);
        assert!(text.contains("First 5 elements doubled: 2 4 6 8 10 \n"));
    }
}
