use crate::domain::ports::Demo;
use crate::utils::error::{DemoError, Result};
use std::io::Write;

pub fn add(lhs: i32, rhs: i32) -> Result<i32> {
    lhs.checked_add(rhs).ok_or(DemoError::ArithmeticOverflow {
        operation: "+",
        lhs,
        rhs,
    })
}

pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
    lhs.checked_sub(rhs).ok_or(DemoError::ArithmeticOverflow {
        operation: "-",
        lhs,
        rhs,
    })
}

pub struct ArithmeticDemo {
    lhs: i32,
    rhs: i32,
}

impl ArithmeticDemo {
    pub fn new(lhs: i32, rhs: i32) -> Self {
        Self { lhs, rhs }
    }
}

impl Demo for ArithmeticDemo {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn title(&self) -> &'static str {
        "Arithmetic Functions"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let (a, b) = (self.lhs, self.rhs);
        writeln!(out, "\n=== Arithmetic Functions ===")?;
        writeln!(out, "{} + {} = {}", a, b, add(a, b)?)?;
        writeln!(out, "{} - {} = {}", a, b, subtract(a, b)?)?;
        Ok(())
    }
}
