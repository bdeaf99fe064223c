use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::rc::{Rc, Weak};

pub struct SmartPointerDemo {
    scratch_file: PathBuf,
}

impl SmartPointerDemo {
    pub fn new(scratch_file: PathBuf) -> Self {
        Self { scratch_file }
    }
}

/// Owns an open file and announces the close when dropped.
struct ClosingFile<'a> {
    file: Option<File>,
    out: &'a mut dyn Write,
}

impl Drop for ClosingFile<'_> {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            // Nowhere to report a failed write from Drop.
            let _ = writeln!(self.out, "File closed.");
        }
    }
}

impl Demo for SmartPointerDemo {
    fn name(&self) -> &'static str {
        "smart-pointer"
    }

    fn title(&self) -> &'static str {
        "Smart Pointers Demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n=== Smart Pointers Demo ===")?;

        let boxed = Box::new(42);
        // `boxed` is unusable after the move.
        let moved = boxed;
        writeln!(out, "Boxed value after move: {}", moved)?;

        let shared = Rc::new(100);
        let shared_again = Rc::clone(&shared);
        writeln!(out, "Shared use count: {}", Rc::strong_count(&shared))?;

        let weak: Weak<i32> = Rc::downgrade(&shared);
        if let Some(locked) = weak.upgrade() {
            writeln!(out, "Value through Weak: {}", locked)?;
        }
        drop(shared_again);
        drop(shared);
        writeln!(
            out,
            "Weak after last owner dropped: {}",
            if weak.upgrade().is_some() {
                "alive"
            } else {
                "expired"
            }
        )?;

        let file = match File::create(&self.scratch_file) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(
                    "Could not open scratch file {}: {}",
                    self.scratch_file.display(),
                    e
                );
                None
            }
        };
        let guard = ClosingFile { file, out };
        writeln!(guard.out, "Smart pointer demo completed.")?;
        Ok(())
    }
}
