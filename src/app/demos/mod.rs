pub mod algorithm;
pub mod arithmetic;
pub mod container_utils;
pub mod containers;
pub mod map;
pub mod ranges;
pub mod smart_pointer;
pub mod vector;

use crate::domain::model::DemoSettings;
use crate::domain::ports::Demo;
use crate::utils::error::{DemoError, Result};
use std::fmt::Display;
use std::io::{self, Write};

pub use algorithm::AlgorithmDemo;
pub use arithmetic::ArithmeticDemo;
pub use container_utils::ContainerUtilsDemo;
pub use containers::ContainersDemo;
pub use map::MapDemo;
pub use ranges::RangesDemo;
pub use smart_pointer::SmartPointerDemo;
pub use vector::VectorDemo;

/// Every demo the binary knows about, menu entries first.
pub fn catalog(settings: &DemoSettings) -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(VectorDemo),
        Box::new(MapDemo),
        Box::new(AlgorithmDemo::new(settings.sample_size, settings.sample_seed)),
        Box::new(ContainerUtilsDemo::new(
            settings.busy_loop_iterations,
            settings.sleep_ms,
        )),
        Box::new(ArithmeticDemo::new(settings.lhs, settings.rhs)),
        Box::new(ContainersDemo),
        Box::new(SmartPointerDemo::new(settings.scratch_file.clone())),
        Box::new(RangesDemo),
    ]
}

pub fn find<'a>(demos: &'a [Box<dyn Demo>], name: &str) -> Result<&'a dyn Demo> {
    demos
        .iter()
        .find(|demo| demo.name() == name)
        .map(|demo| demo.as_ref())
        .ok_or_else(|| DemoError::UnknownDemo {
            name: name.to_string(),
        })
}

/// One line per demo: padded name, then title.
pub fn write_catalog(demos: &[Box<dyn Demo>], out: &mut dyn Write) -> io::Result<()> {
    for demo in demos {
        writeln!(out, "{:<16} {}", demo.name(), demo.title())?;
    }
    Ok(())
}

/// Writes `label: a b c ` followed by a newline. Each item is followed by a space.
pub(crate) fn write_listing<I>(out: &mut dyn Write, label: &str, items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(out, "{}: ", label)?;
    for item in items {
        write!(out, "{} ", item)?;
    }
    writeln!(out)
}

#[cfg(test)]
pub(crate) fn capture(demo: &dyn Demo) -> String {
    let mut buf = Vec::new();
    demo.run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
