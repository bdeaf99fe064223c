use crate::utils::error::Result;
use std::io::Write;

/// One self-contained illustration. Everything it has to say goes to `out`.
pub trait Demo {
    /// Kebab-case identifier used by `--demo`.
    fn name(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}
