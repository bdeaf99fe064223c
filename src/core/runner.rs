use crate::app::demos;
use crate::core::Demo;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;
use std::time::Instant;

/// Runs demos one at a time, logging timings and optional resource stats around each.
pub struct DemoRunner {
    monitor: SystemMonitor,
}

impl DemoRunner {
    pub fn new() -> Self {
        Self::new_with_monitoring(false)
    }

    pub fn new_with_monitoring(monitor_enabled: bool) -> Self {
        Self {
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self, demo: &dyn Demo, out: &mut dyn Write) -> Result<()> {
        tracing::info!("Running {}", demo.title());
        self.monitor.log_stats(&format!("Before {}", demo.name()));

        let start = Instant::now();
        demo.run(out)?;
        out.flush()?;

        tracing::info!("Finished {} in {:?}", demo.name(), start.elapsed());
        self.monitor.log_stats(&format!("After {}", demo.name()));
        Ok(())
    }

    /// Resolves every name before running any demo, so one typo produces no demo output.
    pub fn run_named(
        &self,
        catalog: &[Box<dyn Demo>],
        names: &[String],
        out: &mut dyn Write,
    ) -> Result<usize> {
        let selected = names
            .iter()
            .map(|name| demos::find(catalog, name.trim()))
            .collect::<Result<Vec<_>>>()?;

        for demo in &selected {
            self.run(*demo, out)?;
        }
        Ok(selected.len())
    }

    pub fn finish(&self) {
        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }
    }
}

impl Default for DemoRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demos::{catalog, ArithmeticDemo, RangesDemo};
    use crate::core::DemoSettings;
    use crate::utils::error::DemoError;

    #[test]
    fn test_runner_writes_demo_output() {
        let runner = DemoRunner::new();
        let mut buf = Vec::new();
        runner.run(&RangesDemo, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("First 5 elements doubled"));
    }

    #[test]
    fn test_runner_propagates_demo_errors() {
        let runner = DemoRunner::new();
        let mut buf = Vec::new();
        assert!(runner.run(&ArithmeticDemo::new(i32::MIN, 1), &mut buf).is_err());
    }

    #[test]
    fn test_run_named_in_order() {
        let demos = catalog(&DemoSettings::default());
        let runner = DemoRunner::new();
        let mut buf = Vec::new();
        let names = vec!["ranges".to_string(), " arithmetic ".to_string()];
        assert_eq!(runner.run_named(&demos, &names, &mut buf).unwrap(), 2);

        let text = String::from_utf8(buf).unwrap();
        let ranges_at = text.find("First 5 elements doubled").unwrap();
        let arithmetic_at = text.find("10 + 5 = 15").unwrap();
        assert!(ranges_at < arithmetic_at);
    }

    #[test]
    fn test_run_named_typo_writes_nothing() {
        let demos = catalog(&DemoSettings::default());
        let runner = DemoRunner::new();
        let mut buf = Vec::new();
        let names = vec!["vector".to_string(), "nope".to_string()];
        let result = runner.run_named(&demos, &names, &mut buf);
        assert!(matches!(result, Err(DemoError::UnknownDemo { ref name }) if name == "nope"));
        assert!(buf.is_empty());
    }
}
