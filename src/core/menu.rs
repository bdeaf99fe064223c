use crate::app::demos;
use crate::core::runner::DemoRunner;
use crate::core::{Demo, MenuChoice};
use crate::utils::error::{DemoError, Result};
use std::io::{BufRead, Write};

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub demos_run: usize,
    pub invalid_selections: usize,
}

/// Parses one input line. Anything that is not exactly an integer on the table is `None`.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    line.trim().parse::<i64>().ok().and_then(MenuChoice::from_code)
}

/// The interactive loop: show the menu, read a code, dispatch, repeat until exit or end of input.
pub struct Session<'a, R: BufRead, W: Write> {
    demos: &'a [Box<dyn Demo>],
    runner: &'a DemoRunner,
    input: R,
    output: W,
    pause_after_demo: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(demos: &'a [Box<dyn Demo>], runner: &'a DemoRunner, input: R, output: W) -> Self {
        Self {
            demos,
            runner,
            input,
            output,
            pause_after_demo: true,
        }
    }

    pub fn with_pause(mut self, pause_after_demo: bool) -> Self {
        self.pause_after_demo = pause_after_demo;
        self
    }

    pub fn run(mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed, leaving menu");
                writeln!(self.output, "\nExiting...")?;
                break;
            };

            match parse_choice(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Some(choice) => {
                    self.dispatch(choice)?;
                    summary.demos_run += 1;
                }
                None => {
                    tracing::warn!("Invalid menu selection: {:?}", line.trim());
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    summary.invalid_selections += 1;
                }
            }

            if self.pause_after_demo && !self.wait_for_enter()? {
                break;
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Rust Collections Demo Menu ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.code(), choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let Some(name) = choice.demo_name() else {
            return Ok(());
        };
        let demo = demos::find(self.demos, name)?;

        match self.runner.run(demo, &mut self.output) {
            Ok(()) => Ok(()),
            Err(e @ DemoError::IoError(_)) => Err(e),
            Err(e) => {
                tracing::error!("{} failed: {}", demo.name(), e);
                writeln!(self.output, "{}", e.user_friendly_message())?;
                Ok(())
            }
        }
    }

    /// Returns false when input ended while waiting.
    fn wait_for_enter(&mut self) -> Result<bool> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        Ok(self.read_line()?.is_some())
    }

    /// Bytes that are not UTF-8 become replacement characters and fail to parse as a choice.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demos::catalog;
    use crate::core::DemoSettings;
    use std::io::Cursor;

    fn run_session(input: &str, pause: bool) -> (SessionSummary, String) {
        let settings = DemoSettings {
            sleep_ms: 1,
            busy_loop_iterations: 10,
            sample_seed: Some(3),
            ..DemoSettings::default()
        };
        let demos = catalog(&settings);
        let runner = DemoRunner::new();
        let mut output = Vec::new();
        let summary = Session::new(&demos, &runner, Cursor::new(input.to_string()), &mut output)
            .with_pause(pause)
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n"), Some(MenuChoice::Vector));
        assert_eq!(parse_choice("  0  "), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("99"), None);
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice("3abc"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (summary, text) = run_session("0\n", true);
        assert_eq!(summary, SessionSummary::default());
        assert!(text.contains("Enter your choice: Exiting..."));
        assert!(!text.contains("Press Enter to continue"));
    }

    #[test]
    fn test_invalid_then_exit() {
        let (summary, text) = run_session("99\n\n0\n", true);
        assert_eq!(summary.invalid_selections, 1);
        assert!(text.contains(INVALID_CHOICE));
        assert_eq!(text.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_vector_without_pause() {
        let (summary, text) = run_session("1\n0\n", false);
        assert_eq!(summary.demos_run, 1);
        assert!(text.contains("=== Vector Demo ==="));
        assert!(text.contains("Vector elements: 1 3 5 8 10"));
        assert!(!text.contains("Press Enter"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (summary, text) = run_session("2\n", true);
        assert_eq!(summary.demos_run, 1);
        assert!(text.contains("Map demo completed."));
        assert!(text.trim_end().ends_with("Press Enter to continue..."));
    }

    #[test]
    fn test_non_utf8_line_is_invalid_choice() {
        let demos = catalog(&DemoSettings::default());
        let runner = DemoRunner::new();
        let mut output = Vec::new();
        let summary = Session::new(
            &demos,
            &runner,
            Cursor::new(b"\xff\xfe\n0\n".to_vec()),
            &mut output,
        )
        .with_pause(false)
        .run()
        .unwrap();
        assert_eq!(summary.invalid_selections, 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(INVALID_CHOICE));
        assert_eq!(text.matches("Enter your choice: ").count(), 2);
        assert!(text.contains("Exiting..."));
    }

    #[test]
    fn test_overflow_reported_inline() {
        let settings = DemoSettings {
            lhs: i32::MAX,
            rhs: 1,
            ..DemoSettings::default()
        };
        let demos = catalog(&settings);
        let runner = DemoRunner::new();
        let mut output = Vec::new();
        let summary = Session::new(&demos, &runner, Cursor::new("5\n0\n"), &mut output)
            .with_pause(false)
            .run()
            .unwrap();
        assert_eq!(summary.demos_run, 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("does not fit in a 32-bit integer"));
        assert!(text.contains("Exiting..."));
    }
}
