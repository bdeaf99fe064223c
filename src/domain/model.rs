use std::path::PathBuf;

/// The fixed menu table. Codes outside this set have no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Vector,
    Map,
    Algorithm,
    ContainerUtils,
    Arithmetic,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Vector,
        MenuChoice::Map,
        MenuChoice::Algorithm,
        MenuChoice::ContainerUtils,
        MenuChoice::Arithmetic,
        MenuChoice::Exit,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Vector),
            2 => Some(MenuChoice::Map),
            3 => Some(MenuChoice::Algorithm),
            4 => Some(MenuChoice::ContainerUtils),
            5 => Some(MenuChoice::Arithmetic),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Vector => 1,
            MenuChoice::Map => 2,
            MenuChoice::Algorithm => 3,
            MenuChoice::ContainerUtils => 4,
            MenuChoice::Arithmetic => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::Vector => "Vector Demo",
            MenuChoice::Map => "Map Demo",
            MenuChoice::Algorithm => "Algorithm Demo",
            MenuChoice::ContainerUtils => "Container Utilities Demo",
            MenuChoice::Arithmetic => "Run Arithmetic Functions",
        }
    }

    /// Name of the catalog entry this code dispatches to, `None` for exit.
    pub fn demo_name(self) -> Option<&'static str> {
        match self {
            MenuChoice::Exit => None,
            MenuChoice::Vector => Some("vector"),
            MenuChoice::Map => Some("map"),
            MenuChoice::Algorithm => Some("algorithm"),
            MenuChoice::ContainerUtils => Some("container-utils"),
            MenuChoice::Arithmetic => Some("arithmetic"),
        }
    }
}

/// Tunables the demos read. Built from the TOML file plus CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub pause_after_demo: bool,
    pub sample_size: usize,
    pub sample_seed: Option<u64>,
    pub sleep_ms: u64,
    pub busy_loop_iterations: u64,
    pub scratch_file: PathBuf,
    pub lhs: i32,
    pub rhs: i32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            pause_after_demo: true,
            sample_size: 3,
            sample_seed: None,
            sleep_ms: 100,
            busy_loop_iterations: 1_000_000,
            scratch_file: std::env::temp_dir().join("example.txt"),
            lhs: 10,
            rhs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_table() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_code(choice.code()), Some(choice));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(MenuChoice::from_code(99), None);
        assert_eq!(MenuChoice::from_code(-1), None);
        assert_eq!(MenuChoice::from_code(6), None);
    }

    #[test]
    fn test_exit_has_no_demo() {
        assert!(MenuChoice::Exit.demo_name().is_none());
        assert_eq!(MenuChoice::ContainerUtils.demo_name(), Some("container-utils"));
    }
}
