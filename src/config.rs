// Configuration: where the record tables live and how loud the logs
// are. Everything is resolved from the environment so the binary needs
// no command-line parsing.

use std::path::PathBuf;

/// Environment variable naming the directory that holds the record
/// tables.
pub const DATA_DIR_VAR: &str = "GRADEBOOK_DATA_DIR";

const STUDENTS_FILE: &str = "students.dat";
const TEACHERS_FILE: &str = "teachers.dat";
const MARKS_FILE: &str = "marks.dat";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Configuration from the environment: `GRADEBOOK_DATA_DIR` if set,
    /// otherwise the current directory.
    pub fn from_env() -> Config {
        let data_dir = match std::env::var(DATA_DIR_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from("."),
        };
        Config { data_dir }
    }

    pub fn new(data_dir: impl Into<PathBuf>) -> Config {
        Config {
            data_dir: data_dir.into(),
        }
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    pub fn teachers_path(&self) -> PathBuf {
        self.data_dir.join(TEACHERS_FILE)
    }

    pub fn marks_path(&self) -> PathBuf {
        self.data_dir.join(MARKS_FILE)
    }
}

/// Log verbosity from the `LOG_LEVEL` environment variable. Unset or
/// unrecognized values mean `Warn`.
pub fn log_level_from_env() -> simplelog::LevelFilter {
    use simplelog::LevelFilter;

    let mut level = match std::env::var("LOG_LEVEL") {
        Ok(s) => s,
        Err(_) => return LevelFilter::Warn,
    };

    level.make_ascii_lowercase();
    match level.as_str() {
        "max" => LevelFilter::max(),
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
