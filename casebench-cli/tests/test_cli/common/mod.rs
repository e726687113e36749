use std::fs;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};


pub use data::{GOLDEN_DEFAULT_32, GOLDEN_SEED_1, HIGH_BYTES, NO_LETTERS, SAMPLE_TEXT};

/// Type of binary to execute
#[derive(Debug, Clone)]
pub enum BinaryType {
    /// Our own binary built by cargo
    Cargo(String),
    /// Reference binary available in PATH
    System(String),
}

impl BinaryType {
    /// Create a new cargo binary type
    pub fn cargo(name: impl Into<String>) -> Self {
        Self::Cargo(name.into())
    }

    /// Create a new system binary type
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// Returns the path to the binary for this variant.
    ///
    /// # Panics
    ///
    /// Panics if the binary cannot be found.
    fn get_path(&self) -> PathBuf {
        match self {
            BinaryType::Cargo(name) => match name.as_str() {
                "gen-text" => PathBuf::from(env!("CARGO_BIN_EXE_gen-text")),
                "case-serial" => PathBuf::from(env!("CARGO_BIN_EXE_case-serial")),
                other => panic!("Binary '{other}' is not built by this package"),
            },
            BinaryType::System(name) => {
                find_system_binary(name).unwrap_or_else(|| panic!("Binary {name} not found in PATH"))
            }
        }
    }
}

/// Find a system binary in PATH
fn find_system_binary(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Output from running a binary command
#[derive(Debug, Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        fixture
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Assert that a file has the expected contents
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or its contents differ.
    pub fn assert_file(&self, name: &str, expected: &[u8]) {
        let actual = self.read(name);
        assert!(actual == expected, "{name}: contents differ");
    }

    /// Run a cargo binary with the specified arguments
    pub async fn run_cargo(&self, name: &str, args: &[&str]) -> Output {
        self.run(BinaryType::cargo(name), args).await
    }

    /// Run a system binary with the specified arguments if available
    pub async fn run_system(&self, name: &str, args: &[&str]) -> Option<Output> {
        if find_system_binary(name).is_some() {
            Some(self.run(BinaryType::system(name), args).await)
        } else {
            None
        }
    }

    /// Run a binary inside the fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    async fn run(&self, binary_type: BinaryType, args: &[&str]) -> Output {
        let raw_output = tokio::process::Command::new(binary_type.get_path())
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
