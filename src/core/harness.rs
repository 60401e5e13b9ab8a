use crate::core::greeter::HelloWorld;
use crate::core::{Greeter, TestReport};
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{
    validate_char_count, validate_exact, validate_no_surrounding_whitespace, validate_stable,
};
use std::io::Write;

/// Expected greeting, kept apart from the greeter's own constant.
pub const EXPECTED: &str = "Hello, World!";
pub const EXPECTED_CHARS: usize = 13;

pub const CHECK_CORRECT: &str = "greet returns correct string";
pub const CHECK_STABLE: &str = "greet is stable across calls";
pub const CHECK_WHITESPACE: &str = "greet has no surrounding whitespace";
pub const CHECK_LENGTH: &str = "greet is 13 characters";

type Check<G> = (&'static str, fn(&G) -> Result<()>);

fn check_correct<G: Greeter>(greeter: &G) -> Result<()> {
    validate_exact(CHECK_CORRECT, EXPECTED, greeter.greet())
}

fn check_stable<G: Greeter>(greeter: &G) -> Result<()> {
    let first = greeter.greet().to_owned();
    let second = greeter.greet();
    validate_stable(CHECK_STABLE, &first, second)
}

fn check_whitespace<G: Greeter>(greeter: &G) -> Result<()> {
    validate_no_surrounding_whitespace(CHECK_WHITESPACE, greeter.greet())
}

fn check_length<G: Greeter>(greeter: &G) -> Result<()> {
    validate_char_count(CHECK_LENGTH, greeter.greet(), EXPECTED_CHARS)
}

pub struct TestHarness<G: Greeter> {
    greeter: G,
}

impl<G: Greeter> TestHarness<G> {
    pub fn new(greeter: G) -> Self {
        Self { greeter }
    }

    fn checks() -> [Check<G>; 4] {
        [
            (CHECK_CORRECT, check_correct::<G>),
            (CHECK_STABLE, check_stable::<G>),
            (CHECK_WHITESPACE, check_whitespace::<G>),
            (CHECK_LENGTH, check_length::<G>),
        ]
    }

    /// Runs every check against the process stdout/stderr.
    pub fn run(&self) -> Result<TestReport> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_to(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Stops at the first failing check. Progress goes to `out`, the failure line to `err`.
    pub fn run_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<TestReport> {
        let mut report = TestReport::default();
        writeln!(out, "Running tests...")?;

        for (name, check) in Self::checks() {
            tracing::debug!("Running check: {}", name);
            match check(&self.greeter) {
                Ok(()) => {
                    report.record(name, true);
                    writeln!(out, "✓ {}", name)?;
                }
                Err(e) => {
                    report.record(name, false);
                    if let HarnessError::AssertionFailure {
                        check,
                        expected,
                        actual,
                    } = &e
                    {
                        // keep the assertion error even if the line can't be written
                        if let Err(io) =
                            writeln!(err, "✗ {}: expected {:?}, got {:?}", check, expected, actual)
                        {
                            tracing::warn!("Could not report failed check {}: {}", check, io);
                        }
                    }
                    tracing::debug!("Report at failure: {:?}", report);
                    return Err(e);
                }
            }
        }

        writeln!(out, "All tests passed!")?;
        out.flush()?;
        Ok(report)
    }
}

/// Runs the harness over [`HelloWorld`] and returns the process exit code.
pub fn run_tests() -> i32 {
    let harness = TestHarness::new(HelloWorld);

    match harness.run() {
        Ok(report) => {
            tracing::info!("✅ {} checks passed", report.passed());
            0
        }
        Err(e) => {
            tracing::error!("❌ Test run failed: {}", e);
            e.exit_code()
        }
    }
}
