use crate::catalog::Lesson;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::error::Result;
use crate::lessons::run_lesson;
use std::io::Write;
use tracing::warn;

/// Runs lessons against a configuration and writes their output.
pub struct Runner {
    config: LessonConfig,
}

impl Runner {
    pub fn new(config: LessonConfig) -> Self {
        Self { config }
    }

    /// Run `selection` (every lesson when empty) into `out`.
    ///
    /// Lessons always run in course order and at most once, whatever order or
    /// repetition `selection` has. The first error stops the run; output
    /// already written is left in `out`.
    pub fn run<W: Write>(&self, selection: &[Lesson], out: W) -> Result<()> {
        let mut console = Console::new(out);
        for lesson in Self::plan(selection) {
            if let Err(err) = run_lesson(lesson, &self.config, &mut console) {
                warn!(lesson = %lesson, error = %err, "lesson aborted");
                // The lesson error is the one reported; a failed flush only gets logged.
                if let Err(flush_err) = console.flush() {
                    warn!(error = %flush_err, "failed to flush output");
                }
                return Err(err);
            }
        }
        console.flush()?;
        Ok(())
    }

    /// Run every lesson and return the output as a string.
    pub fn transcript(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.run(&[], &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn plan(selection: &[Lesson]) -> Vec<Lesson> {
        if selection.is_empty() {
            return Lesson::ALL.to_vec();
        }
        Lesson::ALL
            .into_iter()
            .filter(|lesson| selection.contains(lesson))
            .collect()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(LessonConfig::default())
    }
}
