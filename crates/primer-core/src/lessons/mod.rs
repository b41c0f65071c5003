//! The lesson scripts.
//!
//! Each lesson prints its exercises in catalog order. Exercises the catalog
//! marks as unimplemented are never run.

mod introduction;
mod operators;
mod variables;

use crate::catalog::Lesson;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

pub(crate) fn run_lesson<W: Write>(
    lesson: Lesson,
    config: &LessonConfig,
    console: &mut Console<W>,
) -> Result<()> {
    info!(lesson = %lesson, "starting lesson");
    console.lesson_heading(lesson.number(), lesson.title())?;

    match lesson {
        Lesson::Introduction => introduction::run(config, console)?,
        Lesson::Variables => variables::run(config, console)?,
        Lesson::Operators => operators::run(config, console)?,
    }

    for (index, exercise) in lesson.exercises().iter().enumerate() {
        if !exercise.is_implemented() {
            debug!(lesson = %lesson, number = index + 1, title = exercise.title, "not implemented, skipped");
        }
    }
    Ok(())
}

/// Prints the heading of exercise `number` (1-based) of `lesson`.
fn begin<W: Write>(console: &mut Console<W>, lesson: Lesson, number: usize) -> Result<()> {
    let title = lesson
        .exercises()
        .get(number - 1)
        .map_or("Untitled", |exercise| exercise.title);
    debug!(lesson = %lesson, number, title, "running exercise");
    console.exercise_heading(number, title)?;
    Ok(())
}
