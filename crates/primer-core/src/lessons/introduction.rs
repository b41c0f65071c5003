use super::begin;
use crate::catalog::Lesson;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::error::{PrimerError, Result};
use crate::say;
use std::io::Write;

pub(super) fn run<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    let profile = &config.profile;

    begin(console, Lesson::Introduction, 1)?;
    say!(console, "Hello! My name is {}!", profile.name)?;

    begin(console, Lesson::Introduction, 2)?;
    say!(console, "Hello World from Rust!")?;
    say!(console, "My name is {}", profile.name)?;
    say!(console, "My age is {}", profile.age)?;
    say!(console, "My height is {}", profile.height)?;

    begin(console, Lesson::Introduction, 3)?;
    say!(
        console,
        "My name is {}, I am {} years old, my height is {}, and I specialize in {}.",
        profile.name,
        profile.age,
        profile.height,
        profile.profession
    )?;

    begin(console, Lesson::Introduction, 4)?;
    let [num1, num2] = config.introduction.addends;
    let sum = num1
        .checked_add(num2)
        .ok_or_else(|| PrimerError::overflow("the simple sum"))?;
    say!(console, "The sum of {num1} and {num2} is: {sum}")?;

    Ok(())
}
