use super::begin;
use crate::catalog::Lesson;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::convert::{parse_integer, truncate, type_name_of, widen};
use crate::error::{PrimerError, Result};
use crate::say;
use std::io::Write;

pub(super) fn run<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    personal_info(config, console)?;
    conversions(config, console)?;
    arithmetic(config, console)?;
    inferred_types(console)
}

fn personal_info<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    let profile = &config.profile;

    begin(console, Lesson::Variables, 1)?;
    say!(console, "1. Hello.")?;
    say!(console, "2. My name is {}.", profile.name)?;
    say!(console, "3. I am {} years old.", profile.age)?;
    say!(console, "4. My height is {} feet.", profile.height)?;
    say!(console, "5. I am a student: {}.", profile.is_student)?;
    say!(console, "6. My grade is {}.", profile.grade)?;
    Ok(())
}

fn conversions<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    let inputs = &config.conversions;

    begin(console, Lesson::Variables, 2)?;
    let widened = widen(inputs.integer);
    say!(console, "1. Original number: {}.", inputs.integer)?;
    say!(console, "2. Converted to floating point: {widened}.")?;

    let truncated = truncate(inputs.price);
    say!(console, "3. Original price: {}.", inputs.price)?;
    say!(console, "4. Integer price: {truncated}.")?;

    // Fatal on bad input; the lines above stay printed.
    let parsed = parse_integer(&inputs.numeric_text)?;
    say!(console, "5. Converted text: {parsed}.")?;
    Ok(())
}

fn arithmetic<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    let inputs = &config.arithmetic;

    begin(console, Lesson::Variables, 3)?;
    // i32 + f64 has no operator in Rust; the integer is widened first.
    let result1 = widen(inputs.integer) + inputs.float;
    let result2 = inputs
        .decimal
        .checked_mul_int(inputs.multiplier)
        .ok_or_else(|| PrimerError::overflow("the decimal product"))?;

    say!(
        console,
        "1. Result 1 (int {} + float {}): {result1}",
        inputs.integer,
        inputs.float
    )?;
    say!(
        console,
        "2. Result 2 (decimal {} * int {}): {result2}",
        inputs.decimal,
        inputs.multiplier
    )?;
    Ok(())
}

// 3.14 is the course's literal, not an approximation of pi.
#[allow(clippy::approx_constant)]
fn inferred_types<W: Write>(console: &mut Console<W>) -> Result<()> {
    let number = 42;
    let text = "Hello, World!";
    let decimal_number = 3.14;
    let is_true = true;

    begin(console, Lesson::Variables, 4)?;
    say!(console, "1. Type of number ({number}): {}", type_name_of(&number))?;
    say!(console, "2. Type of text ({text}): {}", type_name_of(&text))?;
    say!(
        console,
        "3. Type of decimal_number ({decimal_number}): {}",
        type_name_of(&decimal_number)
    )?;
    say!(console, "4. Type of is_true ({is_true}): {}", type_name_of(&is_true))?;
    Ok(())
}
