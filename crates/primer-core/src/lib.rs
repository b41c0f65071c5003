//! Console exercises for a first programming course.
//!
//! This crate provides:
//! - The lesson catalog and the scripts behind each exercise
//! - Primitive conversions (widening, truncation, integer parsing)
//! - Exact fixed-point [`Decimal`] arithmetic
//! - The inventory counter and the overtime salary rule
//! - Optional configuration (`primer.toml`) overriding the built-in values
//!
//! # Example
//!
//! ```
//! use primer_core::{Lesson, Runner};
//!
//! let mut out = Vec::new();
//! Runner::default().run(&[Lesson::Operators], &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("Total salary: 1000\n"));
//! ```

mod catalog;
mod config;
mod console;
mod convert;
mod decimal;
mod error;
mod inventory;
mod lessons;
mod payroll;
mod runner;

pub use catalog::{Exercise, ExerciseStatus, Lesson};
pub use config::{
    ArithmeticConfig, ConversionConfig, IntroductionConfig, InventoryConfig, LessonConfig,
    PayrollConfig, Profile,
};
pub use console::Console;
pub use convert::{parse_integer, truncate, type_name_of, widen};
pub use decimal::{Decimal, DecimalParseError, MAX_SCALE};
pub use error::{ConfigError, PrimerError, Result};
pub use inventory::{Adjustment, Inventory};
pub use payroll::{salary, OVERTIME_MULTIPLIER, REGULAR_HOURS};
pub use runner::Runner;
