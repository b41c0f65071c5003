//! The lessons and the exercises each one contains.

use std::fmt;

/// One class of the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lesson {
    Introduction,
    Variables,
    Operators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseStatus {
    Implemented,
    /// Described in the course material but never written.
    Unimplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub title: &'static str,
    pub status: ExerciseStatus,
}

impl Exercise {
    const fn implemented(title: &'static str) -> Self {
        Self {
            title,
            status: ExerciseStatus::Implemented,
        }
    }

    const fn unimplemented(title: &'static str) -> Self {
        Self {
            title,
            status: ExerciseStatus::Unimplemented,
        }
    }

    pub fn is_implemented(&self) -> bool {
        self.status == ExerciseStatus::Implemented
    }
}

const INTRODUCTION: &[Exercise] = &[
    Exercise::implemented("Personalized greeting"),
    Exercise::implemented("Multiple lines"),
    Exercise::implemented("Personal information"),
    Exercise::implemented("Simple calculation"),
];

const VARIABLES: &[Exercise] = &[
    Exercise::implemented("Declare and print personal info"),
    Exercise::implemented("Type conversions"),
    Exercise::implemented("Mixed-type arithmetic"),
    Exercise::implemented("Inferred types"),
];

const OPERATORS: &[Exercise] = &[
    Exercise::implemented("Technical inventory"),
    Exercise::implemented("Salary with overtime"),
    Exercise::unimplemented("Access validation"),
    Exercise::unimplemented("Performance comparison"),
    Exercise::unimplemented("Support ticket load"),
];

impl Lesson {
    /// Every lesson, in the order they are taught.
    pub const ALL: [Lesson; 3] = [Lesson::Introduction, Lesson::Variables, Lesson::Operators];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Introduction => "introduction",
            Lesson::Variables => "variables",
            Lesson::Operators => "operators",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lesson::Introduction => "Introduction",
            Lesson::Variables => "Variables and types",
            Lesson::Operators => "Operators",
        }
    }

    /// 1-based position in the course.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn exercises(self) -> &'static [Exercise] {
        match self {
            Lesson::Introduction => INTRODUCTION,
            Lesson::Variables => VARIABLES,
            Lesson::Operators => OPERATORS,
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
