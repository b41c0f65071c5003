use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr};
use primer_core::{Lesson, LessonConfig, Runner};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about = "Console exercises for a first programming course")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file overriding the built-in lesson values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Restrict to a lesson; repeatable
    #[arg(short = 'l', long = "lesson", value_enum, ignore_case = true, global = true)]
    lessons: Vec<LessonArg>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Run lessons and print their output (the default)
    Run,

    /// List lessons and their exercises
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LessonArg {
    /// Greeting, multiple lines, personal information, simple sum
    Introduction,
    /// Personal info, conversions, mixed arithmetic, inferred types
    Variables,
    /// Inventory and salary
    Operators,
}

impl From<LessonArg> for Lesson {
    fn from(arg: LessonArg) -> Self {
        match arg {
            LessonArg::Introduction => Lesson::Introduction,
            LessonArg::Variables => Lesson::Variables,
            LessonArg::Operators => Lesson::Operators,
        }
    }
}

impl Cli {
    fn selection(&self) -> Vec<Lesson> {
        self.lessons.iter().copied().map(Lesson::from).collect()
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    execute(&cli, &mut stdout.lock())
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let selection = cli.selection();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = load_config(cli.config.as_deref())?;
            Runner::new(config).run(&selection, out)?;
        }
        Commands::List => write_catalog(&selection, out).into_diagnostic()?,
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LessonConfig> {
    let Some(path) = path else {
        return Ok(LessonConfig::default());
    };
    info!(path = %path.display(), "loading configuration");
    LessonConfig::from_file(path).wrap_err_with(|| format!("Failed to load {}", path.display()))
}

/// Logs go to stderr so stdout carries only lesson output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn write_catalog(selection: &[Lesson], out: &mut impl Write) -> std::io::Result<()> {
    let lessons = Lesson::ALL
        .into_iter()
        .filter(|lesson| selection.is_empty() || selection.contains(lesson));

    for lesson in lessons {
        writeln!(out, "Lesson {}: {} ({})", lesson.number(), lesson.title(), lesson.name())?;
        for (index, exercise) in lesson.exercises().iter().enumerate() {
            let marker = if exercise.is_implemented() { "" } else { " (not implemented)" };
            writeln!(out, "  {}. {}{}", index + 1, exercise.title, marker)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_everything() {
        let cli = Cli::try_parse_from(["primer"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.lessons.is_empty());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_lesson_filters() {
        let cli =
            Cli::try_parse_from(["primer", "run", "-l", "operators", "--lesson", "Introduction"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Run));
        assert_eq!(cli.selection(), vec![Lesson::Operators, Lesson::Introduction]);
    }

    #[test]
    fn test_unknown_lesson_rejected() {
        assert!(Cli::try_parse_from(["primer", "-l", "loops"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["primer", "list", "-vv", "--config", "primer.toml"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("primer.toml")));
    }

    #[test]
    fn test_lesson_values_cover_catalog() {
        let names: Vec<String> = LessonArg::value_variants()
            .iter()
            .filter_map(|arg| arg.to_possible_value())
            .map(|value| value.get_name().to_string())
            .collect();
        let catalog: Vec<&str> = Lesson::ALL.iter().map(|lesson| lesson.name()).collect();
        assert_eq!(names, catalog);
    }

    #[test]
    fn test_list_ignores_config() {
        let cli = Cli::try_parse_from(["primer", "list", "-c", "/nonexistent/primer.toml"]).unwrap();
        let mut out = Vec::new();
        execute(&cli, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Lesson 1: Introduction"));
    }

    #[test]
    fn test_run_reports_missing_config() {
        let cli = Cli::try_parse_from(["primer", "run", "-c", "/nonexistent/primer.toml"]).unwrap();
        let mut out = Vec::new();
        let err = execute(&cli, &mut out).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/primer.toml"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_selected_lesson() {
        let cli = Cli::try_parse_from(["primer", "-l", "operators"]).unwrap();
        let mut out = Vec::new();
        execute(&cli, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("=== Lesson 3: Operators ===\n"));
        assert!(out.ends_with("Total salary: 1000\n"));
    }

    #[test]
    fn test_catalog_marks_unimplemented() {
        let mut out = Vec::new();
        write_catalog(&[Lesson::Operators], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Lesson 3: Operators (operators)\n\
             \x20 1. Technical inventory\n\
             \x20 2. Salary with overtime\n\
             \x20 3. Access validation (not implemented)\n\
             \x20 4. Performance comparison (not implemented)\n\
             \x20 5. Support ticket load (not implemented)\n"
        );
    }
}
