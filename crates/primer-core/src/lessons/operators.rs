use super::begin;
use crate::catalog::Lesson;
use crate::config::LessonConfig;
use crate::console::Console;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::payroll::salary;
use crate::say;
use std::io::Write;
use tracing::debug;

pub(super) fn run<W: Write>(config: &LessonConfig, console: &mut Console<W>) -> Result<()> {
    begin(console, Lesson::Operators, 1)?;
    let mut inventory = Inventory::new(config.inventory.start);
    say!(console, "Total inventory: {}", inventory.total())?;
    for &step in &config.inventory.steps {
        let total = inventory.apply(step)?;
        debug!(?step, total, "inventory adjusted");
        say!(console, "Total inventory {}: {total}", step.label())?;
    }

    begin(console, Lesson::Operators, 2)?;
    let payroll = &config.payroll;
    let pay = salary(payroll.hours_worked, payroll.hourly_rate)?;
    debug!(hours = payroll.hours_worked, rate = payroll.hourly_rate, pay, "salary computed");
    say!(console, "Total salary: {pay}")?;

    Ok(())
}
