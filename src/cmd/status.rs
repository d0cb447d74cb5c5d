//! Read-only reporting — `videonut status` and `videonut next`.

use anyhow::Result;
use std::path::Path;

use videonut::tracker::{NextAction, Tracker};
use videonut::ui::icons;

pub fn cmd_status(project: &Path) -> Result<()> {
    let tracker = Tracker::new(project)?;
    let checkpoint = tracker.load()?;

    println!();
    println!("{}VideoNut Workflow Status", icons::CHART);
    println!("========================");
    println!("Project:   {}", tracker.project_dir().display());
    println!("Last step: {}", checkpoint.last_step_key());
    println!();

    for report in tracker.status(&checkpoint) {
        let (icon, state) = if report.complete {
            (icons::CHECK, "Complete")
        } else {
            (icons::PENDING, "Pending")
        };
        println!(
            "  {}{}: {} ({})",
            icon,
            report.phase.title(),
            state,
            report.artifact
        );
    }
    println!();
    Ok(())
}

pub fn cmd_next(project: &Path) -> Result<()> {
    let tracker = Tracker::new(project)?;
    let checkpoint = tracker.load()?;

    println!();
    println!("{}What to Do Next", icons::TARGET);
    println!("===============");

    match tracker.next_action(&checkpoint) {
        NextAction::Done => {
            println!(
                "{}All done! Your video assets are ready for editing.",
                icons::PARTY
            );
        }
        NextAction::Run {
            phase,
            agent,
            guidance,
            missing,
        } => {
            println!(
                "{}Current position: after '{}'",
                icons::PIN,
                checkpoint.last_step_key()
            );
            println!("{}Next step: {}", icons::POINTER, phase.title());
            println!("{}Agent: {}", icons::WRENCH, agent);
            println!("{}What to do: {}", icons::NOTE, guidance);
            if let Some(artifact) = missing {
                println!();
                println!("{}Missing: {}", icons::WARN, artifact);
                println!("   Fix: run {} to produce it", agent);
            }
        }
    }
    println!();
    Ok(())
}
