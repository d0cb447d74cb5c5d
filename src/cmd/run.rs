//! Ordered phase checking — `videonut run`.

use anyhow::Result;
use std::path::Path;

use videonut::agent::ManualCollaborator;
use videonut::phase::Phase;
use videonut::tracker::{RunOutcome, Tracker};
use videonut::ui::icons;

/// Check phases in order until one blocks. Returns `true` when the full
/// pipeline is complete; the caller maps `false` to exit code 1.
pub fn cmd_run(project: &Path, resume: bool) -> Result<bool> {
    let tracker = Tracker::new(project)?;
    let mut checkpoint = tracker.load()?;

    println!();
    if resume {
        println!("Resuming workflow from last checkpoint...");
    }
    println!("{}Starting VideoNut production workflow", icons::CLAPPER);
    println!("Project: {}", tracker.project_dir().display());
    println!("Last completed step: {}", checkpoint.last_step_key());
    println!();

    let already_done: Vec<Phase> = Phase::ALL
        .into_iter()
        .filter(|p| checkpoint.is_complete(*p))
        .collect();

    let outcome = tracker.run_all(&mut checkpoint, &ManualCollaborator)?;

    for phase in Phase::ALL {
        if !checkpoint.is_complete(phase) {
            break;
        }
        if already_done.contains(&phase) {
            println!("  {}{}: already complete", icons::SKIP, phase.title());
        } else {
            println!(
                "  {}{}{}: complete ({} found)",
                icons::CHECK,
                icons::phase_icon(phase),
                phase.title(),
                phase.artifact()
            );
        }
    }

    match outcome {
        RunOutcome::Complete => {
            println!();
            println!("{}All workflow phases completed!", icons::PARTY);
            println!("Your video assets are ready for editing.");
            println!();
            Ok(true)
        }
        RunOutcome::Blocked { phase, artifact } => {
            println!(
                "  {}{}{}: blocked",
                icons::CROSS,
                icons::phase_icon(phase),
                phase.title()
            );
            println!();
            println!(
                "{}Blocked at {}: produce {} to continue",
                icons::WARN,
                phase.title(),
                artifact
            );
            println!("Run {} and retry.", phase.agent());
            println!();
            println!("TIP: 'videonut next' shows the full next step");
            println!("TIP: 'videonut status' shows overall progress");
            println!();
            Ok(false)
        }
    }
}
