//! Replays the search step-by-step, the way an external animator would:
//! the engine streams one snapshot per candidate-value attempt into the
//! trace channel, and a consumer thread prints them as JSON lines, paced by
//! each snapshot's `at` offset. The search itself never waits on the
//! consumer.

use std::thread;
use std::time::Duration;

use vinculum::examples::map_colouring::{australia, Colour};
use vinculum::solver::engine::SolverEngine;
use vinculum::solver::trace::StepSink;

pub fn main() {
    tracing_subscriber::fmt::init();

    let (sink, steps) = StepSink::channel();
    let csp = australia(&[Colour::Red, Colour::Green, Colour::Blue])
        .with_time_step(100)
        .with_trace(sink);

    let replayer = thread::spawn(move || {
        let mut last_at = 0;
        for snapshot in steps {
            thread::sleep(Duration::from_millis(snapshot.at - last_at));
            last_at = snapshot.at;
            println!(
                "{}",
                serde_json::to_string(&snapshot).expect("snapshot serializes")
            );
        }
    });

    let (solution, stats) = SolverEngine::default()
        .solve(&csp)
        .expect("well-formed problem");
    // Dropping the problem closes the channel and lets the replayer drain.
    drop(csp);
    replayer.join().expect("replayer thread");

    match solution {
        Some(solution) => {
            println!("Solved in {} steps; final colouring:", stats.steps);
            let mut regions: Vec<_> = solution.iter().collect();
            regions.sort();
            for (region, colour) in regions {
                println!("{region}: {colour:?}");
            }
        }
        None => println!("No solution found."),
    }
}
