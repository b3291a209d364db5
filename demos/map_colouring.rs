use vinculum::examples::map_colouring::{australia, Colour};
use vinculum::solver::engine::SolverEngine;

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Colouring the map of Australia with three colours...");

    let csp = australia(&[Colour::Red, Colour::Green, Colour::Blue]);
    let engine = SolverEngine::default();

    match engine.solve(&csp) {
        Ok((Some(solution), stats)) => {
            println!("Solution found in {} steps:", stats.steps);
            for region in csp.variables() {
                println!("{region}: {:?}", solution[region]);
            }
        }
        Ok((None, _)) => println!("No solution found."),
        Err(e) => eprintln!("An error occurred: {e}"),
    }
}
