//! Gauss-Jordan Elimination Walkthrough
//!
//! Solves a few small systems and narrates every row operation, the way one
//! would on paper: operation, then the matrix after it.
//!
//! Run with: cargo run --example gauss_driver
//! Set RUST_LOG=debug to also see the eliminator's own log output.

use env_logger::Env;
use gauss::prelude::*;
use gauss::linalg::LogTrace;

fn solve_and_narrate(title: &str, rows: Vec<Vec<&str>>) -> Result<(), LinalgError> {
    println!("═══ {title} ═══\n");

    let matrix = AugmentedMatrix::from_rows(rows)?;
    println!("{}\n", matrix.as_equations());
    println!("{matrix}");

    let mut log = TraceLog::new();
    let outcome = Eliminator::default().solve_traced(&matrix, &mut log)?;
    print!("{log}");

    match &outcome {
        SolveOutcome::Solved(solution) => println!("Answer: {solution}\n"),
        SolveOutcome::Contradiction { .. } => println!(),
    }
    log::info!("{title}: {outcome}");
    Ok(())
}

fn main() -> Result<(), LinalgError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║            Gauss: Exact Gauss-Jordan Elimination                   ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    solve_and_narrate(
        "A family of solutions",
        vec![
            vec!["1", "2", "-1", "-1"],
            vec!["-1", "1", "-2", "-5"],
            vec!["2", "3", "-1", "0"],
        ],
    )?;

    solve_and_narrate(
        "A unique solution",
        vec![
            vec!["2", "1", "-1", "8"],
            vec!["-3", "-1", "2", "-11"],
            vec!["-2", "1", "2", "-3"],
        ],
    )?;

    solve_and_narrate(
        "Fractional coefficients",
        vec![vec!["1/2", "1/3", "1"], vec!["1/4", "-1/6", "0"]],
    )?;

    solve_and_narrate(
        "An inconsistent system",
        vec![vec!["1", "1", "2"], vec!["2", "2", "5"]],
    )?;

    // Steps routed through the log facade instead of a TraceLog.
    let matrix = AugmentedMatrix::from_rows(vec![vec![3, 6, 9], vec![1, -1, 0]])?;
    let outcome =
        Eliminator::default().solve_traced(&matrix, &mut LogTrace::new(log::Level::Info))?;
    println!("Logged run answer: {outcome}");

    Ok(())
}
