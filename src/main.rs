mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    // No subcommand shows usage and exits cleanly.
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let result = match command {
        Commands::Init { name } => cmd::init::run(name.as_deref()),
        Commands::SetGoal { key, value, unit } => cmd::goal::run(&key, value, unit.as_deref()),
        Commands::AddWorkout {
            date,
            r#type,
            duration,
            distance,
            sets,
            reps,
            weight,
            notes,
        } => cmd::log::run_workout(date, &r#type, duration, distance, sets, reps, weight, notes),
        Commands::AddMeal {
            date,
            meal_type,
            calories,
            protein,
            carbs,
            fat,
            items,
        } => cmd::log::run_meal(date, &meal_type, calories, protein, carbs, fat, items),
        Commands::Today => cmd::today::run(),
        Commands::Week => cmd::week::run(),
        Commands::Plan => cmd::plan::run(),
        Commands::Export {
            table,
            format,
            output,
        } => cmd::export::run(&table, &format, output.as_deref()),
    };

    if let Err(e) = result {
        // Storage faults exit 2; anything else is an input/IO error.
        if e.chain()
            .any(|cause| cause.downcast_ref::<rusqlite::Error>().is_some())
        {
            eprintln!("database error: {}", e);
            process::exit(2);
        }
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
