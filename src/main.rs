use clap::Parser;
use mocvd_recipe::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // An empty recipe has already been reported as a warning
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MOCVD Recipe - Process Recipe Parser and Plotter");
    println!("================================================");
    println!();
    println!("Reads a time-annotated MOCVD recipe and extracts every numeric");
    println!("name=value assignment against the accumulated recipe clock.");
    println!();
    println!("USAGE:");
    println!("    mocvd-recipe <COMMAND> <RECIPE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    observations  List every observation with a parse summary");
    println!("    variables     List the distinct variable names");
    println!("    series        Print the time series of selected variables");
    println!("    plot          Plot selected variables in the terminal");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Plot the default variables (ReactorTemp, ReactorPress):");
    println!("    mocvd-recipe plot recipe.txt");
    println!();
    println!("    # Plot chosen variables at a fixed size:");
    println!("    mocvd-recipe plot recipe.txt -n TMGa.Flow -n NH3.Flow --width 72 --height 18");
    println!();
    println!("    # Export one series as CSV:");
    println!("    mocvd-recipe series recipe.txt -n ReactorTemp --format csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mocvd-recipe <COMMAND> --help");
}
