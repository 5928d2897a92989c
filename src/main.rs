use colored::Colorize;

fn main() {
    let command_line_interface = delegen::cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red());
        std::process::exit(1);
    }
}
