use std::io::Write;

use clap::Parser;
use dvpl_convert::cli::{self, Args};
use dvpl_convert::Severity;

fn init_logger(args: &Args) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(args.log_level());
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

fn main() {
    let args = Args::parse();
    init_logger(&args);

    let mut reporter = cli::stdio_reporter(&args);
    if let Err(e) = cli::run(&args, &mut reporter) {
        eprintln!("{}{e}", args.style().prefix(Severity::Error));
        std::process::exit(e.exit_code);
    }
}
