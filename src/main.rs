use clap::Parser;
use trackdiff::cli::commands::{cmd_diff, cmd_draft, cmd_snapshot};
use trackdiff::cli::config::{Cli, Commands, load_config};
use trackdiff::logging::init_tracing;
use trackdiff::trace::logger::TraceLogger;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let output = match &cli.command {
        Commands::Diff { pair, format } => cmd_diff(pair, format.as_deref(), &config, tracer),
        Commands::Snapshot {
            markup,
            key_form,
            format,
        } => cmd_snapshot(markup, key_form.as_deref(), format.as_deref(), &config),
        Commands::Draft {
            pair,
            events,
            format,
        } => cmd_draft(pair, events.as_deref(), format.as_deref(), &config, tracer),
    };

    match output {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
