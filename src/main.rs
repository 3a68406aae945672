use clap::Parser;
use hai::diagnostic::DefaultReporter;
use hai::repl::{self, Mode};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hai", version, about = "The Hai programming language")]
struct Cli {
    /// Source file to parse. Starts the console when omitted.
    file: Option<PathBuf>,

    /// What the console prints for each line.
    #[arg(short, long, value_enum, default_value_t = Mode::Tokens)]
    mode: Mode,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let reporter = DefaultReporter::new();
    let mut stdout = io::stdout();

    match cli.file {
        Some(file) => {
            let source = hai::source::Source::load(&file)?;
            let errors = hai::run(source, &mut stdout, reporter)?;
            if errors > 0 {
                process::exit(1);
            }
            Ok(())
        }
        None => {
            println!("This is the Hai programming language!");
            println!("Feel free to type in commands");
            let stdin = io::stdin();
            repl::start(stdin.lock(), &mut stdout, cli.mode, reporter)
        }
    }
}
