use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, Level};

use arff2pat::procedures::Holdout;
use arff2pat::{convert_file, ConvertOptions};

/// Convert an ARFF file into SNNS pattern files for training, testing and validation
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// ARFF file to read
    input: PathBuf,

    /// base name of the generated `_train.pat`, `_test.pat` and `_validate.pat` files
    output_base: PathBuf,

    /// share of patterns in the training set, in percent
    #[arg(long, default_value_t = 50)]
    train: u32,

    /// share of patterns in the testing set, in percent; the rest is used for validation
    #[arg(long, default_value_t = 10)]
    test: u32,

    /// log more (-v: progress, -vv: details)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::Error,
        1 => Level::Info,
        _ => Level::Debug,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("cannot initialize logging: {}", e);
    }

    let options = ConvertOptions {
        split: Holdout::new(cli.train, cli.test),
        base: cli.output_base,
    };

    match convert_file(&cli.input, &options) {
        Ok(report) => {
            for d in &report.diagnostics {
                eprintln!("{}", d);
            }
            for path in report.files.iter() {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            error!("conversion of {} failed", cli.input.display());
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
