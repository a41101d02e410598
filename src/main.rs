use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use finops_docgen::config::{self, ReportConfig};

/// Generates the FinOps infrastructure code deliverable (.docx).
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding `modules/` and `environments/`; the document is
    /// written there too. Defaults to the directory of this executable.
    #[arg(long, env = "FINOPS_INFRA_DIR")]
    base_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => match config::executable_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("Error: cannot locate the executable directory: {}", err);
                std::process::exit(1);
            },
        },
    };

    match finops_docgen::generate(&ReportConfig::new(base_dir)) {
        Ok(path) => println!("문서가 생성되었습니다: {}", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        },
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
