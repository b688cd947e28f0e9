use std::env;
use std::process::ExitCode;

use dirhop::error::DirhopError;
use dirhop::flags::{self, Flags};
use dirhop::highlight::MessageStyler;
use dirhop::navigator::Navigator;
use dirhop::path::ResolveError;

fn main() -> ExitCode {
    let styler = MessageStyler::new();

    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", styler.error(&e.to_string()));
        eprintln!("{}", flags::USAGE);
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("dirhop {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match Navigator::new(flags).run() {
        Ok(never) => match never {},
        Err(e) => {
            if matches!(e, DirhopError::Resolve(ResolveError::NoTargetNoHome)) {
                eprintln!("{}", flags::USAGE);
            }
            eprintln!("{}", styler.error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
