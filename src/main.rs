use std::env::args_os;
use std::process::ExitCode;

use huffman_coder::{run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut all_verified = true;
    for result in run(&arguments) {
        let verified = result.and_then(|report| {
            print!("{}", report);
            report.verify()
        });
        if let Err(e) = verified {
            eprintln!("Error: {}", e);
            all_verified = false;
        }
    }
    if all_verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
