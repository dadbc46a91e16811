//! Top-level driver shared by the binaries: the only place that prints results or picks an exit code.

use std::ffi::OsString;

use crate::{args::Invocation, error::ImposeError, settings::Settings};

/// Carries out `invocation`, printing status lines to stdout.
/// Usage problems are printed and count as success, like help.
pub fn execute(
    invocation: Invocation,
    settings: &Settings,
    print_help: impl FnOnce(),
) -> Result<(), ImposeError> {
    match invocation {
        Invocation::Help => print_help(),
        Invocation::Usage(message) => println!("{message}"),
        Invocation::Place(plan) => println!("{}", plan.execute(settings)?),
        Invocation::Watermark(plan) => {
            for line in plan.execute(settings)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Name the binary was invoked as, for help output
pub fn bin_name(args: &[OsString], fallback: &str) -> String {
    args.first()
        .and_then(|arg0| std::path::Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Reports a fatal error and terminates the process
pub fn exit_with_error(error: ImposeError) -> ! {
    eprintln!("{}", error);
    std::process::exit(1);
}
