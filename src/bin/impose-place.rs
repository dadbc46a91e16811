//! Deprecated positional form: `impose-place <output> <background> <mark> <size> <location>`.
//! Equivalent to `impose place` with the same arguments.

use impose::{args, help, logging, run, settings::Settings};
use tracing::warn;

fn main() {
    logging::init();
    warn!("impose-place is deprecated, use `impose place` instead");
    let arguments: Vec<_> = std::env::args_os().collect();
    let bin_name = run::bin_name(&arguments, "impose-place");

    let result = args::parse_legacy_args(arguments).and_then(|invocation| {
        run::execute(invocation, &Settings::default(), || {
            help::print_legacy_help(&bin_name)
        })
    });
    if let Err(e) = result {
        run::exit_with_error(e);
    }
}
