use impose::{args, help, logging, run, settings::Settings};

fn main() {
    logging::init();
    let arguments: Vec<_> = std::env::args_os().collect();
    let bin_name = run::bin_name(&arguments, "impose");

    let result = args::parse_args(arguments).and_then(|invocation| {
        run::execute(invocation, &Settings::default(), || {
            help::print_help(&bin_name)
        })
    });
    if let Err(e) = result {
        run::exit_with_error(e);
    }
}
