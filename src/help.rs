use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Command;

pub fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("This is a simple program that imposes an image over another.");
    println!("Usage:");
    println!("  {bin_name} <command> <..args>");
    println!("  e.g. {bin_name} place zebra.png sample1.png mark.png 200x200 100x100");
    println!("Commands:");
    for command in Command::VARIANTS {
        let name: &'static str = command.into();
        println!("  {name:10} {}", command.help_text());
        for arg in command.arg_names() {
            println!("  {:10}   <{arg}>", "");
        }
    }
    println!("Images are written to the data/ directory, which is created if missing.");
}

/// Help for the deprecated positional-only binary
pub fn print_legacy_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("Usage: {bin_name} <output-name> <background-name> <watermark-name> <watermark-dimensions> <location>");
    println!("  e.g. {bin_name} zebra.png sample1.png mark.png 200x200 100x100");
    println!("This form is deprecated, use `impose place` instead.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("impose {version} {cpu} {repo}")
}

#[cfg(test)]
mod tests {
    use super::version_string;

    #[test]
    fn version_mentions_package() {
        let version = version_string();
        assert!(version.starts_with(&format!("impose {}", env!("CARGO_PKG_VERSION"))));
    }
}
