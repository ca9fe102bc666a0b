use clap::Parser;

/// Generate the disk-image installer background (dmg-background.png) in the current directory.
///
/// All dimensions, colors and text are fixed; there is nothing to configure.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub struct Cli {}
