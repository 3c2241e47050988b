use capillary::error::ShellError;
use capillary::flags::Flags;
use capillary::shell::Shell;
use std::env;

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args);

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Capillary {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // argv[0] prefixes every diagnostic the shell prints.
    let prog_name = env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut shell = Shell::new(&prog_name)?;
    let status = shell.run()?;
    std::process::exit(status);
}
