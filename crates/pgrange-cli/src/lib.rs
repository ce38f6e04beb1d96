mod cli;
mod commands;
mod config;
mod init;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    let output = match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            return Ok(());
        }
        cli::Command::Init(args) => init::run(args)?,
        cli::Command::Parse(args) => commands::parse(args)?,
        cli::Command::Show(args) => commands::show(args)?,
        cli::Command::Inspect(args) => commands::inspect(args)?,
        cli::Command::Overlaps(args) => commands::overlaps(args)?,
        cli::Command::Contains(args) => commands::contains(args)?,
    };
    println!("{output}");
    Ok(())
}
