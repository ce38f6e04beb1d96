use pgrange::RangeType;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Init,
    Parse,
    Show,
    Inspect,
    Overlaps,
    Contains,
}

/// A subcommand name, before its arguments are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subcommand {
    Init,
    Parse,
    Show,
    Inspect,
    Overlaps,
    Contains,
}

impl Subcommand {
    fn help_topic(self) -> HelpTopic {
        match self {
            Subcommand::Init => HelpTopic::Init,
            Subcommand::Parse => HelpTopic::Parse,
            Subcommand::Show => HelpTopic::Show,
            Subcommand::Inspect => HelpTopic::Inspect,
            Subcommand::Overlaps => HelpTopic::Overlaps,
            Subcommand::Contains => HelpTopic::Contains,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Init(InitArgs),
    Parse(ParseArgs),
    Show(ShowArgs),
    Inspect(InspectArgs),
    Overlaps(OverlapsArgs),
    Contains(ContainsArgs),
}

/// Options shared by every command that reads ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    pub config: PathBuf,
    /// `--config` was given, so a missing file is an error.
    pub config_explicit: bool,
    pub range_type: Option<RangeType>,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("pgrange.toml"),
            config_explicit: false,
            range_type: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub common: CommonArgs,
    pub literal: String,
    pub bounds: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShowArgs {
    pub common: CommonArgs,
    pub hex: String,
}

#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub common: CommonArgs,
    pub literal: String,
}

#[derive(Debug, Clone)]
pub struct OverlapsArgs {
    pub common: CommonArgs,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone)]
pub struct ContainsArgs {
    pub common: CommonArgs,
    pub range: String,
    pub value: String,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    let sub = match first.as_str() {
        "-h" | "--help" => return Ok(Command::Help(HelpTopic::Root)),
        "init" => Subcommand::Init,
        "parse" => Subcommand::Parse,
        "show" => Subcommand::Show,
        "inspect" => Subcommand::Inspect,
        "overlaps" => Subcommand::Overlaps,
        "contains" => Subcommand::Contains,
        _ => anyhow::bail!("unknown command: {first}"),
    };

    let mut common = CommonArgs::default();
    let mut bounds: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    while let Some(token) = it.next() {
        match token.as_str() {
            "-h" | "--help" => return Ok(Command::Help(sub.help_topic())),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                common.config = PathBuf::from(v);
                common.config_explicit = true;
            }
            t if t.starts_with("--config=") => {
                common.config = PathBuf::from(t.trim_start_matches("--config="));
                common.config_explicit = true;
            }
            "--type" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--type requires a value");
                };
                common.range_type = Some(parse_range_type(v)?);
            }
            t if t.starts_with("--type=") => {
                common.range_type = Some(parse_range_type(t.trim_start_matches("--type="))?);
            }
            "--bounds" if sub == Subcommand::Parse => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--bounds requires a value");
                };
                bounds = Some(v.to_string());
            }
            t if t.starts_with("--bounds=") && sub == Subcommand::Parse => {
                bounds = Some(t.trim_start_matches("--bounds=").to_string());
            }
            // A bare `--` ends option parsing.
            "--" => {
                positional.extend(it.by_ref().cloned());
            }
            t if t.starts_with("--") => anyhow::bail!("unknown option: {t}"),
            _ => positional.push(token.clone()),
        }
    }

    let cmd = match sub {
        Subcommand::Init => {
            expect_positional(&positional, 0, "init")?;
            if common.range_type.is_some() {
                anyhow::bail!("invalid options for `init`");
            }
            Command::Init(InitArgs {
                config: common.config,
            })
        }
        Subcommand::Parse => {
            let [literal] = take_positional::<1>(positional, "parse")?;
            Command::Parse(ParseArgs {
                common,
                literal,
                bounds,
            })
        }
        Subcommand::Show => {
            let [hex] = take_positional::<1>(positional, "show")?;
            Command::Show(ShowArgs { common, hex })
        }
        Subcommand::Inspect => {
            let [literal] = take_positional::<1>(positional, "inspect")?;
            Command::Inspect(InspectArgs { common, literal })
        }
        Subcommand::Overlaps => {
            let [left, right] = take_positional::<2>(positional, "overlaps")?;
            Command::Overlaps(OverlapsArgs {
                common,
                left,
                right,
            })
        }
        Subcommand::Contains => {
            let [range, value] = take_positional::<2>(positional, "contains")?;
            Command::Contains(ContainsArgs {
                common,
                range,
                value,
            })
        }
    };

    Ok(cmd)
}

fn parse_range_type(v: &str) -> anyhow::Result<RangeType> {
    RangeType::from_name(v)
        .ok_or_else(|| anyhow::anyhow!("unknown range type: {v} (expected int4range or numrange)"))
}

fn expect_positional(positional: &[String], n: usize, cmd: &str) -> anyhow::Result<()> {
    if positional.len() != n {
        anyhow::bail!(
            "`{cmd}` expects {n} argument(s), got {}",
            positional.len()
        );
    }
    Ok(())
}

fn take_positional<const N: usize>(positional: Vec<String>, cmd: &str) -> anyhow::Result<[String; N]> {
    expect_positional(&positional, N, cmd)?;
    positional
        .try_into()
        .map_err(|_| anyhow::anyhow!("`{cmd}` expects {N} argument(s)"))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
pgrange - inspect and test PostgreSQL-style range values

USAGE:
  pgrange <COMMAND> [OPTIONS]

COMMANDS:
  init          Write a pgrange.toml template
  parse         Encode a range literal and print its bytes as hex
  show          Decode hex bytes and print the range literal
  inspect       Print the bounds and flags of a range literal
  overlaps      Test whether two ranges overlap
  contains      Test whether a range contains a value

GLOBAL OPTIONS:
  --config <FILE>       Config file path (default: pgrange.toml)
  --type <TYPE>         int4range | numrange (default from config)
  -h, --help            Print help

Run `pgrange <command> --help` for more."
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  pgrange init [--config <FILE>]

Writes a config template. Refuses to overwrite an existing file."
            );
        }
        HelpTopic::Parse => {
            println!(
                "\
USAGE:
  pgrange parse <LITERAL> [OPTIONS]
  pgrange parse <LOWER,UPPER> --bounds <NOTATION> [OPTIONS]

OPTIONS:
  --bounds <NOTATION>   Build from a bound pair: [) | [] | (] | ()
  --type <TYPE>         int4range | numrange

EXAMPLES:
  pgrange parse '[1,10)'
  pgrange parse 1,10 --bounds '[]'
  pgrange parse empty --type numrange"
            );
        }
        HelpTopic::Show => {
            println!(
                "\
USAGE:
  pgrange show <HEX> [--type <TYPE>]

EXAMPLES:
  pgrange show 010000000a00000002"
            );
        }
        HelpTopic::Inspect => {
            println!(
                "\
USAGE:
  pgrange inspect <LITERAL> [--type <TYPE>]

Prints lower, upper, lower_inc, upper_inc and isempty."
            );
        }
        HelpTopic::Overlaps => {
            println!(
                "\
USAGE:
  pgrange overlaps <RANGE> <RANGE> [--type <TYPE>]"
            );
        }
        HelpTopic::Contains => {
            println!(
                "\
USAGE:
  pgrange contains <RANGE> <VALUE> [--type <TYPE>]"
            );
        }
    }
}
