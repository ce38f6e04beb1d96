use crate::cli::{CommonArgs, ContainsArgs, InspectArgs, OverlapsArgs, ParseArgs, ShowArgs};
use crate::config::ConfigFile;
use bytes::BytesMut;
use pgrange::{FormatOptions, RangeBlob, RangeElement, RangeType, functions};
use std::fmt::Write as _;

/// Settings resolved from the config file and command-line overrides.
#[derive(Debug, Clone, Copy)]
struct Context {
    range_type: RangeType,
    format: FormatOptions,
}

impl Context {
    fn resolve(common: &CommonArgs) -> anyhow::Result<Self> {
        let cfg = ConfigFile::load(&common.config, common.config_explicit)?;
        Ok(Self {
            range_type: common.range_type.unwrap_or(cfg.defaults.range_type),
            format: cfg.format_options(),
        })
    }
}

/// Run `f` with `T` bound to the scalar type of `range_type`.
macro_rules! with_element {
    ($range_type:expr, $f:ident ( $($arg:expr),* $(,)? )) => {
        match $range_type {
            RangeType::Int4Range => $f::<i32>($($arg),*),
            RangeType::NumRange => $f::<f64>($($arg),*),
        }
    };
}

pub fn parse(args: ParseArgs) -> anyhow::Result<String> {
    let ctx = Context::resolve(&args.common)?;
    let mut out = BytesMut::new();
    with_element!(ctx.range_type, encode(&args.literal, args.bounds.as_deref(), &mut out))?;
    Ok(to_hex(&out))
}

pub fn show(args: ShowArgs) -> anyhow::Result<String> {
    let ctx = Context::resolve(&args.common)?;
    let blob = RangeBlob::new(ctx.range_type, from_hex(&args.hex)?);
    Ok(blob.to_text_with(&ctx.format)?)
}

pub fn inspect(args: InspectArgs) -> anyhow::Result<String> {
    let ctx = Context::resolve(&args.common)?;
    with_element!(ctx.range_type, describe(&args.literal, &ctx.format))
}

pub fn overlaps(args: OverlapsArgs) -> anyhow::Result<String> {
    let ctx = Context::resolve(&args.common)?;
    let result = with_element!(ctx.range_type, overlaps_as(&args.left, &args.right))?;
    Ok(result.to_string())
}

pub fn contains(args: ContainsArgs) -> anyhow::Result<String> {
    let ctx = Context::resolve(&args.common)?;
    let result = with_element!(ctx.range_type, contains_as(&args.range, &args.value))?;
    Ok(result.to_string())
}

fn encode<T: RangeElement>(literal: &str, bounds: Option<&str>, out: &mut BytesMut) -> anyhow::Result<()> {
    match bounds {
        Some(notation) => {
            let Some((lower, upper)) = literal.split_once(',') else {
                anyhow::bail!("expected LOWER,UPPER with --bounds, got: {literal}");
            };
            functions::construct_with_notation(scalar::<T>(lower)?, scalar::<T>(upper)?, notation, out)?;
        }
        None => functions::construct_from_literal::<T>(literal, out)?,
    }
    Ok(())
}

fn describe<T: RangeElement>(literal: &str, opts: &FormatOptions) -> anyhow::Result<String> {
    let mut raw = BytesMut::new();
    functions::from_text::<T>(literal, &mut raw)?;

    let mut out = String::new();
    writeln!(out, "type       {}", T::RANGE_TYPE)?;
    writeln!(out, "lower      {}", render(functions::lower::<T>(&raw)?, opts))?;
    writeln!(out, "upper      {}", render(functions::upper::<T>(&raw)?, opts))?;
    writeln!(out, "lower_inc  {}", functions::lower_inc::<T>(&raw)?)?;
    writeln!(out, "upper_inc  {}", functions::upper_inc::<T>(&raw)?)?;
    write!(out, "isempty    {}", functions::is_empty::<T>(&raw)?)?;
    Ok(out)
}

fn overlaps_as<T: RangeElement>(left: &str, right: &str) -> anyhow::Result<bool> {
    let mut a = BytesMut::new();
    let mut b = BytesMut::new();
    functions::from_text::<T>(left, &mut a)?;
    functions::from_text::<T>(right, &mut b)?;
    Ok(functions::overlaps::<T>(&a, &b)?)
}

fn contains_as<T: RangeElement>(range: &str, value: &str) -> anyhow::Result<bool> {
    let mut raw = BytesMut::new();
    functions::from_text::<T>(range, &mut raw)?;
    Ok(functions::contains(&raw, scalar::<T>(value)?)?)
}

fn scalar<T: RangeElement>(s: &str) -> anyhow::Result<T> {
    T::parse_literal(s)
        .ok_or_else(|| anyhow::anyhow!("invalid {} value: {s}", T::RANGE_TYPE.scalar_name()))
}

fn render<T: RangeElement>(v: T, opts: &FormatOptions) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = v.write_literal(&mut s, opts.float_precision);
    s
}

fn to_hex(raw: &[u8]) -> String {
    raw.iter().fold(String::with_capacity(raw.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

fn from_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 || !s.is_ascii() {
        anyhow::bail!("invalid hex input: {s}");
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| anyhow::anyhow!("invalid hex input: {s}"))
        })
        .collect()
}
