//! Command-line argument parsing.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Long options use `--option=VALUE` or `--option VALUE` syntax. Short
//! options that take a value accept either the attached (`-sN`) or separate
//! (`-s N`) form. `-v` may be repeated (`-vv`) to raise verbosity further.
//!
//! Bad or unrecognised options return an `Err` whose message begins with
//! `"bad usage: "`.

use anyhow::anyhow;

use crate::bigint::BigInt;
use crate::cli::arg_utils::{long_command_w_arg, read_u32_from_str};
use crate::cli::constants::{display_level, set_display_level};
use crate::config::{ELEM_CNT_MAX_DEFAULT, ELEM_CNT_MIN_DEFAULT, PW_MAX_DEFAULT, PW_MIN_DEFAULT};

/// Complete set of options produced by the argument parsing loop.
#[derive(Debug)]
pub struct ParsedArgs {
    pub pw_min: u8,
    pub pw_max: u8,
    pub elem_cnt_min: usize,
    pub elem_cnt_max: usize,
    pub wl_dist_len: bool,
    pub skip: BigInt,
    pub limit: BigInt,
    pub output_file: Option<String>,
    pub keyspace_only: bool,
    /// When `true`, a `--version`/`--help` flag was processed; the caller
    /// should exit immediately with `exit_code` without reading stdin.
    pub exit_early: bool,
    pub exit_code: i32,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        ParsedArgs {
            pw_min: PW_MIN_DEFAULT,
            pw_max: PW_MAX_DEFAULT,
            elem_cnt_min: ELEM_CNT_MIN_DEFAULT,
            elem_cnt_max: ELEM_CNT_MAX_DEFAULT,
            wl_dist_len: false,
            skip: BigInt::zero(),
            limit: BigInt::zero(),
            output_file: None,
            keyspace_only: false,
            exit_early: false,
            exit_code: 0,
        }
    }
}

/// Parses `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&argv)
}

/// Parses an explicit argument list (argv[1..]). Callable from tests without
/// touching `std::env`.
pub fn parse_args_from(argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut out = ParsedArgs::default();

    let mut idx = 0usize;
    while idx < argv.len() {
        let arg = argv[idx].as_str();

        if arg == "-V" || arg == "--version" {
            crate::cli::help::print_version();
            out.exit_early = true;
            out.exit_code = 1;
            return Ok(out);
        }
        if arg == "-h" || arg == "--help" {
            crate::cli::help::print_usage();
            out.exit_early = true;
            out.exit_code = 1;
            return Ok(out);
        }
        if arg == "--keyspace" {
            out.keyspace_only = true;
            idx += 1;
            continue;
        }
        if arg == "--wl-dist-len" {
            out.wl_dist_len = true;
            idx += 1;
            continue;
        }
        if arg == "-q" || arg == "--quiet" {
            set_display_level(0);
            idx += 1;
            continue;
        }
        if arg.starts_with("-v") && arg.bytes().all(|b| b == b'v' || b == b'-') && arg.len() > 1 {
            let raises = arg.bytes().filter(|&b| b == b'v').count() as u32;
            set_display_level(display_level().saturating_add(raises));
            idx += 1;
            continue;
        }

        if let Some(rest) = long_command_w_arg(arg, "--pw-min=") {
            out.pw_min = parse_u8(rest, "--pw-min")?;
            idx += 1;
            continue;
        }
        if let Some(rest) = long_command_w_arg(arg, "--pw-max=") {
            out.pw_max = parse_u8(rest, "--pw-max")?;
            idx += 1;
            continue;
        }
        if let Some(rest) = long_command_w_arg(arg, "--elem-cnt-min=") {
            out.elem_cnt_min = parse_u8(rest, "--elem-cnt-min")? as usize;
            idx += 1;
            continue;
        }
        if let Some(rest) = long_command_w_arg(arg, "--elem-cnt-max=") {
            out.elem_cnt_max = parse_u8(rest, "--elem-cnt-max")? as usize;
            idx += 1;
            continue;
        }

        if let Some(rest) = long_command_w_arg(arg, "--skip=") {
            out.skip = BigInt::from_decimal_str(rest)
                .map_err(|_| anyhow!("bad usage: --skip: expected a non-negative integer"))?;
            idx += 1;
            continue;
        }
        if let Some(rest) = long_command_w_arg(arg, "--limit=") {
            out.limit = BigInt::from_decimal_str(rest)
                .map_err(|_| anyhow!("bad usage: --limit: expected a non-negative integer"))?;
            idx += 1;
            continue;
        }
        if let Some(rest) = long_command_w_arg(arg, "--output-file=") {
            out.output_file = Some(rest.to_owned());
            idx += 1;
            continue;
        }

        if let Some(rest) = arg.strip_prefix("-s") {
            out.skip = parse_bigint_arg(rest, argv, &mut idx, "-s/--skip")?;
            idx += 1;
            continue;
        }
        if let Some(rest) = arg.strip_prefix("-l") {
            out.limit = parse_bigint_arg(rest, argv, &mut idx, "-l/--limit")?;
            idx += 1;
            continue;
        }
        if let Some(rest) = arg.strip_prefix("-o") {
            out.output_file = Some(parse_str_arg(rest, argv, &mut idx, "-o/--output-file")?);
            idx += 1;
            continue;
        }

        return Err(anyhow!("bad usage: unknown option: {}", arg));
    }

    if out.pw_min == 0 {
        return Err(anyhow!("bad usage: --pw-min must be >= 1"));
    }
    if out.pw_max == 0 {
        return Err(anyhow!("bad usage: --pw-max must be >= 1"));
    }
    if out.pw_max as usize > crate::config::MAX_WORD_LEN {
        return Err(anyhow!(
            "bad usage: --pw-max must be <= {}",
            crate::config::MAX_WORD_LEN
        ));
    }
    if out.pw_min > out.pw_max {
        return Err(anyhow!("bad usage: --pw-min must be <= --pw-max"));
    }
    if out.elem_cnt_min > out.elem_cnt_max {
        return Err(anyhow!("bad usage: --elem-cnt-min must be <= --elem-cnt-max"));
    }

    Ok(out)
}

fn parse_u8(s: &str, name: &str) -> anyhow::Result<u8> {
    let (val, rest) =
        read_u32_from_str(s).ok_or_else(|| anyhow!("bad usage: {} expected a numeric argument", name))?;
    if !rest.is_empty() {
        return Err(anyhow!("bad usage: {}: unexpected characters after number", name));
    }
    u8::try_from(val).map_err(|_| anyhow!("bad usage: {}: value too large", name))
}

/// Reads a BigInt value either from `rest` (the text following `-s`/`-l`) or,
/// if `rest` is empty, from the next argv element.
fn parse_bigint_arg(
    rest: &str,
    argv: &[String],
    idx: &mut usize,
    name: &str,
) -> anyhow::Result<BigInt> {
    let text = if rest.is_empty() {
        *idx += 1;
        argv.get(*idx)
            .ok_or_else(|| anyhow!("bad usage: {}: missing argument", name))?
            .as_str()
    } else {
        rest
    };
    BigInt::from_decimal_str(text).map_err(|_| anyhow!("bad usage: {}: expected a non-negative integer", name))
}

fn parse_str_arg(rest: &str, argv: &[String], idx: &mut usize, name: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        *idx += 1;
        let next = argv
            .get(*idx)
            .ok_or_else(|| anyhow!("bad usage: {}: missing argument", name))?;
        Ok(next.clone())
    } else {
        Ok(rest.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let p = parse_args_from(&make_args(&[])).unwrap();
        assert_eq!(p.pw_min, PW_MIN_DEFAULT);
        assert_eq!(p.pw_max, PW_MAX_DEFAULT);
        assert_eq!(p.elem_cnt_min, ELEM_CNT_MIN_DEFAULT);
        assert_eq!(p.elem_cnt_max, ELEM_CNT_MAX_DEFAULT);
        assert!(!p.keyspace_only);
        assert!(p.skip.is_zero());
        assert!(p.limit.is_zero());
    }

    #[test]
    fn pw_min_max_equals() {
        let p = parse_args_from(&make_args(&["--pw-min=2", "--pw-max=2"])).unwrap();
        assert_eq!(p.pw_min, 2);
        assert_eq!(p.pw_max, 2);
    }

    #[test]
    fn elem_cnt_bounds() {
        let p = parse_args_from(&make_args(&["--elem-cnt-min=2", "--elem-cnt-max=2"])).unwrap();
        assert_eq!(p.elem_cnt_min, 2);
        assert_eq!(p.elem_cnt_max, 2);
    }

    #[test]
    fn keyspace_flag() {
        let p = parse_args_from(&make_args(&["--keyspace"])).unwrap();
        assert!(p.keyspace_only);
    }

    #[test]
    fn wl_dist_len_flag() {
        let p = parse_args_from(&make_args(&["--wl-dist-len"])).unwrap();
        assert!(p.wl_dist_len);
    }

    #[test]
    fn skip_and_limit_long_form() {
        let p = parse_args_from(&make_args(&["--skip=1", "--limit=2"])).unwrap();
        assert_eq!(p.skip.to_u64(), Some(1));
        assert_eq!(p.limit.to_u64(), Some(2));
    }

    #[test]
    fn skip_short_inline() {
        let p = parse_args_from(&make_args(&["-s5"])).unwrap();
        assert_eq!(p.skip.to_u64(), Some(5));
    }

    #[test]
    fn skip_short_separate() {
        let p = parse_args_from(&make_args(&["-s", "5"])).unwrap();
        assert_eq!(p.skip.to_u64(), Some(5));
    }

    #[test]
    fn limit_big_value() {
        let p = parse_args_from(&make_args(&["--limit=123456789012345678901234567890"])).unwrap();
        assert_eq!(
            p.limit.to_decimal_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn output_file_inline() {
        let p = parse_args_from(&make_args(&["-oout.txt"])).unwrap();
        assert_eq!(p.output_file.as_deref(), Some("out.txt"));
    }

    #[test]
    fn output_file_separate() {
        let p = parse_args_from(&make_args(&["--output-file=out.txt"])).unwrap();
        assert_eq!(p.output_file.as_deref(), Some("out.txt"));
    }

    #[test]
    fn verbose_repeated() {
        let prev = display_level();
        set_display_level(2);
        let _p = parse_args_from(&make_args(&["-vv"])).unwrap();
        assert_eq!(display_level(), 4);
        set_display_level(prev);
    }

    #[test]
    fn quiet_flag() {
        let prev = display_level();
        set_display_level(2);
        let _p = parse_args_from(&make_args(&["-q"])).unwrap();
        assert_eq!(display_level(), 0);
        set_display_level(prev);
    }

    #[test]
    fn pw_min_greater_than_pw_max_is_error() {
        let e = parse_args_from(&make_args(&["--pw-min=5", "--pw-max=2"])).unwrap_err();
        assert!(e.to_string().contains("bad usage"));
    }

    #[test]
    fn elem_cnt_min_greater_than_max_is_error() {
        let e = parse_args_from(&make_args(&["--elem-cnt-min=5", "--elem-cnt-max=2"])).unwrap_err();
        assert!(e.to_string().contains("bad usage"));
    }

    #[test]
    fn unknown_option_is_error() {
        let e = parse_args_from(&make_args(&["--bogus"])).unwrap_err();
        assert!(e.to_string().contains("bad usage"));
    }

    #[test]
    fn version_flag_exits_nonzero() {
        let p = parse_args_from(&make_args(&["--version"])).unwrap();
        assert!(p.exit_early);
        assert_ne!(p.exit_code, 0);
    }

    #[test]
    fn help_flag_exits_nonzero() {
        let p = parse_args_from(&make_args(&["--help"])).unwrap();
        assert!(p.exit_early);
        assert_ne!(p.exit_code, 0);
    }
}
