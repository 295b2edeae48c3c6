//! Usage, version, and bad-usage text.

use crate::cli::constants::{display_level, PROG_NAME, VERSION_STRING};
use crate::config::{ELEM_CNT_MAX_DEFAULT, ELEM_CNT_MIN_DEFAULT, PW_MAX_DEFAULT, PW_MIN_DEFAULT};

/// Prints the version banner to stdout. Equivalent to `-V`/`--version`.
pub fn print_version() {
    println!("{} v{}", PROG_NAME, VERSION_STRING);
}

/// Prints brief usage to stderr. Equivalent to `-h`/`--help`.
pub fn print_usage() {
    eprintln!("Usage :");
    eprintln!("      {} [arg] < wordlist", PROG_NAME);
    eprintln!();
    eprintln!("input   : a newline-separated word list on standard input");
    eprintln!("Arguments :");
    eprintln!(" -V, --version            : display version number and exit");
    eprintln!(" -h, --help               : display this help and exit");
    eprintln!(" --keyspace               : print total keyspace size and exit");
    eprintln!(
        " --pw-min=N               : minimum candidate length (default: {})",
        PW_MIN_DEFAULT
    );
    eprintln!(
        " --pw-max=N               : maximum candidate length (default: {})",
        PW_MAX_DEFAULT
    );
    eprintln!(
        " --elem-cnt-min=N         : minimum chain length (default: {})",
        ELEM_CNT_MIN_DEFAULT
    );
    eprintln!(
        " --elem-cnt-max=N         : maximum chain length (default: {})",
        ELEM_CNT_MAX_DEFAULT
    );
    eprintln!(" --wl-dist-len            : weight lengths by observed wordlist bucket sizes");
    eprintln!(" -s, --skip=N             : skip the first N candidates");
    eprintln!(" -l, --limit=N            : emit at most N candidates after skip");
    eprintln!(" -o, --output-file=FILE   : append output to FILE instead of stdout");
    eprintln!(" -v                       : raise diagnostic verbosity (repeatable)");
    eprintln!(" -q, --quiet              : suppress diagnostics");
}

/// Prints "bad usage" plus brief usage to stderr, then exits with status 1.
pub fn print_bad_usage() -> ! {
    if display_level() >= 1 {
        eprintln!("Incorrect parameters");
        print_usage();
    }
    std::process::exit(1);
}
