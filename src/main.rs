//! Binary entry point for the `prince` command-line tool.
//!
//! 1. [`cli::args::parse_args`] processes all flags into a [`ParsedArgs`].
//! 2. The word list is read from stdin into [`buckets::Buckets`].
//! 3. An [`emit::Emitter`] is built from the parsed arguments; `--keyspace`
//!    prints the total keyspace and exits, otherwise the driver runs to
//!    completion against the chosen [`sink::Sink`].

use std::io;

use prince::cli::args::{parse_args, ParsedArgs};
use prince::cli::constants::PROG_NAME;
use prince::cli::help::print_bad_usage;
use prince::emit::Emitter;
use prince::sink::Sink;
use prince::wordlen_dist::WordlenDist;
use prince::{buckets, displaylevel, loader};

fn run(args: ParsedArgs) -> i32 {
    let words = match loader::load_words(io::stdin().lock()) {
        Ok(w) => w,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", PROG_NAME, e);
            return 1;
        }
    };
    displaylevel!(3, "{}: read {} words\n", PROG_NAME, words.total_words());

    if args.keyspace_only {
        return run_keyspace(&args, &words);
    }

    let dist = if args.wl_dist_len {
        WordlenDist::Observed(&words)
    } else {
        WordlenDist::Builtin
    };

    let mut emitter = match Emitter::new(
        args.pw_min,
        args.pw_max,
        args.elem_cnt_min,
        args.elem_cnt_max,
        &words,
        dist,
        args.skip,
        args.limit,
    ) {
        Ok(e) => e,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", PROG_NAME, e);
            return 1;
        }
    };
    displaylevel!(3, "{}: keyspace = {}\n", PROG_NAME, emitter.keyspace());

    let mut sink = match &args.output_file {
        Some(path) => match Sink::append_file(path) {
            Ok(s) => s,
            Err(e) => {
                displaylevel!(1, "{}: {}: {}\n", PROG_NAME, path, e);
                return 1;
            }
        },
        None => Sink::stdout(),
    };

    match emitter.run(&mut sink) {
        Ok(()) => 0,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", PROG_NAME, e);
            1
        }
    }
}

fn run_keyspace(args: &ParsedArgs, words: &buckets::Buckets) -> i32 {
    let dist = if args.wl_dist_len {
        WordlenDist::Observed(words)
    } else {
        WordlenDist::Builtin
    };
    match Emitter::new(
        args.pw_min,
        args.pw_max,
        args.elem_cnt_min,
        args.elem_cnt_max,
        words,
        dist,
        prince::bigint::BigInt::zero(),
        prince::bigint::BigInt::zero(),
    ) {
        Ok(emitter) => {
            println!("{}", emitter.keyspace());
            0
        }
        Err(e) => {
            displaylevel!(1, "{}: {}\n", PROG_NAME, e);
            1
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", PROG_NAME, e);
            print_bad_usage();
        }
    };

    if args.exit_early {
        std::process::exit(args.exit_code);
    }

    let exit_code = run(args);
    std::process::exit(exit_code);
}
