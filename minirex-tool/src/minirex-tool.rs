#![allow(clippy::uninlined_format_args)]

use minirex::{Error, Regex};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "minirex-tool")]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// Require the pattern to match each whole input, rather than searching.
    #[structopt(long)]
    full: bool,

    /// Dump the compiled node graph to stdout.
    #[structopt(long)]
    dump_nodes: bool,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark the matches of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

fn format_match(r: &minirex::Match, input: &str) -> String {
    let mut result = String::new();

    // Show the full matched range
    result.push_str(&format!(
        "\"{}\" ({}..{})",
        &input[r.range()],
        r.range().start,
        r.range().end
    ));

    // Show capture groups if any exist
    if !r.captures.is_empty() {
        result.push_str(", captures: [");
        for (i, cg) in r.captures.iter().enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            if let Some(cg_range) = cg {
                result.push_str(&format!(
                    "\"{}\" ({}..{})",
                    &input[cg_range.clone()],
                    cg_range.start,
                    cg_range.end
                ));
            } else {
                result.push_str("None");
            }
        }
        result.push(']');
    }

    result
}

fn exec_re_on_string(re: &Regex, input: &str, full: bool) {
    if full {
        match re.full_match(input) {
            Some(res) => println!("Full match: {}", format_match(&res, input)),
            None => println!("No match"),
        }
        return;
    }
    let mut matches = re.find_iter(input);
    if let Some(res) = matches.next() {
        let count = 1 + matches.count();
        println!("Match: {}, total: {}", format_match(&res, input), count);
    } else {
        println!("No match");
    }
}

fn bench_re_on_path(re: &Regex, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let input = contents.as_str();
    // Warmup
    re.find_iter(input).count();
    let start = Instant::now();
    for _ in 0..25 {
        re.find_iter(input).count();
    }
    let duration = start.elapsed();
    println!("{} ms", duration.as_millis());
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Opt::from_args();

    let re = Regex::new(&args.pattern)?;
    log::info!("{} capture groups", re.group_count());
    if args.dump_nodes {
        println!("Nodes:\n{}", re.dump());
    }

    if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => exec_re_on_string(&re, contents.as_str(), args.full),
            Err(err) => println!("{}: {}", err, path.display()),
        };
    } else if let Some(ref path) = args.bench {
        bench_re_on_path(&re, path);
    } else {
        for input in args.inputs {
            exec_re_on_string(&re, &input, args.full);
        }
    }
    Ok(())
}
