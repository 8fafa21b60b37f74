#![allow(clippy::uninlined_format_args)]

use snippet_transform::{Error, TransformFlags, Transformer};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "transform-tool")]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// The format applied to each match.
    format: String,

    /// The flags of the regular expression; 'g' transforms every match.
    #[structopt(long, short, parse(from_str = TransformFlags::from))]
    flags: Option<TransformFlags>,

    /// Dump the compiled format to stdout.
    #[structopt(long)]
    dump_program: bool,

    /// The input values to transform.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Transform the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark transforming the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

fn dump_program(t: &Transformer) {
    let program = t.program();
    println!(
        "Program: {} node(s), has_fallback: {}",
        program.len(),
        program.has_fallback()
    );
    for (i, node) in program.nodes().iter().enumerate() {
        match node.group() {
            Some(idx) => println!("  {:>3}: {:?} (group {})", i, node, idx),
            None => println!("  {:>3}: {:?}", i, node),
        }
    }
    println!("Canonical: {}", program);
}

fn bench_on_path(t: &Transformer, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let input = contents.as_str();
    // Warmup
    t.transform(input);
    let start = Instant::now();
    for _ in 0..25 {
        t.transform(input);
    }
    let duration = start.elapsed();
    println!("{} ms", duration.as_millis());
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Opt::from_args();

    let flags = args.flags.unwrap_or_default();
    let t = match Transformer::new(&args.pattern, &args.format, flags) {
        Ok(t) => t,
        Err(err) => {
            log::error!("failed to build transformer: {}", err);
            return Err(err);
        }
    };
    if args.dump_program {
        dump_program(&t);
    }

    if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => println!("{}", t.transform(&contents)),
            Err(err) => println!("{}: {}", err, path.display()),
        };
    } else if let Some(ref path) = args.bench {
        bench_on_path(&t, path);
    } else {
        for input in args.inputs {
            println!("{}", t.transform(&input));
        }
    }
    Ok(())
}
