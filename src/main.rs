use bzip2::read::BzDecoder;
use clap::Parser;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

mod corpus;
mod features;
mod output;

use corpus::CorpusItem;
use features::FeatureExtractor;
use output::FeatureWriter;

#[derive(Parser)]
#[command(name = "srl-featurizer")]
#[command(about = "Context-window feature selector for Maxent semantic role labeling")]
struct Args {
    /// Input corpus file, tab-delimited with blank lines between sentences
    /// (.bz2 input is decompressed transparently)
    inputfile: PathBuf,

    /// Feature selection output file
    outfile: PathBuf,

    /// Strip gold labels from the output, for development or test corpora
    #[arg(short, long)]
    strip: bool,
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{bar:40} {pos}/{len} {msg}")
        .unwrap()
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let start_time = Instant::now();

    println!("Parsing input file lines...");
    let file = File::open(&args.inputfile)?;
    let reader: Box<dyn BufRead> = if args.inputfile.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

    let pb = ProgressBar::new(lines.len() as u64).with_style(bar_style());
    let items = corpus::parse_corpus(lines.iter().progress_with(pb).map(String::as_str));

    println!("Selecting features...");
    let extractor = FeatureExtractor::new();
    let out_file = File::create(&args.outfile)?;
    let mut writer = FeatureWriter::new(BufWriter::with_capacity(256 * 1024, out_file), args.strip);

    let mut stats = Stats::default();
    let pb = ProgressBar::new(items.len() as u64).with_style(bar_style());
    for item in items.iter().progress_with(pb) {
        match item {
            CorpusItem::Boundary => {
                writer.write_boundary()?;
                stats.boundaries += 1;
            }
            CorpusItem::Sentence(tokens) => {
                let records = extractor.extract(tokens);
                stats.sentences += 1;
                stats.tokens += records.len();
                writer.write_sentence(&records)?;
            }
        }
    }
    writer.finish()?;

    let elapsed = start_time.elapsed();
    println!();
    println!("Lines read: {}", lines.len());
    println!("Sentences: {}", stats.sentences);
    println!("Tokens featurized: {}", stats.tokens);
    println!("Boundary markers: {}", stats.boundaries);
    println!("Time: {:.1}s", elapsed.as_secs_f64());
    println!("{} -> {}", args.inputfile.display(), args.outfile.display());

    Ok(())
}

#[derive(Default)]
struct Stats {
    sentences: usize,
    tokens: usize,
    boundaries: usize,
}
