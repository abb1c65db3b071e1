use argh::FromArgs;
use sparse_trie::{
    visitor::{DotPrinter, TreeStatsCollector},
    TrieSet,
};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufRead, BufReader, BufWriter},
    path::PathBuf,
};

#[derive(FromArgs)]
/// Render the trie built from a word list as a graphviz diagram on stdout.
struct TreeVizArgs {
    /// input to read whitespace separated words from
    #[argh(positional)]
    input_file: PathBuf,

    /// only insert the first N words of the file
    #[argh(option)]
    limit: Option<usize>,

    /// print structure statistics instead of the diagram
    #[argh(switch)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TreeVizArgs = argh::from_env();

    let input_file = OpenOptions::new().read(true).open(args.input_file)?;

    let mut set = TrieSet::<String>::new();
    let mut remaining = args.limit.unwrap_or(usize::MAX);
    'lines: for line in BufReader::new(input_file).lines() {
        for word in line?.split_whitespace() {
            if remaining == 0 {
                break 'lines;
            }
            set.insert(String::from(word));
            remaining -= 1;
        }
    }

    if set.is_empty() {
        return Err(Box::new(EmptyTreeError));
    };

    if args.stats {
        let stats = TreeStatsCollector::collect(&set);
        println!("{stats:#?}");
        println!(
            "Overhead bytes per key symbol: {:.3}",
            stats.overhead_per_key_symbol()
        );
    } else {
        let stdout = io::stdout();
        DotPrinter::print_tree(BufWriter::new(stdout.lock()), &set)?;
    }

    Ok(())
}

#[derive(Debug)]
struct EmptyTreeError;

impl Display for EmptyTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no words to insert into the tree!")
    }
}

impl Error for EmptyTreeError {}
