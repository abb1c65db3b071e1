use argh::FromArgs;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sparse_trie::{Position, TrieSet};
use std::{
    collections::{BTreeSet, HashSet, LinkedList},
    error::Error,
    fmt::Display,
    fs,
    hint::black_box,
    io::{self, StdoutLock, Write},
    path::PathBuf,
    time::Instant,
};

/// Time bulk insert, find and erase of a word list across std containers and
/// the trie.
#[derive(FromArgs)]
struct BenchmarkArgs {
    /// input to read whitespace separated words from
    #[argh(positional)]
    dict: PathBuf,

    /// largest number of words used in a single run
    #[argh(option, default = "1_000_000")]
    largest: usize,

    /// increment in the number of words between runs
    #[argh(option, default = "20_000")]
    step: usize,

    /// seed for shuffling the words
    #[argh(option, default = "69420")]
    seed: u64,
}

const COLUMNS: [&str; 6] = [
    "iterations",
    "LinkedList",
    "BTreeSet",
    "HashSet",
    "Vec",
    "TrieSet",
];

/// Containers fed with the first `largest` words, cloned by every run.
struct Sources {
    list: LinkedList<String>,
    btree: BTreeSet<String>,
    hash: HashSet<String>,
    vec: Vec<String>,
    trie: TrieSet<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: BenchmarkArgs = argh::from_env();

    let contents = fs::read_to_string(&args.dict)?;
    let words: Vec<String> = contents.split_whitespace().map(String::from).collect();

    let largest = args.largest.min(words.len());
    let step = args.step.max(1);
    let mut rng = StdRng::seed_from_u64(args.seed);

    let sample = &words[..largest];
    let sources = Sources {
        list: sample.iter().cloned().collect(),
        btree: sample.iter().cloned().collect(),
        hash: sample.iter().cloned().collect(),
        vec: sample.to_vec(),
        trie: sample.iter().cloned().collect(),
    };
    let sizes: Vec<usize> = (0..=largest).step_by(step).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    header(&mut out, "INSERTION")?;
    for &i in &sizes {
        let mut shuffled = words[..i].to_vec();
        shuffled.shuffle(&mut rng);

        let mut list = LinkedList::new();
        let mut btree = BTreeSet::new();
        let mut hash = HashSet::new();
        let mut vec = Vec::new();
        let mut trie = TrieSet::new();

        let list_ms = time(|| list.extend(shuffled.iter().cloned()));
        let btree_ms = time(|| btree.extend(shuffled.iter().cloned()));
        let hash_ms = time(|| hash.extend(shuffled.iter().cloned()));
        let vec_ms = time(|| vec.extend(shuffled.iter().cloned()));
        let trie_ms = time(|| trie.extend(shuffled.iter().cloned()));

        let timings = [
            Some(list_ms),
            Some(btree_ms),
            Some(hash_ms),
            Some(vec_ms),
            Some(trie_ms),
        ];
        row(&mut out, i, timings)?;
    }
    writeln!(out)?;

    header(&mut out, "FIND (PRESENT KEY)")?;
    for &i in &sizes {
        let mut probes = sample.to_vec();
        probes.shuffle(&mut rng);
        probes.truncate(i);
        find_row(&mut out, &sources, i, &probes)?;
    }
    writeln!(out)?;

    header(&mut out, "FIND (RANDOM KEY)")?;
    for &i in &sizes {
        // drawn from the whole word list, so some probes are absent
        let mut probes = words.clone();
        probes.shuffle(&mut rng);
        probes.truncate(i);
        find_row(&mut out, &sources, i, &probes)?;
    }
    writeln!(out)?;

    header(&mut out, "DELETION (PRESENT KEY)")?;
    for &i in &sizes {
        let mut btree = sources.btree.clone();
        let mut hash = sources.hash.clone();
        let mut trie = sources.trie.clone();

        let mut keys = sample.to_vec();
        keys.shuffle(&mut rng);
        keys.truncate(i);

        let btree_ms = time(|| {
            for key in &keys {
                black_box(btree.remove(key));
            }
        });
        let hash_ms = time(|| {
            for key in &keys {
                black_box(hash.remove(key));
            }
        });
        let trie_ms = time(|| {
            for key in &keys {
                black_box(trie.erase(key));
            }
        });

        let timings = [None, Some(btree_ms), Some(hash_ms), None, Some(trie_ms)];
        row(&mut out, i, timings)?;
    }
    writeln!(out)?;

    header(&mut out, "DELETION (FRONT)")?;
    for &i in &sizes {
        let mut list = sources.list.clone();
        let mut btree = sources.btree.clone();
        let mut hash = sources.hash.clone();
        let mut vec = sources.vec.clone();
        let mut trie = sources.trie.clone();

        // the hash set has no stable front, so take the first `i` keys in its
        // iteration order up front
        let hash_front: Vec<String> = hash.iter().take(i).cloned().collect();

        let list_ms = time(|| {
            for _ in 0..i {
                black_box(list.pop_front());
            }
        });
        let btree_ms = time(|| {
            for _ in 0..i {
                black_box(btree.pop_first());
            }
        });
        let hash_ms = time(|| {
            for key in &hash_front {
                black_box(hash.remove(key));
            }
        });
        // removing from the front of a vector is quadratic, only the smallest
        // runs finish in reasonable time
        let vec_ms = (i <= step).then(|| {
            time(|| {
                for _ in 0..i {
                    black_box(vec.remove(0));
                }
            })
        });
        let trie_ms = time(|| {
            let mut position = trie.begin().position();
            for _ in 0..i {
                position = trie.erase_at(position);
            }
        });

        let timings = [
            Some(list_ms),
            Some(btree_ms),
            Some(hash_ms),
            vec_ms,
            Some(trie_ms),
        ];
        row(&mut out, i, timings)?;
    }
    writeln!(out)?;

    header(&mut out, "DELETION (REAR)")?;
    for &i in &sizes {
        let mut list = sources.list.clone();
        let mut btree = sources.btree.clone();
        let mut vec = sources.vec.clone();
        let mut trie = sources.trie.clone();

        let list_ms = time(|| {
            for _ in 0..i {
                black_box(list.pop_back());
            }
        });
        let btree_ms = time(|| {
            for _ in 0..i {
                black_box(btree.pop_last());
            }
        });
        let vec_ms = time(|| {
            for _ in 0..i {
                black_box(vec.pop());
            }
        });
        let trie_ms = time(|| {
            let mut position = Position::end();
            for _ in 0..i {
                let mut cursor = trie.cursor_at(&position);
                cursor.move_prev();
                let last = cursor.position();
                position = trie.erase_at(last);
            }
        });

        // no ordered reverse traversal for the hash set
        let timings = [
            Some(list_ms),
            Some(btree_ms),
            None,
            Some(vec_ms),
            Some(trie_ms),
        ];
        row(&mut out, i, timings)?;
    }
    writeln!(out)?;

    Ok(())
}

fn find_row(
    out: &mut StdoutLock<'_>,
    sources: &Sources,
    i: usize,
    probes: &[String],
) -> io::Result<()> {
    let btree_ms = time(|| {
        for key in probes {
            black_box(sources.btree.get(key));
        }
    });
    let hash_ms = time(|| {
        for key in probes {
            black_box(sources.hash.get(key));
        }
    });
    let trie_ms = time(|| {
        for key in probes {
            black_box(sources.trie.find(key));
        }
    });

    let timings = [None, Some(btree_ms), Some(hash_ms), None, Some(trie_ms)];
    row(out, i, timings)
}

/// Write one line of the table. Containers without a meaningful timing for
/// the operation get an empty cell.
fn row(out: &mut StdoutLock<'_>, i: usize, timings: [Option<u128>; 5]) -> io::Result<()> {
    cell(out, i)?;
    for timing in timings {
        match timing {
            Some(millis) => cell(out, millis)?,
            None => cell(out, "")?,
        }
    }
    writeln!(out)
}

/// Return the duration of `f` in milliseconds.
fn time(f: impl FnOnce()) -> u128 {
    let start = Instant::now();
    f();
    start.elapsed().as_millis()
}

fn cell(out: &mut StdoutLock<'_>, value: impl Display) -> io::Result<()> {
    write!(out, "{value:<20}")?;
    out.flush()
}

fn header(out: &mut StdoutLock<'_>, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for column in COLUMNS {
        cell(out, column)?;
    }
    writeln!(out)
}
