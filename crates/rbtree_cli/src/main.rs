use std::error::Error;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use rbtree::{Order, RedBlackTree};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Keys inserted when none are given on the command line.
const FIXTURE: [i64; 25] = [
    50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43, 56, 68, 81, 93, 3, 9, 15, 21, 28, 34, 40, 46, 53,
    59,
];

#[derive(Debug, Parser)]
#[command(name = "rbtree", version)]
#[command(about = "Insert keys into a red-black tree and print its traversals")]
struct Opts {
    /// Keys to insert, in order. Defaults to a built-in 25-key fixture.
    #[arg(allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Traversal order(s) to print.
    #[arg(short, long, value_enum, default_value_t = OrderArg::All)]
    order: OrderArg,

    /// Raise log verbosity (-v info, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    In,
    Pre,
    Post,
    All,
}

impl OrderArg {
    fn orders(self) -> &'static [Order] {
        match self {
            OrderArg::In => &[Order::InOrder],
            OrderArg::Pre => &[Order::PreOrder],
            OrderArg::Post => &[Order::PostOrder],
            OrderArg::All => &Order::ALL,
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Trace,
    }
}

fn report<W: Write>(tree: &RedBlackTree<i64>, orders: &[Order], out: &mut W) -> io::Result<()> {
    for &order in orders {
        write!(out, "{:<10} ", order.name())?;
        tree.write_traversal(order, out)?;
        writeln!(out)?;
    }
    writeln!(out, "count: {}", tree.count_nodes())?;
    writeln!(out, "height: {}", tree.height())?;
    writeln!(out, "black height: {}", tree.black_height())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    TermLogger::init(
        log_level(opts.verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let keys = if opts.keys.is_empty() {
        FIXTURE.to_vec()
    } else {
        opts.keys
    };

    let mut tree = RedBlackTree::new();
    for &key in &keys {
        if !tree.insert(key) {
            info!("duplicate key {key} ignored");
        }
    }
    info!("inserted {} keys, {} distinct", keys.len(), tree.len());

    let mut out = io::stdout().lock();
    report(&tree, opts.order.orders(), &mut out)?;
    match tree.validate() {
        Ok(_) => writeln!(out, "red-black invariants hold")?,
        Err(e) => {
            error!("{e}");
            return Err(e.into());
        }
    }
    Ok(())
}
