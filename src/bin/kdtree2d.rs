//! kdtree2d command line
//!
//! Loads a point file (a count followed by `x y` pairs) and runs one query.
//! Set `RUST_LOG=debug` to see load statistics.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kdtree2d::{input, KdError, KdTree, Point2D, PointIndex, PointSet, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kdtree2d", version, about = "Query a set of 2D points with a k-d tree")]
struct Cli {
    /// Point file: a count followed by that many `x y` pairs
    #[arg(short, long, value_name = "FILE")]
    points: PathBuf,

    /// Answer with the linear-scan point set instead of the tree
    #[arg(long)]
    brute_force: bool,

    /// Tree domain (default: the unit square)
    #[arg(
        long,
        num_args = 4,
        value_names = ["XMIN", "YMIN", "XMAX", "YMAX"],
        allow_negative_numbers = true
    )]
    domain: Option<Vec<f64>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of distinct points and the tree height
    Stats,
    /// Report whether a point is stored
    #[command(allow_negative_numbers = true)]
    Contains { x: f64, y: f64 },
    /// List stored points inside a rectangle
    #[command(allow_negative_numbers = true)]
    Range { xmin: f64, ymin: f64, xmax: f64, ymax: f64 },
    /// Print the stored point closest to (x, y)
    #[command(allow_negative_numbers = true)]
    Nearest { x: f64, y: f64 },
    /// Print every node's point, split axis and split segment in pre-order
    Partitions,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let points = input::read_points_from_path(&cli.points)?;
    info!(path = %cli.points.display(), count = points.len(), "read point file");

    if cli.brute_force {
        let mut set = PointSet::with_capacity(points.len());
        let _added = input::load_into(&mut set, &points)?;
        return match cli.command {
            Command::Stats => {
                println!("points: {}", set.len());
                Ok(())
            }
            Command::Partitions => Err("partitions needs the k-d tree; drop --brute-force".into()),
            query => Ok(run_query(&set, &query)?),
        };
    }

    let domain = match cli.domain.as_deref() {
        Some(&[xmin, ymin, xmax, ymax]) => Rect::new(xmin, ymin, xmax, ymax)?,
        Some(other) => return Err(format!("--domain takes 4 values, got {}", other.len()).into()),
        None => Rect::UNIT,
    };
    let mut tree = KdTree::with_domain(domain);
    let _added = input::load_into(&mut tree, &points)?;

    match cli.command {
        Command::Stats => {
            println!("points: {}", tree.len());
            println!("height: {}", tree.height());
            println!("domain: {}", tree.domain());
        }
        Command::Partitions => {
            for part in tree.partitions() {
                let (from, to) = part.segment();
                println!("{} {:?} {} -> {}", part.point, part.axis, from, to);
            }
        }
        query => run_query(&tree, &query)?,
    }
    Ok(())
}

fn run_query<I: PointIndex>(index: &I, command: &Command) -> Result<(), KdError> {
    match *command {
        Command::Contains { x, y } => println!("{}", index.contains(Point2D::new(x, y))),
        Command::Range { xmin, ymin, xmax, ymax } => {
            for point in index.range(&Rect::new(xmin, ymin, xmax, ymax)?) {
                println!("{point}");
            }
        }
        Command::Nearest { x, y } => println!("{}", index.nearest(Point2D::new(x, y))?),
        Command::Stats | Command::Partitions => {}
    }
    Ok(())
}
