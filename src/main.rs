use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use record_bst::load::{self, BidColumns};
use record_bst::planner::CoursePlanner;
use record_bst::{sort, Bid, OrderedTable, Result};

#[derive(Parser)]
#[command(name = "record-bst")]
#[command(about = "Load records into a binary search tree, or sort them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load bids into a binary search tree and print them
    Bids {
        csv: PathBuf,
        /// Traversal used to print the tree
        #[arg(long, value_enum, default_value = "in")]
        order: Order,
        /// Show the bid with this id
        #[arg(long)]
        find: Option<String>,
        /// Remove the bid with this id before printing
        #[arg(long)]
        remove: Option<String>,
        #[command(flatten)]
        columns: Columns,
    },
    /// Sort bids by title and print them
    Sort {
        csv: PathBuf,
        #[arg(long, value_enum, default_value = "quick")]
        algorithm: Algorithm,
        #[command(flatten)]
        columns: Columns,
    },
    /// Load a course catalog and print it, or a single course
    Courses {
        file: PathBuf,
        /// Show only this course (case-insensitive)
        #[arg(long)]
        course: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    In,
    Pre,
    Post,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Selection,
    Quick,
}

/// Where each bid field sits in a CSV row.
#[derive(Args)]
struct Columns {
    #[arg(long, default_value_t = BidColumns::default().title)]
    title_column: usize,
    #[arg(long, default_value_t = BidColumns::default().id)]
    id_column: usize,
    #[arg(long, default_value_t = BidColumns::default().amount)]
    amount_column: usize,
    #[arg(long, default_value_t = BidColumns::default().fund)]
    fund_column: usize,
}

impl From<&Columns> for BidColumns {
    fn from(columns: &Columns) -> Self {
        Self {
            title: columns.title_column,
            id: columns.id_column,
            amount: columns.amount_column,
            fund: columns.fund_column,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bids {
            csv,
            order,
            find,
            remove,
            columns,
        } => run_bids(&csv, (&columns).into(), order, find, remove),
        Commands::Sort {
            csv,
            algorithm,
            columns,
        } => run_sort(&csv, (&columns).into(), algorithm),
        Commands::Courses { file, course } => run_courses(&file, course),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_bids(
    csv: &Path,
    columns: BidColumns,
    order: Order,
    find: Option<String>,
    remove: Option<String>,
) -> Result<()> {
    let mut table: OrderedTable<Bid> = OrderedTable::new();
    load::load_bids(csv, &columns, &mut table)?;

    if let Some(id) = remove {
        match table.remove(&id) {
            Some(bid) => println!("Removed {}", bid),
            None => println!("{} was not found", id),
        }
    }
    if let Some(id) = find {
        match table.find(&id) {
            Some(bid) => println!("{}", bid),
            None => println!("{} was not found", id),
        }
        return Ok(());
    }

    let bids: Box<dyn Iterator<Item = &Bid> + '_> = match order {
        Order::In => Box::new(table.in_order()),
        Order::Pre => Box::new(table.pre_order()),
        Order::Post => Box::new(table.post_order()),
    };
    for bid in bids {
        println!("{}", bid);
    }
    println!("\nBid count: {}", table.len());
    Ok(())
}

fn run_sort(csv: &Path, columns: BidColumns, algorithm: Algorithm) -> Result<()> {
    let mut bids: Vec<Bid> = Vec::new();
    load::load_bids(csv, &columns, &mut bids)?;

    match algorithm {
        Algorithm::Selection => sort::selection_sort(&mut bids),
        Algorithm::Quick => sort::quick_sort(&mut bids),
    }

    for bid in &bids {
        println!("{}", bid);
    }
    println!("\n{} bids sorted", bids.len());
    Ok(())
}

fn run_courses(file: &Path, course: Option<String>) -> Result<()> {
    let mut planner = CoursePlanner::new();
    planner.load(file)?;

    match course {
        Some(id) => match planner.find(&id) {
            Some(course) => println!("{}", course.detailed()),
            None => println!("{} not found", id),
        },
        None => {
            for course in planner.courses() {
                println!("{}", course.detailed());
            }
            println!("\n{} courses stored", planner.len());
        }
    }
    Ok(())
}
