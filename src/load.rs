//! Readers that turn delimited text into [`Bid`]s and [`Course`]s.
//!
//! A row with too few fields stops the whole load with [`Error::MalformedRow`]. Records read
//! before that row have already been handed to the caller's collection and stay there.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::ordered_table::OrderedTable;
use crate::record::{parse_amount, Bid, Course};

/// Positions of the bid fields within a CSV row. The defaults match the eBid monthly sales
/// export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BidColumns {
    /// Column holding the item title.
    pub title: usize,
    /// Column holding the bid id.
    pub id: usize,
    /// Column holding the winning amount, e.g. `$41.50`.
    pub amount: usize,
    /// Column holding the fund name.
    pub fund: usize,
}

impl Default for BidColumns {
    fn default() -> Self {
        Self {
            title: 0,
            id: 1,
            amount: 4,
            fund: 8,
        }
    }
}

impl BidColumns {
    /// How many fields a row needs to fill every column.
    pub fn required(&self) -> usize {
        self.title.max(self.id).max(self.amount).max(self.fund) + 1
    }
}

/// Opens the CSV file at `path` and loads its bids into `into`. See [`read_bids`].
pub fn load_bids<P, C>(path: P, columns: &BidColumns, into: &mut C) -> Result<usize>
where
    P: AsRef<Path>,
    C: Extend<Bid>,
{
    let path = path.as_ref();
    info!("Loading CSV file {}", path.display());

    let loaded = read_bids(File::open(path)?, columns, into)?;
    info!("{} bids loaded", loaded);
    Ok(loaded)
}

/// Reads bids from CSV with a header row, adding each one to `into` as soon as it is parsed.
/// Returns how many bids were added.
///
/// Every row becomes a bid, even when its id was already seen.
///
/// ```
/// use record_bst::load::{read_bids, BidColumns};
/// use record_bst::ordered_table::OrderedTable;
///
/// let csv = "Title,Id,Fund,Amount\nChair,98109,General Fund,$12.50\n";
/// let columns = BidColumns { title: 0, id: 1, fund: 2, amount: 3 };
///
/// let mut table = OrderedTable::new();
/// assert_eq!(read_bids(csv.as_bytes(), &columns, &mut table).unwrap(), 1);
/// assert_eq!(table.find("98109").map(|bid| bid.amount), Some(12.5));
/// ```
pub fn read_bids<Rd, C>(reader: Rd, columns: &BidColumns, into: &mut C) -> Result<usize>
where
    Rd: Read,
    C: Extend<Bid>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = reader.headers()?.iter().collect::<Vec<_>>().join(" | ");
    debug!("header: {}", header);

    let required = columns.required();
    let mut loaded = 0;
    for row in reader.records() {
        let row = row?;
        if row.len() < required {
            let line = row.position().map_or(0, |p| p.line());
            warn!("line {}: incomplete bid record, stopping", line);
            return Err(Error::MalformedRow {
                line,
                expected: required,
                found: row.len(),
            });
        }

        let bid = Bid::new(
            &row[columns.id],
            &row[columns.title],
            &row[columns.fund],
            parse_amount(&row[columns.amount]),
        );
        debug!("read bid {}", bid);
        into.extend(Some(bid));
        loaded += 1;
    }

    Ok(loaded)
}

/// Opens the course file at `path` and loads it into `table`. See [`read_courses`].
pub fn load_courses<P: AsRef<Path>>(path: P, table: &mut OrderedTable<Course>) -> Result<usize> {
    let path = path.as_ref();
    info!("Loading course file {}", path.display());

    let loaded = read_courses(BufReader::new(File::open(path)?), table)?;
    info!("{} courses loaded", loaded);
    Ok(loaded)
}

/// Reads lines of `id, title[, prereq...]` and inserts a [`Course`] per line into `table`.
/// Returns how many courses were inserted.
///
/// The input is scanned twice. The first pass collects every course id, and the second builds
/// the courses, keeping only the prerequisites whose id was seen in the first pass. Unknown
/// prerequisites are dropped silently. A course whose id is already in `table` is skipped.
///
/// ```
/// use record_bst::load::read_courses;
/// use record_bst::ordered_table::OrderedTable;
///
/// let text = "CSCI200, Data Structures, CSCI101, ART999\nCSCI101, Introduction to Programming\n";
///
/// let mut table = OrderedTable::new();
/// assert_eq!(read_courses(text.as_bytes(), &mut table).unwrap(), 2);
/// assert_eq!(table.find("CSCI200").unwrap().prereqs, ["CSCI101"]);
/// ```
pub fn read_courses<Rd: BufRead>(reader: Rd, table: &mut OrderedTable<Course>) -> Result<usize> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;

    let known: HashSet<&str> = lines
        .iter()
        .filter_map(|line| fields(line).first().copied())
        .filter(|id| !id.is_empty())
        .collect();

    let mut loaded = 0;
    for (index, line) in lines.iter().enumerate() {
        let tokens = fields(line);
        if tokens.len() < 2 {
            let line = index as u64 + 1;
            warn!("line {}: incomplete course record, stopping", line);
            return Err(Error::MalformedRow {
                line,
                expected: 2,
                found: tokens.len(),
            });
        }

        let mut course = Course::new(tokens[0], tokens[1]);
        for prereq in &tokens[2..] {
            if known.contains(prereq) {
                course.add_prereq(*prereq);
            }
        }

        if table.contains(&course.id) {
            info!("{} already exists", course.id);
            continue;
        }
        debug!("{} {} has been read", course.id, course.title);
        table.insert(course);
        loaded += 1;
    }

    Ok(loaded)
}

/// Splits a line on commas and trims each field. A blank line is a single empty field, and a
/// trailing comma doesn't add an empty one.
fn fields(line: &str) -> Vec<&str> {
    const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

    let mut fields: Vec<&str> = line
        .split(',')
        .map(|field| field.trim_matches(WHITESPACE))
        .collect();
    if fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}
