//! The records stored in an [`OrderedTable`][crate::ordered_table::OrderedTable] and reordered by
//! the [`sort`][crate::sort] routines.
//!
//! Both structures only ever look at two fields: a unique `id` (the tree key) and a `title` (the
//! sort key). Anything else a record carries is payload.

use std::fmt;

/// A flat value with a unique identifier and a sortable title.
pub trait Record {
    /// The unique identifier. Compared lexicographically (byte order).
    fn id(&self) -> &str;

    /// The non-unique title used as the primary sort key.
    fn title(&self) -> &str;
}

/// A single bid from an auction sales export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    /// Unique bid identifier.
    pub id: String,
    /// Title of the item bid on.
    pub title: String,
    /// The fund the bid belongs to.
    pub fund: String,
    /// Winning bid amount.
    pub amount: f64,
}

impl Bid {
    /// Creates a bid from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}

impl Record for Bid {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id, self.title, self.amount, self.fund
        )
    }
}

/// A course in a catalog along with the ids of the courses it requires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Course {
    /// Unique course identifier, e.g. `CSCI300`.
    pub id: String,
    /// Human readable course name.
    pub title: String,
    /// Ids of prerequisite courses, in the order they were listed. These refer to other courses by
    /// id only.
    pub prereqs: Vec<String>,
}

impl Course {
    /// Creates a course without prerequisites.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prereqs: Vec::new(),
        }
    }

    /// Appends a prerequisite id.
    pub fn add_prereq(&mut self, id: impl Into<String>) {
        self.prereqs.push(id.into());
    }

    /// Returns a helper that displays the course along with its prerequisites.
    ///
    /// ```
    /// use record_bst::record::Course;
    ///
    /// let mut course = Course::new("CSCI200", "Data Structures");
    /// course.add_prereq("CSCI101");
    ///
    /// assert_eq!(course.to_string(), "CSCI200: Data Structures");
    /// assert_eq!(
    ///     course.detailed().to_string(),
    ///     "CSCI200: Data Structures\n\tPrerequisites: CSCI101"
    /// );
    /// ```
    pub fn detailed(&self) -> CourseDetails<'_> {
        CourseDetails(self)
    }
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.title)
    }
}

/// Displays a [`Course`] with a second line listing its prerequisites. See [`Course::detailed`].
pub struct CourseDetails<'a>(&'a Course);

impl fmt::Display for CourseDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0)?;
        if self.0.prereqs.is_empty() {
            write!(f, "\tPrerequisites: NONE")
        } else {
            write!(f, "\tPrerequisites: {}", self.0.prereqs.join(", "))
        }
    }
}

/// Parses a currency amount the way the sales exports write them.
///
/// Every `$` is stripped, leading whitespace is skipped and the longest leading decimal number,
/// with an optional exponent, is read. Anything after it (thousands separators included) is ignored, and text without a
/// leading number parses as `0.0`.
///
/// ```
/// use record_bst::record::parse_amount;
///
/// assert_eq!(parse_amount("$41.50"), 41.5);
/// assert_eq!(parse_amount("$1,200"), 1.0);
/// assert_eq!(parse_amount("$1e3"), 1000.0);
/// assert_eq!(parse_amount("n/a"), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let stripped: String = text.chars().filter(|&c| c != '$').collect();
    let stripped = stripped.trim_start();

    let bytes = stripped.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    // An exponent only counts when the mantissa has a digit and the exponent has one too.
    if seen_digit && matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp_end + digits;
        }
    }

    stripped[..end].parse().unwrap_or(0.0)
}
