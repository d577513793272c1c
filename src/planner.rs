//! A course catalog on top of an [`OrderedTable`] of [`Course`]s.

use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::load;
use crate::ordered_table::{InOrder, OrderedTable};
use crate::record::Course;

/// Looks up courses and their prerequisites. Course ids are matched without regard to ASCII
/// case, as long as the catalog itself stores them upper-cased.
///
/// # Examples
///
/// ```
/// use record_bst::planner::CoursePlanner;
///
/// let mut planner = CoursePlanner::new();
/// planner
///     .read("CSCI101, Programming\nCSCI200, Data Structures, CSCI101\n".as_bytes())
///     .unwrap();
///
/// assert_eq!(planner.find("csci200").map(|c| c.title.as_str()), Some("Data Structures"));
/// assert_eq!(planner.prereq_count("CSCI200"), 1);
/// assert_eq!(planner.prereq_count("ART100"), 0);
/// ```
#[derive(Debug, Default)]
pub struct CoursePlanner {
    courses: OrderedTable<Course>,
}

impl CoursePlanner {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the course file at `path`. See [`load::read_courses`] for the format.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        load::load_courses(path, &mut self.courses)
    }

    /// Reads courses from `reader`. See [`load::read_courses`].
    pub fn read<Rd: BufRead>(&mut self, reader: Rd) -> Result<usize> {
        load::read_courses(reader, &mut self.courses)
    }

    /// Adds a course unless one with the same id is already listed. Returns whether it was added.
    pub fn add(&mut self, course: Course) -> bool {
        if self.courses.contains(&course.id) {
            debug!("{} already exists", course.id);
            return false;
        }
        self.courses.insert(course);
        true
    }

    /// Finds a course by id, upper-casing the query first.
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.find(&id.to_ascii_uppercase())
    }

    /// The number of prerequisites of a course, or 0 if the course isn't listed.
    pub fn prereq_count(&self, id: &str) -> usize {
        self.find(id).map_or(0, |course| course.prereqs.len())
    }

    /// All courses in id order.
    pub fn courses(&self) -> InOrder<'_, Course> {
        self.courses.in_order()
    }

    /// The number of courses listed.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` if no courses are listed.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The underlying table.
    pub fn table(&self) -> &OrderedTable<Course> {
        &self.courses
    }
}
