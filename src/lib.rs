pub mod index;
pub mod io;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Header name of the course number column
pub const NUMBER_COLUMN: &str = "Course Number";
/// Header name of the course name column
pub const NAME_COLUMN: &str = "Course Name";
/// Header name of the free-text notes column
pub const NOTES_COLUMN: &str = "Notes";

/// All tag columns of the course list, in the order their tags shall appear in a course's tag
/// list. A non-empty cell in one of these columns marks the course as belonging to that category.
pub const TAG_COLUMNS: [&str; 9] = [
    "Area", "Econ", "Tech", "Intel", "IS", "Mil Ops", "TSV", "USNP", "Other",
];

/// Representation of a single course from the course list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course number, as given in the course list (e.g. "NS3000")
    pub number: String,
    /// Course title
    pub name: String,
    /// Derived tags of the course, in the order of `TAG_COLUMNS`
    pub tags: Vec<String>,
    /// Free-text notes. None (serialized as JSON null) if the notes cell is empty
    pub notes: Option<String>,
}

/// Reduced course entry, as stored in the tag index. `tags` repeats the course's full tag list,
/// not only the indexed tag, so consumers can filter on tag combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub number: String,
    pub name: String,
    pub tags: Vec<String>,
}

/// Mapping from derived tag to the courses carrying it. Key order is tag insertion order (i.e.
/// order of first occurrence), bucket order is input row order.
pub type TagIndex = IndexMap<String, Vec<CourseSummary>>;

/// The complete output document: the flat course list plus the by-tag index over it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    #[serde(rename = "byTag")]
    pub by_tag: TagIndex,
}

/// Derive the tag name for a tag column: the column name uppercased, with all space characters
/// removed (e.g. "Mil Ops" → "MILOPS").
pub fn derive_tag(column: &str) -> String {
    column.to_uppercase().replace(' ', "")
}

/// Helper function for tests to check the consistency of a catalog: every tag of every course
/// must be a key of the tag index, every index entry must carry its own tag, and every bucket
/// must list exactly the courses carrying that tag, in course-list order.
#[cfg(test)]
pub fn assert_catalog_consistency(catalog: &Catalog) {
    for course in catalog.courses.iter() {
        for tag in course.tags.iter() {
            assert!(
                catalog.by_tag.contains_key(tag),
                "Tag '{}' of course '{}' is missing from the index",
                tag,
                course.number
            );
        }
    }
    for (tag, bucket) in catalog.by_tag.iter() {
        let expected: Vec<&Course> = catalog
            .courses
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == tag))
            .collect();
        assert_eq!(
            bucket.len(),
            expected.len(),
            "Bucket of tag '{}' has a wrong number of entries",
            tag
        );
        for (entry, course) in bucket.iter().zip(expected) {
            assert_eq!(entry.number, course.number);
            assert_eq!(entry.name, course.name);
            assert_eq!(entry.tags, course.tags);
            assert!(
                entry.tags.iter().any(|t| t == tag),
                "Entry '{}' in bucket '{}' does not carry that tag itself",
                entry.number,
                tag
            );
        }
    }
}
