//! Construction of the by-tag index over the course list.
//!
//! The index is an ordered mapping, so the serialized output is deterministic: tags appear in the
//! order of their first occurrence and every bucket keeps the input row order of its courses.

use crate::{Course, CourseSummary, TagIndex};

/// Build the tag index for a list of courses in a single pass.
///
/// For each tag of each course, a `CourseSummary` is appended to that tag's bucket, creating the
/// bucket on first use. A course appears once per tag it carries, so it may appear under several
/// tags; courses without tags do not appear at all.
pub fn build(courses: &[Course]) -> TagIndex {
    let mut index = TagIndex::new();
    for course in courses.iter() {
        for tag in course.tags.iter() {
            index
                .entry(tag.clone())
                .or_insert_with(Vec::new)
                .push(CourseSummary {
                    number: course.number.clone(),
                    name: course.name.clone(),
                    tags: course.tags.clone(),
                });
        }
    }
    index
}
