pub mod csv;
pub mod json;

use super::Catalog;

/// Format the one-line completion summary to print to stdout after a successful run (e.g.
/// `Created courses_indexed.json with 42 courses and 9 tags.`).
pub fn format_summary(output_path: &str, catalog: &Catalog) -> String {
    format!(
        "Created {} with {} courses and {} tags.",
        output_path,
        catalog.courses.len(),
        catalog.by_tag.len()
    )
}

#[cfg(test)]
mod test {
    use crate::{Catalog, TagIndex};

    #[test]
    fn summary_counts_courses_and_tags() {
        let catalog = Catalog {
            courses: vec![],
            by_tag: TagIndex::new(),
        };
        assert_eq!(
            super::format_summary("courses_indexed.json", &catalog),
            "Created courses_indexed.json with 0 courses and 0 tags."
        );
    }
}
