//! IO functionality for writing the indexed catalog as pretty-printed JSON.

use crate::Catalog;

/// Write the catalog as indented JSON (two-space indent, top-level shape
/// `{"courses": [...], "byTag": {...}}`) to a Writer (e.g. an output file).
///
/// The serialization is deterministic: the course list keeps input row order and the tag index is
/// written in insertion order, so identical input data produces byte-identical output.
pub fn write<W: std::io::Write>(writer: W, catalog: &Catalog) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, catalog).map_err(|e| format!("{}", e))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::{index, Catalog, Course};

    fn sample_catalog() -> Catalog {
        let courses = vec![
            Course {
                number: "101".to_owned(),
                name: "Intro".to_owned(),
                tags: vec!["ECON".to_owned()],
                notes: None,
            },
            Course {
                number: "102".to_owned(),
                name: "Advanced".to_owned(),
                tags: vec!["ECON".to_owned(), "TECH".to_owned()],
                notes: Some("see advisor".to_owned()),
            },
        ];
        let by_tag = index::build(&courses);
        Catalog { courses, by_tag }
    }

    #[test]
    fn write_catalog() {
        let catalog = sample_catalog();
        let mut buffer = Vec::<u8>::new();
        super::write(&mut buffer, &catalog).unwrap();

        // Parse buffer as JSON file
        let data: serde_json::Value = serde_json::from_reader(&buffer[..]).unwrap();

        let courses = data["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 2);
        // Empty notes are serialized as null, never as an empty string
        assert_eq!(courses[0]["notes"], serde_json::Value::Null);
        assert_eq!(courses[1]["notes"], "see advisor");

        let by_tag = data["byTag"].as_object().unwrap();
        assert_eq!(by_tag.len(), 2);
        assert_eq!(by_tag["ECON"].as_array().unwrap().len(), 2);
        assert_eq!(by_tag["TECH"].as_array().unwrap().len(), 1);
        assert_eq!(by_tag["TECH"][0]["number"], "102");
        // Index entries repeat the full tag list of the course
        assert_eq!(
            by_tag["ECON"][1]["tags"].as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn output_is_indented() {
        let catalog = sample_catalog();
        let mut buffer = Vec::<u8>::new();
        super::write(&mut buffer, &catalog).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("{\n  \"courses\""));
    }

    #[test]
    fn output_is_deterministic() {
        let catalog = sample_catalog();
        let mut first = Vec::<u8>::new();
        let mut second = Vec::<u8>::new();
        super::write(&mut first, &catalog).unwrap();
        super::write(&mut second, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog {
            courses: vec![],
            by_tag: crate::TagIndex::new(),
        };
        let mut buffer = Vec::<u8>::new();
        super::write(&mut buffer, &catalog).unwrap();

        let data: serde_json::Value = serde_json::from_reader(&buffer[..]).unwrap();
        assert_eq!(data["courses"].as_array().unwrap().len(), 0);
        assert_eq!(data["byTag"].as_object().unwrap().len(), 0);
    }
}
