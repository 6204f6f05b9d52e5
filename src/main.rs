use courseidx::{index, io, Catalog};

use log::{error, info};

const DEFAULT_INPUT: &str = "master-course-list.csv";
const DEFAULT_OUTPUT: &str = "courses_indexed.json";

fn main() {
    env_logger::init();

    let args = clap::command!()
        .about("Builds a tag-indexed JSON course catalog from a CSV course list")
        .arg(
            clap::arg!([INPUT] "Path of the CSV course list to read")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            clap::arg!([OUTPUT] "Path of the JSON catalog file to write")
                .default_value(DEFAULT_OUTPUT),
        )
        .get_matches();
    let input_path = args.get_one::<String>("INPUT").unwrap();
    let output_path = args.get_one::<String>("OUTPUT").unwrap();

    let file = match std::fs::File::open(input_path) {
        Ok(file) => file,
        Err(e) => {
            error!("Could not open course list '{}': {}", input_path, e);
            std::process::exit(exitcode::NOINPUT);
        }
    };
    let courses = match io::csv::read(file) {
        Ok(courses) => courses,
        Err(msg) => {
            error!("Could not read course list '{}': {}", input_path, msg);
            std::process::exit(exitcode::DATAERR);
        }
    };
    info!("Read {} courses from '{}'", courses.len(), input_path);

    let by_tag = index::build(&courses);
    let catalog = Catalog { courses, by_tag };

    let file = match std::fs::File::create(output_path) {
        Ok(file) => file,
        Err(e) => {
            error!("Could not create output file '{}': {}", output_path, e);
            std::process::exit(exitcode::CANTCREAT);
        }
    };
    if let Err(msg) = io::json::write(file, &catalog) {
        error!("Could not write catalog to '{}': {}", output_path, msg);
        std::process::exit(exitcode::IOERR);
    }

    println!("{}", io::format_summary(output_path, &catalog));
}
