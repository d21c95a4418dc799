use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use data_encoding::HEXLOWER;
use conference_schedule::speaker::Speaker;
use conference_schedule::talk::Talk;

#[allow(dead_code)]
pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

#[allow(dead_code)]
pub fn write_lines(path: &PathBuf, lines: &[&str]) -> Result<(), anyhow::Error> {
    let mut file = File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// A talk starting at 09:00 that lasts `duration` minutes.
#[allow(dead_code)]
pub fn talk_of(duration: i32, surname: &str, topic: &str) -> Talk {
    let end = 9 * 60 + duration;
    Talk::new(
        "09:00",
        &format!("{:02}:{:02}", end / 60, end % 60),
        Speaker::new(surname, "Иван", "Иванович"),
        topic,
    )
}
