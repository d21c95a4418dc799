use std::fs;
use std::path::PathBuf;
use regex::Regex;
use conference_schedule::loader::{load, try_load};
use conference_schedule::schedule::Schedule;

mod common;

#[test]
fn test_load_fixture() -> Result<(), anyhow::Error> {
    let input_path = PathBuf::from("./tests/fixtures/schedule.txt");
    let talks = try_load(&input_path, None)?;
    // the empty line and the line with a single name are skipped
    assert_eq!(talks.len(), 7);
    assert_eq!(talks[0].topic(), "Вступительное слово");
    assert_eq!(talks[6].speaker().surname(), "Алексеев");
    Ok(())
}

#[test]
fn test_load_keeps_file_order() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::temp_file_name("./target/results/");
    common::write_lines(&path, &[
        "11:00 11:30 Петров Петр Петрович B",
        "09:00 09:20 Иванов Иван Иванович A",
        "09:00 09:20 Иванов Иван",
        "",
        "10:00 10:05 Сидоров Сидор Сидорович C",
    ])?;
    let talks = load(&path, None);
    let topics: Vec<&str> = talks.iter().map(|talk| talk.topic()).collect();
    assert_eq!(topics, vec!["B", "A", "C"]);
    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_load_ignore_lines() -> Result<(), anyhow::Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    {
        use std::io::Write;
        writeln!(file, "# 09:00 09:20 Иванов Иван Иванович Закомментировано")?;
        writeln!(file, "09:20 09:40 Иванов Иван Иванович Доклад")?;
        file.flush()?;
    }
    assert_eq!(try_load(file.path(), None)?.len(), 2);
    let r = Regex::new("^#")?;
    let talks = try_load(file.path(), Some(&r))?;
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0].topic(), "Доклад");
    Ok(())
}

#[test]
fn test_load_skips_invalid_utf8_line() -> Result<(), anyhow::Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    {
        use std::io::Write;
        file.write_all("09:00 09:20 Иванов Иван Иванович A\n".as_bytes())?;
        // "10:00 10:30 Петров Петр Петрович Б" in CP1251
        file.write_all(b"10:00 10:30 \xcf\xe5\xf2\xf0\xee\xe2 \xcf\xe5\xf2\xf0 \xcf\xe5\xf2\xf0\xee\xe2\xe8\xf7 \xc1\n")?;
        file.write_all("11:00 11:20 Сидоров Сидор Сидорович C\n".as_bytes())?;
        file.flush()?;
    }
    let talks = load(file.path(), None);
    let topics: Vec<&str> = talks.iter().map(|talk| talk.topic()).collect();
    assert_eq!(topics, vec!["A", "C"]);
    Ok(())
}

#[test]
fn test_load_crlf() -> Result<(), anyhow::Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    {
        use std::io::Write;
        file.write_all("09:00 09:20 Иванов Иван Иванович Вступительное слово\r\n\r\n".as_bytes())?;
        file.write_all("09:20 09:45 Петров Петр Петрович Доклад\r\n".as_bytes())?;
        file.write_all("09:45 10:00 Сидоров Сидор Сидорович Без перевода строки".as_bytes())?;
        file.flush()?;
    }
    let talks = try_load(file.path(), None)?;
    let topics: Vec<&str> = talks.iter().map(|talk| talk.topic()).collect();
    assert_eq!(topics, vec!["Вступительное слово", "Доклад", "Без перевода строки"]);
    assert_eq!(talks[1].duration(), 25);
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let path = common::temp_file_name("./target/results/does-not-exist/");
    assert!(try_load(&path, None).is_err());
    assert!(load(&path, None).is_empty());
}

#[test]
fn test_schedule_missing_file() {
    let path = common::temp_file_name("./target/results/does-not-exist/");
    let schedule = Schedule::new(path);
    assert!(schedule.load().is_empty());
    let views = schedule.views();
    assert!(views.by_speaker().is_empty());
    assert!(views.long_talks().is_empty());
    assert!(views.long_by_duration().is_empty());
    assert!(views.long_by_author_topic().is_empty());
}
