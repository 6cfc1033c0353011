// tests/export_e2e.rs
use std::fs;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Local, TimeZone};
use profile_scrape::config::options::{AppOptions, ExportFormat};
use profile_scrape::data::Summary;
use profile_scrape::file::{write_export, write_export_at};
use profile_scrape::profile::OutputRow;

fn rows() -> Vec<OutputRow> {
    let base = OutputRow {
        profile_url: "https://www.linkedin.com/in/ana".into(),
        profile_name: "Ana, Jr.".into(),
        company_name: "Acme".into(),
        job_title: "HR Manager".into(),
        department: "HR".into(),
        location: "USA".into(),
        is_hr_related: true,
        ..OutputRow::default()
    };
    vec![
        OutputRow {
            certification: "SPHR".into(),
            certification_provider: "HRCI".into(),
            certification_type: "Senior HR Professional".into(),
            certification_issued: "01/2022".into(),
            certification_renewal: "01/2025".into(),
            ..base.clone()
        },
        OutputRow {
            profile_url: "https://www.linkedin.com/in/bo".into(),
            profile_name: "Bo".into(),
            company_name: "Initech".into(),
            job_title: "Engineer".into(),
            is_hr_related: false,
            ..base
        },
    ]
}

#[test]
fn csv_export_round_trips_through_a_reader() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.path().join("people.csv").to_str().unwrap());

    let path = write_export(&opts.export, &rows()).unwrap();
    assert_eq!(path, dir.path().join("people.csv"));

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, OutputRow::HEADERS);

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "Ana, Jr.");
    assert_eq!(&records[0][OutputRow::HR_COL], "True");
    assert_eq!(&records[1][OutputRow::HR_COL], "False");
    assert_eq!(&records[1][7], "");
}

#[test]
fn tsv_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.path().join("people.tsv").to_str().unwrap());
    opts.export.include_headers = false;
    assert_eq!(opts.export.format, ExportFormat::Tsv);

    let path = write_export(&opts.export, &rows()).unwrap();
    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("https://www.linkedin.com/in/ana\tAna, Jr.\tAcme"));
    assert_eq!(lines[0].split('\t').count(), OutputRow::HEADERS.len());
}

#[test]
fn directory_target_gets_a_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("exports");
    let mut opts = AppOptions::default();
    opts.export.set_path(&format!("{}/", out_dir.display()));

    let now = Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    let path = write_export_at(&opts.export, &rows(), now).unwrap();

    assert_eq!(path, out_dir.join("linkedin_profiles_20240506_070809.csv"));
    assert!(path.is_file());
}

#[test]
fn workbook_export_has_rows_and_summary_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.path().join("people.xlsx").to_str().unwrap());
    assert_eq!(opts.export.format, ExportFormat::Xlsx);

    let rows = rows();
    let path = write_export(&opts.export, &rows).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));

    let mut book = open_workbook_auto(&path).unwrap();
    assert_eq!(book.sheet_names(), ["LinkedIn_Profiles", "Summary"]);

    let profiles = book.worksheet_range("LinkedIn_Profiles").unwrap();
    assert_eq!(profiles.height(), rows.len() + 1);
    let header: Vec<String> = profiles.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, OutputRow::HEADERS);
    assert_eq!(profiles.get((1, 1)), Some(&Data::String("Ana, Jr.".into())));
    assert_eq!(profiles.get((1, OutputRow::HR_COL)), Some(&Data::Bool(true)));
    assert_eq!(profiles.get((2, OutputRow::HR_COL)), Some(&Data::Bool(false)));

    let summary = book.worksheet_range("Summary").unwrap();
    let lines: Vec<&[Data]> = summary.rows().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], [Data::String("Metric".into()), Data::String("Count".into())]);
    for (line, (label, count)) in lines[1..].iter().zip(Summary::of(&rows).metrics()) {
        assert_eq!(line[0], Data::String(label.into()));
        assert_eq!(line[1], Data::Float(count as f64));
    }
}

#[test]
fn exporting_into_a_file_path_used_as_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = AppOptions::default();
    opts.export.set_path(blocker.join("people.csv").to_str().unwrap());
    assert!(write_export(&opts.export, &rows()).is_err());
}
