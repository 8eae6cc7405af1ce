//! End-to-end integration tests for the harvester pipeline.
//!
//! Ingests the fixture corpus under `tests/fixtures/corpus`, which holds three
//! well-formed HWPML exports and one truncated file.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use regulation_harvester::harvester::harvest_directory;
use regulation_harvester::snapshot::{load_snapshot, save_snapshot};
use regulation_harvester::store::Corpus;
use regulation_harvester::{find_relevant_clauses, IngestReport, Regulation};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("corpus")
}

fn ingest() -> IngestReport {
    harvest_directory(&fixture_dir(), |_| {}).expect("fixture corpus should ingest")
}

fn by_id<'a>(report: &'a IngestReport, id: &str) -> &'a Regulation {
    report
        .regulations
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("{id} missing from report"))
}

#[test]
fn test_ingest_assigns_ids_by_file_order() {
    let report = ingest();

    let ids: Vec<(&str, &str)> = report
        .regulations
        .iter()
        .map(|r| (r.id.as_str(), r.display_name.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("REG-001", "차의과학대학교 학칙"),
            ("REG-002", "교원 업적 평가 세칙"),
            ("REG-003", "출장 안내"),
        ]
    );

    assert_eq!(report.attempted(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source_name, "9_손상된_파일.xml");
}

#[test]
fn test_clauses_follow_boundaries() {
    let report = ingest();
    let statute = by_id(&report, "REG-001");

    let headings: Vec<String> = statute.clauses.iter().map(|c| c.heading()).collect();
    assert_eq!(
        headings,
        vec![
            "제1조 (목적)",
            "제2조 (휴학)",
            "제2조의2 (복학)",
            "제3조 (장학금)",
        ]
    );
    assert_eq!(statute.clause_count, 4);

    assert_eq!(
        statute.clauses[1].content,
        "제2조(휴학) ① 학생은 질병 등의 사유로 휴학할 수 있다.\n② 휴학 기간은 통산 3년을 초과할 수 없다."
    );
    // Table cell paragraphs stay inside the clause that precedes the table.
    assert_eq!(
        statute.clauses[2].content,
        "제2조의2（복학） 휴학 기간이 만료된 학생은 복학하여야 한다.\n구분\n기간\n일반휴학\n1년"
    );
    // Paragraphs before the first clause are kept in the full text only.
    assert!(statute.full_text.starts_with("차의과학대학교 학칙\n제1장 총칙\n"));
    assert_eq!(statute.full_text.lines().count(), 13);
    assert_eq!(statute.char_count, statute.full_text.chars().count());
}

#[test]
fn test_document_without_clauses_is_valid() {
    let report = ingest();
    let notice = by_id(&report, "REG-003");

    assert!(!notice.has_clauses());
    assert_eq!(notice.full_text, "출장 안내\n국외 출장 시 연구비 집행은 사전 승인을 받아야 한다.");
}

#[test]
fn test_snapshot_round_trip_and_search() {
    let report = ingest();
    let dir = tempdir().unwrap();
    let path = dir.path().join("regulations.json");

    save_snapshot(&report.regulations, &path).unwrap();
    assert_eq!(load_snapshot(&path).unwrap(), report.regulations);

    let corpus = Corpus::load(&path).unwrap();
    let ranked: Vec<(&str, u64)> = corpus
        .search("연구비", 10)
        .iter()
        .map(|r| (r.regulation.id.as_str(), r.score))
        .collect();
    assert_eq!(ranked, vec![("REG-002", 2), ("REG-003", 1)]);

    let leave = corpus.search("휴학", 10);
    assert_eq!(leave.len(), 1);
    assert_eq!(leave[0].score, 5);
}

#[test]
fn test_relevant_clauses_within_regulation() {
    let report = ingest();
    let statute = by_id(&report, "REG-001");

    let numbers: Vec<(&str, u64)> = find_relevant_clauses(statute, "휴학 복학")
        .iter()
        .map(|m| (m.clause.number.as_str(), m.score))
        .collect();
    assert_eq!(numbers, vec![("제2조의2", 4), ("제2조", 3)]);
}
