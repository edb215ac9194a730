use hilo_cli::run;
use hilo_engine::transcript::{RecordKind, RoundRecord};
use std::fs;

fn run_sim(extra: &[&str]) -> (i32, String, String) {
    let mut args = vec!["hilo", "sim"];
    args.extend_from_slice(extra);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn sim_plays_requested_rounds() {
    let (code, out, _) = run_sim(&["--seed", "11", "--rounds", "5"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("sim: seed=11 rounds=5"));
    assert!(out.contains("> !startgame"));
    assert_eq!(out.matches("> !dealer ").count(), 1);
    assert_eq!(out.matches("> !player ").count(), 5);
    assert_eq!(out.matches("wins this round!").count() + out.matches("It's a tie!").count(), 5);
    assert!(out.contains("Rounds played: 5"));
    assert!(out.contains("Cards remaining: 46"));
}

#[test]
fn sim_is_deterministic_for_a_seed() {
    let (_, a, _) = run_sim(&["--seed", "2024", "--rounds", "10"]);
    let (_, b, _) = run_sim(&["--seed", "2024", "--rounds", "10"]);
    let (_, c, _) = run_sim(&["--seed", "2025", "--rounds", "10"]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn sim_zero_rounds_exits_two() {
    let (code, out, err) = run_sim(&["--seed", "1", "--rounds", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("rounds must be >= 1"));
}

#[test]
fn sim_writes_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs").join("sim.jsonl");
    let (code, _, _) = run_sim(&[
        "--seed",
        "5",
        "--rounds",
        "4",
        "--transcript",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let contents = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].kind, RecordKind::Dealer);
    assert!(records[1..].iter().all(|r| r.kind == RecordKind::Player));
    assert!(records[1..].iter().all(|r| r.winner.is_some()));
    assert_eq!(records[4].remaining, 47);
    assert!(records.iter().all(|r| r.ts.is_some()));
}
