use predicates::prelude::*;

mod common;
use common::{isolated_home, pcal, setup_test_db};

const TODAY: &str = "2026-09-15";

#[test]
fn test_init_creates_store_database() {
    let db = setup_test_db("cli_init");
    pcal()
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store database initialized"));
    assert!(std::path::Path::new(&db).exists());
}

#[test]
fn test_set_derives_and_reports_totals() {
    let db = setup_test_db("cli_set");

    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-begin", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day-total: --:--"));

    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-end", "17:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day-total: 08:00"))
        .stdout(predicate::str::contains("Month balance: "));
}

#[test]
fn test_set_rejects_derived_fields_and_bad_dates() {
    let db = setup_test_db("cli_set_reject");

    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-total", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("derived"));

    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "01/09/2026", "day-begin", "09:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_invalid_time_clears_previous_value() {
    let db = setup_test_db("cli_clear_invalid");

    for (field, value) in [("day-begin", "09:00"), ("day-end", "17:00")] {
        pcal()
            .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", field, value])
            .assert()
            .success();
    }

    // Overwriting with a malformed value clears the field and the
    // derived total with it.
    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-begin", "25:99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day-total: --:--"));
}

#[test]
fn test_show_renders_month_aggregates() {
    let db = setup_test_db("cli_show");

    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-begin", "09:00"])
        .assert()
        .success();
    pcal()
        .args(["--db", &db, "--today", TODAY, "set", "2026-09-01", "day-end", "17:00"])
        .assert()
        .success();

    pcal()
        .args(["--db", &db, "--today", TODAY, "show", "--period", "2026-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("September 2026"))
        .stdout(predicate::str::contains("Working days: 10"))
        .stdout(predicate::str::contains("Month Sum: 08:00"))
        .stdout(predicate::str::contains("non-working day"));
}

#[test]
fn test_show_keeps_aggregates_when_anchor_day_is_hidden() {
    let home = isolated_home("cli_show_hidden");
    let db = setup_test_db("cli_show_hidden");

    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "config", "--set", "hide-non-working-days=true"])
        .assert()
        .success();

    // 2026-05-31 is a Sunday: the balance anchor day is filtered from
    // the grid, but the aggregates row must still render.
    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "--today", TODAY, "show", "--period", "2026-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month Balance:"))
        .stdout(predicate::str::contains("non-working day").not());
}

#[test]
fn test_punch_sequence_end_to_end() {
    let db = setup_test_db("cli_punch");

    let expected = ["day-begin", "lunch-begin", "lunch-end", "day-end"];
    for field in expected {
        pcal()
            .args(["--db", &db, "--today", TODAY, "punch"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Punched {field} at")));
    }

    pcal()
        .args(["--db", &db, "--today", TODAY, "punch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to punch"));
}

#[test]
fn test_punch_refuses_non_working_day() {
    let db = setup_test_db("cli_punch_sunday");

    pcal()
        .args(["--db", &db, "--today", "2026-09-13", "punch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to punch"));
}

#[test]
fn test_waiver_flow_overrides_day() {
    let db = setup_test_db("cli_waiver");

    pcal()
        .args([
            "--db", &db, "--today", TODAY,
            "waiver", "add", "2026-09-02",
            "--hours", "04:00",
            "--reason", "Team offsite",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Waived 2026-09-02"));

    pcal()
        .args(["--db", &db, "--today", TODAY, "waiver", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-09-02"))
        .stdout(predicate::str::contains("Team offsite"));

    pcal()
        .args(["--db", &db, "--today", TODAY, "show", "--period", "2026-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Waived day: Team offsite"))
        .stdout(predicate::str::contains("Month Sum: 04:00"));

    pcal()
        .args(["--db", &db, "--today", TODAY, "waiver", "del", "2026-09-02"])
        .assert()
        .success();

    pcal()
        .args(["--db", &db, "--today", TODAY, "show", "--period", "2026-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month Sum: 00:00"));
}

#[test]
fn test_db_override_is_not_persisted_by_config_set() {
    let home = isolated_home("cli_config_ephemeral");
    let db = setup_test_db("cli_config_ephemeral");

    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "config", "--set", "count-today=true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration updated"));

    let conf = std::fs::read_to_string(format!("{home}/.punchcal/punchcal.conf"))
        .expect("config file should exist");
    assert!(conf.contains("count_today: true"));
    assert!(
        !conf.contains(&db),
        "the --db override must stay ephemeral, found it in: {conf}"
    );
}

#[test]
fn test_config_set_and_print() {
    let home = isolated_home("cli_config");
    let db = setup_test_db("cli_config");

    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "config", "--set", "hours-per-day=07:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration updated"));

    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("07:30"));

    pcal()
        .env("HOME", &home)
        .args(["--db", &db, "config", "--set", "hours-per-day=7h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}
