use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, pc, setup_test_db};

#[test]
fn test_init_seeds_store() {
    let db_path = setup_test_db("init_seeds");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store initialized with 2 employee(s)"));

    // the seeded employees are visible straight away
    pc().args(["--db", &db_path, "--test", "users", "--list"])
        .assert()
        .success()
        .stdout(contains("ADM001"))
        .stdout(contains("NV001"));
}

#[test]
fn test_clock_in_and_out_flow() {
    let db_path = setup_test_db("clock_flow");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "08:00",
    ])
    .assert()
    .success()
    .stdout(contains("Clocked in"))
    .stdout(contains("08:00"));

    // 18:00 is one hour past the default 17:00 cutoff
    pc().args([
        "--db", &db_path, "--test", "out", "--user", "NV001", "--date", "2025-09-01", "--time",
        "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("Clocked out"))
    .stdout(contains("+1.0h overtime"));
}

#[test]
fn test_duplicate_clock_in_is_reported() {
    let db_path = setup_test_db("duplicate_in");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "08:00",
    ])
    .assert()
    .success();

    // second clock-in the same day: warning, exit 0, record untouched
    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "09:30",
    ])
    .assert()
    .success()
    .stdout(contains("already has a record"));

    let out_file = common::temp_out("duplicate_in", "json");
    pc().args([
        "--db", &db_path, "--test", "export", "--format", "json", "--file", &out_file, "--force",
    ])
    .assert()
    .success();

    let json = std::fs::read_to_string(&out_file).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&json).expect("parse export");
    let rows = rows.as_array().expect("array export");
    assert_eq!(rows.len(), 1, "exactly one record must survive");
    assert_eq!(rows[0]["clock_in"], "08:00");
}

#[test]
fn test_clock_out_without_open_session() {
    let db_path = setup_test_db("orphan_out");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "out", "--user", "NV001", "--date", "2025-09-01", "--time",
        "17:00",
    ])
    .assert()
    .success()
    .stdout(contains("No open session"));
}

#[test]
fn test_unknown_employee_fails() {
    let db_path = setup_test_db("unknown_user");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "ZZZ999", "--date", "2025-09-01", "--time",
        "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown employee"));
}

#[test]
fn test_invalid_date_and_time_fail() {
    let db_path = setup_test_db("invalid_inputs");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-9-1", "--time",
        "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date"));

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "8am",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));

    // unpadded times would break lexicographic lateness comparison
    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "8:30",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));
}

#[test]
fn test_batch_mark_by_users_and_dept() {
    let db_path = setup_test_db("batch_mark");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // NV001 via --users plus ADM001 via its department
    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-02",
        "--status",
        "Leave",
        "--users",
        "NV001",
        "--dept",
        "Executive",
    ])
    .assert()
    .success()
    .stdout(contains("2 created, 0 updated"));

    // marking again only updates
    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-02",
        "--status",
        "Absent",
        "--users",
        "NV001,ADM001",
    ])
    .assert()
    .success()
    .stdout(contains("0 created, 2 updated"));
}

#[test]
fn test_batch_preserves_clocked_data() {
    let db_path = setup_test_db("batch_preserves");
    init_db_with_data(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-01",
        "--status",
        "Late",
        "--users",
        "NV001",
    ])
    .assert()
    .success()
    .stdout(contains("0 created, 1 updated"));

    let out_file = common::temp_out("batch_preserves", "json");
    pc().args([
        "--db", &db_path, "--test", "export", "--format", "json", "--file", &out_file, "--force",
    ])
    .assert()
    .success();

    let json = std::fs::read_to_string(&out_file).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&json).expect("parse export");
    assert_eq!(rows[0]["status"], "Late");
    assert_eq!(rows[0]["clock_in"], "08:00");
    assert_eq!(rows[0]["clock_out"], "18:00");
    assert_eq!(rows[0]["ot_hours"], 1.0);
}

#[test]
fn test_batch_requires_a_selection() {
    let db_path = setup_test_db("batch_empty");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-02",
        "--status",
        "Present",
    ])
    .assert()
    .failure()
    .stderr(contains("Empty selection"));
}

#[test]
fn test_batch_rejects_unknown_status_and_department() {
    let db_path = setup_test_db("batch_invalid");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-02",
        "--status",
        "OnVacation",
        "--users",
        "NV001",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid attendance status"));

    pc().args([
        "--db",
        &db_path,
        "--test",
        "batch",
        "2025-09-02",
        "--status",
        "Present",
        "--dept",
        "Nonexistent",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown department"));
}

#[test]
fn test_report_lists_employees_and_totals() {
    let db_path = setup_test_db("report_month");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "--test", "report", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Monthly report for September 2025"))
        .stdout(contains("Lucas Hoàng"))
        .stdout(contains("Nhân Viên Mẫu"))
        .stdout(contains("Totals: 2 employee(s)"));
}

#[test]
fn test_report_rejects_bad_month() {
    let db_path = setup_test_db("report_bad_month");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--test", "report", "--month", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_timeline_grid_marks_attendance_and_overtime() {
    let db_path = setup_test_db("timeline_grid");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "--test", "timeline", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Attendance timeline for September 2025"))
        .stdout(contains("P+"))
        .stdout(contains("Nhân Viên Mẫu"));
}

#[test]
fn test_timeline_dept_filter() {
    let db_path = setup_test_db("timeline_dept");
    init_db_with_data(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "timeline",
        "--month",
        "2025-09",
        "--dept",
        "Executive",
    ])
    .assert()
    .success()
    .stdout(contains("Lucas Hoàng"))
    .stdout(contains("Nhân Viên Mẫu").not());
}

#[test]
fn test_users_add_list_edit() {
    let db_path = setup_test_db("users_crud");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "users",
        "--add",
        "--name",
        "Trần Văn An",
        "--dept",
        "IT",
        "--username",
        "tvan",
    ])
    .assert()
    .success()
    .stdout(contains("Added employee Trần Văn An (NV002)"));

    pc().args(["--db", &db_path, "--test", "users", "--list"])
        .assert()
        .success()
        .stdout(contains("NV002"))
        .stdout(contains("@tvan"));

    pc().args([
        "--db", &db_path, "--test", "users", "--edit", "NV002", "--dept", "HR", "--role", "admin",
    ])
    .assert()
    .success()
    .stdout(contains("Updated employee"));

    pc().args(["--db", &db_path, "--test", "users", "--list"])
        .assert()
        .success()
        .stdout(contains("Admin"));

    // adding into an unknown department is rejected
    pc().args([
        "--db",
        &db_path,
        "--test",
        "users",
        "--add",
        "--name",
        "Ghost",
        "--dept",
        "Nowhere",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown department"));
}

#[test]
fn test_settings_update_and_print() {
    let db_path = setup_test_db("settings_update");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--default-in",
        "08:30",
        "--add-dept",
        "R&D",
        "--theme",
        "Tet",
    ])
    .assert()
    .success()
    .stdout(contains("Settings updated"));

    pc().args(["--db", &db_path, "--test", "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("08:30"))
        .stdout(contains("R&D"))
        .stdout(contains("Tet"));

    // bad time is rejected before anything is stored
    pc().args([
        "--db", &db_path, "--test", "settings", "--lunch-start", "noonish",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));
}

#[test]
fn test_settings_cutoff_changes_overtime() {
    let db_path = setup_test_db("settings_cutoff");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", &db_path, "--test", "settings", "--default-out", "18:00",
    ])
    .assert()
    .success();

    pc().args([
        "--db", &db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "08:00",
    ])
    .assert()
    .success();

    // only half an hour past the new 18:00 cutoff
    pc().args([
        "--db", &db_path, "--test", "out", "--user", "NV001", "--date", "2025-09-01", "--time",
        "18:30",
    ])
    .assert()
    .success()
    .stdout(contains("+0.5h overtime"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("clock_in"))
        .stdout(contains("clock_out"));
}
