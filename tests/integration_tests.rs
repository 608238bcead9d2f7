use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_RIDES, bike, path_str, test_dir, write_rides};

#[test]
fn test_stats_all_rides() {
    let dir = test_dir("cli_stats_all");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Statistics for all rides"))
        .stdout(contains("111.00 km"))
        .stdout(contains("5.85 h (05h 51m)"))
        .stdout(contains("18.97 km/h"))
        .stdout(contains("75.00 km"));
}

#[test]
fn test_stats_positional_years() {
    let dir = test_dir("cli_stats_years");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "2012"])
        .assert()
        .success()
        .stdout(contains("Statistics for 2012"))
        .stdout(contains("111.00 km"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "2013"])
        .assert()
        .success()
        .stdout(contains("No rides for 2013"));
}

#[test]
fn test_stats_month_period() {
    let dir = test_dir("cli_stats_month");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "-p", "2012-08"])
        .assert()
        .success()
        .stdout(contains("August 2012"))
        .stdout(contains("75.00 km"))
        .stdout(contains("111.00").not());
}

#[test]
fn test_stats_json() {
    let dir = test_dir("cli_stats_json");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "--period", "all", "--json"])
        .assert()
        .success()
        .stdout(contains("\"count\": 3"))
        .stdout(contains("\"total_distance_km\": 111.0"));
}

#[test]
fn test_stats_malformed_file_fails_with_line_number() {
    let dir = test_dir("cli_stats_malformed");
    let content = format!("{SAMPLE_RIDES}24-08-2012 10:00:00,10,0.5\n");
    let rides = write_rides(&dir, &content);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "--period", "all"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Malformed record at line 4"))
        .stderr(contains("24-08-2012 10:00:00,10,0.5"));
}

#[test]
fn test_stats_invalid_period() {
    let dir = test_dir("cli_stats_bad_period");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "--period", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_add_then_stats() {
    let dir = test_dir("cli_add");
    let rides = dir.join("bikerides");

    bike(&dir)
        .args([
            "--file",
            &path_str(&rides),
            "add",
            "12",
            "0:36",
            "--comment",
            "Around the house, again",
        ])
        .assert()
        .success()
        .stdout(contains("Ride added: 12 km, 00h 36m"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "30", "1h30", "-u", "http://example.com/r"])
        .assert()
        .success();

    let content = fs::read_to_string(&rides).expect("read rides");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(",12,0.6,\"Around the house, again\","));
    assert!(lines[1].ends_with(",30,1.5,,http://example.com/r"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("42.00 km"))
        .stdout(contains("2.10 h"))
        .stdout(contains("20.00 km/h"));
}

#[test]
fn test_add_invalid_duration_leaves_file_unchanged() {
    let dir = test_dir("cli_add_invalid");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "10", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "10", "-1"])
        .assert()
        .failure();

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "10", "soon"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    assert_eq!(fs::read_to_string(&rides).expect("read"), SAMPLE_RIDES);
}

#[test]
fn test_add_negative_distance_rejected() {
    let dir = test_dir("cli_add_negative");
    let rides = dir.join("bikerides");

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "-5", "1"])
        .assert()
        .failure()
        .stderr(contains("distance"));

    assert!(!rides.exists());
}

#[test]
fn test_add_interactive_prompts() {
    let dir = test_dir("cli_add_interactive");
    let rides = dir.join("bikerides");

    bike(&dir)
        .args(["--file", &path_str(&rides), "add"])
        .write_stdin("20\n1:00\nEvening ride\n\n")
        .assert()
        .success()
        .stdout(contains("Enter distance"))
        .stdout(contains("Ride added: 20 km"));

    let content = fs::read_to_string(&rides).expect("read rides");
    assert!(content.trim_end().ends_with(",20,1,Evening ride,"));
}

#[test]
fn test_rides_table() {
    let dir = test_dir("cli_rides");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "rides", "2012"])
        .assert()
        .success()
        .stdout(contains("Distance (km)"))
        .stdout(contains("23-06-2012 15:32"))
        .stdout(contains("Commute to work, with visit..."))
        .stdout(contains("yes"))
        .stdout(contains("20.0"));
}

#[test]
fn test_rides_empty_period() {
    let dir = test_dir("cli_rides_empty");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "rides", "--period", "2015"])
        .assert()
        .success()
        .stdout(contains("No rides for 2015"));
}

#[test]
fn test_view_print_url() {
    let dir = test_dir("cli_view");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .args(["--file", &path_str(&rides), "view", "2", "--print"])
        .assert()
        .success()
        .stdout(contains("http://www.mymap.com/1234"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "view", "1", "--print"])
        .assert()
        .failure()
        .stderr(contains("No URL for ride 1"));

    bike(&dir)
        .args(["--file", &path_str(&rides), "view", "9", "--print"])
        .assert()
        .failure()
        .stderr(contains("No ride with id 9"));
}

#[test]
fn test_unreadable_rides_file() {
    let dir = test_dir("cli_unreadable");

    // a directory cannot be read as a rides file
    bike(&dir)
        .args(["--file", &path_str(&dir), "stats", "--period", "all"])
        .assert()
        .failure()
        .stderr(contains("Cannot access rides file"));
}

#[test]
fn test_init_writes_config_and_rides_file() {
    let dir = test_dir("cli_init");
    let rides = dir.join("data").join("bikerides");

    bike(&dir)
        .args(["--file", &path_str(&rides), "init"])
        .assert()
        .success();

    assert!(rides.exists());
    let config = fs::read_to_string(dir.join(".bike").join("config.yml")).expect("read config");
    assert!(config.contains("default_period: year"));
    assert!(config.contains(&path_str(&rides)));

    // the configured file is now used without --file
    bike(&dir)
        .args(["add", "5", "0.25"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&rides).expect("read rides").lines().count(),
        1
    );
}

#[test]
fn test_config_print_defaults() {
    let dir = test_dir("cli_config_print");

    bike(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("~/.bikerides"))
        .stdout(contains("comment_width: 30"))
        .stdout(contains("language: auto"));
}

#[test]
fn test_config_file_is_honoured() {
    let dir = test_dir("cli_config_file");
    let rides = write_rides(&dir, SAMPLE_RIDES);
    fs::create_dir_all(dir.join(".bike")).expect("mkdir");
    fs::write(
        dir.join(".bike").join("config.yml"),
        format!("rides_file: {}\ndefault_period: all\n", path_str(&rides)),
    )
    .expect("write config");

    bike(&dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("111.00 km"));
}

#[test]
fn test_broken_config_is_reported() {
    let dir = test_dir("cli_config_broken");
    fs::create_dir_all(dir.join(".bike")).expect("mkdir");
    fs::write(dir.join(".bike").join("config.yml"), "comment_width: [not a number\n")
        .expect("write config");

    bike(&dir)
        .args(["stats"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_french_locale() {
    let dir = test_dir("cli_french");
    let rides = write_rides(&dir, SAMPLE_RIDES);

    bike(&dir)
        .env("LANG", "fr_FR.UTF-8")
        .args(["--file", &path_str(&rides), "stats", "-p", "2012-08"])
        .assert()
        .success()
        .stdout(contains("Statistiques pour août 2012"))
        .stdout(contains("Vitesse moyenne :"))
        .stdout(contains("75.00 km"));

    bike(&dir)
        .env("LANG", "fr_FR.UTF-8")
        .args(["--file", &path_str(&rides), "stats", "2015"])
        .assert()
        .success()
        .stdout(contains("Aucune randonnée pour 2015"));

    bike(&dir)
        .env("LANG", "fr_FR.UTF-8")
        .args(["--file", &path_str(&rides), "rides", "2012"])
        .assert()
        .success()
        .stdout(contains("Commentaire"))
        .stdout(contains("Vitesse (km/h)"))
        .stdout(contains("oui"));
}

#[test]
fn test_french_prompts() {
    let dir = test_dir("cli_french_add");
    let rides = dir.join("bikerides");

    bike(&dir)
        .env("LC_ALL", "fr_CA.UTF-8")
        .args(["--file", &path_str(&rides), "add"])
        .write_stdin("20\n1:00\n\n\n")
        .assert()
        .success()
        .stdout(contains("Entrer la distance (km) : "))
        .stdout(contains("Randonnée ajoutée: 20 km"));
}

#[test]
fn test_language_from_config_overrides_locale() {
    let dir = test_dir("cli_config_language");
    let rides = write_rides(&dir, SAMPLE_RIDES);
    fs::create_dir_all(dir.join(".bike")).expect("mkdir");
    fs::write(dir.join(".bike").join("config.yml"), "language: en\n").expect("write config");

    bike(&dir)
        .env("LANG", "fr_FR.UTF-8")
        .args(["--file", &path_str(&rides), "stats", "2012"])
        .assert()
        .success()
        .stdout(contains("Average speed:"));

    fs::write(dir.join(".bike").join("config.yml"), "language: klingon\n")
        .expect("write config");

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "2012"])
        .assert()
        .failure()
        .stderr(contains("unsupported language 'klingon'"));
}

#[test]
fn test_stats_with_hand_edited_zero_duration() {
    let dir = test_dir("cli_zero_duration");
    let rides = write_rides(&dir, "24-08-2012 10:00:00,12,0,forgot duration,\n");

    bike(&dir)
        .args(["--file", &path_str(&rides), "stats", "2012"])
        .assert()
        .success()
        .stdout(contains("12.00 km"))
        .stdout(contains("n/a km/h"));
}

#[test]
fn test_add_trims_comment_and_url() {
    let dir = test_dir("cli_add_trim");
    let rides = dir.join("bikerides");

    bike(&dir)
        .args(["--file", &path_str(&rides), "add", "5", "0.5", "-c", "  padded  ", "-u", " http://example.com "])
        .assert()
        .success();

    let content = fs::read_to_string(&rides).expect("read rides");
    assert!(content.trim_end().ends_with(",5,0.5,padded,http://example.com"));
}
