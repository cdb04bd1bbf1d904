use std::process::{Command, Output};

use assert_cmd::cargo::CommandCargoExt;

fn run(args: &[&str]) -> Output {
    Command::cargo_bin("ranma-episodes")
        .unwrap()
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_nettohen_one() {
    let output = run(&["nettohen", "1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Nettohen Episode 1, Broadcast Episode 19, Viz Episode 22, Production Episode 22\n\
         English title: Clash of the Delivery Girls! The Martial Arts Takeout Race\n\
         Japanese title: 激突!出前格闘レース (Gekitotsu! Demae Kakutō Rēsu)\n\
         First aired 1989-10-20\n"
    );
}

#[test]
fn test_broadcast_one_without_nettohen() {
    let output = run(&["bc", "1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Broadcast Episode 1, Production Episode 1\n\
         English title: Here's Ranma\n\
         Japanese title: 中国からきたあいつ!ちょっとヘン!! (Chūgoku kara Kita Aitsu! Chotto Hen!!)\n\
         First aired 1989-04-15\n"
    );
}

#[test]
fn test_broadcast_nineteen() {
    let output = run(&["broadcast", "19"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Nettohen Episode 1, Broadcast Episode 19,"));
}

#[test]
fn test_name_lookup() {
    let output = run(&["name", "ranma", "and", "ranma"]);
    assert!(output.status.success());
    assert!(stdout(&output)
        .contains("English title: Ranma and... Ranma? If It's Not One Thing, It's Another"));
}

#[test]
fn test_rjname_lookup() {
    let output = run(&["rjname", "ryoga no puroposu"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Nettohen Episode 73,"));
}

#[test]
fn test_not_found() {
    let output = run(&["nettohen", "9999"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Can't find Nettohen episode 9999\n");
}

#[test]
fn test_bad_argument() {
    let output = run(&["prod", "abc"]);
    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Bad argument \"abc\""));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_missing_argument() {
    let output = run(&["viz"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "This command requires at least one argument\n"
    );
}

#[test]
fn test_unknown_command() {
    let output = run(&["frobnicate"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Unknown command frobnicate\n");
}

#[test]
fn test_no_command_prints_usage_and_fails() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("nettohen"));
}

#[test]
fn test_help() {
    for command in ["help", "usage"] {
        let output = run(&[command]);
        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("Ranma ½ episode search utility"));
        assert!(out.contains("rjname"));
    }
}

#[test]
fn test_episodes_table() {
    let output = run(&["episodes"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 162);
    assert!(lines[0].starts_with("Nettohen No.\tBroadcast No.\tViz No.\tProduction No."));
    assert_eq!(
        lines[1],
        "-1\t1\t1\t1\tHere's Ranma\tChūgoku kara Kita Aitsu! Chotto Hen!!\t中国からきたあいつ!ちょっとヘン!!\t1989-04-15"
    );
}
