use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "200"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["size"], 8);
    assert_eq!(v["shots"], 200);
    let hits = v["hits"].as_u64().unwrap();
    let misses = v["misses"].as_u64().unwrap();
    let repeats = v["repeats"].as_u64().unwrap();
    assert_eq!(hits + misses + repeats, 200);
    assert_eq!(v["events"].as_u64().unwrap(), hits + misses);
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
