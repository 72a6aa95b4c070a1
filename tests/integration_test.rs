use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rand::Rng;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "derhex2bin-it-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn run_in(dir: &Path, group_id: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_derhex2bin"));
    cmd.current_dir(dir).env_remove("GROUP_ID").env_remove("RUST_LOG");
    if let Some(v) = group_id {
        cmd.env("GROUP_ID", v);
    }
    cmd.output().expect("spawn derhex2bin")
}

#[test]
fn integration_deadbeef() {
    let dir = scratch_dir("deadbeef");
    let out = run_in(&dir, Some("deadbeef"));

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "GROUP_ID=deadbeef\n");
    assert_eq!(
        fs::read(dir.join("key.der")).expect("key.der"),
        [0xde, 0xad, 0xbe, 0xef]
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn integration_random_keys_round_trip() {
    let dir = scratch_dir("random");
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let len = rng.gen_range(0..96);
        let mut bytes = vec![0u8; len];
        rng.fill(&mut bytes[..]);
        let input = if rng.r#gen::<bool>() {
            hex::encode_upper(&bytes)
        } else {
            hex::encode(&bytes)
        };

        let out = run_in(&dir, Some(input.as_str()));
        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!("GROUP_ID={}\n", input)
        );
        let written = fs::read(dir.join("key.der")).expect("key.der");
        assert_eq!(written.len(), input.len() / 2);
        assert!(hex::encode(&written).eq_ignore_ascii_case(&input));
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn integration_unset_variable_fails() {
    let dir = scratch_dir("unset");
    let out = run_in(&dir, None);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("GROUP_ID is not set"));
    assert!(!dir.join("key.der").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn integration_unset_variable_leaves_previous_key() {
    let dir = scratch_dir("unset-existing");
    fs::write(dir.join("key.der"), [0x01, 0x02]).unwrap();

    let out = run_in(&dir, None);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read(dir.join("key.der")).unwrap(), [0x01, 0x02]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn integration_bad_hex_leaves_previous_key() {
    let dir = scratch_dir("badhex");
    fs::write(dir.join("key.der"), [0x30, 0x00]).unwrap();

    for bad in ["a", "zz"] {
        let out = run_in(&dir, Some(bad));
        assert!(!out.status.success(), "input {bad:?}");
        assert!(out.stdout.is_empty());
        assert_eq!(fs::read(dir.join("key.der")).unwrap(), [0x30, 0x00]);
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn integration_unwritable_output_fails() {
    let dir = scratch_dir("unwritable");
    // a directory named key.der cannot be opened for writing
    fs::create_dir(dir.join("key.der")).unwrap();

    let out = run_in(&dir, Some("00"));
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to write key.der"));
    fs::remove_dir_all(&dir).unwrap();
}
