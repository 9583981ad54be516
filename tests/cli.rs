use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn ringrep() -> Command {
    Command::cargo_bin("ringrep").unwrap()
}

fn write_mono_wav(path: &Path, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn ramp_writes_expected_trace() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");

    ringrep()
        .args(["ramp", "10", "5", "--trace"])
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("Samples: 10"))
        .stdout(predicate::str::contains("Trace written"));

    let text = fs::read_to_string(&trace).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Sample Count: 10"));
    let values: Vec<f32> = lines.map(|line| line.parse().unwrap()).collect();
    assert_eq!(
        values,
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0]
    );
}

#[test]
fn oversized_copy_count_is_clamped() {
    ringrep()
        .args(["ramp", "12", "9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "9999 requested, 200 after clamp to [5, 200]",
        ));
}

#[test]
fn negative_copy_count_clamps_to_minimum() {
    ringrep()
        .args(["ramp", "12", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-10 requested, 5 after clamp to [5, 200]",
        ));
}

#[test]
fn extended_range_admits_wider_counts() {
    ringrep()
        .args(["ramp", "600", "300", "--extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "300 requested, 300 after clamp to [5, 500]",
        ));
}

#[test]
fn single_sample_ramp_is_refused() {
    ringrep()
        .args(["ramp", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short to transform"));
}

#[test]
fn inline_range_json_overrides_presets() {
    ringrep()
        .args(["ramp", "30", "3", "--range-json", r#"{"min": 1, "max": 16}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3 requested, 3 after clamp to [1, 16]",
        ));
}

#[test]
fn range_file_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let range_path = dir.path().join("range.json");
    fs::write(&range_path, r#"{"minCopies": 5, "maxCopies": 500}"#).unwrap();

    ringrep()
        .args(["ramp", "20", "450", "--range-file"])
        .arg(&range_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "450 requested, 450 after clamp to [5, 500]",
        ));
}

#[test]
fn invalid_range_json_is_rejected() {
    ringrep()
        .args(["ramp", "10", "5", "--range-json", r#"{"min": 0, "max": 10}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn wav_processing_repeats_per_channel() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.wav");
    let output_path = dir.path().join("output.wav");

    let input: Vec<f32> = (0..16).map(|i| i as f32 / 100.0).collect();
    write_mono_wav(&input_path, &input);

    ringrep()
        .arg("wav")
        .arg(&input_path)
        .arg(&output_path)
        .args(["--copies", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 16 frame(s)"));

    let mut reader = hound::WavReader::open(&output_path).unwrap();
    let output: Vec<f32> = reader
        .samples::<i16>()
        .map(|s| s.unwrap() as f32 / 32768.0)
        .collect();

    assert_eq!(output.len(), 16);
    // Strides of 5 from samples 0, 5, 10, then a one-sample tail from 15.
    for (slot, value) in output.iter().enumerate() {
        let expected_index = if slot < 15 { (slot / 5) * 5 } else { 15 };
        assert!(
            (value - input[expected_index]).abs() < 1e-3,
            "slot {}: got {}, expected {}",
            slot,
            value,
            input[expected_index]
        );
    }
}

#[test]
fn missing_wav_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    ringrep()
        .arg("wav")
        .arg(dir.path().join("nope.wav"))
        .arg(dir.path().join("out.wav"))
        .args(["--copies", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
