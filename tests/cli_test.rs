use anyhow::Result;
use serial_test::serial;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_quiz-migrate");

#[test]
#[serial]
fn test_missing_password_exits_one_without_connecting() -> Result<()> {
    let output = Command::new(BIN).output()?;

    // Test
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Usage: "));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.contains("✅"));
    Ok(())
}

#[test]
#[serial]
fn test_banner_printed_before_validation() -> Result<()> {
    let output = Command::new(BIN).output()?;

    // Test
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Supabase database password"));
    Ok(())
}
