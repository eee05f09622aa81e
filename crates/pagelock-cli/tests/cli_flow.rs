use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const PASSWORD: &str = "Test-passw0rd!";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pagelock"))
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

const SAMPLE_MARKDOWN: &str = "# Sample\n\nA *protected* document.\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";

#[test]
fn test_convert_writes_html_next_to_input() {
    let dir = temp_dir("pagelock_convert");
    let input = dir.join("sample.md");
    fs::write(&input, SAMPLE_MARKDOWN).expect("write input");

    let output = Command::new(bin())
        .args(["convert", "-i"])
        .arg(&input)
        .output()
        .expect("run convert");
    assert!(
        output.status.success(),
        "convert failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = fs::read_to_string(dir.join("sample.html")).expect("output should exist");
    assert!(html.contains("Sample"));
    assert!(html.contains("<table>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_without_minify_keeps_document_shell() {
    let dir = temp_dir("pagelock_convert_plain");
    let input = dir.join("sample.md");
    fs::write(&input, SAMPLE_MARKDOWN).expect("write input");

    let output = Command::new(bin())
        .args(["convert", "--no-minify", "-i"])
        .arg(&input)
        .output()
        .expect("run convert");
    assert!(output.status.success());

    let html = fs::read_to_string(dir.join("sample.html")).expect("output should exist");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Sample</h1>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_protect_default_output_in_input_directory() {
    let dir = temp_dir("pagelock_protect");
    let input = dir.join("sample.md");
    fs::write(&input, "# Secret\n\nPLAINTEXT_MARKER_123\n").expect("write input");

    // Run from a different working directory; the output must still land
    // next to the input.
    let cwd = temp_dir("pagelock_protect_cwd");
    let output = Command::new(bin())
        .current_dir(&cwd)
        .args(["protect", "--password", PASSWORD, "-i"])
        .arg(&input)
        .output()
        .expect("run protect");
    assert!(
        output.status.success(),
        "protect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let page = fs::read_to_string(dir.join("sample.protected.html")).expect("output should exist");
    assert!(!page.contains("PLAINTEXT_MARKER_123"));
    assert!(!page.contains("ENCRYPTED_CONTENT_PLACEHOLDER"));
    assert!(page.contains("Uint8Array"));

    let _ = fs::remove_dir_all(&dir);
    let _ = fs::remove_dir_all(&cwd);
}

#[test]
fn test_protect_accepts_html_input() {
    let dir = temp_dir("pagelock_protect_html");
    let input = dir.join("page.html");
    fs::write(
        &input,
        "<html><head><title>t</title></head><body><p>secret</p></body></html>",
    )
    .expect("write input");

    let output = Command::new(bin())
        .args(["protect", "--password", PASSWORD, "-i"])
        .arg(&input)
        .output()
        .expect("run protect");
    assert!(
        output.status.success(),
        "protect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.join("page.protected.html").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_protect_rejects_unsupported_input() {
    let dir = temp_dir("pagelock_protect_bad");
    let input = dir.join("data.txt");
    fs::write(&input, "not a document").expect("write input");

    let output = Command::new(bin())
        .args(["protect", "--password", PASSWORD, "-i"])
        .arg(&input)
        .output()
        .expect("run protect");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported file type"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let dir = temp_dir("pagelock_round_trip");
    let input = dir.join("page.html");
    let plaintext = "<html><body>round trip</body></html>";
    fs::write(&input, plaintext).expect("write input");

    let output = Command::new(bin())
        .args(["encrypt", "--password", PASSWORD, "-i"])
        .arg(&input)
        .output()
        .expect("run encrypt");
    assert!(
        output.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let encrypted_path = dir.join("page-encrypted.html");
    let blob = fs::read(&encrypted_path).expect("encrypted output should exist");
    assert!(blob.len() >= 32 + 16);
    assert_ne!(blob, plaintext.as_bytes());

    // Password from the environment instead of the flag
    let output = Command::new(bin())
        .env("PAGELOCK_PASSWORD", PASSWORD)
        .args(["decrypt", "-i"])
        .arg(&encrypted_path)
        .output()
        .expect("run decrypt");
    assert!(
        output.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let decrypted =
        fs::read_to_string(dir.join("page-encrypted-decrypted.html")).expect("decrypted output");
    assert_eq!(decrypted, plaintext);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encrypt_rejects_weak_password() {
    let dir = temp_dir("pagelock_weak");
    let input = dir.join("page.html");
    fs::write(&input, "<p>secret</p>").expect("write input");

    let output = Command::new(bin())
        .args(["encrypt", "--password", "weak", "-i"])
        .arg(&input)
        .output()
        .expect("run encrypt");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Weak password"));
    // No partial output
    assert!(!dir.join("page-encrypted.html").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_encrypt_weak_password_with_explicit_bypass() {
    let dir = temp_dir("pagelock_unsafe");
    let input = dir.join("page.html");
    fs::write(&input, "<p>secret</p>").expect("write input");

    let output = Command::new(bin())
        .args([
            "encrypt",
            "--password",
            "weak",
            "--allow-unsafe-password",
            "-i",
        ])
        .arg(&input)
        .output()
        .expect("run encrypt");
    assert!(
        output.status.success(),
        "bypass failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.join("page-encrypted.html").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_decrypt_wrong_password_fails() {
    let dir = temp_dir("pagelock_wrong");
    let input = dir.join("page.html");
    fs::write(&input, "<p>secret</p>").expect("write input");

    let status = Command::new(bin())
        .args(["encrypt", "--password", PASSWORD, "-i"])
        .arg(&input)
        .status()
        .expect("run encrypt");
    assert!(status.success());

    let output = Command::new(bin())
        .args(["decrypt", "--password", "Wr0ng-password!", "-i"])
        .arg(&dir.join("page-encrypted.html"))
        .output()
        .expect("run decrypt");

    // Padding false-accepts with probability ~1/256; even then the output is
    // not the original document.
    if output.status.success() {
        let recovered = fs::read(dir.join("page-encrypted-decrypted.html")).expect("output");
        assert_ne!(recovered, b"<p>secret</p>");
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("wrong password or corrupted data"));
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_quiet_suppresses_output() {
    let dir = temp_dir("pagelock_quiet");
    let input = dir.join("sample.md");
    fs::write(&input, "# Quiet\n").expect("write input");

    let output = Command::new(bin())
        .args(["--quiet", "convert", "-i"])
        .arg(&input)
        .output()
        .expect("run convert");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let _ = fs::remove_dir_all(&dir);
}
