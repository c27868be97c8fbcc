use serde_json::Value;

/// Assert a 201 body and return the `filePath` it points at
pub fn assert_synthesis_created(body: &Value) -> String {
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("WAV file created successfully.")
    );

    let file_path = body
        .get("filePath")
        .and_then(|v| v.as_str())
        .expect("Missing filePath field")
        .to_string();
    assert_output_file_path(&file_path);

    file_path
}

/// `filePath` must look like `/output/<digits>_synthesis.wav`
pub fn assert_output_file_path(file_path: &str) {
    let stamp = file_path
        .strip_prefix("/output/")
        .and_then(|rest| rest.strip_suffix("_synthesis.wav"))
        .unwrap_or_else(|| panic!("Unexpected filePath format: {}", file_path));

    assert!(
        !stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_digit()),
        "Timestamp part of {} is not numeric",
        file_path
    );
}

/// The 500 body is fixed and must not leak engine details
pub fn assert_synthesis_failed(body: &Value) {
    assert_eq!(
        body,
        &serde_json::json!({
            "success": false,
            "error": "Failed to generate WAV file."
        })
    );
}
