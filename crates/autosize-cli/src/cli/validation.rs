/// Parse and validate a global variable name for UMD bundles.
///
/// Ensures the name is a valid JavaScript identifier:
/// - Must start with a letter, underscore, or dollar sign
/// - Can contain letters, numbers, underscores, or dollar signs
/// - Cannot be empty
///
/// # Errors
///
/// Returns an error message if the identifier is invalid.
pub fn parse_global(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err("Global name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "Global name must start with a letter, underscore, or dollar sign: '{}'",
            s
        ));
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "Global name can only contain letters, numbers, underscores, or dollar signs: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
