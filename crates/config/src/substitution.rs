use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Substitute environment variables in the format ${VAR_NAME} or $VAR_NAME
///
/// Unset variables keep their placeholder; the validator flags them when
/// they end up in a field that must parse.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("static regex");
    let mut result = content.to_string();

    for caps in re.captures_iter(content) {
        let var_name = caps.get(1).or(caps.get(2)).expect("one group matches").as_str();
        let placeholder = caps.get(0).expect("whole match").as_str();

        match env::var(var_name) {
            Ok(value) => {
                debug!(var = var_name, "substituting environment variable");
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!(var = var_name, "environment variable not set, keeping placeholder");
            }
        }
    }

    Ok(result)
}

/// Check if a string still contains unresolved ${VAR} placeholders
pub fn has_unresolved_env_vars(content: &str) -> bool {
    let re = Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("static regex");
    re.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_set_variable() {
        env::set_var("ORACLE_TEST_OWNER", "0x01");
        let out = substitute_env_vars("owner: ${ORACLE_TEST_OWNER}").unwrap();
        assert_eq!(out, "owner: 0x01");
        env::remove_var("ORACLE_TEST_OWNER");
    }

    #[test]
    fn test_keeps_placeholder_for_unset_variable() {
        let out = substitute_env_vars("owner: ${ORACLE_TEST_UNSET_VAR}").unwrap();
        assert_eq!(out, "owner: ${ORACLE_TEST_UNSET_VAR}");
        assert!(has_unresolved_env_vars(&out));
    }

    #[test]
    fn test_plain_content_has_no_placeholders() {
        assert!(!has_unresolved_env_vars("owner: 0x01"));
    }
}
