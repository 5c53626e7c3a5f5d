use regex::Regex;

/// Validate a Brazilian postal code (CEP).
///
/// A CEP is valid iff it consists of exactly 8 ASCII digits. The caller is
/// responsible for trimming surrounding whitespace before validating.
pub fn is_valid_cep(cep: &str) -> bool {
    let cep_regex = Regex::new(r"^[0-9]{8}$").unwrap();
    cep_regex.is_match(cep)
}
