use scyther_errors::ScytherError;

#[test]
fn test_backend_report_renders_preamble_then_lines() {
    let err = ScytherError::backend(vec!["line1", "line2"]);
    assert_eq!(
        err.to_string(),
        "Scyther backend reported the following errors:\nline1\nline2"
    );
}

#[test]
fn test_backend_report_with_a_single_line() {
    let err = ScytherError::backend(vec!["syntax error in role I"]);
    assert_eq!(
        err.to_string(),
        "Scyther backend reported the following errors:\nsyntax error in role I"
    );
}

#[test]
fn test_backend_report_with_no_lines_is_just_the_preamble() {
    // Raising with an empty list is not intended use, but it renders
    // without surprises: the fixed preamble and nothing after it.
    let err = ScytherError::backend(Vec::<String>::new());
    assert_eq!(
        err.to_string(),
        "Scyther backend reported the following errors:\n"
    );
}

#[test]
fn test_binary_missing_quotes_the_path() {
    let err = ScytherError::binary_missing("/usr/local/bin/scyther-linux");
    assert_eq!(
        err.to_string(),
        "Could not find Scyther executable at '/usr/local/bin/scyther-linux'"
    );
}

#[test]
fn test_binary_undefined_is_a_fixed_sentence() {
    assert_eq!(
        ScytherError::BinaryUndefined.to_string(),
        "Scyther class attribute 'program' was not defined."
    );
}

#[test]
fn test_unsupported_platform_names_the_platform() {
    let err = ScytherError::unsupported_platform("plan9");
    assert_eq!(err.to_string(), "The plan9 platform is currently unsupported.");
}

#[test]
fn test_string_or_list_shows_the_captured_value() {
    let err = ScytherError::StringOrList {
        obj: "None".to_string(),
    };
    assert_eq!(err.to_string(), "Got None instead of a (list of) string.");
}
