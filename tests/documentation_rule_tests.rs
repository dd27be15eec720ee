use doc_comment_lint::{lint_source, Diagnostic, DiagnosticCode, LintReport, RuleConfig};

/// Helper to lint a source snippet with default rule settings
fn lint(source: &str) -> LintReport {
    lint_source(source, &RuleConfig::default())
}

/// Diagnostics in report order
fn diagnostics(report: &LintReport) -> Vec<Diagnostic> {
    report
        .findings
        .iter()
        .map(|f| f.diagnostic.clone())
        .collect()
}

fn count(report: &LintReport, code: DiagnosticCode) -> usize {
    report
        .findings
        .iter()
        .filter(|f| f.diagnostic.code() == code)
        .count()
}

fn dont_match(name: &str) -> Diagnostic {
    Diagnostic::ParametersDontMatch {
        name: name.to_string(),
    }
}

#[test]
fn test_parameter_documentation_style() {
    let input = r#"
/// Uses 'Parameters' when it only has one parameter.
///
/// - Parameters singular: singular description.
/// - Returns: A string containing the contents of a
///   description
func testPluralParamDesc(singular: String) -> Bool {}

/// Uses 'Parameter' with a list of parameters.
///
/// - Parameter
///   - command: The command to execute in the shell environment.
///   - stdin: The string to use as standard input.
/// - Returns: A string containing the contents of the invoked process's
///   standard output.
func execute(command: String, stdin: String) -> String {
// ...
}

/// Returns the output generated by executing a command with the given string
/// used as standard input.
///
/// - Parameter command: The command to execute in the shell environment.
/// - Parameter stdin: The string to use as standard input.
/// - Returns: A string containing the contents of the invoked process's
///   standard output.
func testInvalidParameterDesc(command: String, stdin: String) -> String {}
"#;
    let report = lint(input);

    assert_eq!(
        diagnostics(&report),
        vec![
            Diagnostic::UseSingularParameter,
            Diagnostic::UsePluralParameters,
            Diagnostic::UsePluralParameters,
        ]
    );
    assert_eq!(report.findings[0].declaration, "testPluralParamDesc");
    assert_eq!(report.findings[1].declaration, "execute");
    assert_eq!(report.findings[2].declaration, "testInvalidParameterDesc");
}

#[test]
fn test_parameter_names() {
    let input = r#"
/// Parameters dont match.
///
/// - Parameters:
///   - sum: The sum of all numbers.
///   - avg: The average of all numbers.
/// - Returns: The sum of sum and avg.
func sum(avg: Int, sum: Int) -> Int {}

/// Missing one parameter documentation.
///
/// - Parameters:
///   - p1: Parameter 1.
///   - p2: Parameter 2.
/// - Returns: an integer.
func foo(p1: Int, p2: Int, p3: Int) -> Int {}
"#;
    let report = lint(input);

    assert_eq!(
        diagnostics(&report),
        vec![dont_match("sum"), dont_match("foo")]
    );
}

#[test]
fn test_return_documentation() {
    let input = r#"
/// One sentence summary.
///
/// - Parameters:
///   - p1: Parameter 1.
///   - p2: Parameter 2.
///   - p3: Parameter 3.
/// - Returns: an integer.
func noReturn(p1: Int, p2: Int, p3: Int) {}

/// One sentence summary.
///
/// - Parameters:
///   - p1: Parameter 1.
///   - p2: Parameter 2.
///   - p3: Parameter 3.
func foo(p1: Int, p2: Int, p3: Int) -> Int {}
"#;
    let report = lint(input);

    assert_eq!(
        diagnostics(&report),
        vec![
            Diagnostic::RemoveReturnComment {
                name: "noReturn".to_string()
            },
            Diagnostic::DocumentReturnValue {
                name: "foo".to_string()
            },
        ]
    );
}

#[test]
fn test_valid_documentation() {
    let input = r#"
/// Returns the output generated by executing a command.
///
/// - Parameter command: The command to execute in the shell environment.
/// - Returns: A string containing the contents of the invoked process's
///   standard output.
func singularParam(command: String) -> String {
// ...
}

/// Returns the output generated by executing a command with the given string
/// used as standard input.
///
/// - Parameters:
///   - command: The command to execute in the shell environment.
///   - stdin: The string to use as standard input.
/// - Returns: A string containing the contents of the invoked process's
///   standard output.
func pluralParam(command: String, stdin: String) -> String {
// ...
}

/// Parameter(s) and Returns tags may be omitted only if the single-sentence
/// brief summary fully describes the meaning of those items and including the
/// tags would only repeat what has already been said
func ommitedFunc(p1: Int)
"#;
    let report = lint(input);

    assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    assert_eq!(count(&report, DiagnosticCode::UseSingularParameter), 0);
    assert_eq!(count(&report, DiagnosticCode::UsePluralParameters), 0);
}

#[test]
fn test_both_checks_fire_together() {
    let input = r#"
/// Style and return are both wrong.
///
/// - Parameter a: First.
/// - Parameter b: Second.
func pair(a: Int, b: Int) -> Int {}
"#;
    let report = lint(input);

    assert_eq!(
        diagnostics(&report),
        vec![
            Diagnostic::UsePluralParameters,
            Diagnostic::DocumentReturnValue {
                name: "pair".to_string()
            },
        ]
    );
}

#[test]
fn test_initializers_and_labels() {
    let input = r#"
struct Shell {
  /// Creates a shell.
  ///
  /// - Parameters:
  ///   - path: Executable path.
  ///   - arguments: Launch arguments.
  init(at path: String, with arguments: [String]) {}

  /// Creates a shell from a single path.
  ///
  /// - Parameter path: Executable path.
  /// - Returns: Nothing useful.
  public init?(_ path: String) {}
}
"#;
    let report = lint(input);

    assert_eq!(
        diagnostics(&report),
        vec![Diagnostic::RemoveReturnComment {
            name: "init".to_string()
        }]
    );
    assert_eq!(report.findings[0].line, 14);
}

#[test]
fn test_undocumented_declarations_are_not_judged() {
    let input = r#"
func undocumented(a: Int, b: Int) -> Int {}

// A plain comment, not documentation.
func plain(a: Int) -> Int {}
"#;
    assert!(lint(input).is_clean());
}

#[test]
fn test_where_clause_after_void_return() {
    let input = r#"
/// Compares a value.
///
/// - Parameter a: The value.
func f<T>(a: T) -> Void
where T: Equatable {}
"#;
    assert!(lint(input).is_clean());
}
