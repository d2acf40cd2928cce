// exprcalc: arithmetic expression evaluator with interactive variables

use std::io::{self, Write};
use std::process;

use exprcalc::interpreter::engine::Evaluator;
use exprcalc::interpreter::errors::EvalError;
use exprcalc::interpreter::variables::{VariableCache, VariableResolver};
use exprcalc::parser::ParseOptions;
use exprcalc::ui::{self, prompt::PromptResolver};

/// Command-line configuration
#[derive(Debug, Default)]
struct Options {
    strict: bool,
    show_ast: bool,
    variables: VariableCache,
    expression: Option<String>,
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--strict] [--ast] [--var NAME=VALUE]... [EXPRESSION...]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict          Reject missing ')' and missing operands");
    eprintln!("  --ast             Print the parsed expression tree before the value");
    eprintln!("  --var NAME=VALUE  Give a variable its value up front");
    eprintln!();
    eprintln!("Without an expression, reads expressions line by line from stdin.");
    eprintln!("Unknown variables are asked for once and remembered.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '2 ^ 3 + sqrt(16)'", program_name);
    eprintln!("  {} --var r=2 '3.14159 * r ^ 2'", program_name);
}

fn parse_variable(assignment: &str) -> Result<(String, f64), String> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", assignment))?;

    if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_lowercase()) {
        return Err(format!("Variable names are lowercase letters only, got '{}'", name));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Value for '{}' is not a number: '{}'", name, value))?;

    Ok((name.to_string(), value))
}

fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--strict" => options.strict = true,
            "--ast" => options.show_ast = true,
            "--var" => {
                let assignment = iter
                    .next()
                    .ok_or_else(|| "--var needs NAME=VALUE".to_string())?;
                let (name, value) = parse_variable(assignment)?;
                options.variables.insert(name, value);
            }
            // Everything after `--` is expression text, even if it starts with '-'
            "--" => {
                words.extend(iter.by_ref().cloned());
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{}'", other));
            }
            other => words.push(other.to_string()),
        }
    }

    if !words.is_empty() {
        options.expression = Some(words.join(" "));
    }
    Ok(Some(options))
}

/// Parse, optionally print the tree, then evaluate.
///
/// Returns `Ok(false)` when the expression failed; write errors on either
/// stream are passed up.
fn run_once<R: VariableResolver>(
    evaluator: &mut Evaluator<R>,
    expression: &str,
    show_ast: bool,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> io::Result<bool> {
    let expr = match evaluator.parse(expression) {
        Ok(expr) => expr,
        Err(err) => return report_failure(err_out, expression, &err.into()),
    };
    if show_ast {
        ui::print_ast(out, &expr)?;
    }

    match evaluator.evaluate_expr(&expr) {
        Ok(value) => {
            ui::print_result(out, value)?;
            Ok(true)
        }
        Err(err) => report_failure(err_out, expression, &err),
    }
}

fn report_failure(err_out: &mut impl Write, expression: &str, err: &EvalError) -> io::Result<bool> {
    log::debug!("evaluation of {:?} failed: {:?}", expression, err);
    ui::print_error(err_out, expression, err)?;
    Ok(false)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("exprcalc");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Some(options)) => options,
        Ok(None) => {
            usage(program_name);
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            usage(program_name);
            process::exit(2);
        }
    };

    let parse_options = ParseOptions {
        strict: options.strict,
    };
    let mut evaluator = Evaluator::with_variables(options.variables, PromptResolver::stdio())
        .with_options(parse_options);

    if let Some(expression) = options.expression {
        if !run_once(
            &mut evaluator,
            &expression,
            options.show_ast,
            &mut io::stdout(),
            &mut io::stderr(),
        )? {
            process::exit(1);
        }
        return Ok(());
    }

    // Interactive session: the cache carries over from line to line
    writeln!(io::stdout(), "Enter expression:")?;
    loop {
        evaluator.resolver_mut().prompt("> ")?;
        let line = match evaluator.resolver_mut().read_line()? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() || line == "exit" || line == "quit" {
            break;
        }
        run_once(
            &mut evaluator,
            line,
            options.show_ast,
            &mut io::stdout(),
            &mut io::stderr(),
        )?;
    }

    log::debug!("session ended with variables {:?}", evaluator.into_variables().sorted());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprcalc::interpreter::variables::{NoVariables, ScriptedResolver};

    /// Writer that fails every write, like a closed pipe
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_expression_words_are_joined() {
        let options = parse_args(&args(&["2", "+", "3"])).unwrap().unwrap();
        assert_eq!(options.expression.as_deref(), Some("2 + 3"));
        assert!(!options.strict);
    }

    #[test]
    fn test_flags_and_vars() {
        let options = parse_args(&args(&["--strict", "--ast", "--var", "a=5", "a"]))
            .unwrap()
            .unwrap();
        assert!(options.strict);
        assert!(options.show_ast);
        assert_eq!(options.variables.get("a"), Some(5.0));
        assert_eq!(options.expression.as_deref(), Some("a"));
    }

    #[test]
    fn test_double_dash_allows_leading_minus() {
        let options = parse_args(&args(&["--", "-3", "+", "4"])).unwrap().unwrap();
        assert_eq!(options.expression.as_deref(), Some("-3 + 4"));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--var"])).is_err());
        assert!(parse_args(&args(&["--var", "A=1"])).is_err());
        assert!(parse_args(&args(&["--var", "a=x"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn test_no_expression_means_interactive() {
        let options = parse_args(&[]).unwrap().unwrap();
        assert!(options.expression.is_none());
    }

    #[test]
    fn test_run_once_reports_status() {
        let mut evaluator = Evaluator::new(ScriptedResolver::new().with("a", "5"));
        let (mut out, mut err_out) = (Vec::new(), Vec::new());

        assert!(run_once(&mut evaluator, "a * 2", true, &mut out, &mut err_out).unwrap());
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("(a * 2)"));
        assert!(shown.contains("10"));
        assert!(err_out.is_empty());

        let mut out = Vec::new();
        assert!(!run_once(&mut evaluator, "3 + * 4", false, &mut out, &mut err_out).unwrap());
        assert!(out.is_empty());
        assert!(String::from_utf8(err_out)
            .unwrap()
            .contains("Syntax error: unexpected operator"));
    }

    #[test]
    fn test_run_once_propagates_write_errors() {
        let mut evaluator = Evaluator::new(NoVariables);

        let err = run_once(&mut evaluator, "1 + 2", false, &mut BrokenPipe, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = run_once(&mut evaluator, "1 + 2", true, &mut BrokenPipe, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = run_once(&mut evaluator, "3 + * 4", false, &mut Vec::new(), &mut BrokenPipe)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
