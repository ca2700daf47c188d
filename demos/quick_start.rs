use outcome_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum AppError {
    Parse(String),
    Range(String),
}

impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        AppError::Range(err.into())
    }
}

fn parse_port(raw: &str) -> Outcome<u16, AppError> {
    Outcome::from_result(
        raw.trim()
            .parse::<u16>()
            .map_err(|e| AppError::Parse(format!("{raw:?}: {e}"))),
    )
}

fn configured_port(raw: &str) -> Outcome<u16, AppError> {
    // Reserved ports are a configuration mistake, not a parse failure.
    parse_port(raw).guard(|port| *port >= 1024)
}

fn main() {
    println!("Running quick start examples...");

    // 1. Chaining: failures skip every later step.
    println!("\n1. Chaining:");
    for raw in ["8080", "not-a-port", "80"] {
        match configured_port(raw) {
            Outcome::Ok(port) => println!("  {raw:?} -> listening on {port}"),
            Outcome::Err(err) => println!("  {raw:?} -> rejected: {err:?}"),
        }
    }

    // 2. Recovery: err_then re-enters the success track.
    println!("\n2. Recovery:");
    let port = configured_port("bogus")
        .err_then(|_| Ok::<_, AppError>(8080u16))
        .value()
        .to_owned();
    println!("  falling back to default port {port}");

    // 3. Aggregation: all succeeds only when every input does.
    println!("\n3. Aggregation:");
    let batch = all(["8080", "9090", "443"].into_iter().map(configured_port));
    match batch {
        Outcome::Ok(ports) => println!("  every port ok: {ports:?}"),
        Outcome::Err(err) => println!("  batch rejected: {err:?}"),
    }
}
