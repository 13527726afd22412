//! Example showing how to build, serialize and parse messages.
use sendreq::{request::Request, response::Response};

fn main() -> anyhow::Result<()> {
    // Build a request. The `Host` header is always added and header keys are
    // stored in title case.
    let request = Request::new("POST", "/submit", "example.com", "name=value")?
        .with_header("content-type", "application/x-www-form-urlencoded");

    // Serialize into wire text
    let wire = request.to_string();
    print!("{}", wire);

    // And back again
    let parsed = Request::parse(&wire)?;
    assert_eq!(parsed, request);

    // Responses default an empty body to the reason phrase
    let response = Response::new(404, "")?;
    print!("{}", response);

    let parsed = Response::parse(&response.to_string())?;
    println!("Status: {} Body: {}", parsed.status_code, parsed.body);

    Ok(())
}
