//! Example showing how to send a request over TCP and parse the reply.
//!
//! Usage: `cargo run --example fetch -- example.com 80 /`
use std::net::TcpStream;

use sendreq::{io::read_message, request::Request, response::Response};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let port = args.next().map(|p| p.parse()).transpose()?.unwrap_or(8080u16);
    let path = args.next().unwrap_or_else(|| "/".to_string());

    let request = Request::new("GET", path, host.as_str(), "")?.with_header("connection", "close");

    let mut stream = TcpStream::connect((host.as_str(), port))?;
    request.write_to(&mut stream)?;

    // The server closes the connection after replying, so read to the end
    let raw = read_message(&mut stream)?;
    let response = Response::parse(&raw)?;

    println!("Status: {}", response.status_code);
    for header in &response.headers {
        println!("{}", header);
    }
    println!();
    println!("{}", response.body);

    Ok(())
}
