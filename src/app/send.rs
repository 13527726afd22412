use std::{
    io::Write,
    net::{TcpStream, ToSocketAddrs},
};

use anyhow::Context;

use crate::{io::read_message, request::Request, response::Response};

use super::arg::Args;

const USER_AGENT: &str = concat!("sendreq/", env!("CARGO_PKG_VERSION"));

pub fn send(args: &Args) -> anyhow::Result<()> {
    let span = tracing::info_span!("send", host = args.host.as_str(), port = args.port);
    let _span_guard = span.enter();

    let request = build_request(args)?;

    let address = (args.host.as_str(), args.port)
        .to_socket_addrs()
        .context("resolving address failed")?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no addresses found for {}", args.host))?;

    let mut stream = TcpStream::connect(address).context("connecting failed")?;

    tracing::info!(%address, "connected");

    let write_len = request
        .write_to(&mut stream)
        .context("sending request failed")?;
    stream.flush()?;

    tracing::info!(write_len, "sent request");

    let raw = read_message(&mut stream).context("reading response failed")?;
    let response = Response::parse(&raw).context("parsing response failed")?;

    tracing::info!(status_code = response.status_code, "received response");

    let mut stdout = std::io::stdout().lock();
    response.write_to(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn build_request(args: &Args) -> anyhow::Result<Request> {
    let request = Request::new(&args.method, &args.path, &args.host, &args.body)
        .context("invalid request")?
        .with_header("User-Agent", USER_AGENT)
        .with_header("Connection", "close");

    Ok(request)
}
