use std::{
    net::{Shutdown, TcpListener, TcpStream},
    thread,
};

use sendreq::{io::read_message, request::Request, response::Response};

fn serve_once(listener: TcpListener) -> anyhow::Result<Request> {
    let (mut stream, _address) = listener.accept()?;

    let raw = read_message(&mut stream)?;
    let request = Request::parse(&raw)?;

    let body = format!("{} {}", request.method, request.path);
    let response = Response::new(200, body)?.with_header("content-type", "text/plain");
    response.write_to(&mut stream)?;

    Ok(request)
}

#[tracing_test::traced_test]
#[test]
fn test_loopback_exchange() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = thread::spawn(move || serve_once(listener));

    let request = Request::new("POST", "/echo", "localhost", "ping")
        .unwrap()
        .with_header("user-agent", "test");

    let mut stream = TcpStream::connect(address).unwrap();
    let write_len = request.write_to(&mut stream).unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    assert_eq!(write_len, request.to_bytes().len() as u64);

    let raw = read_message(&mut stream).unwrap();
    let response = Response::parse(&raw).unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(response.headers.get("Content-Length"), Some("10"));
    assert_eq!(response.body, "POST /echo");

    let received = server.join().unwrap().unwrap();

    assert_eq!(received, request);
}

#[test]
fn test_loopback_rejects_request_without_host() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = thread::spawn(move || serve_once(listener));

    let mut stream = TcpStream::connect(address).unwrap();
    std::io::Write::write_all(&mut stream, b"GET / HTTP/1.1\r\nAccept: */*\r\n\r\n\r\n").unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let error = server.join().unwrap().unwrap_err();
    let error = error
        .downcast_ref::<sendreq::error::ParseError>()
        .unwrap();

    assert_eq!(
        error.kind(),
        sendreq::error::ParseErrorKind::MissingHostHeader
    );
}
