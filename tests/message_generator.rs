use rand::Rng;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};
use sendreq::{request::Request, response::Response};

const KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";
const WORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TEXT_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 :;,./-_=+*!?\"'()[]{}<>";
const METHODS: &[&str] = &["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"];

pub fn new_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

fn random_string<R: Rng>(rng: &mut R, chars: &[u8], min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..=max_len);

    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}

/// Header key of letters, digits, `-` and `_` in random case.
pub fn random_key<R: Rng>(rng: &mut R) -> String {
    random_string(rng, KEY_CHARS, 1, 24)
}

fn random_value<R: Rng>(rng: &mut R) -> String {
    random_string(rng, TEXT_CHARS, 0, 40)
}

/// Body made of CRLF separated lines. Lines may be empty or padded.
fn random_body<R: Rng>(rng: &mut R) -> String {
    let line_count = rng.random_range(0..5);

    (0..line_count)
        .map(|_| random_string(rng, TEXT_CHARS, 0, 60))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Body without surrounding whitespace.
fn random_trimmed_body<R: Rng>(rng: &mut R) -> String {
    if rng.random_bool(0.2) {
        return String::new();
    }

    let inner = random_body(rng);

    format!(
        "{}{}{}",
        random_string(rng, WORD_CHARS, 1, 1),
        inner,
        random_string(rng, WORD_CHARS, 1, 1)
    )
}

fn add_random_headers<R: Rng>(rng: &mut R, headers: &mut sendreq::header::Headers) {
    let count = rng.random_range(0..6);

    for _ in 0..count {
        headers.append(random_key(rng), random_value(rng));
    }
}

pub fn generate_request(seed: u64) -> Request {
    let mut rng = new_rng(seed);

    let method = METHODS[rng.random_range(0..METHODS.len())];
    let path = format!("/{}", random_string(&mut rng, WORD_CHARS, 0, 20));
    let host = random_string(&mut rng, WORD_CHARS, 1, 16);
    let body = random_body(&mut rng);

    let mut request = Request::new(method, path, host, body).unwrap();
    add_random_headers(&mut rng, &mut request.headers);

    request
}

pub fn generate_response(seed: u64) -> Response {
    let mut rng = new_rng(seed);

    let status_code = rng.random_range(100..=599);
    let body = random_trimmed_body(&mut rng);

    let mut response = Response::new(status_code, body).unwrap();
    add_random_headers(&mut rng, &mut response.headers);

    response
}
