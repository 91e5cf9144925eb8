//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Levantan un servidor real en un puerto efímero dentro del proceso de
//! test y hablan con él por TCP, igual que lo haría un cliente externo.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use web_server::config::Config;
use web_server::handlers::static_file_handler;
use web_server::http::{Method, Response};
use web_server::router::{PathPattern, Router};
use web_server::server::Server;

/// Arranca el servidor una sola vez y retorna su dirección
fn server_addr() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();

    *ADDR.get_or_init(|| {
        // Directorio www temporal con un index.html
        let www = std::env::temp_dir().join(format!("web_server_it_www_{}", std::process::id()));
        std::fs::create_dir_all(&www).unwrap();
        std::fs::write(www.join("index.html"), b"<h1>Bienvenido</h1>").unwrap();
        std::fs::write(www.join("about.html"), b"<p>about</p>").unwrap();

        let mut router = Router::new();
        router.add_route(
            Method::GET,
            PathPattern::literal("/api/test"),
            Box::new(|_req| {
                let mut response = Response::ok_with_body(b"{\"ok\":true}".to_vec());
                response
                    .headers_mut()
                    .set("Content-Type", "application/json");
                response
            }),
        );
        router.add_route(
            Method::POST,
            PathPattern::literal("/echo"),
            Box::new(|req| Response::ok_with_body(req.body().to_vec())),
        );
        router.set_default_handler(static_file_handler(www.to_str().unwrap()));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Server::new(Config::default(), router);
        thread::spawn(move || {
            server.run_on(listener).unwrap();
        });

        addr
    })
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(raw: &[u8]) -> String {
    let mut stream = TcpStream::connect(server_addr()).expect("connect");

    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(raw).unwrap();
    stream.flush().unwrap();
    stream.shutdown(std::net::Shutdown::Write).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();

    response
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    if let Some(pos) = response.find("\r\n\r\n") {
        &response[pos + 4..]
    } else {
        ""
    }
}

#[test]
fn test_registered_route() {
    let response = send_raw(b"GET /api/test HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", response);
    assert!(response.contains("Content-Type: application/json\r\n"));
    assert_eq!(extract_body(&response), "{\"ok\":true}");
}

#[test]
fn test_registered_route_with_trailing_slash() {
    // Un literal acepta exactamente una '/' final
    let response = send_raw(b"GET /api/test/ HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_route_method_mismatch_falls_through() {
    // /echo solo está registrado para POST; GET cae al handler de
    // archivos estáticos y no hay echo.html
    let response = send_raw(b"GET /echo HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_echo_with_content_length_body() {
    let response = send_raw(b"POST /echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(extract_body(&response), "hello");
}

#[test]
fn test_echo_with_chunked_body() {
    let response = send_raw(
        b"POST /echo HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nHello\r\n11\r\n there Ivan\r\n0\r\n",
    );

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(extract_body(&response), "Hello there Ivan");
}

#[test]
fn test_static_index() {
    let response = send_raw(b"GET / HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(extract_body(&response), "<h1>Bienvenido</h1>");
}

#[test]
fn test_static_file() {
    let response = send_raw(b"GET /about.html HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(extract_body(&response), "<p>about</p>");
}

#[test]
fn test_static_missing_file_is_404() {
    let response = send_raw(b"GET /nonexistent.html HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_traversal_does_not_escape_www() {
    // La limpieza léxica deja el path dentro de la raíz
    let response = send_raw(b"GET /../../etc/passwd HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_malformed_request_is_400() {
    let response = send_raw(b"garbage\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[test]
fn test_unknown_method_is_400() {
    let response = send_raw(b"BREW /coffee HTTP/1.1\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[test]
fn test_unsupported_transfer_encoding_is_400() {
    let response = send_raw(b"POST /echo HTTP/1.1\r\nTransfer-Encoding: gzip\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[test]
fn test_truncated_body_is_400() {
    let response = send_raw(b"POST /echo HTTP/1.1\r\nContent-Length: 12\r\n\r\nonly 6");

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
}

#[test]
fn test_multiple_requests_sequentially() {
    // Una conexión por request: el servidor cierra después de responder
    for i in 0..5 {
        let response = send_raw(b"GET /api/test HTTP/1.1\r\n\r\n");
        assert!(response.contains("200 OK"), "Request {} failed", i);
    }
}

#[test]
fn test_concurrent_clients() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let response = send_raw(b"GET /api/test HTTP/1.1\r\n\r\n");
                assert!(response.contains("200 OK"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
