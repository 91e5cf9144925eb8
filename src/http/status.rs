//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Tabla inmutable código → reason phrase. Se cubren los códigos que el
//! servidor emite por sí mismo (200, 202, 400, 404, 500); un código fuera
//! de la tabla serializa sin reason phrase.

/// Retorna el reason phrase de un código de estado conocido
///
/// # Ejemplo
/// ```
/// use web_server::http::status::reason_phrase;
///
/// assert_eq!(reason_phrase(200), Some("OK"));
/// assert_eq!(reason_phrase(404), Some("Not Found"));
/// assert_eq!(reason_phrase(999), None);
/// ```
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    match code {
        200 => Some("OK"),
        202 => Some("Accepted"),
        400 => Some("Bad Request"),
        404 => Some("Not Found"),
        500 => Some("Internal Server Error"),
        _ => None,
    }
}

/// Compone la status line completa para un código
///
/// Formato: `HTTP/1.1 200 OK\r\n`. Para códigos fuera de la tabla se
/// emite solo el número: `HTTP/1.1 299\r\n`.
pub fn status_line(code: u16) -> String {
    match reason_phrase(code) {
        Some(reason) => format!("HTTP/1.1 {} {}\r\n", code, reason),
        None => format!("HTTP/1.1 {}\r\n", code),
    }
}
