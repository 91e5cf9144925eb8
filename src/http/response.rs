//! # Construcción y Serialización de Responses
//! src/http/response.rs
//!
//! API para construir respuestas HTTP de forma programática y
//! serializarlas a bytes listos para el socket.
//!
//! ## Formato en el wire
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! \r\n
//! {"ok": true}
//! ```
//!
//! El serializador no inyecta nada: emite exactamente el status, los
//! headers que el handler puso (en orden de mapa, no de inserción) y el
//! body crudo. `Content-Length` es responsabilidad del handler.

use super::headers::Headers;
use super::status;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: u16,

    /// Headers de la respuesta
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con el código dado, sin headers ni body
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Crea una respuesta con el código y body dados
    pub fn with_body(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body,
        }
    }

    // === Factories para los códigos que el servidor usa por sí mismo ===

    /// Respuesta 200 OK sin body
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Respuesta 200 OK con el body dado
    pub fn ok_with_body(body: Vec<u8>) -> Self {
        Self::with_body(200, body)
    }

    /// Respuesta 400 Bad Request sin body
    pub fn bad_request() -> Self {
        Self::new(400)
    }

    /// Respuesta 400 Bad Request con el body dado
    pub fn bad_request_with_body(body: Vec<u8>) -> Self {
        Self::with_body(400, body)
    }

    /// Respuesta 404 Not Found sin body
    pub fn not_found() -> Self {
        Self::new(404)
    }

    /// Respuesta 404 Not Found con el body dado
    pub fn not_found_with_body(body: Vec<u8>) -> Self {
        Self::with_body(404, body)
    }

    /// Respuesta 500 Internal Server Error sin body
    pub fn internal_error() -> Self {
        Self::new(500)
    }

    /// Respuesta 500 Internal Server Error con el body dado
    pub fn internal_error_with_body(body: Vec<u8>) -> Self {
        Self::with_body(500, body)
    }

    // === Accessors / mutators ===

    /// Obtiene el código de estado
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Cambia el código de estado
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Obtiene los headers (solo lectura)
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene los headers para mutarlos
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::Response;
    ///
    /// let mut response = Response::ok();
    /// response.headers_mut().set("Content-Type", "application/json");
    ///
    /// assert_eq!(response.headers().get("content-type"), Some("application/json"));
    /// ```
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Obtiene el body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Reemplaza el body
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Serializa la respuesta a bytes listos para el socket
    ///
    /// Emite la status line (desde la tabla inmutable de
    /// [`super::status`]), cada header como `Name: Value\r\n`, una línea
    /// en blanco y el body crudo.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        result.extend_from_slice(status::status_line(self.status).as_bytes());

        // 2. Headers (orden de mapa, sin garantías)
        for (name, value) in self.headers.iter() {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea en blanco que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(202);
        assert_eq!(response.status(), 202);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_factories() {
        assert_eq!(Response::ok().status(), 200);
        assert_eq!(Response::bad_request().status(), 400);
        assert_eq!(Response::not_found().status(), 404);
        assert_eq!(Response::internal_error().status(), 500);
    }

    #[test]
    fn test_factories_with_body() {
        let response = Response::ok_with_body(b"hola".to_vec());
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"hola");

        let response = Response::not_found_with_body(b"nope".to_vec());
        assert_eq!(response.status(), 404);
        assert_eq!(response.body(), b"nope");
    }

    #[test]
    fn test_set_status_and_body() {
        let mut response = Response::internal_error();
        response.set_status(200);
        response.set_body(b"listo".to_vec());

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"listo");
    }

    #[test]
    fn test_headers_mut() {
        let mut response = Response::ok();
        response.headers_mut().set("X-Custom", "value");
        response.headers_mut().set("x-custom", "replaced");

        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.headers().get("X-CUSTOM"), Some("replaced"));
    }

    #[test]
    fn test_to_bytes_exact_wire_format() {
        let mut response = Response::with_body(200, b"X".to_vec());
        response.headers_mut().set("Content-Type", "text/plain");

        let bytes = response.to_bytes();
        assert_eq!(
            bytes,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nX"
        );
    }

    #[test]
    fn test_to_bytes_without_headers_or_body() {
        let response = Response::not_found();
        let bytes = response.to_bytes();

        assert_eq!(bytes, b"HTTP/1.1 404 Not Found\r\n\r\n");
    }

    #[test]
    fn test_to_bytes_unknown_status_code() {
        let response = Response::new(299);
        let bytes = response.to_bytes();

        // Código fuera de la tabla: status line sin reason phrase
        assert_eq!(bytes, b"HTTP/1.1 299\r\n\r\n");
    }

    #[test]
    fn test_to_bytes_binary_body() {
        let binary = vec![0x00, 0x01, 0xFF];
        let response = Response::ok_with_body(binary.clone());
        let bytes = response.to_bytes();

        assert!(bytes.ends_with(&binary));
    }
}
