//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.1 directamente sobre bytes,
//! sin librerías de alto nivel. Incluye:
//!
//! - Parsing de requests desde cualquier `BufRead`
//! - Decodificación de bodies (chunked / Content-Length / vacío)
//! - Construcción y serialización de responses
//! - Tabla de status codes
//!
//! ## Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! body opcional
//! ```
//!
//! ## Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! \r\n
//! {"ok": true}
//! ```
//!
//! Cada conexión transporta exactamente un request y una response: no hay
//! keep-alive, pipelining ni TLS.

pub mod body;      // Decodificación del body (chunked / fixed-length)
pub mod error;     // Taxonomía de errores de parsing
pub mod headers;   // Header store case-insensitive
pub mod method;    // Métodos HTTP + comodín
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción y serialización de responses
pub mod status;    // Tabla código → reason phrase

// Re-exportamos los tipos principales para facilitar su uso
pub use error::ParseError;
pub use headers::Headers;
pub use method::Method;
pub use request::Request;
pub use response::Response;
