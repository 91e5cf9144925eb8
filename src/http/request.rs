//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo convierte un stream de bytes en un request estructurado.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /ruta HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! La versión HTTP se lee pero no se valida. El path se guarda crudo,
//! query string incluida: el servidor no parsea query strings.

use super::body::decode_body;
use super::error::ParseError;
use super::headers::Headers;
use super::method::Method;
use std::io::BufRead;

/// Representa un request HTTP parseado
///
/// Inmutable una vez parseado; cada conexión es dueña exclusiva del suyo.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path crudo de la petición (ej: "/api/person")
    path: String,

    /// Headers del request
    headers: Headers,

    /// Body del request (puede ser vacío)
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request HTTP desde cualquier `BufRead`
    ///
    /// # Errores
    ///
    /// * `InvalidRequest` - start line ilegible o con menos de dos tokens
    /// * `InvalidMethod` - método fuera del conjunto soportado
    /// * `InvalidHeader` - línea de header malformada o lectura fallida
    /// * `InvalidBody` / `UnsupportedBody` - ver [`super::body`]
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{Method, Request};
    ///
    /// let raw: &[u8] = b"GET /hello HTTP/1.1\r\nHost: h\r\n\r\n";
    /// let request = Request::parse(&mut &raw[..]).unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.path(), "/hello");
    /// ```
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        // Leer la start line con el método y el path
        let mut start_line = String::new();
        let bytes_read = reader
            .read_line(&mut start_line)
            .map_err(|_| ParseError::InvalidRequest)?;

        if bytes_read == 0 {
            return Err(ParseError::InvalidRequest);
        }

        let (method, path) = Self::parse_start_line(start_line.trim())?;

        let headers = Self::parse_headers(reader)?;

        let body = decode_body(&headers, reader)?;

        Ok(Request {
            method,
            path,
            headers,
            body,
        })
    }

    /// Parsea la start line: `METHOD SP PATH SP VERSION`
    ///
    /// Con menos de dos tokens el request es malformado; el tercer token
    /// (la versión) se ignora.
    fn parse_start_line(line: &str) -> Result<(Method, String), ParseError> {
        let mut parts = line.split(' ');

        let method_token = parts.next().ok_or(ParseError::InvalidRequest)?;
        let path = parts.next().ok_or(ParseError::InvalidRequest)?;

        if method_token.is_empty() || path.is_empty() {
            return Err(ParseError::InvalidRequest);
        }

        let method: Method = method_token.parse()?;

        Ok((method, path.to_string()))
    }

    /// Parsea las líneas de headers hasta la primera línea en blanco
    ///
    /// Cada línea tiene formato `Name: Value`; una línea que al separar
    /// por `": "` no produzca exactamente dos partes es inválida, igual
    /// que una lectura que falle antes de llegar a la línea en blanco.
    fn parse_headers<R: BufRead>(reader: &mut R) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();

        loop {
            let mut raw_line = String::new();
            let bytes_read = reader
                .read_line(&mut raw_line)
                .map_err(|_| ParseError::InvalidHeader(raw_line.clone()))?;

            // EOF antes de la línea en blanco
            if bytes_read == 0 {
                return Err(ParseError::InvalidHeader(String::new()));
            }

            let line = raw_line.trim();
            if line.is_empty() {
                break;
            }

            let parts: Vec<&str> = line.split(": ").collect();
            if parts.len() != 2 {
                return Err(ParseError::InvalidHeader(line.to_string()));
            }

            headers.set(parts[0], parts[1].trim());
        }

        Ok(headers)
    }

    // === Accessors ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path crudo del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene los headers del request (solo lectura)
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Obtiene el body del request como String
    pub fn body_as_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
