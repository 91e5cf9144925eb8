//! # Decodificación del Body
//! src/http/body.rs
//!
//! Selección de estrategia y extracción de bytes del body de un request.
//! El orden de decisión se evalúa una sola vez por request:
//!
//! 1. Hay `Transfer-Encoding`: solo se soporta el valor `chunked`
//!    (case-insensitive); cualquier otro valor falla con `UnsupportedBody`.
//! 2. Si no, hay `Content-Length`: lectura de largo fijo.
//! 3. Si no: el body es vacío (no es un error).
//!
//! Las líneas de tamaño de chunk se interpretan como enteros **decimales**,
//! no hexadecimales como pide el RFC 7230. Es una divergencia deliberada
//! que se conserva del diseño original (ver DESIGN.md).

use super::error::ParseError;
use super::headers::Headers;
use std::io::BufRead;

/// Extrae el body de un request según sus headers
///
/// Retorna un vector vacío cuando no hay `Transfer-Encoding` ni
/// `Content-Length`.
pub fn decode_body<R: BufRead>(headers: &Headers, reader: &mut R) -> Result<Vec<u8>, ParseError> {
    // Primero chunked, i.e. Transfer-Encoding: chunked
    if let Some(transfer_encoding) = headers.get("Transfer-Encoding") {
        if transfer_encoding.eq_ignore_ascii_case("chunked") {
            return decode_chunked(reader);
        }

        // No soportamos ningún otro valor de Transfer-Encoding
        return Err(ParseError::UnsupportedBody(transfer_encoding.to_string()));
    }

    // Luego intentamos por Content-Length
    if let Some(content_length) = headers.get("Content-Length") {
        return decode_fixed_length(content_length, reader);
    }

    // Asumimos que no se envió body
    Ok(Vec::new())
}

/// Decodifica un body con chunked transfer encoding
///
/// Cada chunk es una línea con el tamaño en decimal seguida de esa
/// cantidad exacta de bytes y un terminador de línea. Un tamaño `0`
/// (o una línea vacía) termina el body.
fn decode_chunked<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, ParseError> {
    let mut body = Vec::new();

    let mut chunk_length_str = read_line(reader)?;

    while !chunk_length_str.is_empty() && chunk_length_str != "0" {
        let chunk_length: usize = chunk_length_str
            .parse()
            .map_err(|_| ParseError::InvalidBody)?;

        // Leer exactamente el chunk anunciado
        let mut chunk = vec![0u8; chunk_length];
        reader
            .read_exact(&mut chunk)
            .map_err(|_| ParseError::InvalidBody)?;
        body.extend_from_slice(&chunk);

        // Consumir el \r\n que sigue al chunk
        read_line(reader)?;

        // Leer el tamaño del siguiente chunk
        chunk_length_str = read_line(reader)?;
    }

    Ok(body)
}

/// Decodifica un body de largo fijo según Content-Length
fn decode_fixed_length<R: BufRead>(
    content_length: &str,
    reader: &mut R,
) -> Result<Vec<u8>, ParseError> {
    let content_length: usize = content_length
        .parse()
        .map_err(|_| ParseError::InvalidHeader(format!("Content-Length: {}", content_length)))?;

    let mut body = vec![0u8; content_length];
    reader
        .read_exact(&mut body)
        .map_err(|_| ParseError::InvalidBody)?;

    Ok(body)
}

/// Lee una línea y la retorna sin el terminador ni espacios
///
/// Un stream agotado cuenta como body malformado: el terminador `0`
/// tiene que llegar antes del EOF.
fn read_line<R: BufRead>(reader: &mut R) -> Result<String, ParseError> {
    let mut line = String::new();
    let bytes_read = reader
        .read_line(&mut line)
        .map_err(|_| ParseError::InvalidBody)?;

    if bytes_read == 0 {
        return Err(ParseError::InvalidBody);
    }

    Ok(line.trim().to_string())
}
