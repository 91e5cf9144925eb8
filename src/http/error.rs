//! # Errores de Parsing HTTP
//! src/http/error.rs
//!
//! Taxonomía de errores que pueden ocurrir mientras se parsea un request
//! desde el stream de bytes. Todos se contienen en el dispatcher de
//! conexiones y degradan a una respuesta 400 en el wire: nunca tumban
//! el proceso.

/// Errores que pueden ocurrir durante el parsing de un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Start line ilegible o malformada (menos de dos tokens)
    InvalidRequest,

    /// Método HTTP no reconocido
    InvalidMethod(String),

    /// Header malformado, o Content-Length no numérico
    InvalidHeader(String),

    /// Body truncado o malformado (chunked o fixed-length)
    InvalidBody,

    /// Valor de Transfer-Encoding no soportado (solo "chunked")
    UnsupportedBody(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRequest => write!(f, "the request is in the incorrect format"),
            ParseError::InvalidMethod(m) => write!(f, "invalid method: {}", m),
            ParseError::InvalidHeader(h) => write!(f, "the header was not in the correct format: {}", h),
            ParseError::InvalidBody => write!(f, "body was invalid"),
            ParseError::UnsupportedBody(v) => write!(f, "body format is not supported: {}", v),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseError::InvalidRequest.to_string(),
            "the request is in the incorrect format"
        );
        assert_eq!(
            ParseError::InvalidMethod("BREW".to_string()).to_string(),
            "invalid method: BREW"
        );
        assert_eq!(ParseError::InvalidBody.to_string(), "body was invalid");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_e: E) {}
        assert_error(ParseError::InvalidBody);
    }
}
