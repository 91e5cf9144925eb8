//! # Métodos HTTP
//! src/http/method.rs
//!
//! Este módulo define el conjunto cerrado de métodos HTTP que entiende
//! el servidor, más el comodín `Any` (`*`) que usan las rutas para
//! aceptar cualquier método.

use super::error::ParseError;

/// Métodos HTTP soportados
///
/// El parsing es case-insensitive: `"get"`, `"Get"` y `"GET"` producen
/// el mismo valor. `Any` corresponde al token `*` y solo tiene sentido
/// al registrar rutas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// HEAD - Como GET pero solo retorna headers
    HEAD,

    /// POST - Enviar datos a un recurso
    POST,

    /// PUT - Reemplazar un recurso
    PUT,

    /// DELETE - Eliminar un recurso
    DELETE,

    /// CONNECT - Establecer un túnel
    CONNECT,

    /// OPTIONS - Consultar métodos disponibles
    OPTIONS,

    /// TRACE - Echo de diagnóstico
    TRACE,

    /// PATCH - Modificación parcial de un recurso
    PATCH,

    /// `*` - Comodín usado por rutas que aceptan cualquier método
    Any,
}

impl Method {
    /// Convierte el método a su token en el wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::CONNECT => "CONNECT",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
            Method::PATCH => "PATCH",
            Method::Any => "*",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = ParseError;

    /// Parsea un método HTTP desde un token, ignorando mayúsculas
    ///
    /// # Errores
    ///
    /// Retorna `ParseError::InvalidMethod` si el token no pertenece al
    /// conjunto soportado.
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::Method;
    ///
    /// let method: Method = "get".parse().unwrap();
    /// assert_eq!(method, Method::GET);
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "CONNECT" => Ok(Method::CONNECT),
            "OPTIONS" => Ok(Method::OPTIONS),
            "TRACE" => Ok(Method::TRACE),
            "PATCH" => Ok(Method::PATCH),
            "*" => Ok(Method::Any),
            _ => Err(ParseError::InvalidMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
