//! # Patrones de Path
//! src/router/path.rs
//!
//! Un patrón de path es un predicado sobre el path crudo del request.
//! Tres variantes, una sola capacidad (`matches`):
//!
//! - `literal`: el path exacto, opcionalmente con una `/` final
//! - `regex`: un patrón arbitrario, anclado como lo entregue el caller
//! - `any`: cualquier path no vacío
//!
//! No se hace ninguna normalización: ni case-folding, ni percent-decoding,
//! ni separación de query strings. El caller pre-normaliza si lo necesita.

use regex::Regex;

/// Patrón compilado sobre el path completo del request
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Path literal con anclaje implícito al final
    Literal(Regex),

    /// Regex arbitraria provista por el usuario
    Pattern(Regex),

    /// Cualquier path no vacío
    Any,
}

impl PathPattern {
    /// Crea un patrón que matchea exactamente `path`, con a lo sumo una
    /// `/` final
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::router::PathPattern;
    ///
    /// let pattern = PathPattern::literal("/api/test");
    /// assert!(pattern.matches("/api/test"));
    /// assert!(pattern.matches("/api/test/"));
    /// assert!(!pattern.matches("/api/test/x"));
    /// assert!(!pattern.matches("/api/tes"));
    /// ```
    pub fn literal(path: &str) -> Self {
        // regex::escape neutraliza cualquier metacaracter del path
        let regex = Regex::new(&format!("^{}/?$", regex::escape(path)))
            .expect("un path escapado siempre compila");

        PathPattern::Literal(regex)
    }

    /// Crea un patrón desde una regex ya compilada
    pub fn regex(regex: Regex) -> Self {
        PathPattern::Pattern(regex)
    }

    /// Crea un patrón que matchea cualquier path no vacío
    pub fn any() -> Self {
        PathPattern::Any
    }

    /// Evalúa el predicado sobre un path
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Literal(regex) => regex.is_match(path),
            PathPattern::Pattern(regex) => regex.is_match(path),
            PathPattern::Any => !path.is_empty(),
        }
    }
}
