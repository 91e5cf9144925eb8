//! # Header Store
//! src/http/headers.rs
//!
//! Almacén de headers con lookup case-insensitive. Internamente el mapa
//! está indexado por el nombre en minúsculas y conserva el casing
//! original aparte, así el lookup es determinista incluso si llegan
//! headers duplicados con distinto casing (gana el último insertado) y
//! la serialización puede emitir el nombre tal como llegó.
//!
//! Los requests solo exponen `&Headers`, por lo que `set` y `clear`
//! quedan restringidos en la práctica al lado de las responses.

use std::collections::HashMap;

/// Mapa de headers HTTP con claves case-insensitive
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    /// clave en minúsculas → (nombre original, valor)
    map: HashMap<String, (String, String)>,
}

impl Headers {
    /// Crea un almacén vacío
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Obtiene el valor de un header, sin distinguir mayúsculas
    ///
    /// Retorna `None` si el header no existe (la ausencia no es un error).
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.set("Content-Length", "42");
    ///
    /// assert_eq!(headers.get("content-length"), Some("42"));
    /// assert_eq!(headers.get("CONTENT-LENGTH"), Some("42"));
    /// assert_eq!(headers.get("Host"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    /// Verifica si un header existe, sin distinguir mayúsculas
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_lowercase())
    }

    /// Establece el valor de un header
    ///
    /// Si ya existía una entrada con el mismo nombre (en cualquier
    /// casing), se sobrescribe y se conserva el casing nuevo.
    pub fn set(&mut self, name: &str, value: &str) {
        self.map.insert(
            name.to_ascii_lowercase(),
            (name.to_string(), value.to_string()),
        );
    }

    /// Elimina todos los headers
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Retorna una copia independiente de los headers como mapa
    ///
    /// Las claves conservan el casing original. Mutar el mapa retornado
    /// no afecta al almacén.
    pub fn as_map(&self) -> HashMap<String, String> {
        self.map
            .values()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Itera sobre los pares (nombre original, valor)
    ///
    /// El orden de iteración no está garantizado (orden del mapa, no de
    /// inserción).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Cantidad de headers almacenados
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Verifica si el almacén está vacío
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.set("Content-Length", "13");

        assert_eq!(headers.get("Content-Length"), Some("13"));
        assert_eq!(headers.get("content-length"), Some("13"));
        assert_eq!(headers.get("CONTENT-LENGTH"), Some("13"));
        assert_eq!(headers.get("cOnTeNt-LeNgTh"), Some("13"));
    }

    #[test]
    fn test_get_missing_header() {
        let headers = Headers::new();
        assert_eq!(headers.get("Host"), None);
    }

    #[test]
    fn test_has_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.set("Host", "localhost");

        assert!(headers.has("host"));
        assert!(headers.has("HOST"));
        assert!(!headers.has("User-Agent"));
    }

    #[test]
    fn test_set_overwrites_any_casing() {
        let mut headers = Headers::new();
        headers.set("content-type", "text/plain");
        headers.set("Content-Type", "application/json");

        // Una sola entrada, gana la última (valor y casing)
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert!(headers.as_map().contains_key("Content-Type"));
    }

    #[test]
    fn test_clear() {
        let mut headers = Headers::new();
        headers.set("A", "1");
        headers.set("B", "2");
        headers.clear();

        assert!(headers.is_empty());
        assert_eq!(headers.get("A"), None);
    }

    #[test]
    fn test_as_map_is_a_snapshot() {
        let mut headers = Headers::new();
        headers.set("Host", "localhost");

        let mut snapshot = headers.as_map();
        snapshot.insert("Host".to_string(), "evil".to_string());
        snapshot.insert("X-New".to_string(), "x".to_string());

        // El almacén no cambió
        assert_eq!(headers.get("Host"), Some("localhost"));
        assert!(!headers.has("X-New"));
    }

    #[test]
    fn test_as_map_keeps_original_casing() {
        let mut headers = Headers::new();
        headers.set("X-Custom-Header", "v");

        let map = headers.as_map();
        assert_eq!(map.get("X-Custom-Header"), Some(&"v".to_string()));
    }
}
