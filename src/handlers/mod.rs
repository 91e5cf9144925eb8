//! # Handlers Incluidos
//! src/handlers/mod.rs
//!
//! Handlers listos para registrar en el router. Por ahora solo el de
//! archivos estáticos, pensado como default handler: sirve el contenido
//! de un directorio raíz mapeando el path del request a un archivo.

use crate::http::{Request, Response};
use crate::router::Handler;
use std::path::PathBuf;

/// Crea un handler que sirve archivos estáticos desde `www_root`
///
/// - `/` se mapea a `/index.html`
/// - el path se limpia léxicamente antes de unirlo a la raíz: `.` y `..`
///   se resuelven sin poder escapar del directorio raíz
/// - archivo inexistente → 404; otro error de IO → log + 500
///
/// # Ejemplo
/// ```
/// use web_server::handlers::static_file_handler;
/// use web_server::router::Router;
///
/// let mut router = Router::new();
/// router.set_default_handler(static_file_handler("./www"));
/// ```
pub fn static_file_handler(www_root: &str) -> Handler {
    let www_root = www_root.to_string();

    Box::new(move |request: &Request| serve_file(&www_root, request.path()))
}

fn serve_file(www_root: &str, request_path: &str) -> Response {
    // Primero limpiar el path
    let mut cleaned_path = clean_path(request_path);

    // Contemplar `/`
    if cleaned_path == "/" {
        cleaned_path = "/index.html".to_string();
    }

    // Componer la ruta del archivo dentro de la raíz
    let mut file_path = PathBuf::from(www_root);
    file_path.push(cleaned_path.trim_start_matches('/'));

    match std::fs::read(&file_path) {
        Ok(contents) => Response::ok_with_body(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Response::not_found(),
        Err(e) => {
            eprintln!(
                "   [!] Internal error occurred while reading a static file {}: {}",
                file_path.display(),
                e
            );
            Response::internal_error()
        }
    }
}

/// Limpia un path léxicamente, sin tocar el filesystem
///
/// Resuelve `.` y `..` componente a componente; `..` en la raíz se
/// descarta, así el resultado nunca escapa del directorio servido.
fn clean_path(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return "/".to_string();
    }

    format!("/{}", components.join("/"))
}
