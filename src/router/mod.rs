//! # Sistema de Routing
//! src/router/mod.rs
//!
//! El router guarda las rutas en orden de registro y despacha cada
//! request al primer handler cuyo método y patrón de path matcheen.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Gana la primera ruta que matchee: no hay ranking por especificidad.
//! Si ninguna matchea se usa el default handler (si fue configurado) o
//! se sintetiza un 404 con body vacío.
//!
//! El registro de rutas termina antes de empezar a servir; durante el
//! serving el router se comparte read-only detrás de un `Arc`, así que
//! no hace falta ningún lock.

pub mod path;

pub use path::PathPattern;

use crate::http::{Method, Request, Response};

/// Tipo de función handler
///
/// Un handler recibe un Request y retorna una Response. Es un closure
/// boxeado para que pueda capturar estado (por ejemplo el directorio
/// raíz de archivos estáticos).
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Una ruta registrada: método + patrón de path + handler
pub struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

impl Route {
    /// Crea una ruta nueva
    pub fn new(method: Method, pattern: PathPattern, handler: Handler) -> Self {
        Self {
            method,
            pattern,
            handler,
        }
    }

    /// Verifica si la ruta acepta este request
    ///
    /// El método matchea por igualdad o si la ruta registró el comodín
    /// `Any`; el path se evalúa contra el patrón tal como llegó.
    fn matches(&self, request: &Request) -> bool {
        (request.method() == self.method || self.method == Method::Any)
            && self.pattern.matches(request.path())
    }

    /// Ejecuta el handler de la ruta
    fn execute(&self, request: &Request) -> Response {
        (self.handler)(request)
    }
}

/// Router con rutas ordenadas y un default handler opcional
#[derive(Default)]
pub struct Router {
    /// Rutas en orden de registro
    routes: Vec<Route>,

    /// Handler de fallback (típicamente archivos estáticos)
    default_handler: Option<Handler>,
}

impl Router {
    /// Crea un router vacío
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_handler: None,
        }
    }

    /// Registra una ruta; el orden de registro es el orden de despacho
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{Method, Response};
    /// use web_server::router::{PathPattern, Router};
    ///
    /// let mut router = Router::new();
    /// router.add_route(Method::GET, PathPattern::literal("/ping"), Box::new(|_req| {
    ///     Response::ok_with_body(b"pong".to_vec())
    /// }));
    /// ```
    pub fn add_route(&mut self, method: Method, pattern: PathPattern, handler: Handler) {
        self.routes.push(Route::new(method, pattern, handler));
    }

    /// Configura el handler de fallback para requests sin ruta
    pub fn set_default_handler(&mut self, handler: Handler) {
        self.default_handler = Some(handler);
    }

    /// Despacha un request a la primera ruta que matchee
    ///
    /// Siempre produce una respuesta: sin match y sin default handler
    /// retorna un 404 con body vacío.
    pub fn route(&self, request: &Request) -> Response {
        for route in &self.routes {
            if route.matches(request) {
                return route.execute(request);
            }
        }

        if let Some(default_handler) = &self.default_handler {
            return default_handler(request);
        }

        println!("   [!] Handler could not be found for {}", request.path());
        Response::not_found()
    }
}
