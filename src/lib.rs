//! # Web Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista implementado desde cero sobre sockets
//! TCP crudos: acepta conexiones, parsea el request desde el stream de
//! bytes, lo despacha contra una tabla de rutas y serializa la respuesta
//! de vuelta al wire. Una conexión, un request, y se cierra.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: parsing de requests, decodificación de bodies, responses
//! - `router`: tabla ordenada de rutas y patrones de path
//! - `server`: loop de accept y manejo concurrente de conexiones
//! - `handlers`: handlers incluidos (archivos estáticos)
//! - `config`: configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use web_server::config::Config;
//! use web_server::http::{Method, Response};
//! use web_server::router::{PathPattern, Router};
//! use web_server::server::Server;
//!
//! let mut router = Router::new();
//! router.add_route(Method::GET, PathPattern::literal("/ping"), Box::new(|_req| {
//!     Response::ok_with_body(b"pong".to_vec())
//! }));
//!
//! let server = Server::new(Config::default(), router);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
