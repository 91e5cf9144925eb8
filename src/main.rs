//! # Web Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Registra las rutas de ejemplo (un
//! endpoint JSON y una ruta regex) más el handler de archivos estáticos
//! como fallback, y arranca el servidor.

use regex::Regex;
use serde::Serialize;
use web_server::config::Config;
use web_server::handlers::static_file_handler;
use web_server::http::{Method, Response};
use web_server::router::{PathPattern, Router};
use web_server::server::Server;

#[derive(Serialize)]
struct Person {
    name: String,
    age: u32,
}

fn main() {
    println!("=================================");
    println!("  Web Server HTTP/1.1");
    println!("=================================\n");

    // Crear configuración (CLI args o env vars)
    let config = Config::new();

    println!("⚙️  Configuración:");
    println!("   Puerto: {}", config.port);
    println!("   Host: {}", config.host);
    println!("   WWW Dir: {}", config.www_dir);
    println!();

    // Registrar rutas: el registro termina antes de empezar a servir
    let mut router = Router::new();

    // Ruta literal que responde JSON
    router.add_route(
        Method::GET,
        PathPattern::literal("/api/person"),
        Box::new(|_req| {
            let person = Person {
                name: "John Doe".to_string(),
                age: 30,
            };

            match serde_json::to_vec(&person) {
                Ok(json) => {
                    let mut response = Response::ok_with_body(json);
                    response
                        .headers_mut()
                        .set("Content-Type", "application/json");
                    response
                }
                Err(_) => Response::internal_error(),
            }
        }),
    );

    // Ruta regex que acepta cualquier método bajo /api
    let api_pattern = Regex::new("^/api.*$").expect("regex estática válida");
    router.add_route(
        Method::Any,
        PathPattern::regex(api_pattern),
        Box::new(|req| {
            Response::ok_with_body(format!("Received request at {}", req.path()).into_bytes())
        }),
    );

    // Fallback: archivos estáticos
    router.set_default_handler(static_file_handler(&config.www_dir));

    // Iniciar el servidor (esto bloqueará el thread)
    let server = Server::new(config, router);
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
