//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Loop de accept bloqueante con un thread por conexión. Cada conexión
//! atiende exactamente un request y se cierra: no hay keep-alive, ni
//! timeouts, ni control de admisión.
//!
//! ## Ciclo de vida de una conexión
//!
//! ```text
//! Accepted → Parsing → Routing → Executing → Writing → Closed
//! ```
//!
//! Al entrar se deja preparada una respuesta pesimista (500, body vacío)
//! para que cualquier falla posterior igual produzca una respuesta
//! definida en el wire. Un error de parsing la reemplaza por un 400 y
//! salta directo a Writing. El routing nunca falla (cae a 404). La
//! escritura se ejecuta en todos los caminos y la conexión se cierra al
//! salir, con o sin error.

use crate::config::Config;
use crate::http::{Request, Response};
use crate::router::Router;
use std::io::{BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Crea un servidor con su configuración y un router ya armado
    ///
    /// El router queda read-only desde acá: registrar rutas termina
    /// antes de llamar a [`Server::run`].
    pub fn new(config: Config, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Inicia el servidor (bloquea el thread hasta que falle el bind)
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        self.run_on(listener)
    }

    /// Corre el loop de accept sobre un listener ya bindeado
    ///
    /// Útil para tests, que bindean el puerto 0 y necesitan conocer la
    /// dirección efectiva antes de arrancar el loop.
    pub fn run_on(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!("   ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        Self::handle_connection(stream, router);
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: parse → route → execute → write
    ///
    /// Nunca retorna error: toda falla degrada a una respuesta en el
    /// wire o a una línea de log. El stream se cierra al salir (drop)
    /// en todos los caminos.
    fn handle_connection(stream: TcpStream, router: Arc<Router>) {
        let start = Instant::now();

        // Respuesta pesimista por defecto: si algo sale mal más adelante,
        // igual se escribe algo definido en el wire
        let mut response = Response::internal_error();

        let mut reader = BufReader::new(&stream);
        match Request::parse(&mut reader) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method(), request.path());

                // El routing siempre produce una respuesta (404 de fallback)
                response = router.route(&request);
            }
            Err(e) => {
                // Parsing falló: 400 y directo a la fase de escritura
                eprintln!("   ❌ Parse error: {}", e);
                response = Response::bad_request();
            }
        }

        // Writing: se ejecuta en todos los caminos; un error acá se
        // loguea y nada más, nunca voltea el proceso
        let response_bytes = response.to_bytes();
        let mut writer = &stream;
        if let Err(e) = writer.write_all(&response_bytes).and_then(|_| writer.flush()) {
            eprintln!("   ❌ Error al escribir la respuesta: {}", e);
        }

        let latency = start.elapsed();
        println!(
            "   ✅ {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );
    }
}
