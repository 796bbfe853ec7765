//! Command-line and environment configuration for the `todo-server` binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use todo_core::{Collection, JsonFileCollection, MemoryCollection, StoreError, TodoStore};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "HTTP CRUD service for todo documents")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Persist todos to this JSON file. Without it todos live in memory only.
    #[arg(long, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `todo_core=debug,tower_http=debug`.
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Open the store engine selected by `data_file`.
    pub async fn open_store(&self) -> Result<TodoStore, StoreError> {
        let collection: Arc<dyn Collection> = match &self.data_file {
            Some(path) => Arc::new(JsonFileCollection::open(path).await?),
            None => Arc::new(MemoryCollection::new()),
        };
        Ok(TodoStore::from_shared(collection))
    }
}
