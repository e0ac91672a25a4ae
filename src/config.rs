use clap::Parser;
use std::net::{AddrParseError, IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Relays the latest game instance ID over HTTP", long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.interface.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
