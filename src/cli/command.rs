use clap::Parser;

use crate::store::json::JSON_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact book HTTP service")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// File path of the JSON contact store
    #[arg(long, env = "JSON_STORAGE_PATH", default_value_t = String::from(JSON_STORAGE_PATH))]
    pub storage_path: String,

    /// Interface to listen on
    #[arg(long, env = "HOST", default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}
