use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Portfolio authentication and user service")]
#[command(version)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Create a user directly in the database (e.g. the first admin).
    /// Does not require auth.jwt_secret.
    CreateUser {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// "user" or "admin"
        #[arg(long, default_value = "user")]
        role: String,
    },
}
