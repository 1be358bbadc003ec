use clap::{Args, Parser, Subcommand};

#[derive(Args)]
pub struct ParseHeaderArgs {
    /// The `Authorization` header value to parse
    pub header: String,
}

#[derive(Subcommand)]
pub enum ToolSubcommand {
    /// Generate a fresh Ed25519 keypair encoded for the subscriber registry
    GenerateKeypair,

    /// Parse an `Authorization` header and report any format errors
    ParseHeader(ParseHeaderArgs),
}

#[derive(Parser)]
#[command(about, version)]
pub struct ToolArgs {
    #[clap(subcommand)]
    pub subcommand: ToolSubcommand,
}
