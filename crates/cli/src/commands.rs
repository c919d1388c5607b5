use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a criteria document into predicates and named parameters
    Translate {
        #[arg(long, help = "Criteria JSON file path")]
        criteria: String,

        #[arg(long, help = "Config file path")]
        config: Option<String>,

        #[arg(long, help = "If set, prints the translation as JSON")]
        json: bool,
    },
    /// Build a complete SELECT for a dialect from a criteria document
    Render {
        #[arg(long, help = "Criteria JSON file path")]
        criteria: String,

        #[arg(long, help = "Config file path")]
        config: Option<String>,

        #[arg(long, help = "Table to select from, optionally schema-qualified")]
        table: Option<String>,

        /// SQL dialect: "postgres", "mysql", …
        #[arg(long)]
        dialect: Option<String>,

        #[arg(long, help = "If set, prints the query and parameters as JSON")]
        json: bool,
    },
}
