use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "student-records",
    about = "Student records chaincode: run transactions against a local world state",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// World state JSON file (overrides the config file)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new student record
    Add(AddArgs),
    /// Change the GPA of an existing student
    UpdateGpa(UpdateGpaArgs),
    /// Show a student record
    Query(IdArgs),
    /// Check whether a student record exists
    Exists(IdArgs),
    /// List every student record
    List,
    /// Invoke a contract function by name
    Invoke(InvokeArgs),
    /// Show the contract metadata
    Metadata,
    /// Serve the chaincode over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    pub id: String,
    pub name: String,
    pub degree: String,
    #[arg(allow_negative_numbers = true)]
    pub gpa: f32,
}

#[derive(Args)]
pub struct UpdateGpaArgs {
    pub id: String,
    #[arg(allow_negative_numbers = true)]
    pub gpa: f32,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args)]
pub struct InvokeArgs {
    pub function: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
    /// Simulate only; do not commit
    #[arg(long)]
    pub evaluate: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from(["student-records", "add", "s-1", "Alice", "BSc", "3.5"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.id, "s-1");
            assert_eq!(args.degree, "BSc");
            assert_eq!(args.gpa, 3.5);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_rejects_bad_gpa() {
        assert!(Cli::try_parse_from(["student-records", "add", "s-1", "A", "B", "high"]).is_err());
    }

    #[test]
    fn parse_update_gpa() {
        let cli = Cli::try_parse_from(["student-records", "update-gpa", "s-1", "3.9"]).unwrap();
        if let Command::UpdateGpa(args) = cli.command {
            assert_eq!(args.id, "s-1");
            assert_eq!(args.gpa, 3.9);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_query_and_exists() {
        let cli = Cli::try_parse_from(["student-records", "query", "s-1"]).unwrap();
        assert!(matches!(cli.command, Command::Query(IdArgs { ref id }) if id == "s-1"));
        let cli = Cli::try_parse_from(["student-records", "exists", "s-1"]).unwrap();
        assert!(matches!(cli.command, Command::Exists(_)));
    }

    #[test]
    fn parse_invoke_with_args() {
        let cli = Cli::try_parse_from([
            "student-records", "invoke", "--evaluate", "QueryStudent", "s-1",
        ])
        .unwrap();
        if let Command::Invoke(args) = cli.command {
            assert!(args.evaluate);
            assert_eq!(args.function, "QueryStudent");
            assert_eq!(args.args, vec!["s-1"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_invoke_negative_arg() {
        let cli = Cli::try_parse_from(["student-records", "invoke", "UpdateGPA", "s-1", "-1"]).unwrap();
        if let Command::Invoke(args) = cli.command {
            assert_eq!(args.args, vec!["s-1", "-1"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["student-records", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "student-records", "list", "--state", "/tmp/s.json", "--format", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/s.json")));
        assert!(matches!(cli.command, Command::List));
    }
}
