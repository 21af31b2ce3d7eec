use anyhow::Context;
use colored::Colorize;
use sr_chaincode::transaction::{
    ADD_STUDENT, GET_ALL_STUDENTS, GET_METADATA, QUERY_STUDENT, STUDENT_EXISTS, UPDATE_GPA,
};
use sr_chaincode::{Chaincode, ContractMetadata, Response, TransactionKind};
use sr_server::ChaincodeServer;
use sr_state::FileWorldState;
use sr_types::Student;

use crate::cli::*;
use crate::config::AppConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(state) = cli.state {
        config.chaincode.state_path = state;
    }
    let format = cli.format;

    match cli.command {
        Command::Add(args) => run_transaction(
            &config,
            format,
            TransactionKind::Submit,
            ADD_STUDENT,
            vec![args.id, args.name, args.degree, args.gpa.to_string()],
        ),
        Command::UpdateGpa(args) => run_transaction(
            &config,
            format,
            TransactionKind::Submit,
            UPDATE_GPA,
            vec![args.id, args.gpa.to_string()],
        ),
        Command::Query(args) => run_transaction(
            &config,
            format,
            TransactionKind::Evaluate,
            QUERY_STUDENT,
            vec![args.id],
        ),
        Command::Exists(args) => run_transaction(
            &config,
            format,
            TransactionKind::Evaluate,
            STUDENT_EXISTS,
            vec![args.id],
        ),
        Command::List => run_transaction(
            &config,
            format,
            TransactionKind::Evaluate,
            GET_ALL_STUDENTS,
            Vec::new(),
        ),
        Command::Invoke(args) => {
            let kind = if args.evaluate {
                TransactionKind::Evaluate
            } else {
                TransactionKind::Submit
            };
            run_transaction(&config, format, kind, &args.function, args.args)
        }
        Command::Metadata => cmd_metadata(&config, format),
        Command::Serve(args) => cmd_serve(config, args),
    }
}

fn open_chaincode(config: &AppConfig) -> anyhow::Result<Chaincode<FileWorldState>> {
    let path = &config.chaincode.state_path;
    let world = FileWorldState::open(path)
        .with_context(|| format!("failed to open world state {}", path.display()))?;
    Ok(Chaincode::with_contract(config.chaincode.contract(), world))
}

fn run_transaction(
    config: &AppConfig,
    format: OutputFormat,
    kind: TransactionKind,
    function: &str,
    args: Vec<String>,
) -> anyhow::Result<()> {
    let chaincode = open_chaincode(config)?;
    let response = match kind {
        TransactionKind::Submit => chaincode.submit(function, &args),
        TransactionKind::Evaluate => chaincode.evaluate(function, &args),
    };

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    if !response.is_ok() {
        anyhow::bail!("{function} failed: {}", response.message);
    }
    if matches!(format, OutputFormat::Text) {
        print_text(function, &args, &response)?;
    }
    Ok(())
}

fn print_text(function: &str, args: &[String], response: &Response) -> anyhow::Result<()> {
    let id = args.first().map(String::as_str).unwrap_or_default();
    match function {
        ADD_STUDENT => println!("{} Added student {}", "✓".green().bold(), id.yellow()),
        UPDATE_GPA => println!(
            "{} Updated GPA of {} to {}",
            "✓".green().bold(),
            id.yellow(),
            args.get(1).map(String::as_str).unwrap_or_default().bold()
        ),
        QUERY_STUDENT => print_student(&response.json_payload::<Student>()?),
        STUDENT_EXISTS => {
            if response.json_payload::<bool>()? {
                println!("Student {} {}", id.yellow(), "exists".green());
            } else {
                println!("Student {} {}", id.yellow(), "does not exist".red());
            }
        }
        GET_ALL_STUDENTS => {
            let students: Vec<Student> = response.json_payload()?;
            if students.is_empty() {
                println!("No students.");
            }
            for student in &students {
                print_student(student);
            }
        }
        GET_METADATA => print_metadata(&response.json_payload()?),
        _ if response.payload.is_empty() => {
            println!("{} {} committed", "✓".green().bold(), function.bold())
        }
        _ => println!("{}", response.payload),
    }
    println!("  tx: {}", response.tx_id.dimmed());
    Ok(())
}

fn print_student(student: &Student) {
    println!(
        "{}  {}  {}  GPA {}",
        student.id.yellow().bold(),
        student.name,
        student.degree.cyan(),
        format!("{:.2}", student.gpa).bold()
    );
}

fn print_metadata(metadata: &ContractMetadata) {
    println!("{} {}", metadata.name.bold(), metadata.version.dimmed());
    for tx in &metadata.transactions {
        let params = tx
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.schema))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = tx.returns.as_deref().unwrap_or("()");
        println!("  {:<8} {}({}) -> {}", tx.tag.to_string().cyan(), tx.name, params, returns);
    }
}

fn cmd_metadata(config: &AppConfig, format: OutputFormat) -> anyhow::Result<()> {
    let metadata = config.chaincode.contract();
    let metadata = ContractMetadata::for_contract(&metadata);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metadata)?),
        OutputFormat::Text => print_metadata(&metadata),
    }
    Ok(())
}

fn cmd_serve(mut config: AppConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    let chaincode = open_chaincode(&config)?;
    println!(
        "Serving {} on {} (state: {})",
        chaincode.contract().name().bold(),
        config.server.bind_addr.to_string().bold(),
        config.chaincode.state_path.display()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(ChaincodeServer::new(config.server, chaincode).serve())?;
    Ok(())
}
