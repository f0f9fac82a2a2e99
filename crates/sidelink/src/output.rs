use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use sidelink_engine::Request;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RequestOutput {
    schema_id: &'static str,
    method: String,
    path: String,
    complete: bool,
    vars: Vec<VarOutput>,
}

#[derive(Serialize)]
struct VarOutput {
    name: String,
    value: String,
}

pub fn print_request(request: &Request, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = RequestOutput {
                schema_id: "https://schemas.sidelink.dev/cli/v1/request-received.schema.json",
                method: request.method.to_string(),
                path: request.path().to_string(),
                complete: request.complete,
                vars: request
                    .vars
                    .iter()
                    .map(|var| VarOutput {
                        name: var.name.to_string(),
                        value: var.value.to_string(),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["METHOD", "PATH", "COMPLETE", "VARS"])
                .add_row(vec![
                    request.method.to_string(),
                    request.path().to_string(),
                    request.complete.to_string(),
                    vars_preview(request),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "method={} path={} complete={} vars=[{}]",
                request.method,
                request.path(),
                request.complete,
                vars_preview(request)
            );
        }
        OutputFormat::Raw => {
            println!("{} {}", request.method, request.path());
        }
    }
}

#[derive(Serialize)]
struct BodyOutput<'a> {
    schema_id: &'static str,
    url: &'a str,
    body: String,
}

pub fn print_body(url: &str, body: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = BodyOutput {
                schema_id: "https://schemas.sidelink.dev/cli/v1/response-body.schema.json",
                url,
                body: String::from_utf8_lossy(body).into_owned(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty | OutputFormat::Raw => {
            print_raw(body);
            println!();
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn vars_preview(request: &Request) -> String {
    request
        .vars
        .iter()
        .map(|var| format!("{}={}", var.name, var.value))
        .collect::<Vec<_>>()
        .join(", ")
}
