//! Backend commands queued from the UI to the sort worker.

pub enum BackendCommand {
    Generate { size: Option<usize> },
    Load { values: Vec<i64> },
    Sort { algorithm: String },
    SetSpeed { speed: u32 },
    Quit,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate { .. } => "generate",
            BackendCommand::Load { .. } => "load",
            BackendCommand::Sort { .. } => "sort",
            BackendCommand::SetSpeed { .. } => "set_speed",
            BackendCommand::Quit => "quit",
        }
    }
}

/// Parses one interactive input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<BackendCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("generate" | "gen" | "new", []) => BackendCommand::Generate { size: None },
        ("generate" | "gen" | "new", [size]) => BackendCommand::Generate {
            size: Some(
                size.parse()
                    .map_err(|_| format!("invalid array size '{size}'"))?,
            ),
        },
        ("load", values) if !values.is_empty() => BackendCommand::Load {
            values: values
                .iter()
                .flat_map(|chunk| chunk.split(','))
                .filter(|raw| !raw.is_empty())
                .map(|raw| {
                    raw.parse()
                        .map_err(|_| format!("invalid value '{raw}'"))
                })
                .collect::<Result<_, _>>()?,
        },
        ("sort", [algorithm]) => BackendCommand::Sort {
            algorithm: algorithm.to_string(),
        },
        ("speed", [speed]) => BackendCommand::SetSpeed {
            speed: speed
                .parse()
                .map_err(|_| format!("invalid speed '{speed}'"))?,
        },
        ("quit" | "exit", []) => BackendCommand::Quit,
        _ => {
            return Err(format!(
                "unrecognized command '{}'; try: generate [size], load <v,v,..>, sort <algorithm>, speed <n>, quit",
                line.trim()
            ))
        }
    };
    Ok(Some(command))
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
